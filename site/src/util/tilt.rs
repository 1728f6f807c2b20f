//! Pointer tilt math and per-target frame coalescing.
//!
//! ARCHITECTURE
//! ============
//! `TiltTarget` is the testable core of the tilt effect: the DOM binding
//! feeds it pointer samples and animation-frame callbacks, and it decides
//! when a frame must be requested, which sample a frame renders, and what to
//! reset on leave. At most one frame is pending per target; newer samples
//! overwrite the pending input instead of queueing more work.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// Maximum rotation magnitude on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 7.0;

/// Attribute marking a tilt-enabled element.
pub const TILT_ATTR: &str = "data-tilt";
/// Class applied while the element is actively tilting.
pub const TILTING_CLASS: &str = "is-tilting";

/// Handle returned by `requestAnimationFrame`.
pub type FrameHandle = i32;

/// Element bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

/// Pointer device reported by a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
    Unknown,
}

impl PointerKind {
    /// Parse the `pointerType` string of a pointer event.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "mouse" => Self::Mouse,
            "pen" => Self::Pen,
            "touch" => Self::Touch,
            _ => Self::Unknown,
        }
    }
}

/// Computed visual state for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltPose {
    /// Rotation around the X axis (driven by vertical position).
    pub rotate_x_deg: f64,
    /// Rotation around the Y axis (driven by horizontal position).
    pub rotate_y_deg: f64,
    /// Horizontal cursor position within the element, 0 to 100.
    pub pointer_x_pct: f64,
    /// Vertical cursor position within the element, 0 to 100.
    pub pointer_y_pct: f64,
}

impl TiltPose {
    pub const NEUTRAL: Self = Self { rotate_x_deg: 0.0, rotate_y_deg: 0.0, pointer_x_pct: 50.0, pointer_y_pct: 50.0 };

    /// Custom properties to write for this pose.
    #[must_use]
    pub fn css_properties(&self) -> [(&'static str, String); 4] {
        [
            ("--rx", format!("{:.2}deg", self.rotate_x_deg)),
            ("--ry", format!("{:.2}deg", self.rotate_y_deg)),
            ("--px", format!("{:.1}%", self.pointer_x_pct)),
            ("--py", format!("{:.1}%", self.pointer_y_pct)),
        ]
    }
}

/// Custom properties written when the pointer leaves. The highlight position
/// is left where it was so it fades out in place.
#[must_use]
pub fn reset_css_properties() -> [(&'static str, &'static str); 2] {
    [("--rx", "0deg"), ("--ry", "0deg")]
}

/// Position of `value` along `[origin, origin + extent]`, clamped to `[0, 1]`.
///
/// Degenerate extents map to the center so a collapsed element stays flat.
#[must_use]
pub fn normalize(value: f64, origin: f64, extent: f64) -> f64 {
    if extent.is_nan() || extent <= 0.0 || !value.is_finite() {
        return 0.5;
    }
    ((value - origin) / extent).clamp(0.0, 1.0)
}

/// Pose for a pointer sample over an element.
#[must_use]
pub fn pose_for(bounds: Bounds, sample: PointerSample) -> TiltPose {
    let px = normalize(sample.x, bounds.left, bounds.width);
    let py = normalize(sample.y, bounds.top, bounds.height);
    let span = MAX_TILT_DEG * 2.0;
    TiltPose {
        rotate_x_deg: (0.5 - py) * span,
        rotate_y_deg: (px - 0.5) * span,
        pointer_x_pct: px * 100.0,
        pointer_y_pct: py * 100.0,
    }
}

/// Per-target lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TiltPhase {
    #[default]
    Idle,
    Tilting,
}

/// Response to a pointer-move sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not a mouse; the sample is dropped.
    Ignored,
    /// No frame pending; request one.
    ScheduleFrame,
    /// A frame is already pending and will use this sample.
    Coalesced,
}

/// Tilt state owned by one element.
#[derive(Clone, Debug, Default)]
pub struct TiltTarget {
    phase: TiltPhase,
    latest: Option<PointerSample>,
    frame_pending: bool,
    frame_handle: Option<FrameHandle>,
    pose: Option<TiltPose>,
}

impl TiltTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TiltPhase {
        self.phase
    }

    #[must_use]
    pub fn is_tilting(&self) -> bool {
        self.phase == TiltPhase::Tilting
    }

    /// Last applied pose, or neutral when idle.
    #[must_use]
    pub fn pose(&self) -> TiltPose {
        self.pose.unwrap_or(TiltPose::NEUTRAL)
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Record a pointer sample.
    pub fn pointer_moved(&mut self, kind: PointerKind, sample: PointerSample) -> MoveOutcome {
        if kind != PointerKind::Mouse {
            return MoveOutcome::Ignored;
        }
        self.latest = Some(sample);
        if self.frame_pending {
            return MoveOutcome::Coalesced;
        }
        self.frame_pending = true;
        MoveOutcome::ScheduleFrame
    }

    /// Remember the handle of the frame requested after [`MoveOutcome::ScheduleFrame`].
    pub fn frame_scheduled(&mut self, handle: FrameHandle) {
        if self.frame_pending {
            self.frame_handle = Some(handle);
        }
    }

    /// Run the pending frame against the element's current bounds.
    ///
    /// Returns the pose to render, or `None` when nothing was pending.
    pub fn run_frame(&mut self, bounds: Bounds) -> Option<TiltPose> {
        if !self.frame_pending {
            return None;
        }
        self.frame_pending = false;
        self.frame_handle = None;
        let sample = self.latest?;
        let pose = pose_for(bounds, sample);
        self.pose = Some(pose);
        self.phase = TiltPhase::Tilting;
        Some(pose)
    }

    /// Pointer left the element. Returns the frame to cancel, if any.
    pub fn pointer_left(&mut self) -> Option<FrameHandle> {
        let handle = self.frame_handle.take();
        self.frame_pending = false;
        self.latest = None;
        self.pose = None;
        self.phase = TiltPhase::Idle;
        handle
    }
}
