//! Motion and pointer capability checks.
//!
//! Both animated behaviors consult these preferences before attaching
//! anything. Outside a browser (SSR, native tests) detection reports the
//! defaults, which allow motion.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Media query for the reduced-motion accessibility preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
/// Media query for a touch-primary (imprecise) pointer.
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";

/// User and device capabilities relevant to animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreferences {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
}

impl MotionPreferences {
    /// Scroll reveal runs unless reduced motion is requested.
    #[must_use]
    pub fn allows_reveal(self) -> bool {
        !self.reduced_motion
    }

    /// Tilt needs full motion and a precise primary pointer.
    #[must_use]
    pub fn allows_tilt(self) -> bool {
        !self.reduced_motion && !self.coarse_pointer
    }

    /// Read the current preferences from the browser.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self { reduced_motion: media_matches(REDUCED_MOTION_QUERY), coarse_pointer: media_matches(COARSE_POINTER_QUERY) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

/// Evaluate a media query; unsupported queries count as not matching.
#[cfg(feature = "hydrate")]
fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).unwrap_or_default())
        .is_some_and(|mq| mq.matches())
}
