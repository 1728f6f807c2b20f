#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn card() -> Bounds {
    Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 }
}

fn at(x: f64, y: f64) -> PointerSample {
    PointerSample { x, y }
}

// =============================================================
// Pose math
// =============================================================

#[test]
fn center_is_flat() {
    let pose = pose_for(card(), at(200.0, 100.0));
    assert!(approx_eq(pose.rotate_x_deg, 0.0));
    assert!(approx_eq(pose.rotate_y_deg, 0.0));
    assert!(approx_eq(pose.pointer_x_pct, 50.0));
    assert!(approx_eq(pose.pointer_y_pct, 50.0));
}

#[test]
fn top_left_corner_tilts_top_toward_viewer() {
    let pose = pose_for(card(), at(100.0, 50.0));
    assert!(approx_eq(pose.rotate_x_deg, MAX_TILT_DEG));
    assert!(approx_eq(pose.rotate_y_deg, -MAX_TILT_DEG));
    assert!(approx_eq(pose.pointer_x_pct, 0.0));
    assert!(approx_eq(pose.pointer_y_pct, 0.0));
}

#[test]
fn bottom_right_corner_reaches_opposite_extremes() {
    let pose = pose_for(card(), at(300.0, 150.0));
    assert!(approx_eq(pose.rotate_x_deg, -MAX_TILT_DEG));
    assert!(approx_eq(pose.rotate_y_deg, MAX_TILT_DEG));
}

#[test]
fn quarter_position_scales_linearly() {
    let pose = pose_for(card(), at(150.0, 75.0));
    assert!(approx_eq(pose.rotate_y_deg, -3.5));
    assert!(approx_eq(pose.rotate_x_deg, 3.5));
    assert!(approx_eq(pose.pointer_x_pct, 25.0));
}

#[test]
fn outside_positions_clamp_to_max() {
    let samples = [at(-5000.0, -5000.0), at(5000.0, 5000.0), at(-1.0, 9000.0), at(f64::MAX, f64::MIN)];
    for sample in samples {
        let pose = pose_for(card(), sample);
        assert!(pose.rotate_x_deg.abs() <= MAX_TILT_DEG + EPSILON);
        assert!(pose.rotate_y_deg.abs() <= MAX_TILT_DEG + EPSILON);
        assert!((0.0..=100.0).contains(&pose.pointer_x_pct));
        assert!((0.0..=100.0).contains(&pose.pointer_y_pct));
    }
}

#[test]
fn rotation_stays_in_range_across_grid() {
    let bounds = card();
    for xi in -10..=40 {
        for yi in -10..=30 {
            let pose = pose_for(bounds, at(f64::from(xi) * 10.0, f64::from(yi) * 10.0));
            assert!((-MAX_TILT_DEG..=MAX_TILT_DEG).contains(&pose.rotate_x_deg));
            assert!((-MAX_TILT_DEG..=MAX_TILT_DEG).contains(&pose.rotate_y_deg));
        }
    }
}

#[test]
fn collapsed_bounds_stay_flat() {
    let bounds = Bounds { left: 10.0, top: 10.0, width: 0.0, height: 0.0 };
    let pose = pose_for(bounds, at(500.0, -500.0));
    assert!(approx_eq(pose.rotate_x_deg, 0.0));
    assert!(approx_eq(pose.rotate_y_deg, 0.0));
}

#[test]
fn normalize_handles_nan_inputs() {
    assert_eq!(normalize(f64::NAN, 0.0, 10.0), 0.5);
    assert_eq!(normalize(5.0, 0.0, f64::NAN), 0.5);
}

#[test]
fn css_properties_format_angles_and_percentages() {
    let pose = TiltPose { rotate_x_deg: 3.456, rotate_y_deg: -7.0, pointer_x_pct: 12.34, pointer_y_pct: 100.0 };
    let props = pose.css_properties();
    assert_eq!(props[0], ("--rx", "3.46deg".to_owned()));
    assert_eq!(props[1], ("--ry", "-7.00deg".to_owned()));
    assert_eq!(props[2], ("--px", "12.3%".to_owned()));
    assert_eq!(props[3], ("--py", "100.0%".to_owned()));
}

#[test]
fn reset_properties_zero_both_axes() {
    assert_eq!(reset_css_properties(), [("--rx", "0deg"), ("--ry", "0deg")]);
}

#[test]
fn pointer_kind_parses_event_strings() {
    assert_eq!(PointerKind::parse("mouse"), PointerKind::Mouse);
    assert_eq!(PointerKind::parse("pen"), PointerKind::Pen);
    assert_eq!(PointerKind::parse("touch"), PointerKind::Touch);
    assert_eq!(PointerKind::parse(""), PointerKind::Unknown);
}

// =============================================================
// Frame coalescing
// =============================================================

#[test]
fn first_move_schedules_a_frame() {
    let mut target = TiltTarget::new();
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(120.0, 60.0)), MoveOutcome::ScheduleFrame);
    assert!(target.frame_pending());
    assert_eq!(target.phase(), TiltPhase::Idle);
}

#[test]
fn moves_within_one_frame_coalesce_to_latest_sample() {
    let mut target = TiltTarget::new();
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(100.0, 50.0)), MoveOutcome::ScheduleFrame);
    target.frame_scheduled(7);
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(150.0, 75.0)), MoveOutcome::Coalesced);
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(300.0, 150.0)), MoveOutcome::Coalesced);

    let pose = target.run_frame(card()).expect("pending frame should render");
    assert_eq!(pose, pose_for(card(), at(300.0, 150.0)));
    assert!(target.is_tilting());
    assert!(!target.frame_pending());
}

#[test]
fn frame_without_pending_work_renders_nothing() {
    let mut target = TiltTarget::new();
    assert_eq!(target.run_frame(card()), None);
    assert_eq!(target.phase(), TiltPhase::Idle);
}

#[test]
fn each_frame_window_schedules_once() {
    let mut target = TiltTarget::new();
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(110.0, 60.0)), MoveOutcome::ScheduleFrame);
    target.frame_scheduled(1);
    assert!(target.run_frame(card()).is_some());
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(120.0, 70.0)), MoveOutcome::ScheduleFrame);
    target.frame_scheduled(2);
    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(130.0, 80.0)), MoveOutcome::Coalesced);
    let pose = target.run_frame(card()).expect("second frame should render");
    assert_eq!(pose, pose_for(card(), at(130.0, 80.0)));
}

#[test]
fn bounds_are_read_at_frame_time() {
    let mut target = TiltTarget::new();
    target.pointer_moved(PointerKind::Mouse, at(200.0, 100.0));
    let shifted = Bounds { left: 200.0, top: 100.0, width: 200.0, height: 100.0 };
    let pose = target.run_frame(shifted).expect("frame should render");
    assert!(approx_eq(pose.rotate_y_deg, -MAX_TILT_DEG));
    assert!(approx_eq(pose.rotate_x_deg, MAX_TILT_DEG));
}

#[test]
fn non_mouse_pointers_are_ignored() {
    let mut target = TiltTarget::new();
    for kind in [PointerKind::Touch, PointerKind::Pen, PointerKind::Unknown] {
        assert_eq!(target.pointer_moved(kind, at(150.0, 75.0)), MoveOutcome::Ignored);
    }
    assert!(!target.frame_pending());
    assert_eq!(target.run_frame(card()), None);
}

// =============================================================
// Leave
// =============================================================

#[test]
fn leave_cancels_pending_frame_and_resets() {
    let mut target = TiltTarget::new();
    target.pointer_moved(PointerKind::Mouse, at(100.0, 50.0));
    target.frame_scheduled(42);
    assert_eq!(target.pointer_left(), Some(42));
    assert!(!target.frame_pending());
    assert_eq!(target.run_frame(card()), None);
    assert_eq!(target.phase(), TiltPhase::Idle);
}

#[test]
fn leave_after_tilting_returns_to_neutral() {
    let mut target = TiltTarget::new();
    target.pointer_moved(PointerKind::Mouse, at(300.0, 50.0));
    target.frame_scheduled(3);
    target.run_frame(card());
    assert!(target.pose().rotate_y_deg > 0.0);

    assert_eq!(target.pointer_left(), None);
    assert!(!target.is_tilting());
    let pose = target.pose();
    assert_eq!(pose.rotate_x_deg, 0.0);
    assert_eq!(pose.rotate_y_deg, 0.0);
}

#[test]
fn leave_while_idle_is_harmless() {
    let mut target = TiltTarget::new();
    assert_eq!(target.pointer_left(), None);
    assert_eq!(target.pose(), TiltPose::NEUTRAL);
}

#[test]
fn reentry_after_leave_tilts_from_fresh_sample() {
    let mut target = TiltTarget::new();
    target.pointer_moved(PointerKind::Mouse, at(100.0, 50.0));
    target.run_frame(card());
    target.pointer_left();

    assert_eq!(target.pointer_moved(PointerKind::Mouse, at(200.0, 100.0)), MoveOutcome::ScheduleFrame);
    let pose = target.run_frame(card()).expect("frame should render");
    assert!(approx_eq(pose.rotate_x_deg, 0.0));
    assert!(approx_eq(pose.rotate_y_deg, 0.0));
    assert!(target.is_tilting());
}
