use shared::domain::{DriveMode, LightMode, SpeedScale, ViewMode};

use crate::coordinator::{ControlCoordinator, ZOOM_MAX, ZOOM_MIN};

const EPS: f32 = 1e-6;

#[test]
fn session_defaults() {
    let coordinator = ControlCoordinator::new();
    let snapshot = coordinator.snapshot();

    assert_eq!(snapshot.drive_mode, DriveMode::Manual);
    assert_eq!(snapshot.speed_scale, SpeedScale::Half);
    assert_eq!(snapshot.light_mode, LightMode::Light);
    assert_eq!(snapshot.view_mode, ViewMode::Camera);
    assert!((snapshot.zoom_level - 1.0).abs() < EPS);
    assert!(!snapshot.emergency_stopped);
    assert!((snapshot.target_speed - 0.5).abs() < EPS);
}

#[test]
fn speed_scale_changes_apply_live_while_driving() {
    let mut coordinator = ControlCoordinator::new();

    coordinator.set_speed_scale(SpeedScale::Double);
    assert!((coordinator.target_speed() - 2.0).abs() < EPS);

    coordinator.set_speed_scale(SpeedScale::Normal);
    assert!((coordinator.target_speed() - 1.0).abs() < EPS);
}

#[test]
fn drive_mode_changes_do_not_touch_speed() {
    let mut coordinator = ControlCoordinator::new();
    coordinator.set_speed_scale(SpeedScale::Double);

    coordinator.set_drive_mode(DriveMode::Auto);
    assert_eq!(coordinator.drive_mode(), DriveMode::Auto);
    assert!((coordinator.target_speed() - 2.0).abs() < EPS);
}

#[test]
fn light_and_view_modes_are_plain_sets() {
    let mut coordinator = ControlCoordinator::new();

    coordinator.set_light_mode(LightMode::Laser);
    coordinator.set_view_mode(ViewMode::Map2d);
    assert_eq!(coordinator.light_mode(), LightMode::Laser);
    assert_eq!(coordinator.view_mode(), ViewMode::Map2d);
}

#[test]
fn engaging_the_stop_forces_target_speed_to_zero() {
    let mut coordinator = ControlCoordinator::new();
    coordinator.set_speed_scale(SpeedScale::Double);

    coordinator.toggle_emergency_stop();
    assert!(coordinator.emergency_stopped());
    assert_eq!(coordinator.target_speed(), 0.0);
    // The selection itself is untouched by the interlock.
    assert_eq!(coordinator.speed_scale(), SpeedScale::Double);
}

#[test]
fn stop_then_resume_without_scale_change_restores_the_prior_speed() {
    let mut coordinator = ControlCoordinator::new();
    coordinator.set_speed_scale(SpeedScale::Normal);
    let before = coordinator.target_speed();

    coordinator.toggle_emergency_stop();
    coordinator.toggle_emergency_stop();
    assert!(!coordinator.emergency_stopped());
    assert!((coordinator.target_speed() - before).abs() < EPS);
}

#[test]
fn scale_selected_while_stopped_is_deferred_until_release() {
    let mut coordinator = ControlCoordinator::new();
    coordinator.toggle_emergency_stop();

    coordinator.set_speed_scale(SpeedScale::Double);
    assert_eq!(coordinator.target_speed(), 0.0);

    coordinator.toggle_emergency_stop();
    assert!((coordinator.target_speed() - 2.0).abs() < EPS);
}

#[test]
fn zoom_steps_by_two_tenths() {
    let mut coordinator = ControlCoordinator::new();

    coordinator.zoom_in();
    assert!((coordinator.zoom_level() - 1.2).abs() < EPS);
    coordinator.zoom_out();
    coordinator.zoom_out();
    assert!((coordinator.zoom_level() - 0.8).abs() < EPS);
}

#[test]
fn zoom_saturates_at_both_bounds() {
    let mut coordinator = ControlCoordinator::new();

    for _ in 0..12 {
        coordinator.zoom_in();
    }
    assert!((coordinator.zoom_level() - ZOOM_MAX).abs() < EPS);

    for _ in 0..12 {
        coordinator.zoom_out();
    }
    assert!((coordinator.zoom_level() - ZOOM_MIN).abs() < EPS);
}
