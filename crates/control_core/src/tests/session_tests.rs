use shared::{
    domain::{DriveMode, Stick},
    geometry::Vec2,
    protocol::StickGeometry,
};

use crate::session::ControlSession;

const EPS: f32 = 1e-4;

fn well(cx: f32, cy: f32, radius: f32) -> StickGeometry {
    StickGeometry {
        center: Vec2::new(cx, cy),
        radius,
    }
}

#[test]
fn begin_is_ignored_entirely_while_stopped() {
    let mut session = ControlSession::new();
    session.toggle_emergency_stop();

    session.stick_begin(Stick::Left, well(100.0, 100.0, 50.0));
    assert!(!session.stick_active(Stick::Left));

    // Moves against the never-begun gesture stay no-ops too.
    let state = session.stick_move(Stick::Left, Vec2::new(140.0, 100.0));
    assert!(!state.active);
    assert_eq!(state.position, Vec2::ZERO);
}

#[test]
fn gestures_work_again_after_the_stop_is_released() {
    let mut session = ControlSession::new();
    session.toggle_emergency_stop();
    session.stick_begin(Stick::Left, well(100.0, 100.0, 50.0));
    session.toggle_emergency_stop();

    session.stick_begin(Stick::Left, well(100.0, 100.0, 50.0));
    let state = session.stick_move(Stick::Left, Vec2::new(130.0, 100.0));
    assert!(state.active);
    assert!((state.position.x - 30.0).abs() < EPS);
}

#[test]
fn drive_command_carries_normalized_stick_vectors() {
    let mut session = ControlSession::new();
    session.stick_begin(Stick::Left, well(0.0, 0.0, 50.0));
    session.stick_move(Stick::Left, Vec2::new(25.0, -25.0));

    let command = session.drive_command();
    assert_eq!(command.drive_mode, DriveMode::Manual);
    assert!((command.left.x - 0.5).abs() < EPS);
    assert!((command.left.y + 0.5).abs() < EPS);
    assert_eq!(command.right, Vec2::ZERO);
    assert!(command.left.length() <= 1.0 + EPS);
}

#[test]
fn engaging_the_stop_mid_gesture_zeroes_the_command_vectors() {
    let mut session = ControlSession::new();
    session.stick_begin(Stick::Left, well(0.0, 0.0, 50.0));
    session.stick_move(Stick::Left, Vec2::new(50.0, 0.0));

    session.toggle_emergency_stop();

    // The engine still reports the in-flight gesture; suppression happens
    // at the session level.
    assert!(session.stick_active(Stick::Left));
    let command = session.drive_command();
    assert_eq!(command.left, Vec2::ZERO);
    assert_eq!(command.right, Vec2::ZERO);
    assert_eq!(command.target_speed, 0.0);
}

#[test]
fn focus_loss_releases_every_in_flight_gesture() {
    let mut session = ControlSession::new();
    session.stick_begin(Stick::Left, well(0.0, 0.0, 50.0));
    session.stick_begin(Stick::Right, well(300.0, 0.0, 50.0));
    session.stick_move(Stick::Right, Vec2::new(320.0, 0.0));

    session.release_input();
    assert!(!session.stick_active(Stick::Left));
    assert!(!session.stick_active(Stick::Right));
    assert_eq!(session.stick(Stick::Right).position, Vec2::ZERO);
}
