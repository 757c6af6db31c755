use control_core::ControlSession;
use shared::{
    domain::{SpeedScale, Stick},
    geometry::Vec2,
    protocol::StickGeometry,
};

const EPS: f32 = 1e-6;

#[test]
fn scale_selected_during_stop_wins_on_resume_acceptance() {
    let mut session = ControlSession::new();
    assert!((session.snapshot().target_speed - 0.5).abs() < EPS);

    session.set_speed_scale(SpeedScale::Double);
    assert!((session.snapshot().target_speed - 2.0).abs() < EPS);

    session.toggle_emergency_stop();
    assert_eq!(session.snapshot().target_speed, 0.0);

    // Selecting a scale during the stop is remembered but not applied yet.
    session.set_speed_scale(SpeedScale::Normal);
    assert_eq!(session.snapshot().target_speed, 0.0);

    // On release the scale selected during the stop wins, not the one that
    // was live when the stop was engaged.
    session.toggle_emergency_stop();
    assert!((session.snapshot().target_speed - 1.0).abs() < EPS);
}

#[test]
fn emergency_stop_suppresses_a_driving_gesture_end_to_end_acceptance() {
    let mut session = ControlSession::new();
    let geometry = StickGeometry {
        center: Vec2::new(160.0, 480.0),
        radius: 44.0,
    };

    session.stick_begin(Stick::Left, geometry);
    session.stick_move(Stick::Left, Vec2::new(160.0 + 1000.0, 480.0));
    let state = session.stick(Stick::Left);
    assert!((state.position.x - 44.0).abs() < 1e-3);

    session.toggle_emergency_stop();
    let command = session.drive_command();
    assert_eq!(command.left, Vec2::ZERO);
    assert_eq!(command.target_speed, 0.0);

    // Operator lets go, then releases the stop: speed is restored but the
    // stick is back at center, so no motion is commanded.
    session.stick_end(Stick::Left);
    session.toggle_emergency_stop();
    let command = session.drive_command();
    assert_eq!(command.left, Vec2::ZERO);
    assert!((command.target_speed - 0.5).abs() < EPS);
}
