use chrono::Utc;

use shared::{
    domain::{DriveMode, LightMode, SpeedScale, Stick, ViewMode},
    geometry::Vec2,
    protocol::{DriveCommand, StickGeometry},
};

use crate::{
    coordinator::{ControlCoordinator, ControlSnapshot},
    joystick::{JoystickEngine, StickState},
};

/// Single-writer facade over the coordinator and the joystick engine.
///
/// The UI owns exactly one session per run and performs every control-state
/// mutation through it; everything else reads snapshots.
#[derive(Debug, Default)]
pub struct ControlSession {
    coordinator: ControlCoordinator,
    joystick: JoystickEngine,
}

impl ControlSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_drive_mode(&mut self, mode: DriveMode) {
        self.coordinator.set_drive_mode(mode);
    }

    pub fn set_speed_scale(&mut self, scale: SpeedScale) {
        self.coordinator.set_speed_scale(scale);
    }

    pub fn set_light_mode(&mut self, mode: LightMode) {
        self.coordinator.set_light_mode(mode);
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.coordinator.set_view_mode(mode);
    }

    pub fn zoom_in(&mut self) {
        self.coordinator.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.coordinator.zoom_out();
    }

    pub fn toggle_emergency_stop(&mut self) {
        self.coordinator.toggle_emergency_stop();
    }

    /// Starts a drag. While the emergency stop is engaged the gesture is
    /// ignored entirely and the stick never goes active.
    pub fn stick_begin(&mut self, stick: Stick, geometry: StickGeometry) {
        if self.coordinator.emergency_stopped() {
            return;
        }
        self.joystick.begin(stick, geometry);
    }

    pub fn stick_move(&mut self, stick: Stick, pointer: Vec2) -> StickState {
        self.joystick.move_to(stick, pointer)
    }

    pub fn stick_end(&mut self, stick: Stick) {
        self.joystick.end(stick);
    }

    /// Loss of input focus counts as releasing both sticks.
    pub fn release_input(&mut self) {
        self.joystick.release_all();
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        self.coordinator.snapshot()
    }

    pub fn stick(&self, stick: Stick) -> StickState {
        self.joystick.state(stick)
    }

    pub fn stick_active(&self, stick: Stick) -> bool {
        self.joystick.is_active(stick)
    }

    /// Assembles the outgoing motion intent.
    ///
    /// Stick vectors are zeroed while the interlock is engaged, even when a
    /// gesture is still mid-flight: motion output is suppressed at this
    /// level regardless of what the engine reports.
    pub fn drive_command(&self) -> DriveCommand {
        let snapshot = self.coordinator.snapshot();
        let (left, right) = if snapshot.emergency_stopped {
            (Vec2::ZERO, Vec2::ZERO)
        } else {
            (
                self.joystick.normalized(Stick::Left),
                self.joystick.normalized(Stick::Right),
            )
        };
        DriveCommand {
            drive_mode: snapshot.drive_mode,
            target_speed: snapshot.target_speed,
            left,
            right,
            issued_at: Utc::now(),
        }
    }
}
