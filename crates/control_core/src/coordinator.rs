use tracing::info;

use shared::domain::{DriveMode, LightMode, SpeedScale, ViewMode};

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.2;

/// Copyable read view of the coordinator, taken by rendering code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    pub drive_mode: DriveMode,
    pub speed_scale: SpeedScale,
    pub light_mode: LightMode,
    pub view_mode: ViewMode,
    pub zoom_level: f32,
    pub emergency_stopped: bool,
    pub target_speed: f32,
}

/// Owns the mode fields and the emergency-stop interlock.
///
/// Fields are private so presentation code cannot bypass the transition
/// functions. `target_speed` is derived and kept consistent on every write:
/// zero while the interlock is engaged, the scale multiplier otherwise.
#[derive(Debug)]
pub struct ControlCoordinator {
    drive_mode: DriveMode,
    speed_scale: SpeedScale,
    light_mode: LightMode,
    view_mode: ViewMode,
    zoom_level: f32,
    emergency_stopped: bool,
    target_speed: f32,
}

impl ControlCoordinator {
    pub fn new() -> Self {
        Self {
            drive_mode: DriveMode::Manual,
            speed_scale: SpeedScale::Half,
            light_mode: LightMode::Light,
            view_mode: ViewMode::Camera,
            zoom_level: 1.0,
            emergency_stopped: false,
            target_speed: SpeedScale::Half.multiplier(),
        }
    }

    pub fn set_drive_mode(&mut self, mode: DriveMode) {
        self.drive_mode = mode;
    }

    /// Stores the scale and, unless stopped, applies it to `target_speed`
    /// immediately (a live speed change while driving). While stopped the
    /// selection is remembered and takes effect when the stop is released.
    pub fn set_speed_scale(&mut self, scale: SpeedScale) {
        self.speed_scale = scale;
        if !self.emergency_stopped {
            self.target_speed = scale.multiplier();
        }
    }

    pub fn set_light_mode(&mut self, mode: LightMode) {
        self.light_mode = mode;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Saturating step; never wraps or errors at the bounds.
    pub fn zoom_in(&mut self) {
        self.zoom_level = (self.zoom_level + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_level = (self.zoom_level - ZOOM_STEP).max(ZOOM_MIN);
    }

    /// Flips the interlock. Engaging forces `target_speed` to zero at once,
    /// independent of any gesture still in flight; releasing recomputes it
    /// from whichever scale is selected now, which honors a scale chosen
    /// during the stop.
    pub fn toggle_emergency_stop(&mut self) {
        self.emergency_stopped = !self.emergency_stopped;
        self.target_speed = if self.emergency_stopped {
            0.0
        } else {
            self.speed_scale.multiplier()
        };
        info!(engaged = self.emergency_stopped, "emergency stop toggled");
    }

    pub fn drive_mode(&self) -> DriveMode {
        self.drive_mode
    }

    pub fn speed_scale(&self) -> SpeedScale {
        self.speed_scale
    }

    pub fn light_mode(&self) -> LightMode {
        self.light_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn emergency_stopped(&self) -> bool {
        self.emergency_stopped
    }

    pub fn target_speed(&self) -> f32 {
        self.target_speed
    }

    pub fn snapshot(&self) -> ControlSnapshot {
        ControlSnapshot {
            drive_mode: self.drive_mode,
            speed_scale: self.speed_scale,
            light_mode: self.light_mode,
            view_mode: self.view_mode,
            zoom_level: self.zoom_level,
            emergency_stopped: self.emergency_stopped,
            target_speed: self.target_speed,
        }
    }
}

impl Default for ControlCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
