use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{DriveMode, LightMode, SpeedScale},
    geometry::Vec2,
};

/// On-screen geometry of one stick well, captured when a drag begins.
///
/// `radius` is half the well's visual diameter minus the thumb's visual
/// radius, so the thumb stays inside the well at full deflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickGeometry {
    pub center: Vec2,
    pub radius: f32,
}

/// Motion intent derived from the current control state and stick vectors.
///
/// `left`/`right` are radius-normalized displacements with `|v| <= 1`, and
/// both are zero whenever the emergency stop is engaged, regardless of any
/// gesture still in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveCommand {
    pub drive_mode: DriveMode,
    pub target_speed: f32,
    pub left: Vec2,
    pub right: Vec2,
    pub issued_at: DateTime<Utc>,
}

/// Intents queued from the UI to the robot link worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RobotCommand {
    Drive {
        command: DriveCommand,
    },
    SetDriveMode {
        mode: DriveMode,
    },
    SetSpeedScale {
        scale: SpeedScale,
    },
    SetLightMode {
        mode: LightMode,
    },
    EmergencyStop {
        engaged: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTime {
    pub hours: u32,
    pub minutes: u32,
}

/// Read-only metrics snapshot displayed in the HUD.
///
/// Latitude/longitude arrive already display-formatted from the upstream
/// source; the dashboard shows them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub distance_m: f64,
    pub running_time: RunningTime,
    pub latitude: String,
    pub longitude: String,
    pub elevation_m: i32,
    pub temperature_c: i32,
    pub battery_pct: f32,
    pub notifications: u32,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
}
