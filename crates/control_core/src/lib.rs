//! Control core for the teleoperation dashboard: converts drag gestures
//! into bounded per-stick displacement vectors and coordinates drive mode,
//! speed scale, and the emergency-stop interlock.
//!
//! All control state lives behind [`ControlSession`], the single writer the
//! UI owns. Surrounding components (HUD, viewport, button bar) read
//! snapshots and never mutate fields directly.

pub mod coordinator;
pub mod joystick;
pub mod session;

pub use coordinator::{ControlCoordinator, ControlSnapshot, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
pub use joystick::{JoystickEngine, StickState};
pub use session::ControlSession;

#[cfg(test)]
mod tests;
