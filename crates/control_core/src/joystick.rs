use tracing::trace;

use shared::{domain::Stick, geometry::Vec2, protocol::StickGeometry};

/// Displacement and activity of one stick.
///
/// An inactive stick always reports the zero position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickState {
    pub position: Vec2,
    pub active: bool,
}

impl StickState {
    pub const IDLE: StickState = StickState {
        position: Vec2::ZERO,
        active: false,
    };
}

impl Default for StickState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Tracking subscription for one in-flight drag.
///
/// Installed once per gesture and dropped exactly once, on `end` or focus
/// loss. A stick never holds more than one, so repeated gestures cannot
/// accumulate trackers.
#[derive(Debug)]
struct GestureTracker {
    geometry: StickGeometry,
}

#[derive(Debug, Default)]
struct StickSlot {
    state: StickState,
    tracker: Option<GestureTracker>,
}

/// Converts drag gestures into bounded displacement vectors, one slot per
/// stick. Tracking is global for the lifetime of a gesture: a pointer that
/// wanders outside the widget keeps updating the stick until release.
#[derive(Debug, Default)]
pub struct JoystickEngine {
    left: StickSlot,
    right: StickSlot,
}

impl JoystickEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, stick: Stick) -> &StickSlot {
        match stick {
            Stick::Left => &self.left,
            Stick::Right => &self.right,
        }
    }

    fn slot_mut(&mut self, stick: Stick) -> &mut StickSlot {
        match stick {
            Stick::Left => &mut self.left,
            Stick::Right => &mut self.right,
        }
    }

    /// Starts tracking a drag on `stick` with the well geometry captured
    /// from the widget.
    ///
    /// Calling again while a gesture is already in flight keeps the
    /// existing tracker; a competing second tracker is never installed.
    pub fn begin(&mut self, stick: Stick, geometry: StickGeometry) {
        let slot = self.slot_mut(stick);
        if slot.tracker.is_some() {
            trace!(stick = stick.label(), "begin while tracking; gesture kept");
            return;
        }
        slot.tracker = Some(GestureTracker { geometry });
        slot.state.active = true;
        trace!(stick = stick.label(), "gesture began");
    }

    /// Updates the stick from an absolute pointer position.
    ///
    /// The displacement from the well center is clamped to the well radius
    /// by angle-preserving rescale, so direction stays accurate at the
    /// boundary. A move with no gesture in flight (a stray event delivered
    /// after release) is a no-op that returns the current state.
    pub fn move_to(&mut self, stick: Stick, pointer: Vec2) -> StickState {
        let slot = self.slot_mut(stick);
        let Some(tracker) = &slot.tracker else {
            return slot.state;
        };
        let delta = pointer - tracker.geometry.center;
        slot.state.position = delta.clamp_length(tracker.geometry.radius);
        slot.state
    }

    /// Ends the gesture: the thumb snaps back to center and the tracker is
    /// released. Idempotent.
    pub fn end(&mut self, stick: Stick) {
        let slot = self.slot_mut(stick);
        if slot.tracker.take().is_some() {
            trace!(stick = stick.label(), "gesture ended");
        }
        slot.state = StickState::IDLE;
    }

    /// Implicit `end` for both sticks. Used on input-focus loss so a lost
    /// release event cannot leave a gesture tracked forever.
    pub fn release_all(&mut self) {
        for stick in Stick::ALL {
            self.end(stick);
        }
    }

    pub fn state(&self, stick: Stick) -> StickState {
        self.slot(stick).state
    }

    pub fn is_active(&self, stick: Stick) -> bool {
        self.slot(stick).state.active
    }

    /// Radius-normalized displacement with `|v| <= 1`; zero while idle.
    pub fn normalized(&self, stick: Stick) -> Vec2 {
        let slot = self.slot(stick);
        match &slot.tracker {
            Some(tracker) if tracker.geometry.radius > 0.0 => {
                slot.state.position / tracker.geometry.radius
            }
            _ => Vec2::ZERO,
        }
    }
}
