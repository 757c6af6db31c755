//! Events delivered from the link worker to the UI thread.

use shared::protocol::TelemetrySnapshot;

pub enum UiEvent {
    TelemetryUpdated(TelemetrySnapshot),
}
