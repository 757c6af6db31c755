//! Robot-link worker: consumes queued intents, produces telemetry.

pub mod runtime;
