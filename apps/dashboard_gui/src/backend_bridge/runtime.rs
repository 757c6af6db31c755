//! Link worker thread between the UI command queue and the telemetry feed.
//!
//! There is no real robot on the other end: encoded intents go to the debug
//! log, and telemetry comes from the simulated source. A real transport
//! would plug into exactly this loop.

use std::{thread, time::Duration};

use crossbeam_channel::{select, tick, Receiver, Sender, TrySendError};
use tracing::{debug, info, warn};

use shared::protocol::RobotCommand;
use telemetry::{SimulatedTelemetry, TelemetrySource};

use crate::{config::Settings, controller::events::UiEvent};

pub fn launch(
    settings: &Settings,
    cmd_rx: Receiver<RobotCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    let interval = Duration::from_millis(settings.telemetry_interval_ms.max(1));
    let mut source: Box<dyn TelemetrySource + Send> = match settings.telemetry_seed {
        Some(seed) => Box::new(SimulatedTelemetry::new(seed)),
        None => Box::new(SimulatedTelemetry::from_entropy()),
    };

    thread::spawn(move || {
        info!("robot link worker started");
        let ticker = tick(interval);
        loop {
            select! {
                recv(cmd_rx) -> cmd => match cmd {
                    Ok(cmd) => handle_command(source.as_mut(), cmd),
                    Err(_) => {
                        info!("ui command queue closed; link worker exiting");
                        break;
                    }
                },
                recv(ticker) -> _ => {
                    let snapshot = source.poll();
                    match ui_tx.try_send(UiEvent::TelemetryUpdated(snapshot)) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            warn!("ui event queue full; dropping telemetry sample");
                        }
                        Err(TrySendError::Disconnected(_)) => break,
                    }
                }
            }
        }
    })
}

fn handle_command(source: &mut dyn TelemetrySource, cmd: RobotCommand) {
    // Metric drift pauses while the robot is held stopped.
    if let RobotCommand::EmergencyStop { engaged } = cmd {
        source.set_frozen(engaged);
    }
    match serde_json::to_string(&cmd) {
        Ok(encoded) => debug!(%encoded, "link command encoded"),
        Err(error) => warn!(%error, "failed to encode link command"),
    }
}
