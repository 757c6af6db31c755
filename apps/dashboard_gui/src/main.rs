mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use crossbeam_channel::bounded;

use controller::events::UiEvent;
use shared::protocol::RobotCommand;
use ui::DashboardApp;

#[derive(Parser, Debug)]
#[command(about = "Teleoperation dashboard for a remote-controlled inspection robot")]
struct Cli {
    /// Seed for the simulated telemetry feed; omit for entropy seeding.
    #[arg(long)]
    telemetry_seed: Option<u64>,
    /// Telemetry refresh cadence in milliseconds.
    #[arg(long)]
    telemetry_interval_ms: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let mut settings = config::load_settings()?;
    if let Some(seed) = cli.telemetry_seed {
        settings.telemetry_seed = Some(seed);
    }
    if let Some(interval) = cli.telemetry_interval_ms {
        settings.telemetry_interval_ms = interval;
    }

    let (cmd_tx, cmd_rx) = bounded::<RobotCommand>(settings.command_queue_capacity);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let _link_worker = backend_bridge::runtime::launch(&settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Teleop Dashboard")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Teleop Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(cmd_tx, ui_rx, &settings)))),
    )
    .map_err(|error| anyhow!("dashboard exited with error: {error}"))
}
