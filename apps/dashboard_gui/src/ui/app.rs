//! Application shell: owns the control session, drains worker events, and
//! lays the overlay panels over the viewport every frame.

use std::time::Duration;

use chrono::{DateTime, Utc};
use crossbeam_channel::{Receiver, Sender};

use control_core::ControlSession;
use shared::{
    domain::Stick,
    protocol::{RobotCommand, RunningTime, TelemetrySnapshot},
};

use crate::config::Settings;
use crate::controller::{events::UiEvent, orchestration::dispatch_robot_command};
use crate::ui::panels;

pub struct DashboardApp {
    session: ControlSession,
    cmd_tx: Sender<RobotCommand>,
    ui_rx: Receiver<UiEvent>,
    telemetry: Option<TelemetrySnapshot>,
    status_line: String,
    repaint_interval: Duration,
}

impl DashboardApp {
    pub fn new(cmd_tx: Sender<RobotCommand>, ui_rx: Receiver<UiEvent>, settings: &Settings) -> Self {
        let mut session = ControlSession::new();
        session.set_view_mode(settings.initial_view);
        Self {
            session,
            cmd_tx,
            ui_rx,
            telemetry: None,
            status_line: String::new(),
            repaint_interval: Duration::from_millis(settings.telemetry_interval_ms.max(1)),
        }
    }

    fn drain_worker_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::TelemetryUpdated(snapshot) => self.telemetry = Some(snapshot),
            }
        }
    }

    fn send_drive_command(&mut self) {
        let command = self.session.drive_command();
        dispatch_robot_command(
            &self.cmd_tx,
            RobotCommand::Drive { command },
            &mut self.status_line,
        );
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_events();

        // A window that lost focus will never deliver the release event;
        // treat the loss as letting go of both sticks.
        let focused = ctx.input(|i| i.raw.focused);
        if !focused
            && (self.session.stick_active(Stick::Left) || self.session.stick_active(Stick::Right))
        {
            self.session.release_input();
            self.send_drive_command();
        }

        panels::top_hud(ctx, self.telemetry.as_ref());
        panels::status_footer(ctx, &mut self.status_line);
        // The central viewport must be added after every side panel.
        let snapshot = self.session.snapshot();
        panels::viewport(ctx, &snapshot);
        panels::angle_dials(ctx, &self.session);
        panels::control_columns(ctx, &mut self.session, &self.cmd_tx, &mut self.status_line);
        if panels::joysticks(ctx, &mut self.session) {
            self.send_drive_command();
        }
        panels::speed_readout(ctx, &self.session.snapshot());
        panels::view_toggle(ctx, &mut self.session);

        // Telemetry arrives on its own cadence whether or not the operator
        // is interacting, so keep repainting at that pace.
        ctx.request_repaint_after(self.repaint_interval);
    }
}

pub(crate) fn format_speed(value: f32) -> String {
    format!("{value:.1}")
}

pub(crate) fn format_running_time(time: RunningTime) -> String {
    format!("{}h {}m", time.hours, time.minutes)
}

pub(crate) fn format_clock(at: DateTime<Utc>) -> String {
    at.format("%H:%M").to_string()
}

pub(crate) fn format_date(at: DateTime<Utc>) -> String {
    at.format("%a %d %b").to_string()
}
