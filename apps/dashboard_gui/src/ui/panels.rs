//! Overlay panels laid out over the central viewport: HUD strip, control
//! columns, speed readout, view toggle, and the twin joysticks.

use crossbeam_channel::Sender;
use egui::{
    vec2, Align, Align2, Area, Color32, Context, CornerRadius, Frame, Id, Layout, Margin, Painter,
    Pos2, Rect, RichText, Stroke, Ui,
};

use control_core::{ControlSession, ControlSnapshot};
use shared::{
    domain::{DriveMode, LightMode, SpeedScale, Stick, ViewMode},
    protocol::{RobotCommand, TelemetrySnapshot},
};

use crate::controller::orchestration::dispatch_robot_command;
use crate::ui::{
    app::{format_clock, format_date, format_running_time, format_speed},
    theme, widgets,
};

pub fn top_hud(ctx: &Context, telemetry: Option<&TelemetrySnapshot>) {
    egui::TopBottomPanel::top("hud")
        .exact_height(theme::HUD_HEIGHT)
        .frame(
            Frame::new()
                .fill(theme::HUD_FILL)
                .inner_margin(Margin::symmetric(12, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new("OPERATOR CONSOLE")
                            .color(Color32::WHITE)
                            .strong()
                            .size(12.0),
                    );
                    ui.label(RichText::new("remote drive").color(theme::TEXT_DIM).size(10.0));
                });
                ui.add_space(24.0);

                match telemetry {
                    Some(snapshot) => {
                        metric(ui, "DISTANCE", &format!("{:.0} m", snapshot.distance_m));
                        metric(ui, "RUNNING", &format_running_time(snapshot.running_time));
                        metric(ui, "LATITUDE", &snapshot.latitude);
                        status_chip(ui, &snapshot.status);
                        metric(ui, "LONGITUDE", &snapshot.longitude);
                        metric(ui, "ELEVATION", &format!("{} m", snapshot.elevation_m));
                        metric(ui, "TEMPERATURE", &format!("{} °C", snapshot.temperature_c));
                    }
                    None => {
                        ui.label(RichText::new("awaiting telemetry…").color(theme::TEXT_DIM));
                    }
                }

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if let Some(snapshot) = telemetry {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format_date(snapshot.recorded_at))
                                    .size(10.0)
                                    .color(Color32::WHITE),
                            );
                            ui.label(
                                RichText::new(format_clock(snapshot.recorded_at))
                                    .size(10.0)
                                    .color(Color32::WHITE),
                            );
                        });
                        widgets::battery_gauge(ui, snapshot.battery_pct);
                        widgets::notification_bell(ui, snapshot.notifications);
                    }
                });
            });
        });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).color(theme::TEXT_DIM).size(9.0));
        ui.label(RichText::new(value).strong().size(11.0).color(Color32::WHITE));
    });
    ui.add_space(14.0);
}

fn status_chip(ui: &mut Ui, status: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new("STATUS").color(theme::TEXT_DIM).size(9.0));
        Frame::new()
            .fill(theme::STATUS_GREEN)
            .corner_radius(CornerRadius::same(2))
            .inner_margin(Margin::symmetric(6, 1))
            .show(ui, |ui| {
                let label = if status.is_empty() { "OK" } else { status };
                ui.label(RichText::new(label).strong().size(10.0).color(Color32::WHITE));
            });
    });
    ui.add_space(14.0);
}

pub fn viewport(ctx: &Context, snapshot: &ControlSnapshot) {
    egui::CentralPanel::default()
        .frame(Frame::new().fill(theme::VIEW_BG))
        .show(ctx, |ui| {
            let rect = ui.max_rect();
            let painter = ui.painter_at(rect);
            match snapshot.view_mode {
                ViewMode::Camera => paint_camera(&painter, rect, snapshot.zoom_level),
                ViewMode::Map2d => paint_flat_map(&painter, rect, snapshot.zoom_level),
                ViewMode::Map3d => paint_terrain_map(&painter, rect, snapshot.zoom_level),
            }
            if snapshot.view_mode == ViewMode::Camera {
                paint_light_overlay(&painter, rect, snapshot.light_mode);
            }
        });
}

fn paint_camera(painter: &Painter, rect: Rect, zoom: f32) {
    let center = rect.center();

    // Tunnel floor: lines converging on the vanishing point; zoom widens
    // the apparent mouth of the tunnel.
    let spread = rect.width() * 0.5 * zoom;
    for i in -4..=4_i32 {
        let x = center.x + i as f32 * spread / 4.0;
        painter.line_segment(
            [Pos2::new(x, rect.bottom()), center],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }
    for step in 1..=5 {
        let y = center.y + (rect.bottom() - center.y) * (step as f32 / 5.0).powi(2);
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, theme::GRID_LINE),
        );
    }
    painter.line_segment(
        [
            Pos2::new(rect.left(), center.y),
            Pos2::new(rect.right(), center.y),
        ],
        Stroke::new(1.0, theme::PANEL_BORDER),
    );

    // Wall shading on both sides.
    let wall = rect.width() / 3.0;
    painter.rect_filled(
        Rect::from_min_max(rect.min, Pos2::new(rect.left() + wall, rect.bottom())),
        CornerRadius::ZERO,
        theme::WALL_SHADE,
    );
    painter.rect_filled(
        Rect::from_min_max(Pos2::new(rect.right() - wall, rect.top()), rect.max),
        CornerRadius::ZERO,
        theme::WALL_SHADE,
    );
}

fn paint_flat_map(painter: &Painter, rect: Rect, zoom: f32) {
    let spacing = 48.0 * zoom;
    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, theme::GRID_LINE),
        );
        x += spacing;
    }
    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, theme::GRID_LINE),
        );
        y += spacing;
    }
    painter.circle_filled(rect.center(), 5.0, theme::ACCENT);
}

fn paint_terrain_map(painter: &Painter, rect: Rect, zoom: f32) {
    paint_flat_map(painter, rect, zoom);
    // Contour rings around the robot position.
    for ring in 1..=4 {
        painter.circle_stroke(
            rect.center(),
            ring as f32 * 56.0 * zoom,
            Stroke::new(1.0, theme::PANEL_BORDER),
        );
    }
}

fn paint_light_overlay(painter: &Painter, rect: Rect, mode: LightMode) {
    match mode {
        LightMode::Light => {
            painter.rect_filled(
                rect,
                CornerRadius::ZERO,
                Color32::from_rgba_premultiplied(255, 255, 255, 12),
            );
        }
        LightMode::SpotLight => {
            let center = rect.center();
            for (radius, alpha) in [(rect.width() / 6.0, 40), (rect.width() / 9.0, 60)] {
                painter.circle_filled(
                    center,
                    radius,
                    Color32::from_rgba_premultiplied(255, 255, 255, alpha),
                );
            }
        }
        LightMode::Laser => {
            let x = rect.center().x;
            painter.line_segment(
                [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
                Stroke::new(2.0, Color32::from_rgba_premultiplied(220, 38, 38, 178)),
            );
        }
    }
}

pub fn angle_dials(ctx: &Context, session: &ControlSession) {
    Area::new(Id::new("angle-dials"))
        .anchor(Align2::CENTER_TOP, vec2(0.0, theme::HUD_HEIGHT + 48.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                widgets::angle_dial(ui, "L", session.stick(Stick::Left).position.angle());
                ui.add_space(48.0);
                widgets::angle_dial(ui, "R", session.stick(Stick::Right).position.angle());
            });
        });
}

pub fn control_columns(
    ctx: &Context,
    session: &mut ControlSession,
    cmd_tx: &Sender<RobotCommand>,
    status: &mut String,
) {
    stop_button(ctx, session, cmd_tx, status);

    Area::new(Id::new("drive-modes"))
        .anchor(Align2::LEFT_CENTER, vec2(16.0, -72.0))
        .show(ctx, |ui| {
            column_frame(ui, |ui| {
                for mode in DriveMode::ALL {
                    if widgets::mode_row(ui, mode.label(), session.snapshot().drive_mode == mode) {
                        session.set_drive_mode(mode);
                        dispatch_robot_command(cmd_tx, RobotCommand::SetDriveMode { mode }, status);
                    }
                }
            });
        });

    Area::new(Id::new("speed-scales"))
        .anchor(Align2::LEFT_CENTER, vec2(16.0, 72.0))
        .show(ctx, |ui| {
            column_frame(ui, |ui| {
                // Fastest on top, matching the physical layout operators know.
                for scale in SpeedScale::ALL.into_iter().rev() {
                    if widgets::mode_row(ui, scale.label(), session.snapshot().speed_scale == scale)
                    {
                        session.set_speed_scale(scale);
                        dispatch_robot_command(
                            cmd_tx,
                            RobotCommand::SetSpeedScale { scale },
                            status,
                        );
                    }
                }
            });
        });

    Area::new(Id::new("light-modes"))
        .anchor(Align2::RIGHT_CENTER, vec2(-16.0, -72.0))
        .show(ctx, |ui| {
            column_frame(ui, |ui| {
                for mode in LightMode::ALL {
                    if widgets::mode_row(ui, mode.label(), session.snapshot().light_mode == mode) {
                        session.set_light_mode(mode);
                        dispatch_robot_command(cmd_tx, RobotCommand::SetLightMode { mode }, status);
                    }
                }
            });
        });

    Area::new(Id::new("zoom-buttons"))
        .anchor(Align2::RIGHT_CENTER, vec2(-16.0, 72.0))
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                if zoom_button(ui, "+").clicked() {
                    session.zoom_in();
                }
                if zoom_button(ui, "−").clicked() {
                    session.zoom_out();
                }
            });
        });
}

fn stop_button(
    ctx: &Context,
    session: &mut ControlSession,
    cmd_tx: &Sender<RobotCommand>,
    status: &mut String,
) {
    Area::new(Id::new("emergency-stop"))
        .anchor(Align2::RIGHT_TOP, vec2(-24.0, theme::HUD_HEIGHT + 32.0))
        .show(ctx, |ui| {
            let stopped = session.snapshot().emergency_stopped;
            let label = if stopped { "CONTINUE" } else { "STOP" };
            let fill = if stopped {
                theme::STOP_RED_DARK
            } else {
                theme::STOP_RED
            };
            let button = egui::Button::new(RichText::new(label).strong().color(Color32::WHITE))
                .fill(fill)
                .corner_radius(CornerRadius::same(4));
            if ui.add_sized([96.0, 36.0], button).clicked() {
                session.toggle_emergency_stop();
                let engaged = session.snapshot().emergency_stopped;
                dispatch_robot_command(cmd_tx, RobotCommand::EmergencyStop { engaged }, status);
                // The wire must see zeroed motion in the same breath.
                dispatch_robot_command(
                    cmd_tx,
                    RobotCommand::Drive {
                        command: session.drive_command(),
                    },
                    status,
                );
            }
        });
}

fn zoom_button(ui: &mut Ui, label: &str) -> egui::Response {
    ui.add_sized(
        [36.0, 36.0],
        egui::Button::new(RichText::new(label).size(18.0).color(Color32::WHITE))
            .fill(theme::PANEL_FILL)
            .corner_radius(CornerRadius::same(4)),
    )
}

fn column_frame<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> R {
    Frame::new()
        .fill(theme::PANEL_FILL)
        .stroke(Stroke::new(1.0, theme::PANEL_BORDER))
        .corner_radius(CornerRadius::same(4))
        .inner_margin(Margin::same(6))
        .show(ui, add_contents)
        .inner
}

pub fn speed_readout(ctx: &Context, snapshot: &ControlSnapshot) {
    Area::new(Id::new("speed-readout"))
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -196.0))
        .show(ctx, |ui| {
            let color = if snapshot.emergency_stopped {
                theme::STOP_RED
            } else {
                Color32::WHITE
            };
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(format_speed(snapshot.target_speed))
                        .size(56.0)
                        .strong()
                        .color(color),
                );
                ui.label(RichText::new("m/s").color(theme::TEXT_DIM).size(16.0));
            });
        });
}

pub fn view_toggle(ctx: &Context, session: &mut ControlSession) {
    Area::new(Id::new("view-toggle"))
        .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -12.0))
        .show(ctx, |ui| {
            column_frame(ui, |ui| {
                ui.horizontal(|ui| {
                    for mode in ViewMode::ALL {
                        if widgets::mode_row(ui, mode.label(), session.snapshot().view_mode == mode)
                        {
                            session.set_view_mode(mode);
                        }
                    }
                });
            });
        });
}

pub fn joysticks(ctx: &Context, session: &mut ControlSession) -> bool {
    let mut moved = false;
    Area::new(Id::new("left-stick"))
        .anchor(Align2::LEFT_BOTTOM, vec2(64.0, -64.0))
        .show(ctx, |ui| {
            moved |= widgets::joystick(ui, session, Stick::Left);
        });
    Area::new(Id::new("right-stick"))
        .anchor(Align2::RIGHT_BOTTOM, vec2(-64.0, -64.0))
        .show(ctx, |ui| {
            moved |= widgets::joystick(ui, session, Stick::Right);
        });
    moved
}

pub fn status_footer(ctx: &Context, status: &mut String) {
    if status.is_empty() {
        return;
    }
    egui::TopBottomPanel::bottom("status-footer")
        .frame(
            Frame::new()
                .fill(theme::HUD_FILL)
                .inner_margin(Margin::symmetric(12, 4)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(theme::ACCENT, status.as_str());
                if ui.small_button("dismiss").clicked() {
                    status.clear();
                }
            });
        });
}
