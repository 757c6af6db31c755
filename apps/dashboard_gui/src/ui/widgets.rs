//! Custom widgets: joystick wells, mode rows, gauges, and dials.

use egui::{
    vec2, Align2, Color32, CornerRadius, FontId, Rect, RichText, Sense, Stroke, StrokeKind, Ui,
};

use control_core::ControlSession;
use shared::{domain::Stick, geometry::Vec2, protocol::StickGeometry};

use crate::ui::theme;

/// Draws one joystick well and routes its drag gesture into the session.
///
/// Returns true when the gesture changed the stick this frame, so the
/// caller knows a fresh drive command is due.
pub fn joystick(ui: &mut Ui, session: &mut ControlSession, stick: Stick) -> bool {
    let size = theme::STICK_WELL_DIAMETER;
    let (rect, response) = ui.allocate_exact_size(vec2(size, size), Sense::drag());

    if response.drag_started() {
        let center = rect.center();
        session.stick_begin(
            stick,
            StickGeometry {
                center: Vec2::new(center.x, center.y),
                radius: size / 2.0 - theme::STICK_THUMB_RADIUS,
            },
        );
    }

    let mut moved = false;
    if response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos() {
            // A drag that began while stopped never went active; its moves
            // are no-ops and do not warrant drive commands.
            let state = session.stick_move(stick, Vec2::new(pointer.x, pointer.y));
            moved = state.active;
        }
    }
    if response.drag_stopped() {
        session.stick_end(stick);
        moved = true;
    }

    paint_well(ui, rect, session, stick);
    moved
}

fn paint_well(ui: &Ui, rect: Rect, session: &ControlSession, stick: Stick) {
    let painter = ui.painter();
    let stopped = session.snapshot().emergency_stopped;
    let state = session.stick(stick);
    let center = rect.center();
    let radius = rect.width() / 2.0;

    painter.circle_filled(center, radius, theme::WELL_FILL);
    painter.circle_stroke(center, radius, Stroke::new(2.0, theme::PANEL_BORDER));
    painter.circle_stroke(center, radius / 2.0, Stroke::new(1.0, theme::GRID_LINE));

    // Directional notches at the four compass points.
    for (dx, dy) in [(0.0_f32, -1.0_f32), (0.0, 1.0), (-1.0, 0.0), (1.0, 0.0)] {
        let dir = vec2(dx, dy);
        painter.line_segment(
            [center + dir * (radius - 10.0), center + dir * (radius - 4.0)],
            Stroke::new(2.0, theme::GRID_LINE),
        );
    }

    let ring = if stopped {
        theme::STOP_RED
    } else if state.active {
        theme::ACCENT
    } else {
        theme::IDLE_GRAY
    };
    let thumb = center + vec2(state.position.x, state.position.y);
    painter.circle_filled(thumb, theme::STICK_THUMB_RADIUS, Color32::BLACK);
    painter.circle_stroke(thumb, theme::STICK_THUMB_RADIUS, Stroke::new(2.0, ring));
    painter.circle_filled(
        thumb,
        3.0,
        if state.active {
            theme::ACCENT
        } else {
            theme::IDLE_GRAY
        },
    );
}

/// One row in a mode column. Returns true when clicked.
pub fn mode_row(ui: &mut Ui, label: &str, selected: bool) -> bool {
    let text = if selected {
        RichText::new(label).color(theme::ACCENT).strong()
    } else {
        RichText::new(label).color(Color32::WHITE)
    };
    ui.add_sized(
        [theme::MODE_ROW_WIDTH, 24.0],
        egui::SelectableLabel::new(selected, text),
    )
    .clicked()
}

pub fn battery_gauge(ui: &mut Ui, pct: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(26.0, 12.0), Sense::hover());
    let painter = ui.painter();
    painter.rect_stroke(
        rect,
        CornerRadius::same(2),
        Stroke::new(1.0, Color32::WHITE),
        StrokeKind::Inside,
    );
    let fraction = (pct / 100.0).clamp(0.0, 1.0);
    let fill = Rect::from_min_size(
        rect.min + vec2(1.0, 1.0),
        vec2((rect.width() - 2.0) * fraction, rect.height() - 2.0),
    );
    painter.rect_filled(fill, CornerRadius::same(1), theme::BATTERY_GREEN);
    ui.label(
        RichText::new(format!("{}%", pct.round() as i32))
            .size(10.0)
            .color(Color32::WHITE),
    );
}

pub fn notification_bell(ui: &mut Ui, count: u32) {
    let (rect, _) = ui.allocate_exact_size(vec2(18.0, 18.0), Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    painter.circle_stroke(center, 7.0, Stroke::new(1.5, Color32::WHITE));
    painter.circle_filled(center + vec2(0.0, 7.0), 1.5, Color32::WHITE);
    if count > 0 {
        let badge = rect.right_top() + vec2(-2.0, 2.0);
        painter.circle_filled(badge, 5.0, theme::STOP_RED);
        painter.text(
            badge,
            Align2::CENTER_CENTER,
            count.to_string(),
            FontId::proportional(8.0),
            Color32::WHITE,
        );
    }
}

/// Small dial with twelve tick marks and a needle at `angle_rad`
/// (screen-space radians, zero pointing right).
pub fn angle_dial(ui: &mut Ui, caption: &str, angle_rad: f32) {
    let diameter = theme::DIAL_RADIUS * 2.0;
    let (rect, _) = ui.allocate_exact_size(vec2(diameter, diameter + 14.0), Sense::hover());
    let painter = ui.painter();
    let center = rect.center_top() + vec2(0.0, theme::DIAL_RADIUS);

    painter.circle_stroke(
        center,
        theme::DIAL_RADIUS,
        Stroke::new(1.0, theme::PANEL_BORDER),
    );
    for i in 0..12 {
        let tick = i as f32 * std::f32::consts::TAU / 12.0;
        let dir = vec2(tick.cos(), tick.sin());
        painter.line_segment(
            [
                center + dir * (theme::DIAL_RADIUS - 4.0),
                center + dir * theme::DIAL_RADIUS,
            ],
            Stroke::new(1.0, theme::IDLE_GRAY),
        );
    }

    let dir = vec2(angle_rad.cos(), angle_rad.sin());
    painter.line_segment(
        [center, center + dir * (theme::DIAL_RADIUS - 6.0)],
        Stroke::new(2.0, theme::ACCENT),
    );
    let degrees = angle_rad.to_degrees().round() as i32;
    painter.text(
        center + vec2(0.0, theme::DIAL_RADIUS + 8.0),
        Align2::CENTER_CENTER,
        format!("{caption} {degrees}°"),
        FontId::proportional(10.0),
        theme::TEXT_DIM,
    );
}
