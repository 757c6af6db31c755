//! Palette and sizing constants shared by the dashboard panels and widgets.

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(250, 204, 21);
pub const STOP_RED: Color32 = Color32::from_rgb(220, 38, 38);
pub const STOP_RED_DARK: Color32 = Color32::from_rgb(185, 28, 28);
pub const BATTERY_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const STATUS_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const TEXT_DIM: Color32 = Color32::from_rgb(156, 163, 175);
pub const IDLE_GRAY: Color32 = Color32::from_rgb(156, 163, 175);

pub const HUD_FILL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 217);
pub const PANEL_FILL: Color32 = Color32::from_rgba_premultiplied(22, 29, 39, 178);
pub const PANEL_BORDER: Color32 = Color32::from_rgb(75, 85, 99);
pub const VIEW_BG: Color32 = Color32::from_rgb(17, 24, 39);
pub const WALL_SHADE: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 96);
pub const GRID_LINE: Color32 = Color32::from_rgb(55, 65, 81);
pub const WELL_FILL: Color32 = Color32::from_rgba_premultiplied(22, 29, 39, 178);

pub const HUD_HEIGHT: f32 = 64.0;
pub const STICK_WELL_DIAMETER: f32 = 128.0;
/// Thumb travel is the well radius minus this, so the thumb stays inside
/// the well at full deflection.
pub const STICK_THUMB_RADIUS: f32 = 20.0;
pub const MODE_ROW_WIDTH: f32 = 96.0;
pub const DIAL_RADIUS: f32 = 28.0;
