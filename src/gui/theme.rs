use egui::{Color32, Style, Visuals};

pub fn setup_theme(ctx: &egui::Context) {
    let mut style = Style::default();
    style.visuals = Visuals::dark();

    style.visuals.window_fill = Color32::from_rgb(30, 30, 30);
    style.visuals.panel_fill = STATUS_BAR_BG;
    style.visuals.extreme_bg_color = BACKGROUND;

    ctx.set_style(style);
}

pub const BACKGROUND: Color32 = Color32::from_rgb(24, 24, 24);
pub const LINE_NUMBER_FG: Color32 = Color32::from_rgb(100, 100, 100);
pub const TEXT_COLOR: Color32 = Color32::from_rgb(210, 210, 210);
pub const CURSOR_COLOR: Color32 = Color32::from_rgb(255, 255, 255);
pub const SELECTION_COLOR: Color32 = Color32::from_rgba_premultiplied(40, 70, 130, 160);
pub const STATUS_BAR_BG: Color32 = Color32::from_rgb(40, 40, 40);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(230, 180, 80);
