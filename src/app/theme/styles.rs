//! Theme Styling Functions
//!
//! Helper functions that apply a `Palette` consistently across the UI.

use egui::Stroke;

use super::colors::{self, Palette};

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context, palette: &Palette) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();

    // Window and panel styling
    style.visuals.window_fill = palette.card_bg;
    style.visuals.panel_fill = palette.window_bg;

    // Text inputs render on the extreme background
    style.visuals.extreme_bg_color = colors::FIELD_BG;

    // Widget styling
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = palette.primary;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = palette.primary_hover;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = palette.primary_hover;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    // Selection color
    style.visuals.selection.bg_fill = palette.primary;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_ON_PRIMARY);

    ctx.set_style(style);
}

/// Create the white rounded card that auth forms sit on
pub fn card_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.card_bg)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(30))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 15,
            spread: 0,
            color: colors::CARD_SHADOW,
        })
}

/// Create a frame style for the top bar
pub fn top_bar_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.title)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the main panel
pub fn main_panel_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.window_bg)
        .inner_margin(egui::Margin::same(0))
}
