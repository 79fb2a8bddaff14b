//! Placeholder feature screens.
//!
//! Each feature is an external collaborator that fills the view it is handed;
//! until one is wired in, the screen shows its title and a short blurb.

use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;
use crate::app::types::FeatureKind;

pub fn render(ui: &mut egui::Ui, state: &mut AppState, kind: FeatureKind) {
    let palette = state.branding.palette;

    ui.vertical_centered(|ui| {
        ui.add_space(50.0);

        ui.label(
            egui::RichText::new(kind.title())
                .size(28.0)
                .strong()
                .color(palette.title),
        );
        ui.add_space(12.0);
        ui.label(egui::RichText::new(kind.blurb()).color(colors::TEXT_SECONDARY));
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Coming soon").color(colors::TEXT_SECONDARY));
        ui.add_space(24.0);

        let back_button = egui::Button::new(
            egui::RichText::new("Back").color(colors::TEXT_ON_PRIMARY),
        )
        .fill(palette.primary)
        .corner_radius(egui::CornerRadius::same(8))
        .min_size(egui::vec2(120.0, 32.0));

        if ui.add(back_button).clicked() {
            state.back_to_home();
        }
    });
}
