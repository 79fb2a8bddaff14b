use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

const MENU_BUTTON_WIDTH: f32 = 380.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.branding.palette;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.label(
            egui::RichText::new(state.branding.app_name)
                .size(30.0)
                .strong()
                .color(palette.title),
        );

        if let Some(username) = state.auth_state.user.as_ref().map(|u| u.username.clone()) {
            ui.label(
                egui::RichText::new(format!("Welcome, {}!", username))
                    .size(24.0)
                    .strong()
                    .color(palette.heading),
            );
        }
        ui.add_space(30.0);

        let mut clicked_feature = None;
        for kind in state.branding.features {
            let button = egui::Button::new(
                egui::RichText::new(kind.title())
                    .size(18.0)
                    .color(colors::TEXT_ON_PRIMARY),
            )
            .fill(palette.primary)
            .corner_radius(egui::CornerRadius::same(10))
            .min_size(egui::vec2(MENU_BUTTON_WIDTH, 52.0));

            if ui.add(button).clicked() {
                clicked_feature = Some(*kind);
            }
            ui.add_space(14.0);
        }
        if let Some(kind) = clicked_feature {
            state.open_feature(kind);
        }

        ui.add_space(10.0);

        let logout_button = egui::Button::new(
            egui::RichText::new("Logout").color(colors::TEXT_ON_PRIMARY),
        )
        .fill(colors::LOGOUT)
        .corner_radius(egui::CornerRadius::same(8))
        .min_size(egui::vec2(80.0, 32.0));

        if ui.add(logout_button).clicked() {
            state.logout();
        }
    });
}
