use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::AppView;

pub mod auth_view;
pub mod feature_view;
pub mod home_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let palette = state.branding.palette;

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame(&palette))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::TEXT_ON_PRIMARY,
                    egui::RichText::new(state.branding.app_name).size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.auth_state.authenticated {
                        if let Some(ref user) = state.auth_state.user {
                            ui.colored_label(
                                colors::TEXT_ON_PRIMARY,
                                format!("@{}", user.username),
                            );
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let palette = state.branding.palette;

    egui::CentralPanel::default()
        .frame(styles::main_panel_frame(&palette))
        .show(ctx, |ui| match state.current_view {
            AppView::Auth => auth_view::render(ui, state),
            AppView::Home => home_view::render(ui, state),
            AppView::Feature(kind) => feature_view::render(ui, state, kind),
        });
}
