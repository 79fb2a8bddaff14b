use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::{colors, styles};

const FIELD_WIDTH: f32 = 350.0;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let palette = state.branding.palette;
    let available_rect = ui.available_rect_before_wrap();

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let card_height = if state.is_signup_mode { 320.0 } else { 340.0 };
            let top_space = (available_rect.height() - card_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.set_max_width(FIELD_WIDTH + 60.0);

            styles::card_frame(&palette).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let (title, title_color) = if state.is_signup_mode {
                        ("Create Account", palette.accent)
                    } else {
                        (state.branding.app_name, palette.title)
                    };
                    ui.label(egui::RichText::new(title).size(30.0).strong().color(title_color));
                    ui.add_space(20.0);

                    let username_response = ui.add_sized(
                        [FIELD_WIDTH, 28.0],
                        egui::TextEdit::singleline(&mut state.username_input)
                            .hint_text("Username")
                            .text_color(colors::TEXT_PRIMARY),
                    );
                    ui.add_space(8.0);

                    let password_response = ui.add_sized(
                        [FIELD_WIDTH, 28.0],
                        egui::TextEdit::singleline(&mut state.password_input)
                            .hint_text("Password")
                            .password(true)
                            .text_color(colors::TEXT_PRIMARY),
                    );
                    ui.add_space(16.0);

                    // Enter moves from the username field to the password
                    // field; Enter in the password field submits.
                    let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter_pressed && username_response.lost_focus() {
                        password_response.request_focus();
                    }
                    let submitted = enter_pressed && password_response.lost_focus();

                    let (action_label, action_fill) = if state.is_signup_mode {
                        ("Signup", palette.accent)
                    } else {
                        ("Login", palette.primary)
                    };

                    let action_button = egui::Button::new(
                        egui::RichText::new(action_label).color(colors::TEXT_ON_PRIMARY),
                    )
                    .fill(action_fill)
                    .corner_radius(egui::CornerRadius::same(8))
                    .min_size(egui::vec2(FIELD_WIDTH, 36.0));

                    if ui.add(action_button).clicked() || submitted {
                        state.auth_state.clear_messages();
                        if state.is_signup_mode {
                            state.handle_signup();
                        } else {
                            state.handle_login();
                        }
                    }
                    ui.add_space(8.0);

                    let toggle_label = if state.is_signup_mode {
                        "Already have an account? Login"
                    } else {
                        "Create an account"
                    };
                    let toggle_button = egui::Button::new(
                        egui::RichText::new(toggle_label).color(palette.link),
                    )
                    .fill(egui::Color32::TRANSPARENT);
                    if ui.add(toggle_button).clicked() {
                        state.toggle_auth_mode();
                    }

                    if let Some(ref error) = state.auth_state.error {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(error).color(colors::ERROR));
                    } else if let Some(ref notice) = state.auth_state.notice {
                        ui.add_space(8.0);
                        ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
                    }

                    if state.auth_state.loading {
                        ui.add_space(10.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("Loading...").color(colors::TEXT_SECONDARY),
                            );
                            ui.spinner();
                        });
                    }
                });
            });
        });
    });
}
