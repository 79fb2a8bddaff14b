//! egui Application Shell
//!
//! The shared shell behind both desktop binaries. Each binary builds its
//! `Branding` and hands it to [`ShellApp`]; the auth flow, session resume,
//! view routing, and theme are common code.
//!
//! # Module Structure
//!
//! - **`branding`** - per-app names, feature lists, palettes
//! - **`config`** - data directory and file path resolution
//! - **`auth`** - auth UI state and background login/signup workers
//! - **`types`** - view state machine and feature catalog
//! - **`state`** - central `AppState` mutated by the views
//! - **`theme`** - colors and styling helpers
//! - **`views`** - top bar, auth/home/feature screens

pub mod auth;
pub mod branding;
pub mod config;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use auth::{AuthOutcome, AuthState};
pub use branding::Branding;
pub use config::Config;
pub use state::AppState;
pub use types::{AppView, FeatureKind, UserInfo};

/// The eframe application wrapper shared by both binaries.
pub struct ShellApp {
    state: AppState,
}

impl ShellApp {
    pub fn new(branding: Branding) -> Self {
        Self {
            state: AppState::new(branding),
        }
    }

    /// Build the shell over an explicit config (tests and tooling).
    pub fn with_config(branding: Branding, config: Config) -> Self {
        Self {
            state: AppState::with_config(branding, config),
        }
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_auth_result();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Keep polling while a background auth operation is pending.
        if self.state.auth_result.is_some() {
            ctx.request_repaint();
        }
    }
}
