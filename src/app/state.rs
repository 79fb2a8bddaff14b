use std::sync::mpsc::{channel, Receiver};

use crate::app::auth::{self, AuthOutcome, AuthState};
use crate::app::branding::Branding;
use crate::app::config::Config;
use crate::app::types::{AppView, FeatureKind, UserInfo};

/// Central application state shared across egui views.
pub struct AppState {
    pub branding: Branding,
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,
    pub username_input: String,
    pub password_input: String,
    pub is_signup_mode: bool,
    pub auth_result: Option<Receiver<Result<AuthOutcome, String>>>,
}

impl AppState {
    /// Build the state for one application, resuming a saved session if the
    /// session file is present.
    pub fn new(branding: Branding) -> Self {
        let config = Config::new(&branding);
        Self::with_config(branding, config)
    }

    /// Like [`AppState::new`] with an explicit data directory (tests).
    pub fn with_config(branding: Branding, config: Config) -> Self {
        let mut state = Self {
            branding,
            config,
            auth_state: AuthState::new(),
            current_view: AppView::Auth,
            username_input: String::new(),
            password_input: String::new(),
            is_signup_mode: false,
            auth_result: None,
        };

        // The only startup guard: is a session file present?
        match state.config.session_file().load() {
            Ok(Some(username)) => {
                tracing::info!(username = %username, "resuming saved session");
                state.auth_state.authenticated = true;
                state.auth_state.user = Some(UserInfo { username });
                state.current_view = AppView::Home;
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to read session file");
            }
        }

        state
    }

    /// Poll the pending background auth operation, if any.
    pub fn check_auth_result(&mut self) {
        let Some(ref rx) = self.auth_result else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };

        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok(AuthOutcome::LoggedIn(user)) => {
                self.auth_state.authenticated = true;
                self.auth_state.user = Some(user);
                self.auth_state.clear_messages();
                self.current_view = AppView::Home;
                self.username_input.clear();
                self.password_input.clear();
                self.is_signup_mode = false;
            }
            Ok(AuthOutcome::SignedUp { username }) => {
                // Back to the login form, username prefilled.
                self.is_signup_mode = false;
                self.username_input = username;
                self.password_input.clear();
                self.auth_state
                    .set_notice("Account created. Please log in.".to_string());
            }
            Err(e) => {
                self.auth_state.set_error(e);
            }
        }
    }

    pub fn handle_login(&mut self) {
        let username = self.username_input.trim().to_string();
        let password = self.password_input.trim().to_string();

        if username.is_empty() || password.is_empty() {
            self.auth_state
                .set_error("Username and password are required".to_string());
            return;
        }

        self.spawn_auth(move |config| auth::login(config, username, password));
    }

    pub fn handle_signup(&mut self) {
        let username = self.username_input.trim().to_string();
        let password = self.password_input.trim().to_string();

        if username.is_empty() {
            self.auth_state
                .set_error("Username is required".to_string());
            return;
        }

        if password.len() < 6 {
            self.auth_state
                .set_error("Password must be at least 6 characters.".to_string());
            return;
        }

        self.spawn_auth(move |config| auth::signup(config, username, password));
    }

    fn spawn_auth<F>(&mut self, operation: F)
    where
        F: FnOnce(&Config) -> Result<AuthOutcome, String> + Send + 'static,
    {
        self.auth_state.loading = true;
        self.auth_state.clear_messages();

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(operation(&config));
        });

        self.auth_result = Some(rx);
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.config.session_file().clear() {
            tracing::warn!(error = %e, "failed to clear session file");
        }

        self.auth_state = AuthState::new();
        self.current_view = AppView::Auth;
        self.username_input.clear();
        self.password_input.clear();
        self.is_signup_mode = false;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_signup_mode = !self.is_signup_mode;
        self.auth_state.clear_messages();
        self.password_input.clear();
    }

    pub fn open_feature(&mut self, kind: FeatureKind) {
        self.current_view = AppView::Feature(kind);
    }

    pub fn back_to_home(&mut self) {
        self.current_view = AppView::Home;
    }
}
