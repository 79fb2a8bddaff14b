/**
 * Authentication Module
 *
 * Auth UI state plus the blocking worker functions for login/signup. The
 * workers run on a spawned thread, own their own Tokio runtime, and drive the
 * async credential store; the UI thread polls the result over a channel.
 */

use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::types::UserInfo;
use crate::store::CredentialStore;

/// UI message shown when login credentials do not match
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

/// UI message shown when a signup username is already registered
pub const MSG_USERNAME_TAKEN: &str = "Username already taken.";

/// Authentication state
#[derive(Debug, Clone)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserInfo>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticated: false,
            user: None,
            error: None,
            notice: None,
            loading: false,
        }
    }
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.error = None;
    }
}

/// Outcome of a background auth operation.
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Login succeeded; the session file has been written (best-effort).
    LoggedIn(UserInfo),
    /// Signup succeeded; the user still has to log in.
    SignedUp { username: String },
}

/// Log in with username and password.
///
/// Validates the pair against the credential store and, on success, records
/// the session. A session write failure is logged and otherwise ignored, so
/// the login still succeeds in memory.
pub fn login(config: &Config, username: String, password: String) -> Result<AuthOutcome, String> {
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let store = open_store(config).await?;

        let valid = store
            .validate(&username, &password)
            .await
            .map_err(|e| format!("Storage error: {}", e))?;

        if !valid {
            tracing::info!(username = %username, "login rejected");
            return Err(MSG_INVALID_CREDENTIALS.to_string());
        }

        if let Err(e) = config.session_file().save(&username) {
            tracing::warn!(error = %e, "failed to save session file");
        }

        tracing::info!(username = %username, "login succeeded");
        Ok(AuthOutcome::LoggedIn(UserInfo { username }))
    })
}

/// Sign up a new user.
///
/// The `exists` pre-check produces the friendly duplicate message; the insert
/// itself is atomic, so a signup that loses a race past the pre-check still
/// surfaces as the same message.
pub fn signup(config: &Config, username: String, password: String) -> Result<AuthOutcome, String> {
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let store = open_store(config).await?;

        let taken = store
            .exists(&username)
            .await
            .map_err(|e| format!("Storage error: {}", e))?;
        if taken {
            return Err(MSG_USERNAME_TAKEN.to_string());
        }

        match store.insert(&username, &password).await {
            Ok(()) => {
                tracing::info!(username = %username, "signup succeeded");
                Ok(AuthOutcome::SignedUp { username })
            }
            Err(crate::shared::StoreError::UsernameTaken(_)) => {
                Err(MSG_USERNAME_TAKEN.to_string())
            }
            Err(e) => Err(format!("Storage error: {}", e)),
        }
    })
}

async fn open_store(config: &Config) -> Result<CredentialStore, String> {
    CredentialStore::open(config.db_path()).await.map_err(|e| {
        tracing::error!(error = %e, "failed to open credential store");
        format!("Storage error: {}", e)
    })
}
