//! End-to-end auth flow (signup, duplicate rejection, login, session file,
//! logout) driven through the same worker functions the UI spawns.

use finprep::app::auth::{self, AuthOutcome};
use finprep::app::{branding, AppState, AppView, Config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn test_config() -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    let config = Config::with_data_dir(tmp.path());
    (tmp, config)
}

#[test]
fn signup_login_logout_scenario() {
    let (_tmp, config) = test_config();
    let session = config.session_file();

    // signup("bob", "secret1") succeeds
    let outcome = auth::signup(&config, "bob".to_string(), "secret1".to_string()).unwrap();
    assert!(matches!(outcome, AuthOutcome::SignedUp { ref username } if username == "bob"));
    // Signup alone creates no session.
    assert_eq!(session.load().unwrap(), None);

    // signup("bob", "other12") is rejected as a duplicate
    let err = auth::signup(&config, "bob".to_string(), "other12".to_string()).unwrap_err();
    assert_eq!(err, auth::MSG_USERNAME_TAKEN);

    // login("bob", "secret1") succeeds and writes the session file
    let outcome = auth::login(&config, "bob".to_string(), "secret1".to_string()).unwrap();
    assert!(matches!(outcome, AuthOutcome::LoggedIn(ref user) if user.username == "bob"));
    assert_eq!(session.load().unwrap(), Some("bob".to_string()));
    assert_eq!(std::fs::read_to_string(session.path()).unwrap().trim(), "bob");

    // logout removes the session file
    let mut state = AppState::with_config(branding::personal_finance(), config.clone());
    assert_eq!(state.current_view, AppView::Home);
    state.logout();
    assert!(!session.path().exists());

    // login("bob", "wrongpw") is rejected with no session file created
    let err = auth::login(&config, "bob".to_string(), "wrongpw".to_string()).unwrap_err();
    assert_eq!(err, auth::MSG_INVALID_CREDENTIALS);
    assert_eq!(session.load().unwrap(), None);
}

#[test]
fn fresh_start_shows_login_then_resumes_after_login() {
    let (_tmp, config) = test_config();

    // No session file: the shell starts at the auth view.
    let state = AppState::with_config(branding::preppal(), config.clone());
    assert_eq!(state.current_view, AppView::Auth);

    auth::signup(&config, "alice".to_string(), "hunter22".to_string()).unwrap();
    auth::login(&config, "alice".to_string(), "hunter22".to_string()).unwrap();

    // A later launch resumes straight to the main menu.
    let resumed = AppState::with_config(branding::preppal(), config);
    assert_eq!(resumed.current_view, AppView::Home);
    assert_eq!(
        resumed.auth_state.user.as_ref().map(|u| u.username.as_str()),
        Some("alice")
    );
}
