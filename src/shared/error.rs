//! Shared Error Types
//!
//! This module defines the error taxonomy for the credential store and the
//! session marker file.
//!
//! # Error Categories
//!
//! - `StoreError` - credential store failures (duplicate username, storage)
//! - `SessionError` - session file I/O failures
//!
//! Input validation failures (empty username, short password) are not errors:
//! they are reported as UI messages by the app shell and never leave it.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can cross the worker-thread channel.

use thiserror::Error;

/// Errors produced by the credential store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The UNIQUE constraint on `users.username` rejected an insert.
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    /// Any other database failure (file unreadable, disk full, ...).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Errors produced by the session marker file.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading, writing, or removing the session file failed.
    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_taken_display() {
        let error = StoreError::UsernameTaken("bob".to_string());
        let display = format!("{}", error);
        assert!(display.contains("bob"));
        assert!(display.contains("already taken"));
    }

    #[test]
    fn test_session_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: SessionError = io.into();
        let display = format!("{}", error);
        assert!(display.contains("session file error"));
        assert!(display.contains("denied"));
    }

    #[test]
    fn test_store_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
        assert_send_sync::<SessionError>();
    }
}
