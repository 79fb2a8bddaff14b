//! # Credential Store Module
//!
//! This module wraps the single-table SQLite credential store behind the
//! three operations the auth flow needs: validate, exists, insert.
//!
//! ## Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS users (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     username TEXT UNIQUE NOT NULL,
//!     password TEXT NOT NULL
//! )
//! ```
//!
//! The `password` column holds a lowercase hex SHA-256 digest of the raw
//! password bytes. The digest is unsalted; the stored format is shared with
//! earlier releases and is kept as-is.
//!
//! ## Lifecycle
//!
//! A store is opened per user action (one short-lived connection per login or
//! signup attempt) and dropped when the action completes. Rows are created on
//! signup and never updated or deleted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use finprep::store::CredentialStore;
//!
//! # async fn example() -> Result<(), finprep::shared::StoreError> {
//! let store = CredentialStore::open("app-data/database.db").await?;
//! store.insert("alice", "hunter22").await?;
//! assert!(store.validate("alice", "hunter22").await?);
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use sha2::{Digest, Sha256};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

use crate::shared::StoreError;

/// Result type for credential store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLite-backed credential store.
///
/// Holds the connection pool for one short-lived store instance. Username
/// uniqueness is enforced by the UNIQUE constraint at the storage layer; the
/// constraint is the sole source of truth for duplicate detection.
#[derive(Debug)]
pub struct CredentialStore {
    pool: SqlitePool,
}

impl CredentialStore {
    /// Open or create the credential database at the given path.
    ///
    /// Creates the parent directory and the database file if missing, and
    /// ensures the `users` table exists. Idempotent.
    pub async fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Check a username/password pair against the store.
    ///
    /// Hashes the password and queries for a row matching both the username
    /// and the hash exactly. Returns whether any row matched. No timing
    /// mitigation and no rate limiting.
    pub async fn validate(&self, username: &str, password: &str) -> Result<bool> {
        let hashed = hash_password(password);

        let row = sqlx::query("SELECT id FROM users WHERE username = ? AND password = ?")
            .bind(username)
            .bind(&hashed)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Check whether a username is already registered.
    pub async fn exists(&self, username: &str) -> Result<bool> {
        let row = sqlx::query("SELECT id FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    /// Register a new user.
    ///
    /// A single atomic insert-or-fail: the UNIQUE constraint rejects
    /// duplicates even when two signups race past an `exists` pre-check.
    pub async fn insert(&self, username: &str, password: &str) -> Result<()> {
        let hashed = hash_password(password);

        let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(&hashed)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(StoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Hash a password as a lowercase hex SHA-256 digest of the raw bytes.
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    async fn test_store() -> (TempDir, CredentialStore) {
        let tmp = TempDir::new().unwrap();
        let store = CredentialStore::open(tmp.path().join("database.db"))
            .await
            .unwrap();
        (tmp, store)
    }

    #[tokio::test]
    async fn open_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let db_path = tmp.path().join("database.db");

        let first = CredentialStore::open(&db_path).await.unwrap();
        first.insert("alice", "hunter22").await.unwrap();
        drop(first);

        // Re-opening must keep existing rows and not fail on CREATE TABLE.
        let second = CredentialStore::open(&db_path).await.unwrap();
        assert!(second.validate("alice", "hunter22").await.unwrap());
    }

    #[tokio::test]
    async fn insert_then_validate() {
        let (_tmp, store) = test_store().await;

        store.insert("alice", "hunter22").await.unwrap();
        assert!(store.validate("alice", "hunter22").await.unwrap());
        assert!(!store.validate("alice", "wrong_pw").await.unwrap());
    }

    #[tokio::test]
    async fn validate_unknown_user_is_false() {
        let (_tmp, store) = test_store().await;

        assert!(!store.validate("ghost", "anything").await.unwrap());
    }

    #[tokio::test]
    async fn exists_tracks_inserts() {
        let (_tmp, store) = test_store().await;

        assert!(!store.exists("alice").await.unwrap());
        store.insert("alice", "hunter22").await.unwrap();
        assert!(store.exists("alice").await.unwrap());
        assert!(!store.exists("never_registered").await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let (_tmp, store) = test_store().await;

        store.insert("bob", "secret1").await.unwrap();
        let result = store.insert("bob", "other12").await;

        match result {
            Err(StoreError::UsernameTaken(name)) => assert_eq!(name, "bob"),
            other => panic!("expected UsernameTaken, got {:?}", other),
        }

        // The first row is untouched.
        assert!(store.validate("bob", "secret1").await.unwrap());
        assert!(!store.validate("bob", "other12").await.unwrap());
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_password("secret1"), hash_password("secret1"));
    }

    #[test]
    fn hash_differs_between_passwords() {
        assert_ne!(hash_password("secret1"), hash_password("secret2"));
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        let digest = hash_password("password");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        // Known SHA-256 vector.
        assert_eq!(
            digest,
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }
}
