//! Shared types used across the store, session, and app modules.

pub mod error;

pub use error::{SessionError, StoreError};
