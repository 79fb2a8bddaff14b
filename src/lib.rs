//! FinPrep - Main Library
//!
//! FinPrep is a pair of near-identical native desktop applications,
//! **Personal Finance** and **PrepPal**, built with egui/eframe on top of a
//! shared application shell. Each app offers username/password signup and
//! login backed by a local SQLite database, persists the active session to a
//! flat file in the per-application data directory, and navigates between a
//! handful of feature screens.
//!
//! # Module Structure
//!
//! The library is organized into four modules:
//!
//! - **`shared`** - Error types used across the crate
//! - **`store`** - The SQLite credential store (signup/login queries)
//! - **`session`** - The on-disk session marker file
//! - **`app`** - The egui application shell: state machine, views, theme,
//!   and the per-app branding consumed by the two binary entry points
//!
//! # Usage
//!
//! ```rust,no_run
//! use finprep::app::{branding, ShellApp};
//!
//! // Each binary picks its branding and runs the shared shell:
//! // cargo run --bin personal-finance
//! // cargo run --bin preppal
//! let app = ShellApp::new(branding::personal_finance());
//! ```
//!
//! # Concurrency
//!
//! The UI is single-threaded immediate mode. Database work runs on
//! short-lived worker threads that own their own Tokio runtime and report
//! back over an `mpsc` channel polled once per frame.

/// Shared error types
pub mod shared;

/// SQLite credential store
pub mod store;

/// Session marker file
pub mod session;

/// egui application shell
pub mod app;
