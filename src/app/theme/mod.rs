//! Theme Module
//!
//! Color constants, the per-app `Palette`, and styling helpers shared by all
//! views.
//!
//! # Usage
//!
//! ```rust,no_run
//! use finprep::app::theme::{colors, styles};
//!
//! # fn example(ctx: &eframe::egui::Context) {
//! // Apply an app's palette once at startup
//! styles::apply_global_theme(ctx, &colors::PERSONAL_FINANCE);
//! # }
//! ```

pub mod colors;
pub mod styles;

pub use colors::Palette;
pub use styles::apply_global_theme;
