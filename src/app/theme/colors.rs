//! Color Constants and Per-App Palettes
//!
//! Both applications share one light card-on-tinted-window scheme; the
//! `Palette` struct carries the hues that differ between them (blue for
//! Personal Finance, green for PrepPal).

use egui::Color32;

/// Error message text - Red
pub const ERROR: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Success/notice message text - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

/// Logout button background - Red
pub const LOGOUT: Color32 = Color32::from_rgb(0xFF, 0x00, 0x00);

/// Card drop shadow - Blue gray
pub const CARD_SHADOW: Color32 = Color32::from_rgb(0xB0, 0xBE, 0xC5);

/// Text input background - White
pub const FIELD_BG: Color32 = Color32::WHITE;

/// Text on filled buttons - White
pub const TEXT_ON_PRIMARY: Color32 = Color32::WHITE;

/// Primary text on light backgrounds
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x21, 0x21);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x61, 0x61, 0x61);

/// The hues that differ between the two applications.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Window background tint
    pub window_bg: Color32,
    /// Card background
    pub card_bg: Color32,
    /// App title text (also the top bar background)
    pub title: Color32,
    /// Welcome heading text
    pub heading: Color32,
    /// Primary action button background
    pub primary: Color32,
    /// Primary action button hover background
    pub primary_hover: Color32,
    /// Secondary action button background (the signup button)
    pub accent: Color32,
    /// Text-link buttons
    pub link: Color32,
}

/// Personal Finance - the blue scheme.
pub const PERSONAL_FINANCE: Palette = Palette {
    window_bg: Color32::from_rgb(0xE3, 0xF2, 0xFD),
    card_bg: Color32::WHITE,
    title: Color32::from_rgb(0x0D, 0x47, 0xA1),
    heading: Color32::from_rgb(0x00, 0x33, 0x66),
    primary: Color32::from_rgb(0x15, 0x65, 0xC0),
    primary_hover: Color32::from_rgb(0x0D, 0x47, 0xA1),
    accent: Color32::from_rgb(0x2E, 0x7D, 0x32),
    link: Color32::from_rgb(0x15, 0x65, 0xC0),
};

/// PrepPal - the green scheme.
pub const PREPPAL: Palette = Palette {
    window_bg: Color32::from_rgb(0xE8, 0xF5, 0xE9),
    card_bg: Color32::WHITE,
    title: Color32::from_rgb(0x1B, 0x5E, 0x20),
    heading: Color32::from_rgb(0x33, 0x69, 0x1E),
    primary: Color32::from_rgb(0x2E, 0x7D, 0x32),
    primary_hover: Color32::from_rgb(0x1B, 0x5E, 0x20),
    accent: Color32::from_rgb(0x15, 0x65, 0xC0),
    link: Color32::from_rgb(0x2E, 0x7D, 0x32),
};
