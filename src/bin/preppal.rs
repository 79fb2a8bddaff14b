/**
 * PrepPal - Main Entry Point
 *
 * Native desktop entry point for the PrepPal application. Identical to the
 * Personal Finance binary apart from the branding it builds.
 */
use eframe::egui;
use finprep::app::{branding, theme, ShellApp};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let branding = branding::preppal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([480.0, 600.0])
            .with_maximized(true),
        ..Default::default()
    };

    eframe::run_native(
        branding.window_title,
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx, &branding.palette);
            Ok(Box::new(ShellApp::new(branding)))
        }),
    )
}
