//! Hero Chart - landing page price chart & interactive sections
//!
//! Desktop rendition of a gold-trading landing page: range-switchable price
//! sparkline with hover tooltip, trade tabs, animated counters and more.

mod charts;
mod config;
mod data;
mod gui;

use anyhow::{Context, Result};
use config::AppConfig;
use eframe::egui;
use gui::HeroApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    tracing::info!(range = %config.initial_range, digits = ?config.digits, "Starting Hero Chart");

    // Configure native options
    let [width, height] = config.window_size;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Hero Chart"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Hero Chart",
        options,
        Box::new(|cc| Ok(Box::new(HeroApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
