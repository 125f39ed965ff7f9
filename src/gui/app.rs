//! Hero Chart Main Application
//! Navigation bar on top, scrollable landing page below.

use crate::charts::{ChartRenderer, StaticChartRenderer};
use crate::config::AppConfig;
use crate::gui::fonts::install_fonts;
use crate::gui::{ChartViewer, ChartViewerAction, LandingPage, NavAction, NavBar, Section};
use std::path::Path;

/// Main application window.
pub struct HeroApp {
    config: AppConfig,
    nav_bar: NavBar,
    chart_viewer: ChartViewer,
    landing: LandingPage,
}

impl HeroApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        install_fonts(&cc.egui_ctx);
        Self::from_config(config)
    }

    fn from_config(config: AppConfig) -> Self {
        let renderer = ChartRenderer::new(config.series.clone(), config.initial_range);
        Self {
            nav_bar: NavBar::new(),
            chart_viewer: ChartViewer::new(renderer, config.price_formatter()),
            landing: LandingPage::new(&config),
            config,
        }
    }

    /// Handle an anchor link; unknown targets are ignored.
    fn handle_navigate(&mut self, href: &str) {
        match Section::from_href(href) {
            Some(section) => {
                tracing::debug!(href, "Scrolling to section");
                self.landing.scroll_to(section);
            }
            None => tracing::debug!(href, "No section for link"),
        }
    }

    /// Handle PNG export of the active range
    fn handle_export_png(&mut self) {
        let range = self.chart_viewer.renderer().range();

        // Ask user for output location
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(format!("hero_chart_{}.png", range))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        self.export_to(&output_path);
    }

    fn export_to(&mut self, path: &Path) {
        let renderer = self.chart_viewer.renderer();
        let [width, height] = self.config.export_size;

        match StaticChartRenderer::export_png(
            renderer.active_series(),
            path,
            width,
            height,
            renderer.padding(),
        ) {
            Ok(()) => {
                self.nav_bar
                    .set_status(&format!("Exported {}", path.display()));
                if self.config.open_after_export {
                    if let Err(e) = open::that(path) {
                        tracing::warn!(error = %e, "Could not open exported image");
                    }
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Chart export failed");
                self.nav_bar.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for HeroApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panel - Navigation
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            match self.nav_bar.show(ui) {
                NavAction::Navigate(href) => self.handle_navigate(&href),
                NavAction::None => {}
            }
            ui.add_space(6.0);
        });

        // Central panel - Landing page
        egui::CentralPanel::default().show(ctx, |ui| {
            let action = self.landing.show(ui, &mut self.chart_viewer);
            match action {
                ChartViewerAction::ExportPng => self.handle_export_png(),
                ChartViewerAction::None => {}
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_schedules_scroll_for_known_sections() {
        let mut app = HeroApp::from_config(AppConfig::default());
        app.handle_navigate("#faq");
        assert_eq!(app.landing.pending_scroll(), None);
        app.handle_navigate("#licenses");
        assert_eq!(app.landing.pending_scroll(), Some(Section::Licenses));
    }

    #[test]
    fn export_writes_png_and_reports_status() {
        let config = AppConfig {
            open_after_export: false,
            export_size: [240, 120],
            ..AppConfig::default()
        };
        let mut app = HeroApp::from_config(config);
        let path =
            std::env::temp_dir().join(format!("hero_chart_app_{}.png", std::process::id()));
        app.export_to(&path);
        let written = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(&written[1..4], b"PNG");
        assert!(app.nav_bar.status.starts_with("Exported"));
    }

    #[test]
    fn export_failure_is_reported_not_raised() {
        let config = AppConfig {
            open_after_export: false,
            ..AppConfig::default()
        };
        let mut app = HeroApp::from_config(config);
        let path = std::env::temp_dir()
            .join("hero_chart_missing_dir")
            .join("nested")
            .join("out.png");
        app.export_to(&path);
        assert!(app.nav_bar.status.starts_with("Error"));
    }

    #[test]
    fn initial_range_comes_from_config() {
        let config = AppConfig {
            initial_range: crate::data::RangeKey::Month,
            ..AppConfig::default()
        };
        let app = HeroApp::from_config(config);
        assert_eq!(
            app.chart_viewer.renderer().range(),
            crate::data::RangeKey::Month
        );
    }
}
