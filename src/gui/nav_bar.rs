//! Navigation Bar
//! Top bar with in-page anchor links and the status line.

use egui::{Color32, RichText};

/// In-page links as `(caption, href)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Chart", "#hero"),
    ("Trade", "#trade"),
    ("Stats", "#stats"),
    ("How it works", "#steps"),
    ("Licenses", "#licenses"),
];

/// Top navigation bar.
pub struct NavBar {
    pub status: String,
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the navigation bar
    pub fn show(&mut self, ui: &mut egui::Ui) -> NavAction {
        let mut action = NavAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("🪙 Hero Gold")
                    .size(20.0)
                    .color(Color32::from_rgb(245, 158, 11)),
            );
            ui.add_space(20.0);

            for (caption, href) in NAV_LINKS {
                if ui.link(RichText::new(caption).size(14.0)).clicked() {
                    action = NavAction::Navigate(href.to_string());
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let status_color = if self.status.contains("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else if self.status.contains("Exported") {
                    Color32::from_rgb(40, 167, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&self.status).size(11.0).color(status_color));
            });
        });

        action
    }

    /// Set status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by the navigation bar
#[derive(Debug, Clone, PartialEq)]
pub enum NavAction {
    None,
    /// Scroll to the section behind an `#anchor` href.
    Navigate(String),
}
