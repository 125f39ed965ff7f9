//! Font Setup
//! egui's bundled fonts have no Arabic-script glyphs, so Persian digits, the
//! currency label and the range labels fall back to DejaVu Sans.

use egui::{FontData, FontDefinitions, FontFamily};
use std::sync::Arc;

const FALLBACK_FONT: &str = "dejavu_sans";

/// Default definitions plus the Persian-capable fallback font.
pub fn font_definitions() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        FALLBACK_FONT.to_owned(),
        Arc::new(FontData::from_static(include_bytes!(
            "../../assets/fonts/DejaVuSans.ttf"
        ))),
    );
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FALLBACK_FONT.to_owned());
    }
    fonts
}

pub fn install_fonts(ctx: &egui::Context) {
    ctx.set_fonts(font_definitions());
    tracing::debug!(font = FALLBACK_FONT, "Installed fallback font");
}
