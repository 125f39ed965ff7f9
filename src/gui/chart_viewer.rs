//! Chart Viewer Widget
//! Hero card with the price chart, range pills and export button.

use crate::charts::{ChartRenderer, LINE_COLOR, MARKER_FILL};
use crate::data::{PriceFormatter, RangeKey};
use egui::{Color32, RichText, Sense};

/// Chart card configuration
const CHART_HEIGHT: f32 = 220.0;
const PILL_ROUNDING: f32 = 12.0;
const MUTED_PILL: Color32 = Color32::from_rgb(51, 65, 85);

/// Actions triggered from the chart card
#[derive(Debug, Clone, PartialEq)]
pub enum ChartViewerAction {
    None,
    ExportPng,
}

/// Hero chart card. Owns the renderer; the canvas is re-measured every frame.
pub struct ChartViewer {
    renderer: ChartRenderer,
    formatter: PriceFormatter,
}

impl ChartViewer {
    pub fn new(renderer: ChartRenderer, formatter: PriceFormatter) -> Self {
        Self {
            renderer,
            formatter,
        }
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    /// Price of `amount` units at the latest value of the active range.
    pub fn quote(&self, amount: f64) -> Option<String> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let latest = self.renderer.active_series().latest()?;
        Some(self.formatter.format(latest * amount))
    }

    /// Draw the chart card
    pub fn show(&mut self, ui: &mut egui::Ui) -> ChartViewerAction {
        let mut action = ChartViewerAction::None;

        egui::Frame::none()
            .rounding(8.0)
            .stroke(egui::Stroke::new(1.0, LINE_COLOR.gamma_multiply(0.4)))
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                // Title row: range label, latest price, export
                ui.horizontal(|ui| {
                    let series = self.renderer.active_series();
                    ui.label(RichText::new(&series.label).size(14.0).color(Color32::GRAY));
                    if let Some(latest) = series.latest() {
                        ui.label(
                            RichText::new(self.formatter.format(latest))
                                .size(18.0)
                                .strong()
                                .color(LINE_COLOR),
                        );
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🖼 Export PNG").clicked() {
                            action = ChartViewerAction::ExportPng;
                        }
                    });
                });

                ui.add_space(8.0);

                // Range pills
                ui.horizontal(|ui| {
                    for range in RangeKey::ALL {
                        if self.range_pill(ui, range).clicked() {
                            self.renderer.set_range(range);
                        }
                    }
                });

                ui.add_space(8.0);

                self.draw_canvas(ui);
            });

        action
    }

    fn range_pill(&self, ui: &mut egui::Ui, range: RangeKey) -> egui::Response {
        let active = self.renderer.range() == range;
        let (fill, text) = if active {
            (MARKER_FILL, Color32::WHITE)
        } else {
            (MUTED_PILL, Color32::LIGHT_GRAY)
        };
        let pill = egui::Button::new(RichText::new(range.caption()).size(12.0).color(text))
            .fill(fill)
            .rounding(PILL_ROUNDING)
            .selected(active)
            .min_size(egui::vec2(48.0, 22.0));
        ui.add(pill)
    }

    /// Canvas region: pointer (or touch) position drives the hover index.
    fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let rect = response.rect;

        self.renderer.resize(rect.size());
        match response.hover_pos() {
            Some(pos) => self.renderer.hover_at(pos.x - rect.left()),
            None => self.renderer.clear_hover(),
        }

        self.renderer.render(&painter, rect, &self.formatter);
    }
}
