//! Hero Chart Renderer
//! Filled price sparkline with last-point highlight and hover crosshair,
//! painted with egui.
//!
//! The renderer owns every piece of chart state: the active range, the cached
//! pixel points for the last canvas size, and the hover index. Anything that
//! invalidates the geometry (resize, range switch) recomputes the points.

use crate::charts::geometry::{
    clamp_tooltip_anchor, compute_points, nearest_index, ChartPadding, ChartPoint,
};
use crate::data::{PriceFormatter, RangeKey, Series, SeriesSet};
use egui::epaint::Mesh;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

// Colors
pub const LINE_COLOR: Color32 = Color32::from_rgb(245, 158, 11); // Amber
pub const MARKER_FILL: Color32 = Color32::from_rgb(217, 119, 6);
const MARKER_RING: Color32 = Color32::from_rgba_premultiplied(228, 202, 154, 230);
const CROSSHAIR: Color32 = Color32::from_rgba_premultiplied(198, 200, 202, 204);
const TOOLTIP_BG: Color32 = Color32::from_rgba_premultiplied(14, 21, 38, 230);

const AREA_ALPHA_TOP: f32 = 0.45;
const AREA_ALPHA_BOTTOM: f32 = 0.02;

const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 3.5;
const RING_RADIUS: f32 = 6.0;
const RING_WIDTH: f32 = 1.5;

/// Tooltip text and where it points, in canvas-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: Pos2,
}

/// Interactive chart over the three range presets.
pub struct ChartRenderer {
    series: SeriesSet,
    range: RangeKey,
    padding: ChartPadding,
    size: Option<Vec2>,
    points: Vec<ChartPoint>,
    hover: Option<usize>,
}

impl ChartRenderer {
    pub fn new(series: SeriesSet, range: RangeKey) -> Self {
        Self {
            series,
            range,
            padding: ChartPadding::default(),
            size: None,
            points: Vec::new(),
            hover: None,
        }
    }

    pub fn range(&self) -> RangeKey {
        self.range
    }

    pub fn padding(&self) -> ChartPadding {
        self.padding
    }

    pub fn active_series(&self) -> &Series {
        self.series.get(self.range)
    }

    /// Switch the active range. Always drops the hover state.
    pub fn set_range(&mut self, range: RangeKey) {
        if range != self.range {
            tracing::info!(from = %self.range, to = %range, "Switching chart range");
        }
        self.range = range;
        self.hover = None;
        self.recompute();
    }

    /// Adopt a new canvas size, recomputing the cached points if it changed.
    pub fn resize(&mut self, size: Vec2) {
        if self.size != Some(size) {
            self.size = Some(size);
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.points = match self.size {
            Some(size) => compute_points(
                &self.series.get(self.range).values,
                size.x,
                size.y,
                self.padding,
            ),
            None => Vec::new(),
        };
        if self.hover.is_some_and(|i| i >= self.points.len()) {
            self.hover = None;
        }
    }

    /// Points for the current range and canvas size.
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Set the hover index directly; out-of-range indices clear it.
    pub fn set_hover(&mut self, index: Option<usize>) {
        self.hover = index.filter(|&i| i < self.points.len());
    }

    /// Hover the point nearest to canvas-local `x`.
    pub fn hover_at(&mut self, x: f32) {
        self.set_hover(nearest_index(&self.points, x));
    }

    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    pub fn hovered_point(&self) -> Option<ChartPoint> {
        self.hover.and_then(|i| self.points.get(i).copied())
    }

    /// Tooltip for the hovered point, anchored inside the canvas.
    pub fn tooltip(&self, formatter: &PriceFormatter) -> Option<Tooltip> {
        let point = self.hovered_point()?;
        let size = self.size?;
        let (x, y) = clamp_tooltip_anchor(point.x, point.y, size.x, size.y);
        Some(Tooltip {
            text: formatter.format(point.value),
            anchor: Pos2::new(x, y),
        })
    }

    /// Draw the chart into `rect`, adopting its size first.
    pub fn render(&mut self, painter: &Painter, rect: Rect, formatter: &PriceFormatter) {
        self.resize(rect.size());
        if self.points.is_empty() {
            return;
        }

        let origin = rect.min.to_vec2();
        let height = rect.height();
        let baseline = height - self.padding.bottom;

        painter.add(Shape::mesh(self.area_mesh(origin, height)));

        let line: Vec<Pos2> = self
            .points
            .iter()
            .map(|p| Pos2::new(p.x, p.y) + origin)
            .collect();
        painter.add(Shape::line(line, Stroke::new(LINE_WIDTH, LINE_COLOR)));

        if let Some(last) = self.points.last() {
            Self::draw_marker(painter, Pos2::new(last.x, last.y) + origin);
        }

        if let Some(p) = self.hovered_point() {
            let top = Pos2::new(p.x, self.padding.top) + origin;
            let bottom = Pos2::new(p.x, baseline) + origin;
            painter.extend(Shape::dashed_line(
                &[top, bottom],
                Stroke::new(1.0, CROSSHAIR),
                4.0,
                3.0,
            ));
            Self::draw_marker(painter, Pos2::new(p.x, p.y) + origin);
        }

        if let Some(tooltip) = self.tooltip(formatter) {
            Self::draw_tooltip(painter, rect, &tooltip);
        }
    }

    /// Area under the line with a vertical alpha gradient.
    fn area_mesh(&self, origin: Vec2, height: f32) -> Mesh {
        let top = self.padding.top;
        let baseline = height - self.padding.bottom;
        let color_at = |y: f32| {
            let t = ((y - top) / (height - top)).clamp(0.0, 1.0);
            let alpha = AREA_ALPHA_TOP + (AREA_ALPHA_BOTTOM - AREA_ALPHA_TOP) * t;
            Color32::from_rgba_unmultiplied(245, 158, 11, (alpha * 255.0).round() as u8)
        };

        let mut mesh = Mesh::default();
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let base = mesh.vertices.len() as u32;
            mesh.colored_vertex(Pos2::new(a.x, a.y) + origin, color_at(a.y));
            mesh.colored_vertex(Pos2::new(b.x, b.y) + origin, color_at(b.y));
            mesh.colored_vertex(Pos2::new(b.x, baseline) + origin, color_at(baseline));
            mesh.colored_vertex(Pos2::new(a.x, baseline) + origin, color_at(baseline));
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
        mesh
    }

    fn draw_marker(painter: &Painter, center: Pos2) {
        painter.circle_filled(center, MARKER_RADIUS, MARKER_FILL);
        painter.circle_stroke(center, RING_RADIUS, Stroke::new(RING_WIDTH, MARKER_RING));
    }

    fn draw_tooltip(painter: &Painter, canvas: Rect, tooltip: &Tooltip) {
        let galley = painter.layout_no_wrap(
            tooltip.text.clone(),
            FontId::proportional(12.0),
            Color32::WHITE,
        );
        let anchor = canvas.min + tooltip.anchor.to_vec2();
        let size = galley.size() + Vec2::new(12.0, 6.0);

        // Sits above the anchor, nudged back inside the canvas.
        let mut bubble = Align2::CENTER_BOTTOM.anchor_size(anchor - Vec2::new(0.0, 8.0), size);
        bubble = bubble.translate(Vec2::new(
            (canvas.left() - bubble.left()).max(0.0) + (canvas.right() - bubble.right()).min(0.0),
            (canvas.top() - bubble.top()).max(0.0),
        ));

        painter.rect_filled(bubble, 6.0, TOOLTIP_BG);
        painter.galley(bubble.min + Vec2::new(6.0, 3.0), galley, Color32::WHITE);
    }
}
