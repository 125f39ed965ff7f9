//! Chart Geometry
//! Maps a series onto pixel coordinates and answers hover lookups.
//!
//! Pure functions shared by the on-screen renderer and the PNG export, so both
//! draw the exact same shape for a given size.

/// Inset between the canvas edge and the plotted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPadding {
    /// Left and right.
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ChartPadding {
    fn default() -> Self {
        Self {
            x: 16.0,
            top: 8.0,
            bottom: 10.0,
        }
    }
}

/// A series entry projected into canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f32,
    pub y: f32,
    pub value: f64,
}

/// Project `values` onto a `width` x `height` canvas.
///
/// X is linear in the index across `width - 2 * padding.x`; Y maps the series
/// minimum to the bottom padding line and the maximum to the top one. Returns
/// nothing for an empty series or a degenerate canvas.
pub fn compute_points(
    values: &[f64],
    width: f32,
    height: f32,
    padding: ChartPadding,
) -> Vec<ChartPoint> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max - min == 0.0 { 1.0 } else { max - min };

    let inner_width = width - padding.x * 2.0;
    let step_x = if values.len() > 1 {
        inner_width / (values.len() - 1) as f32
    } else {
        inner_width
    };
    let scale_y = f64::from(height - padding.top - padding.bottom) / span;
    let baseline = height - padding.bottom;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| ChartPoint {
            x: padding.x + i as f32 * step_x,
            y: baseline - ((value - min) * scale_y) as f32,
            value,
        })
        .collect()
}

/// Index of the point horizontally closest to `x`; the first one wins ties.
pub fn nearest_index(points: &[ChartPoint], x: f32) -> Option<usize> {
    let mut nearest = None;
    let mut min_dist = f32::INFINITY;
    for (idx, p) in points.iter().enumerate() {
        let dist = (p.x - x).abs();
        if dist < min_dist {
            min_dist = dist;
            nearest = Some(idx);
        }
    }
    nearest
}

/// Keep the tooltip anchor inside the canvas.
pub fn clamp_tooltip_anchor(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    (x.min(width - 8.0).max(8.0), y.min(height - 8.0).max(16.0))
}
