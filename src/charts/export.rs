//! Static Chart Export
//! Draws the hero chart onto a plotters bitmap and encodes it as PNG.
//!
//! Uses the same point geometry as the on-screen renderer so the exported
//! image matches what the user sees for the same size.

use crate::charts::geometry::{compute_points, ChartPadding, ChartPoint};
use crate::data::Series;
use image::{DynamicImage, ImageFormat, RgbImage};
use plotters::prelude::*;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

// Colors (RGB)
const BACKGROUND: RGBColor = RGBColor(15, 23, 42);
const LINE: RGBColor = RGBColor(245, 158, 11); // Amber
const MARKER: RGBColor = RGBColor(217, 119, 6);
const RING: RGBColor = RGBColor(253, 224, 171);

const AREA_ALPHA_TOP: f64 = 0.45;
const AREA_ALPHA_BOTTOM: f64 = 0.02;

// Pixel sizes; plotters takes integers, the screen uses 3.5 / 6 / 1.5.
const MARKER_RADIUS: i32 = 3;
const RING_RADIUS: i32 = 6;
const RING_WIDTH: u32 = 1;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Nothing to export: series \"{0}\" is empty")]
    EmptySeries(String),
    #[error("Invalid image size {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Height of the polyline at column `x`, if `x` lies within it.
fn line_y_at(points: &[ChartPoint], x: f32) -> Option<f32> {
    if let [only] = points {
        return (x.round() == only.x.round()).then_some(only.y);
    }
    points.windows(2).find_map(|w| {
        let (a, b) = (w[0], w[1]);
        if x < a.x.floor() || x > b.x.ceil() {
            return None;
        }
        let t = ((x - a.x) / (b.x - a.x)).clamp(0.0, 1.0);
        Some(a.y + (b.y - a.y) * t)
    })
}

fn draw_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Draw(e.to_string())
}

/// Renders the chart to standalone PNG images.
pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `series` to PNG bytes.
    pub fn render_png(
        series: &Series,
        width: u32,
        height: u32,
        padding: ChartPadding,
    ) -> Result<Vec<u8>, ExportError> {
        if width == 0 || height == 0 {
            return Err(ExportError::InvalidSize(width, height));
        }
        if series.is_empty() {
            return Err(ExportError::EmptySeries(series.label.clone()));
        }

        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        Self::draw(&mut buffer, series, width, height, padding)?;

        let img = RgbImage::from_raw(width, height, buffer)
            .ok_or(ExportError::InvalidSize(width, height))?;
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render `series` and write the PNG to `path`.
    pub fn export_png(
        series: &Series,
        path: &Path,
        width: u32,
        height: u32,
        padding: ChartPadding,
    ) -> Result<(), ExportError> {
        let bytes = Self::render_png(series, width, height, padding)?;
        fs::write(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            bytes = bytes.len(),
            "Exported chart image"
        );
        Ok(())
    }

    fn draw(
        buffer: &mut [u8],
        series: &Series,
        width: u32,
        height: u32,
        padding: ChartPadding,
    ) -> Result<(), ExportError> {
        let root = BitMapBackend::with_buffer(buffer, (width, height)).into_drawing_area();
        root.fill(&BACKGROUND).map_err(draw_err)?;

        let points = compute_points(&series.values, width as f32, height as f32, padding);
        let pixels: Vec<(i32, i32)> = points
            .iter()
            .map(|p| (p.x.round() as i32, p.y.round() as i32))
            .collect();
        let baseline = (height as f32 - padding.bottom).round() as i32;

        // Area: per-column fill under the line with the same vertical fade as the
        // on-screen gradient.
        let fade_span = (height as f32 - padding.top).max(1.0);
        if let (Some(first), Some(last)) = (pixels.first(), pixels.last()) {
            for x in first.0..=last.0 {
                let Some(line_y) = line_y_at(&points, x as f32) else {
                    continue;
                };
                for y in line_y.round() as i32..baseline {
                    let t = ((y as f32 - padding.top) / fade_span).clamp(0.0, 1.0);
                    let alpha =
                        AREA_ALPHA_TOP + (AREA_ALPHA_BOTTOM - AREA_ALPHA_TOP) * f64::from(t);
                    root.draw_pixel((x, y), &LINE.mix(alpha)).map_err(draw_err)?;
                }
            }
        }

        root.draw(&PathElement::new(pixels.clone(), LINE.stroke_width(2)))
            .map_err(draw_err)?;

        if let Some(&last) = pixels.last() {
            root.draw(&Circle::new(last, MARKER_RADIUS, MARKER.filled()))
                .map_err(draw_err)?;
            root.draw(&Circle::new(
                last,
                RING_RADIUS,
                RING.mix(0.9).stroke_width(RING_WIDTH),
            ))
            .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{RangeKey, SeriesSet};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn renders_png_bytes() {
        let set = SeriesSet::default();
        for (_, series) in set.iter() {
            let bytes =
                StaticChartRenderer::render_png(series, 320, 160, ChartPadding::default()).unwrap();
            assert!(bytes.len() > PNG_SIGNATURE.len());
            assert_eq!(bytes[..8], PNG_SIGNATURE);
        }
    }

    #[test]
    fn single_point_series_exports() {
        let series = Series::new("one", vec![5.0]);
        let bytes =
            StaticChartRenderer::render_png(&series, 64, 32, ChartPadding::default()).unwrap();
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn last_point_marker_is_drawn() {
        let set = SeriesSet::default();
        let series = set.get(RangeKey::Month);
        let (width, height) = (240, 120);
        let bytes =
            StaticChartRenderer::render_png(series, width, height, ChartPadding::default())
                .unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();

        let points = compute_points(
            &series.values,
            width as f32,
            height as f32,
            ChartPadding::default(),
        );
        let last = points.last().unwrap();
        let (x, y) = (last.x.round() as u32, last.y.round() as u32);
        let rgb = |c: RGBColor| image::Rgb([c.0, c.1, c.2]);

        assert_eq!(*img.get_pixel(x, y), rgb(MARKER));
        assert_eq!(*img.get_pixel(x + 2, y), rgb(MARKER));
        // Right of the ring nothing is drawn.
        assert_eq!(*img.get_pixel(x + 10, y), rgb(BACKGROUND));
    }

    #[test]
    fn rejects_empty_series_and_zero_size() {
        let empty = Series::new("empty", Vec::new());
        assert!(matches!(
            StaticChartRenderer::render_png(&empty, 100, 100, ChartPadding::default()),
            Err(ExportError::EmptySeries(label)) if label == "empty"
        ));

        let set = SeriesSet::default();
        assert!(matches!(
            StaticChartRenderer::render_png(
                set.get(RangeKey::Day),
                0,
                100,
                ChartPadding::default()
            ),
            Err(ExportError::InvalidSize(0, 100))
        ));
    }

    #[test]
    fn export_writes_file() {
        let path =
            std::env::temp_dir().join(format!("hero_chart_test_{}.png", std::process::id()));
        let set = SeriesSet::default();
        StaticChartRenderer::export_png(
            set.get(RangeKey::Month),
            &path,
            200,
            100,
            ChartPadding::default(),
        )
        .unwrap();
        let written = fs::read(&path).unwrap();
        assert_eq!(written[..8], PNG_SIGNATURE);
        let _ = fs::remove_file(&path);
    }
}
