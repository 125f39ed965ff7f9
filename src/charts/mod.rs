//! Charts module - interactive hero chart and static PNG export

mod export;
mod geometry;
mod renderer;

pub use export::StaticChartRenderer;
pub use renderer::{ChartRenderer, LINE_COLOR, MARKER_FILL};
