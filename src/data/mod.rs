//! Data module - price presets and number formatting

mod format;
mod series;

pub use format::{format_count, DigitStyle, PriceFormatter};
pub use series::{RangeKey, Series, SeriesSet};
