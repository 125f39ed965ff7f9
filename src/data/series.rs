//! Price Series Presets
//! The three fixed price-history ranges shown by the hero chart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time range selectable from the range pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKey {
    #[default]
    Day,
    Week,
    Month,
}

impl RangeKey {
    /// All ranges in pill order.
    pub const ALL: [RangeKey; 3] = [RangeKey::Day, RangeKey::Week, RangeKey::Month];

    /// Short pill caption.
    pub fn caption(self) -> &'static str {
        match self {
            RangeKey::Day => "24h",
            RangeKey::Week => "7d",
            RangeKey::Month => "30d",
        }
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeKey::Day => "day",
            RangeKey::Week => "week",
            RangeKey::Month => "month",
        };
        f.write_str(name)
    }
}

/// A named, ordered list of prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Last value in the series.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// The day / week / month presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub day: Series,
    pub week: Series,
    pub month: Series,
}

impl Default for SeriesSet {
    fn default() -> Self {
        Self {
            day: Series::new(
                "۲۴ ساعت اخیر",
                vec![111.2, 111.6, 111.4, 111.8, 112.1, 111.9, 112.4, 112.8, 112.6],
            ),
            week: Series::new(
                "۷ روز گذشته",
                vec![108.5, 109.2, 110.4, 111.7, 112.3, 111.8, 112.9],
            ),
            month: Series::new(
                "۳۰ روز گذشته",
                vec![
                    102.0, 104.0, 103.0, 105.0, 106.0, 108.0, 109.0, 111.0, 112.0, 113.0, 114.0,
                    115.0,
                ],
            ),
        }
    }
}

impl SeriesSet {
    /// Get the series for a range.
    pub fn get(&self, range: RangeKey) -> &Series {
        match range {
            RangeKey::Day => &self.day,
            RangeKey::Week => &self.week,
            RangeKey::Month => &self.month,
        }
    }

    /// Iterate over `(range, series)` pairs in pill order.
    pub fn iter(&self) -> impl Iterator<Item = (RangeKey, &Series)> {
        RangeKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
