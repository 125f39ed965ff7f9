//! Application Configuration
//! Optional JSON settings file; every field falls back to its default.

use crate::data::{DigitStyle, PriceFormatter, RangeKey, SeriesSet};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "HERO_CHART_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "hero_chart.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub digits: DigitStyle,
    pub currency: String,
    /// Multiplier from chart units to tooltip price units.
    pub price_scale: f64,
    pub initial_range: RangeKey,
    pub counter_duration_ms: u64,
    /// Visible share of the stats section that starts the counters.
    pub stats_threshold: f32,
    /// Visible share of a section that reveals it.
    pub reveal_threshold: f32,
    pub reveal_stagger_ms: u64,
    pub reveal_transition_ms: u64,
    pub export_size: [u32; 2],
    pub open_after_export: bool,
    pub series: SeriesSet,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1200.0, 820.0],
            digits: DigitStyle::Persian,
            currency: "ریال".to_string(),
            price_scale: 1000.0,
            initial_range: RangeKey::Day,
            counter_duration_ms: 1500,
            stats_threshold: 0.3,
            reveal_threshold: 0.2,
            reveal_stagger_ms: 40,
            reveal_transition_ms: 600,
            export_size: [1200, 480],
            open_after_export: true,
            series: SeriesSet::default(),
        }
    }
}

impl AppConfig {
    /// Load from `$HERO_CHART_CONFIG`, else `hero_chart.json` in the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Load and validate a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config JSON.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (range, series) in self.series.iter() {
            if series.is_empty() {
                return Err(ConfigError::Invalid(format!("series '{}' is empty", range)));
            }
            if series.values.iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::Invalid(format!(
                    "series '{}' contains a non-finite value",
                    range
                )));
            }
        }

        if self.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::Invalid("window_size must be positive".into()));
        }
        if self.export_size.contains(&0) {
            return Err(ConfigError::Invalid("export_size must be positive".into()));
        }
        if !self.price_scale.is_finite() || self.price_scale <= 0.0 {
            return Err(ConfigError::Invalid("price_scale must be positive".into()));
        }
        if self.counter_duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "counter_duration_ms must be positive".into(),
            ));
        }
        for (name, value) in [
            ("stats_threshold", self.stats_threshold),
            ("reveal_threshold", self.reveal_threshold),
        ] {
            if value.is_nan() || value <= 0.0 || value > 1.0 {
                return Err(ConfigError::Invalid(format!("{} must be in (0, 1]", name)));
            }
        }
        Ok(())
    }

    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter {
            digits: self.digits,
            scale: self.price_scale,
            currency: self.currency.clone(),
        }
    }

    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn reveal_transition(&self) -> Duration {
        Duration::from_millis(self.reveal_transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.counter_duration(), Duration::from_millis(1500));
        assert_eq!(config.price_formatter(), PriceFormatter::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config =
            AppConfig::from_json(r#"{ "digits": "latin", "initial_range": "month" }"#).unwrap();
        assert_eq!(config.digits, DigitStyle::Latin);
        assert_eq!(config.initial_range, RangeKey::Month);
        assert_eq!(config.currency, "ریال");
        assert_eq!(config.series, SeriesSet::default());
    }

    #[test]
    fn series_override() {
        let json = r#"{
            "series": {
                "day":   { "label": "d", "values": [1, 2, 3] },
                "week":  { "label": "w", "values": [4] },
                "month": { "label": "m", "values": [5, 6] }
            }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.series.get(RangeKey::Day).values, vec![1.0, 2.0, 3.0]);
        assert_eq!(config.series.get(RangeKey::Month).label, "m");
    }

    #[test]
    fn rejects_empty_series() {
        let json = r#"{
            "series": {
                "day":   { "label": "d", "values": [] },
                "week":  { "label": "w", "values": [4] },
                "month": { "label": "m", "values": [5] }
            }
        }"#;
        assert!(matches!(
            AppConfig::from_json(json),
            Err(ConfigError::Invalid(msg)) if msg.contains("day")
        ));
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        for json in [
            r#"{ "reveal_threshold": 0.0 }"#,
            r#"{ "stats_threshold": 1.5 }"#,
            r#"{ "export_size": [0, 10] }"#,
            r#"{ "price_scale": -1.0 }"#,
            r#"{ "counter_duration_ms": 0 }"#,
        ] {
            assert!(
                matches!(AppConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "{json}"
            );
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            AppConfig::from_json("{ not json"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("hero_chart_definitely_missing.json");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn loads_file_from_disk() {
        let path =
            std::env::temp_dir().join(format!("hero_chart_cfg_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "currency": "IRR", "digits": "latin" }"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.price_formatter().format(1.5), "1,500 IRR");
    }
}
