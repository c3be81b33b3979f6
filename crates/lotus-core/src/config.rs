// ABOUTME: Application configuration handling.
// ABOUTME: Loads and saves layout settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tolerance used when checking that pane percentages add up to 100.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Split view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Starting widths of the left, middle and right panes, in percent
    pub initial_sizes: [f64; 3],

    /// Smallest width (px) a pane may be dragged down to
    pub min_pane_width_px: f64,

    /// Width of the grab area around each divider (px)
    pub divider_hit_px: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            initial_sizes: [28.0, 44.0, 28.0],
            min_pane_width_px: 240.0,
            divider_hit_px: 8.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, size) in self.initial_sizes.iter().enumerate() {
            if !size.is_finite() || *size < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "initial_sizes[{i}] must be a non-negative number, got {size}"
                )));
            }
        }

        let sum: f64 = self.initial_sizes.iter().sum();
        if (sum - 100.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::Invalid(format!(
                "initial_sizes must add up to 100, got {sum}"
            )));
        }

        if !self.min_pane_width_px.is_finite() || self.min_pane_width_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "min_pane_width_px must be a non-negative number, got {}",
                self.min_pane_width_px
            )));
        }

        if !self.divider_hit_px.is_finite() || self.divider_hit_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "divider_hit_px must be positive, got {}",
                self.divider_hit_px
            )));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Split view settings
    pub layout: LayoutSettings,

    /// Name of the URL parameter the query is mirrored into
    pub query_param: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            query_param: "q".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Config {
    /// Get the default config file path (~/.config/lotus-console/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lotus-console").join("config.toml"))
    }

    /// Load and validate config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if missing or invalid
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_layout() {
        let config = Config::default();
        assert_eq!(config.layout.initial_sizes, [28.0, 44.0, 28.0]);
        assert_eq!(config.layout.min_pane_width_px, 240.0);
        assert_eq!(config.query_param, "q");
        assert!(config.layout.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = Config::from_toml("[layout]\nmin_pane_width_px = 180.0\n").unwrap();
        assert_eq!(config.layout.min_pane_width_px, 180.0);
        assert_eq!(config.layout.initial_sizes, [28.0, 44.0, 28.0]);
        assert_eq!(config.query_param, "q");
    }

    #[test]
    fn rejects_sizes_not_summing_to_100() {
        let err = Config::from_toml("[layout]\ninitial_sizes = [30.0, 30.0, 30.0]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_negative_sizes_and_minimum() {
        let mut settings = LayoutSettings {
            initial_sizes: [-10.0, 60.0, 50.0],
            ..LayoutSettings::default()
        };
        assert!(settings.validate().is_err());

        settings.initial_sizes = [25.0, 50.0, 25.0];
        settings.min_pane_width_px = -1.0;
        assert!(settings.validate().is_err());

        settings.min_pane_width_px = 240.0;
        settings.divider_hit_px = 0.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_toml("layout = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn save_then_load() {
        let mut config = Config::default();
        config.layout.initial_sizes = [20.0, 50.0, 30.0];
        config.query_param = "query".to_string();

        let path = std::env::temp_dir()
            .join(format!("lotus-config-test-{}", std::process::id()))
            .join("config.toml");
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);

        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}
