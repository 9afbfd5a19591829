//! TOML configuration loading and validation.
//!
//! Every key is optional; a missing `folio.toml` means defaults throughout.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Allowed deviation of the goal-percentage sum from 100, in
    /// percentage points.
    #[serde(default = "default_tolerance")]
    pub goal_sum_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            goal_sum_tolerance: default_tolerance(),
        }
    }
}

fn default_tolerance() -> f64 {
    0.05
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Sector colors as `#RRGGBB` strings, cycled when there are more
    /// assets than colors.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            tick_rate_ms: default_tick_rate(),
            palette: default_palette(),
        }
    }
}

fn default_decimals() -> usize {
    2
}
fn default_tick_rate() -> u64 {
    250
}
fn default_palette() -> Vec<String> {
    [
        "#FFE08F", "#C0C0C0", "#98FB98", "#FFDAB9", "#ADD8E6", "#D8BFD8", "#FFB6C1",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate config invariants.
    fn validate(&self) -> Result<()> {
        if self.validation.goal_sum_tolerance <= 0.0 || self.validation.goal_sum_tolerance > 10.0 {
            return Err(Error::Config(
                "goal_sum_tolerance must be in (0.0, 10.0]".into(),
            ));
        }
        if self.display.decimals > 6 {
            return Err(Error::Config("decimals must be <= 6".into()));
        }
        if self.display.tick_rate_ms == 0 {
            return Err(Error::Config("tick_rate_ms must be > 0".into()));
        }
        if self.display.palette.is_empty() {
            return Err(Error::Config("palette must not be empty".into()));
        }
        for color in &self.display.palette {
            if parse_hex_color(color).is_none() {
                return Err(Error::Config(format!(
                    "palette entry '{color}' is not a #RRGGBB color"
                )));
            }
        }
        Ok(())
    }
}

impl DisplayConfig {
    /// The palette as RGB triples. Entries that fail to parse are skipped;
    /// `Config::validate` has already rejected them on the load path.
    pub fn palette_rgb(&self) -> Vec<(u8, u8, u8)> {
        self.palette
            .iter()
            .filter_map(|s| parse_hex_color(s))
            .collect()
    }
}

/// Parse a `#RRGGBB` hex color string.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_toml() -> &'static str {
        r##"
[validation]
goal_sum_tolerance = 0.1

[display]
decimals = 1
tick_rate_ms = 100
palette = ["#FF0000", "#00FF00"]
"##
    }

    #[test]
    fn parse_example_config() {
        let config: Config = toml::from_str(example_toml()).unwrap();
        assert_eq!(config.validation.goal_sum_tolerance, 0.1);
        assert_eq!(config.display.decimals, 1);
        assert_eq!(config.display.tick_rate_ms, 100);
        assert_eq!(config.display.palette.len(), 2);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.validation.goal_sum_tolerance, 0.05);
        assert_eq!(config.display.decimals, 2);
        assert_eq!(config.display.palette.len(), 7);
    }

    #[test]
    fn validate_catches_bad_tolerance() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.validation.goal_sum_tolerance = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_bad_palette_entry() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.display.palette = vec!["red".into()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_catches_empty_palette() {
        let mut config: Config = toml::from_str(example_toml()).unwrap();
        config.display.palette.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn hex_color_parsing() {
        assert_eq!(parse_hex_color("#FFE08F"), Some((0xFF, 0xE0, 0x8F)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex_color("FFE08F"), None);
        assert_eq!(parse_hex_color("#FFE08"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn palette_rgb_matches_defaults() {
        let config = Config::default();
        let rgb = config.display.palette_rgb();
        assert_eq!(rgb.len(), 7);
        assert_eq!(rgb[0], (0xFF, 0xE0, 0x8F));
    }

    #[test]
    fn load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.display.tick_rate_ms, 250);
    }
}
