use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{CAROUSEL_INTERVAL, MIN_INTERVAL};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery manifest, usually `gallery.toml` at the root of the image directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Window title; defaults to the directory name
    #[serde(default)]
    pub title: Option<String>,
    /// Seconds between carousel auto-advances
    #[serde(default)]
    pub interval_secs: Option<f32>,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    /// Image paths, relative to the manifest's directory
    pub images: Vec<PathBuf>,
}

impl GalleryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GalleryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(interval) = self.interval_secs {
            validate_interval(interval)?;
        }
        for card in &self.cards {
            if card.title.trim().is_empty() {
                return Err(ConfigError::Validation("card title must not be empty".to_string()));
            }
            if card.images.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "card '{}' lists no images",
                    card.title
                )));
            }
        }
        Ok(())
    }

    // CLI flag wins over the manifest, which wins over the built-in default.
    pub fn resolve_interval(&self, cli_interval: Option<f32>) -> f32 {
        cli_interval.or(self.interval_secs).unwrap_or(CAROUSEL_INTERVAL)
    }
}

// Shared by the manifest and the `--interval` flag.
pub fn validate_interval(interval: f32) -> Result<(), ConfigError> {
    if !interval.is_finite() || interval < MIN_INTERVAL {
        return Err(ConfigError::Validation(format!(
            "interval must be at least {MIN_INTERVAL} seconds, got {interval}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_manifest() {
        let toml_str = r#"
            title = "Interests"
            interval_secs = 3.0

            [[cards]]
            title = "Hiking"
            images = ["hiking/01.jpg", "hiking/02.jpg"]

            [[cards]]
            title = "Cooking"
            images = ["food.png"]
        "#;
        let config = GalleryConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.title.as_deref(), Some("Interests"));
        assert_eq!(config.cards.len(), 2);
        assert_eq!(config.cards[0].images[1], PathBuf::from("hiking/02.jpg"));
        assert_eq!(config.resolve_interval(None), 3.0);
    }

    #[test]
    fn empty_manifest_uses_defaults() {
        let config = GalleryConfig::from_toml_str("").unwrap();
        assert!(config.cards.is_empty());
        assert_eq!(config.resolve_interval(None), CAROUSEL_INTERVAL);
        assert_eq!(config.resolve_interval(Some(1.5)), 1.5);
    }

    #[test]
    fn rejects_non_positive_interval() {
        let result = GalleryConfig::from_toml_str("interval_secs = 0.0");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn rejects_interval_below_minimum() {
        let result = GalleryConfig::from_toml_str("interval_secs = 1e-10");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
        assert!(GalleryConfig::from_toml_str(&format!("interval_secs = {MIN_INTERVAL}")).is_ok());
    }

    #[test]
    fn interval_check_matches_flag_rules() {
        assert!(validate_interval(CAROUSEL_INTERVAL).is_ok());
        assert!(validate_interval(MIN_INTERVAL).is_ok());
        assert!(validate_interval(1e-10).is_err());
        assert!(validate_interval(-1.0).is_err());
        assert!(validate_interval(f32::NAN).is_err());
        assert!(validate_interval(f32::INFINITY).is_err());
    }

    #[test]
    fn rejects_card_without_images() {
        let toml_str = r#"
            [[cards]]
            title = "Empty"
            images = []
        "#;
        let result = GalleryConfig::from_toml_str(toml_str);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn reports_parse_errors() {
        let result = GalleryConfig::from_toml_str("cards = 5");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "interval_secs = 2.5").unwrap();
        let config = GalleryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.interval_secs, Some(2.5));

        let missing = GalleryConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
