//! Configuration for the ember terminal portfolio.
//!
//! Settings live in `config.toml` inside the platform config directory
//! (for example `~/.config/ember/config.toml` on Linux). Every key is
//! optional; a missing file means defaults everywhere.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use ember_core::{Portfolio, Rgb};
use ember_field::FieldSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while reading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Field(#[from] ember_field::Error),
}

/// Particle background settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub accent: Rgb,
    /// Logical units per terminal half-cell pixel.
    pub pixel_scale: f32,
    /// Fixed seed for a reproducible particle layout.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let settings = FieldSettings::default();
        Self {
            particle_count: settings.count,
            speed: settings.speed,
            radius_min: settings.radius_min,
            radius_max: settings.radius_max,
            alpha_min: settings.alpha_min,
            alpha_max: settings.alpha_max,
            accent: settings.accent,
            pixel_scale: 8.0,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Settings handed to the particle animator.
    pub fn settings(&self) -> FieldSettings {
        FieldSettings {
            count: self.particle_count,
            speed: self.speed,
            radius_min: self.radius_min,
            radius_max: self.radius_max,
            alpha_min: self.alpha_min,
            alpha_max: self.alpha_max,
            accent: self.accent,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frames per second.
    pub fps: u32,
    /// Skip reveal animations and smooth scrolling.
    pub reduce_motion: bool,
    /// Where to write logs; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// Default log filter, overridden by `EMBER_LOG`.
    pub log_level: String,
    pub field: FieldConfig,
    pub portfolio: Portfolio,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: 60,
            reduce_motion: false,
            log_file: None,
            log_level: "info".into(),
            field: FieldConfig::default(),
            portfolio: Portfolio::default(),
        }
    }
}

impl Config {
    /// Path of the config file in the platform config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ember").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::from_toml(&text)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(ConfigError::Invalid("fps must be at least 1".into()));
        }
        if !(self.field.pixel_scale.is_finite() && self.field.pixel_scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "field.pixel_scale must be positive, got {}",
                self.field.pixel_scale
            )));
        }
        self.field.settings().validate()?;
        Ok(())
    }

    /// Time between frames at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.field.settings(), FieldSettings::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r##"
            fps = 30
            reduce_motion = true

            [field]
            particle_count = 10
            accent = "#ff8800"
            seed = 7

            [portfolio.profile]
            first_name = "ADA"
            "##,
        )
        .unwrap();
        assert_eq!(config.fps, 30);
        assert!(config.reduce_motion);
        assert_eq!(config.field.particle_count, 10);
        assert_eq!(config.field.accent, Rgb::new(0xff, 0x88, 0x00));
        assert_eq!(config.field.seed, Some(7));
        assert_eq!(config.field.radius_min, 100.0);
        assert_eq!(config.portfolio.profile.first_name, "ADA");
        assert_eq!(config.portfolio.profile.last_name, "TARIQ");
        assert_eq!(config.portfolio.skills.len(), 4);
        assert_eq!(config.frame_interval(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Config::from_toml("fps = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[field]\npixel_scale = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::from_toml("[field]\nalpha_min = 0.5\nalpha_max = 0.1"),
            Err(ConfigError::Field(_))
        ));
        assert!(matches!(
            Config::from_toml("[field]\naccent = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("ember-config-does-not-exist.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
