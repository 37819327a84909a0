//! Optional TOML configuration, loaded from `~/.lookout/config.toml`.

use serde::Deserialize;
use std::path::PathBuf;

use lookout_providers::Location;
use lookout_types::ui::UiOptions;

#[derive(Debug, Default, Deserialize)]
pub struct LookoutConfig {
    pub app: Option<AppConfig>,
    pub location: Option<LocationConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and spinners.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable spinner animation.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Location override for the weather, air quality and sun-times panels.
///
/// ```toml
/// [location]
/// name = "Vancouver, BC"
/// latitude = 49.2827
/// longitude = -123.1207
/// ```
#[derive(Debug, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LookoutConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }

    /// Resolve the reporting location. An override collapses the separate
    /// sun-times coordinates onto itself.
    #[must_use]
    pub fn resolved_location(&self) -> Location {
        self.location.as_ref().map_or_else(Location::default, |loc| Location {
            name: loc.name.clone(),
            latitude: loc.latitude,
            longitude: loc.longitude,
            sun_latitude: loc.latitude,
            sun_longitude: loc.longitude,
        })
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lookout").join("config.toml"))
}

#[must_use]
pub fn log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".lookout").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::LookoutConfig;

    #[test]
    fn parse_empty_config() {
        let config: LookoutConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.location.is_none());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
high_contrast = false
reduced_motion = true
";
        let config: LookoutConfig = toml::from_str(toml_str).unwrap();
        let ui = config.ui_options();
        assert!(ui.ascii_only);
        assert!(!ui.high_contrast);
        assert!(ui.reduced_motion);
    }

    #[test]
    fn parse_location_config() {
        let toml_str = r#"
[location]
name = "Vancouver, BC"
latitude = 49.2827
longitude = -123.1207
"#;
        let config: LookoutConfig = toml::from_str(toml_str).unwrap();
        let loc = config.resolved_location();
        assert_eq!(loc.name, "Vancouver, BC");
        assert!((loc.latitude - 49.2827).abs() < f64::EPSILON);
        // Overrides collapse the sun-times coordinates.
        assert!((loc.sun_latitude - 49.2827).abs() < f64::EPSILON);
        assert!((loc.sun_longitude - -123.1207).abs() < f64::EPSILON);
    }

    #[test]
    fn default_location_keeps_separate_sun_coordinates() {
        let config = LookoutConfig::default();
        let loc = config.resolved_location();
        assert_eq!(loc.name, "Toronto, ON");
        assert!((loc.latitude - 43.7064).abs() < f64::EPSILON);
        assert!((loc.sun_latitude - 43.6532).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result: Result<LookoutConfig, _> = toml::from_str("invalid toml [");
        assert!(result.is_err());
    }
}
