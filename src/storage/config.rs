use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::booking::AppointmentStatus;

pub const APP_DIR: &str = "salon-agenda";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub booking: BookingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    pub default_status: AppointmentStatus,
    pub salon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    pub date_format: String,
    pub show_weekday_headers: bool,
    pub use_pager: bool,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            tracing::info!(path = %config_path.display(), "created default config");
            Ok(config)
        }
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            booking: BookingConfig {
                default_status: AppointmentStatus::Pending,
                salon: "Salon Beauty".to_string(),
            },
            display: DisplayConfig {
                date_format: "%d/%m/%Y".to_string(),
                show_weekday_headers: true,
                use_pager: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_books_as_pending() {
        let config = Config::default();
        assert_eq!(config.booking.default_status, AppointmentStatus::Pending);
    }

    #[test]
    fn default_config_uses_brazilian_date_format() {
        let config = Config::default();
        assert_eq!(config.display.date_format, "%d/%m/%Y");
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [booking]
            default_status = "confirmado"
            salon = "Bella Vista"

            [display]
            date_format = "%Y-%m-%d"
            show_weekday_headers = false
            use_pager = false
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.booking.default_status, AppointmentStatus::Confirmed);
        assert_eq!(config.booking.salon, "Bella Vista");
        assert_eq!(config.display.date_format, "%Y-%m-%d");
        assert!(!config.display.show_weekday_headers);
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let invalid_toml = "this is not valid toml";
        let result = Config::from_toml(invalid_toml);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let toml_content = r#"
            [booking]
            default_status = "cancelado"
            salon = "Salon Beauty"

            [display]
            date_format = "%d/%m/%Y"
            show_weekday_headers = true
            use_pager = true
        "#;

        assert!(matches!(Config::from_toml(toml_content), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.booking.salon = "Studio Elegance".to_string();

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn loading_missing_file_returns_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
