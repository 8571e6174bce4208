//! Configuration management for the skill gap analyzer

use crate::analysis::Role;
use crate::error::{Result, SkillGapError};
use crate::output::formatter::DEFAULT_BAR_WIDTH;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured backend URL.
pub const BACKEND_URL_ENV: &str = "SKILL_GAP_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub backend: BackendConfig,
    pub output: OutputConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    /// Request timeout; unset leaves the HTTP client's default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub bar_width: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                base_url: DEFAULT_BACKEND_URL.to_string(),
                timeout_secs: None,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                bar_width: DEFAULT_BAR_WIDTH,
            },
            defaults: DefaultsConfig {
                role: Role::default(),
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            toml::from_str(&content).map_err(|e| {
                SkillGapError::Configuration(format!("Failed to parse config: {}", e))
            })?
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            config
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillGapError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap")
            .join("config.toml")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            self.apply_backend_url_override(Some(url));
        }
    }

    /// Replace the backend URL when an override is given and non-blank.
    pub fn apply_backend_url_override(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            debug!("Backend URL overridden: {}", url);
            self.backend.base_url = url;
        }
    }

    /// Set a value by dotted key, e.g. `backend.base_url`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend.base_url" => self.backend.base_url = value.to_string(),
            "backend.timeout_secs" => {
                self.backend.timeout_secs = if value.is_empty() || value == "none" {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        SkillGapError::InvalidInput(format!("Invalid timeout: {}", value))
                    })?)
                };
            }
            "output.format" => {
                self.output.format =
                    crate::cli::parse_output_format(value).map_err(SkillGapError::InvalidInput)?;
            }
            "output.color_output" => {
                self.output.color_output = value.parse().map_err(|_| {
                    SkillGapError::InvalidInput(format!("Expected true or false, got: {}", value))
                })?;
            }
            "output.bar_width" => {
                self.output.bar_width = value
                    .parse()
                    .ok()
                    .filter(|w: &usize| *w > 0)
                    .ok_or_else(|| {
                        SkillGapError::InvalidInput(format!("Invalid bar width: {}", value))
                    })?;
            }
            "defaults.role" => {
                self.defaults.role = value.parse().map_err(SkillGapError::InvalidInput)?;
            }
            _ => {
                return Err(SkillGapError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.output.format, Config::default().output.format);
        assert_eq!(config.defaults.role, Role::BackendDeveloper);
    }

    #[test]
    fn test_toml_roundtrip_keeps_role_name() {
        let mut config = Config::default();
        config.defaults.role = Role::DataScientist;
        config.backend.timeout_secs = Some(30);

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("role = \"Data Scientist\""));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_set_value_by_key() {
        let mut config = Config::default();
        config.set_value("backend.base_url", "http://api.example.com").unwrap();
        config.set_value("backend.timeout_secs", "15").unwrap();
        config.set_value("output.format", "md").unwrap();
        config.set_value("defaults.role", "frontend").unwrap();

        assert_eq!(config.backend.base_url, "http://api.example.com");
        assert_eq!(config.backend.timeout_secs, Some(15));
        assert_eq!(config.output.format, OutputFormat::Markdown);
        assert_eq!(config.defaults.role, Role::FrontendDeveloper);

        config.set_value("backend.timeout_secs", "none").unwrap();
        assert_eq!(config.backend.timeout_secs, None);
    }

    #[test]
    fn test_set_value_rejects_bad_input() {
        let mut config = Config::default();
        assert!(config.set_value("output.bar_width", "0").is_err());
        assert!(config.set_value("defaults.role", "Astronaut").is_err());
        assert!(config.set_value("nope.key", "1").is_err());
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_backend_url_override(Some("  ".to_string()));
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);

        config.apply_backend_url_override(Some("http://10.0.0.2:9000".to_string()));
        assert_eq!(config.backend.base_url, "http://10.0.0.2:9000");
    }
}
