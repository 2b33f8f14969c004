//! Configuration management for the `BhutanTour` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TourError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `BhutanTour` application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourConfig {
    /// Generative assistant configuration
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Hotspot catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Generative assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// API key for the generative-language service. Chat replies are degraded without it.
    pub api_key: Option<String>,
    /// Base URL for the generative-language API
    #[serde(default = "default_assistant_base_url")]
    pub base_url: String,
    /// Model name
    #[serde(default = "default_assistant_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_assistant_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default = "default_assistant_max_retries")]
    pub max_retries: u32,
}

/// Hotspot catalog settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in one
    pub path: Option<PathBuf>,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory with the built frontend, served for non-API paths
    pub static_dir: Option<PathBuf>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_assistant_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_assistant_model() -> String {
    "gemini-flash-lite-latest".to_string()
}

fn default_assistant_timeout() -> u32 {
    30
}

fn default_assistant_max_retries() -> u32 {
    3
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_assistant_base_url(),
            model: default_assistant_model(),
            timeout_seconds: default_assistant_timeout(),
            max_retries: default_assistant_max_retries(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TourConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // BHUTANTOUR_ASSISTANT__API_KEY -> assistant.api_key
        builder = builder.add_source(
            Environment::with_prefix("BHUTANTOUR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TourConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bhutantour").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.assistant.base_url.is_empty() {
            self.assistant.base_url = default_assistant_base_url();
        }
        if self.assistant.model.is_empty() {
            self.assistant.model = default_assistant_model();
        }
        if self.assistant.timeout_seconds == 0 {
            self.assistant.timeout_seconds = default_assistant_timeout();
        }
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.server.port == 0 {
            self.server.port = default_server_port();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the assistant API key when one is given
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.assistant.api_key {
            if api_key.is_empty() {
                return Err(TourError::config(
                    "Assistant API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TourError::config(
                    "Assistant API key appears to be invalid (too short). Please check your API key."
                ).into());
            }

            if api_key.len() > 100 {
                return Err(TourError::config(
                    "Assistant API key appears to be invalid (too long). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.assistant.timeout_seconds > 300 {
            return Err(TourError::config(
                "Assistant timeout cannot exceed 300 seconds"
            ).into());
        }

        if self.assistant.max_retries > 10 {
            return Err(TourError::config(
                "Assistant max retries cannot exceed 10"
            ).into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TourError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TourError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if !self.assistant.base_url.starts_with("http://") && !self.assistant.base_url.starts_with("https://") {
            return Err(TourError::config(
                "Assistant base URL must be a valid HTTP or HTTPS URL"
            ).into());
        }

        Ok(())
    }
}
