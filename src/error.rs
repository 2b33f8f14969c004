//! Error types and handling for the `BhutanTour` application

use thiserror::Error;

/// Main error type for the `BhutanTour` application
#[derive(Error, Debug)]
pub enum TourError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Hotspot catalog loading and consistency errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Generative assistant communication errors
    #[error("Assistant error: {message}")]
    Assistant { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TourError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new assistant error
    pub fn assistant<S: Into<String>>(message: S) -> Self {
        Self::Assistant {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            TourError::Catalog { message } => {
                format!("The hotspot catalog could not be loaded: {message}")
            }
            TourError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourError::Assistant { .. } => {
                "The travel assistant is unavailable right now. Please try again later."
                    .to_string()
            }
            TourError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TourError::General { message } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for TourError {
    fn from(err: serde_json::Error) -> Self {
        TourError::catalog(err.to_string())
    }
}
