//! Error types and handling for the WeatherWise relay

use thiserror::Error;

/// Main error type for the WeatherWise relay
#[derive(Error, Debug)]
pub enum WeatherWiseError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors, raised before any external call
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Weather provider answered with a status that is not recovered locally
    #[error("Weather provider returned HTTP {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WeatherWiseError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new upstream status error
    pub fn upstream_status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherWiseError::Config { .. } => {
                "Server configuration error. Please check the API keys and settings.".to_string()
            }
            WeatherWiseError::Validation { message } => message.clone(),
            WeatherWiseError::UpstreamStatus { status, .. } => {
                format!("Weather provider request failed with HTTP {status}")
            }
            WeatherWiseError::General { message } => message.clone(),
        }
    }
}
