//! Error types and handling for `TravelQuote`
//!
//! Expected quote problems (bad date range, bad service quantity, ...) are not
//! errors: they are reported as [`QuoteErrorKind`](crate::quote::QuoteErrorKind)
//! values inside a quote. This type covers malformed input that has to be
//! surfaced to the caller.

use thiserror::Error;

/// Main error type for the `TravelQuote` library
#[derive(Error, Debug)]
pub enum TravelQuoteError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Raw form input that could not be parsed into a typed value
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Latitude or longitude that is not a finite, in-range number
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Argument outside the domain of an operation
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl TravelQuoteError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error for a named input field
    pub fn validation<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid coordinate error
    #[must_use]
    pub fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinate {
            latitude,
            longitude,
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelQuoteError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelQuoteError::Validation { field, message } => {
                format!("Please check the {field}: {message}")
            }
            TravelQuoteError::InvalidCoordinate { .. } => {
                "Location is unknown or invalid.".to_string()
            }
            TravelQuoteError::InvalidArgument { message } => message.clone(),
        }
    }
}
