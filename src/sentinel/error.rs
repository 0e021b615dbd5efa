// SPDX-License-Identifier: MIT

//! Typed error handling for sentinel-rs
//!
//! Condition-expression failures have their own type, `ExprError`, and are
//! wrapped here alongside configuration and I/O errors.

use crate::sentinel::rule::expr::ExprError;
use thiserror::Error;

/// Top-level error type for sentinel-rs
#[derive(Debug, Error)]
pub enum SentinelError {
    /// Condition expression evaluation failures
    #[error(transparent)]
    Expr(#[from] ExprError),

    /// Configuration errors (bad reading specs, bad condition templates)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A condition template names a reading that was not supplied
    #[error("Unknown reading '{name}'")]
    UnknownReading { name: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SentinelError {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an unknown-reading error
    pub fn unknown_reading(name: impl Into<String>) -> Self {
        Self::UnknownReading { name: name.into() }
    }
}
