// src/error.rs

//! Unified error handling for the hbre2ip application.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for hbre2ip operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, unreadable or malformed configuration/secret/history file,
    /// or settings that fail validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Source page answered with something other than 200 OK
    #[error("status code error: {status} ({url})")]
    HttpStatus { status: u16, url: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a configuration error about a specific file.
    pub fn config_file(path: &Path, message: impl fmt::Display) -> Self {
        Self::Config(format!("failed to load {}: {message}", path.display()))
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create an HTTP status error.
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// | code | kind |
    /// |---|---|
    /// | 2 | configuration |
    /// | 3 | network |
    /// | 4 | HTTP status |
    /// | 5 | I/O |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Selector { .. } | Self::Url(_) | Self::Toml(_) => 2,
            Self::Network(_) => 3,
            Self::HttpStatus { .. } => 4,
            Self::Io(_) => 5,
        }
    }
}
