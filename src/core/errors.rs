//! RAA-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, RaaError>;

/// Top-level error type for the Review Authenticity Analyzer.
#[derive(Debug, Error)]
pub enum RaaError {
    #[error("[RAA-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[RAA-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[RAA-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[RAA-2001] invalid detection pattern `{pattern}`: {details}")]
    Pattern { pattern: String, details: String },

    #[error("[RAA-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[RAA-3001] no product URL provided")]
    EmptyUrl,

    #[error("[RAA-3002] no reviews collected from {url}")]
    NoReviews { url: String },

    #[error("[RAA-3101] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RaaError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "RAA-1001",
            Self::MissingConfig { .. } => "RAA-1002",
            Self::ConfigParse { .. } => "RAA-1003",
            Self::Pattern { .. } => "RAA-2001",
            Self::Serialization { .. } => "RAA-2101",
            Self::EmptyUrl => "RAA-3001",
            Self::NoReviews { .. } => "RAA-3002",
            Self::Io { .. } => "RAA-3101",
        }
    }

    /// Whether the failure stems from user input rather than the pipeline.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyUrl | Self::InvalidConfig { .. } | Self::MissingConfig { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for RaaError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for RaaError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}

impl From<regex::Error> for RaaError {
    fn from(value: regex::Error) -> Self {
        Self::Pattern {
            pattern: String::new(),
            details: value.to_string(),
        }
    }
}
