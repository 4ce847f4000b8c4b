//! # Theme Error Types
//!
//! This module provides the error taxonomy of the resolver. The total accessors
//! on [ThemeResolver](crate::resolver::ThemeResolver) never return these; they
//! absorb every failure into a documented default. The `try_*` variants and the
//! configuration loaders return them so a surrounding layer can tell a missing
//! key from a malformed value or a reference cycle.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving theme values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// The key was not found in the theme or any of its parents.
    #[error("Theme key '{key}' not found")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },

    /// The key resolved to a value of the wrong kind.
    #[error("Theme key '{key}' is not a {expected}")]
    TypeMismatch {
        /// The key that was looked up.
        key: String,
        /// Human readable name of the expected kind.
        expected: &'static str,
    },

    /// A color string could not be parsed.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// A numeric string could not be parsed.
    #[error("Invalid number for '{key}': {value}")]
    InvalidNumber {
        /// The key or field holding the value.
        key: String,
        /// The offending value.
        value: String,
    },

    /// A font block has no usable `size`.
    #[error("Font block '{key}' has no numeric size")]
    MissingFontSize {
        /// The key of the font block.
        key: String,
    },

    /// The font system does not know the requested font name.
    #[error("Font '{name}' is not available")]
    UnresolvableFontName {
        /// The requested font name.
        name: String,
    },

    /// A reference chain revisited one of its own keys.
    #[error("Cyclic theme reference: {}", path.join(" -> "))]
    CyclicReference {
        /// The keys visited, ending with the repeated one.
        path: Vec<String>,
    },

    /// A reference chain grew longer than the configured limit.
    #[error("Reference chain starting at '{key}' exceeds {limit} hops")]
    ReferenceDepthExceeded {
        /// The key the chain started from.
        key: String,
        /// The configured limit.
        limit: usize,
    },

    /// The process-wide default theme was already installed.
    #[error("Default theme already set to '{name}'")]
    DefaultThemeAlreadySet {
        /// Name of the theme already installed.
        name: String,
    },

    /// Resolver configuration file was not found.
    #[error("Config file not found: {path:?}")]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a resolver configuration file.
    #[error("Failed to parse config {path:?}: {details}")]
    ConfigParse {
        /// The path of the file that failed to parse, if any.
        path: Option<PathBuf>,
        /// Details about the parse error.
        details: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a config parse error.
    pub fn config_parse(path: Option<PathBuf>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            path,
            details: details.into(),
        }
    }

    /// Whether the error only means "nothing is there".
    ///
    /// Missing keys are routine during lookups, everything else points at a
    /// problem in the theme data itself.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}

impl From<std::io::Error> for ThemeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
