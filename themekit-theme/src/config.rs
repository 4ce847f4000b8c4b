//! # Resolver Configuration
//!
//! This module provides [ResolverConfig], the knobs of a
//! [ThemeResolver](crate::resolver::ThemeResolver) that are not theme data:
//! the reference marker, the alias chain limit and the fallback values handed
//! out when a key cannot be resolved.
//!
//! ## Usage Examples
//!
//! ### Programmatic Configuration
//!
//! ```rust
//! use themekit_theme::config::ResolverConfig;
//!
//! let config = ResolverConfig::new()
//!     .with_reference_marker('$')
//!     .with_max_reference_depth(8)
//!     .with_default_font_size(14.0);
//!
//! assert_eq!(config.reference_marker, '$');
//! ```
//!
//! ### Configuration File Support
//!
//! ```rust
//! use themekit_theme::config::ResolverConfig;
//!
//! let config = ResolverConfig::from_toml(r##"
//! [resolver]
//! reference_marker = "$"
//! default_color = "#333333"
//! "##).unwrap();
//!
//! assert_eq!(config.reference_marker, '$');
//! assert_eq!(config.max_reference_depth, 32);
//! ```
//!
//! ## Environment Variables
//!
//! - `THEMEKIT_REFERENCE_MARKER`: Single character marking references
//! - `THEMEKIT_MAX_REFERENCE_DEPTH`: Maximum number of alias hops
//! - `THEMEKIT_DEFAULT_FONT_SIZE`: Size of the fallback font
//! - `THEMEKIT_CONFIG`: Path to a TOML configuration file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [resolver]
//! reference_marker = "@"
//! max_reference_depth = 32
//! default_color = "#000000"
//! default_font_size = 12.0
//! ```

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::color::DEFAULT_COLOR;
use crate::error::{ThemeError, ThemeResult};
use crate::font::DEFAULT_FONT_SIZE;

/// Default marker prefixing reference values.
pub const DEFAULT_REFERENCE_MARKER: char = '@';

/// Default limit on the number of hops in one alias chain.
pub const DEFAULT_MAX_REFERENCE_DEPTH: usize = 32;

/// Settings of a theme resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Character that marks a string value as a reference to another key.
    pub reference_marker: char,
    /// Maximum number of alias hops followed before giving up.
    pub max_reference_depth: usize,
    /// Color returned for missing or malformed color keys.
    #[serde(with = "crate::serde_color")]
    pub default_color: Color,
    /// Size of the system font returned for missing or malformed font keys.
    pub default_font_size: f32,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    resolver: ResolverConfig,
}

impl ResolverConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self {
            reference_marker: DEFAULT_REFERENCE_MARKER,
            max_reference_depth: DEFAULT_MAX_REFERENCE_DEPTH,
            default_color: DEFAULT_COLOR,
            default_font_size: DEFAULT_FONT_SIZE,
        }
    }

    /// Create a configuration from environment variables or use defaults.
    ///
    /// Unparsable variables are ignored. If `THEMEKIT_CONFIG` names a readable
    /// file, its contents replace everything read from the other variables.
    pub fn from_env_or_default() -> Self {
        let mut config = Self::new();

        if let Ok(marker) = env::var("THEMEKIT_REFERENCE_MARKER") {
            let mut chars = marker.chars();
            match (chars.next(), chars.next()) {
                (Some(marker), None) => config.reference_marker = marker,
                _ => log::warn!("Ignoring THEMEKIT_REFERENCE_MARKER={:?}", marker),
            }
        }

        if let Ok(depth) = env::var("THEMEKIT_MAX_REFERENCE_DEPTH") {
            match depth.parse() {
                Ok(depth) => config.max_reference_depth = depth,
                Err(_) => log::warn!("Ignoring THEMEKIT_MAX_REFERENCE_DEPTH={:?}", depth),
            }
        }

        if let Ok(size) = env::var("THEMEKIT_DEFAULT_FONT_SIZE") {
            match size.parse() {
                Ok(size) => config.default_font_size = size,
                Err(_) => log::warn!("Ignoring THEMEKIT_DEFAULT_FONT_SIZE={:?}", size),
            }
        }

        if let Ok(path) = env::var("THEMEKIT_CONFIG") {
            match Self::from_file(&path) {
                Ok(file_config) => config = file_config,
                Err(err) => log::warn!("Ignoring THEMEKIT_CONFIG: {}", err),
            }
        }

        config
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ThemeResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ThemeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        if path.extension().and_then(|s| s.to_str()) != Some("toml") {
            return Err(ThemeError::config_parse(
                Some(path.to_path_buf()),
                "Unsupported configuration file format. Use .toml",
            ));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|err| match err {
            ThemeError::ConfigParse { details, .. } => {
                ThemeError::config_parse(Some(path.to_path_buf()), details)
            },
            other => other,
        })
    }

    /// Load configuration from TOML content with a `[resolver]` table.
    ///
    /// Missing fields keep their defaults.
    pub fn from_toml(content: &str) -> ThemeResult<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|err| ThemeError::config_parse(None, err.to_string()))?;
        Ok(file.resolver)
    }

    /// Set the reference marker.
    pub fn with_reference_marker(mut self, marker: char) -> Self {
        self.reference_marker = marker;
        self
    }

    /// Set the alias chain limit.
    pub fn with_max_reference_depth(mut self, depth: usize) -> Self {
        self.max_reference_depth = depth;
        self
    }

    /// Set the fallback color.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Set the fallback font size.
    pub fn with_default_font_size(mut self, size: f32) -> Self {
        self.default_font_size = size;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_overrides_only_given_fields() {
        let config = ResolverConfig::from_toml(
            r##"
            [resolver]
            max_reference_depth = 4
            default_color = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.max_reference_depth, 4);
        assert_eq!(config.default_color, Color::from_rgb8(255, 0, 0));
        assert_eq!(config.reference_marker, '@');
        assert_eq!(config.default_font_size, 12.0);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(ResolverConfig::from_toml("").unwrap(), ResolverConfig::new());
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = ResolverConfig::from_toml("[resolver]\ndefault_color = \"blue\"").unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse { path: None, .. }));
    }

    #[test]
    fn from_file_rejects_missing_and_non_toml() {
        let missing = ResolverConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(missing, ThemeError::ConfigNotFound { .. }));

        let dir = env::temp_dir().join("themekit_config_test");
        fs::create_dir_all(&dir).unwrap();
        let json = dir.join("resolver.json");
        fs::write(&json, "{}").unwrap();
        let err = ResolverConfig::from_file(&json).unwrap_err();
        assert!(matches!(err, ThemeError::ConfigParse { path: Some(_), .. }));

        let toml_path = dir.join("resolver.toml");
        fs::write(&toml_path, "[resolver]\nreference_marker = \"%\"\n").unwrap();
        let config = ResolverConfig::from_file(&toml_path).unwrap();
        assert_eq!(config.reference_marker, '%');
    }
}
