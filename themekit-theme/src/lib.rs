#![warn(missing_docs)]

//! # Themekit Theme Resolution
//!
//! Key/value themes for user interfaces. A theme is a nested mapping of style
//! keys to values; this crate turns keys into colors, fonts, numbers, booleans,
//! strings and images without ever failing on the caller.
//!
//! ## Overview
//!
//! - **[ThemeResolver](resolver::ThemeResolver)**: Owns one theme's data, an
//!   optional parent theme and the color and font caches
//! - **[StyleValue](value::StyleValue)**: The theme data model
//! - **[ResolverConfig](config::ResolverConfig)**: Reference marker, alias
//!   chain limit and fallback values, from code, environment or TOML
//! - **[ThemeError](error::ThemeError)**: Why a `try_*` lookup failed
//! - **Collaborators**: [ColorParser](color::ColorParser),
//!   [FontProvider](font::FontProvider) and [ImageProvider](image::ImageProvider)
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use themekit_theme::resolver::ThemeResolver;
//! use themekit_theme::font::{Font, FontStyle};
//! use vello::peniko::Color;
//!
//! let theme = ThemeResolver::from_json(json!({
//!     "brand": "#336699",
//!     "headline": { "size": 20, "style": "bold" },
//!     "title": "@headline",
//! })).unwrap();
//!
//! assert_eq!(theme.color("brand"), Color::from_rgb8(0x33, 0x66, 0x99));
//! assert_eq!(theme.font("title"), Font::system(20.0, FontStyle::Bold));
//!
//! // Missing keys fall back instead of failing.
//! assert_eq!(theme.color("nope"), Color::BLACK);
//! assert_eq!(theme.font("nope"), Font::system(12.0, FontStyle::Regular));
//! ```
//!
//! ## References
//!
//! A string starting with `@` names another key. References are followed
//! transitively, first within the theme being asked. If that chain ends
//! without a value, the parent theme resolves the key with its own data, so an
//! alias defined in a parent always points into the parent. Cycles resolve to
//! absent.
//!
//! ## Fallible Lookups
//!
//! Every total accessor has a `try_*` counterpart that reports what went wrong:
//!
//! ```rust
//! use serde_json::json;
//! use themekit_theme::error::ThemeError;
//! use themekit_theme::resolver::ThemeResolver;
//!
//! let theme = ThemeResolver::from_json(json!({ "a": "@b", "b": "@a" })).unwrap();
//! assert!(matches!(theme.try_lookup("a"), Err(ThemeError::CyclicReference { .. })));
//! ```

pub(crate) mod cache;

/// Contains color parsing and the [color::ColorParser] trait.
pub mod color;
/// Contains the [config::ResolverConfig] struct.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [font::Font] type and the [font::FontProvider] trait.
pub mod font;
/// Contains the process-wide default theme.
pub mod globals;
/// Contains the [image::ImageProvider] trait.
pub mod image;
/// Contains the [resolver::ThemeResolver].
pub mod resolver;
/// Serde helpers for hex colors.
pub mod serde_color;
/// Contains the [value::StyleValue] data model.
pub mod value;

pub use error::{ThemeError, ThemeResult};
pub use resolver::ThemeResolver;
pub use value::{StyleMap, StyleValue};
