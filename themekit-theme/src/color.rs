//! Color parsing for theme values.
//!
//! Theme colors are written as six hex digits with an optional leading `#`.
//! Parsing goes through the [ColorParser] trait so a resolver can be handed a
//! different parser (or a counting fake in tests).

use std::fmt::Debug;

use vello::peniko::Color;

use crate::error::{ThemeError, ThemeResult};

/// Color used when a color key is missing or malformed.
pub const DEFAULT_COLOR: Color = Color::BLACK;

/// Turns a raw theme string into a [Color].
pub trait ColorParser: Debug + Send + Sync {
    /// Parse `raw` into a color.
    fn parse(&self, raw: &str) -> ThemeResult<Color>;
}

/// The default [ColorParser]: `#rrggbb` or `rrggbb`, always opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HexColorParser;

impl ColorParser for HexColorParser {
    fn parse(&self, raw: &str) -> ThemeResult<Color> {
        parse_hex_color(raw)
    }
}

/// Parse a hex color string.
///
/// A single leading `#` is stripped, the rest must be exactly six hex digits.
/// Red, green and blue are taken from the high, middle and low byte and the
/// alpha channel is fixed at 1.0.
///
/// Examples:
/// - `#ff0000` - Red
/// - `3366FF` - Blue-ish, case does not matter
pub fn parse_hex_color(hex: &str) -> ThemeResult<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidColor(hex.to_string()));
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ThemeError::InvalidColor(hex.to_string()))?;
    let r = ((value >> 16) & 0xff) as u8;
    let g = ((value >> 8) & 0xff) as u8;
    let b = (value & 0xff) as u8;
    Ok(Color::from_rgb8(r, g, b))
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
pub fn to_hex_string(color: Color) -> String {
    let [r, g, b, a] = color.components.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}
