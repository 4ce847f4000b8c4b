//! # Resolved Styles
//!
//! A style block is a nested mapping in the theme:
//!
//! ```json
//! {
//!   "primaryButton": {
//!     "backgroundColor": "@brand",
//!     "cornerRadius": "6",
//!     "borderWidth": 1,
//!     "borderColor": "#224466",
//!     "textColor": "#FFFFFF",
//!     "font": { "size": 15, "style": "bold" },
//!     "kern": 1.2
//!   }
//! }
//! ```
//!
//! [ResolvedStyle] holds the typed fields of one or more such blocks. Field
//! values may be references; numbers may be native or numeric strings. Fields
//! that are missing or malformed are left unset.
//!
//! Several blocks are combined field by field, so `"base highlight"` keeps
//! every field of `base` that `highlight` does not set.

use themekit_theme::font::Font;
use themekit_theme::value::{StyleMap, StyleValue};
use themekit_theme::ThemeResolver;
use vello::peniko::Color;

/// Field names understood in a style block.
pub mod fields {
    /// View background fill.
    pub const BACKGROUND_COLOR: &str = "backgroundColor";
    /// View border width.
    pub const BORDER_WIDTH: &str = "borderWidth";
    /// View corner radius.
    pub const CORNER_RADIUS: &str = "cornerRadius";
    /// View border color.
    pub const BORDER_COLOR: &str = "borderColor";
    /// Font block of a label or button title.
    pub const FONT: &str = "font";
    /// Text color of a label or button title.
    pub const TEXT_COLOR: &str = "textColor";
    /// Letter spacing of a label or button title.
    pub const KERN: &str = "kern";
}

/// The typed fields of one or more merged style blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    /// View background fill.
    pub background_color: Option<Color>,
    /// View border width.
    pub border_width: Option<f64>,
    /// View corner radius.
    pub corner_radius: Option<f64>,
    /// View border color.
    pub border_color: Option<Color>,
    /// Text font.
    pub font: Option<Font>,
    /// Text color.
    pub text_color: Option<Color>,
    /// Letter spacing.
    pub kern: Option<f64>,
}

impl ResolvedStyle {
    /// Resolve the space separated style names in `key`, in order.
    ///
    /// Names that do not resolve to a style block are skipped.
    pub fn resolve(theme: &ThemeResolver, key: &str) -> Self {
        let mut style = Self::default();
        for name in key.split(' ').filter(|name| !name.is_empty()) {
            match theme.style_block(name) {
                Some(block) => style.merge(Self::from_block(theme, block)),
                None => log::debug!("theme '{}': no style block '{}'", theme.name(), name),
            }
        }
        style
    }

    /// Read the fields of a single style block.
    pub fn from_block(theme: &ThemeResolver, block: &StyleMap) -> Self {
        let field = |name: &str| {
            block
                .get(name)
                .and_then(|value| theme.resolve_value(value).ok())
        };
        let color = |name: &str| {
            let raw = field(name)?.as_str()?;
            theme
                .parse_color(raw)
                .map_err(|err| log::debug!("style field '{}': {}", name, err))
                .ok()
        };
        let number = |name: &str| field(name).and_then(StyleValue::to_f64);
        let font = field(fields::FONT)
            .and_then(StyleValue::as_map)
            .and_then(|font| {
                theme
                    .build_font(font)
                    .map_err(|err| log::debug!("style field 'font': {}", err))
                    .ok()
            });

        Self {
            background_color: color(fields::BACKGROUND_COLOR),
            border_width: number(fields::BORDER_WIDTH),
            corner_radius: number(fields::CORNER_RADIUS),
            border_color: color(fields::BORDER_COLOR),
            font,
            text_color: color(fields::TEXT_COLOR),
            kern: number(fields::KERN),
        }
    }

    /// Overlay `other` onto this style. Fields set in `other` win.
    pub fn merge(&mut self, other: ResolvedStyle) {
        self.background_color = other.background_color.or(self.background_color);
        self.border_width = other.border_width.or(self.border_width);
        self.corner_radius = other.corner_radius.or(self.corner_radius);
        self.border_color = other.border_color.or(self.border_color);
        self.font = other.font.or(self.font.take());
        self.text_color = other.text_color.or(self.text_color);
        self.kern = other.kern.or(self.kern);
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
