//! # Fonts
//!
//! Font blocks in a theme look like `{ "name": "Avenir-Heavy", "size": 14 }` or
//! `{ "size": "12", "style": "bold" }`. This module holds the resolved [Font]
//! value and the [FontProvider] seam through which named fonts are looked up.
//!
//! The resolver owns the lookup rules (caching, fallbacks); the provider only
//! answers whether a family exists.

use std::collections::HashSet;
use std::fmt::Debug;

/// Size of the font returned when a font key is missing or malformed.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// The family a [Font] is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// The platform's system font.
    System,
    /// A font registered under this name.
    Named(String),
}

/// System font variants selectable through a font block's `style`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Regular weight, upright.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
    /// Italic.
    Italic,
}

impl FontStyle {
    /// Parse a style name. Anything other than `bold` or `italic` is regular.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(name) if name.eq_ignore_ascii_case("bold") => FontStyle::Bold,
            Some(name) if name.eq_ignore_ascii_case("italic") => FontStyle::Italic,
            _ => FontStyle::Regular,
        }
    }
}

/// A constructed font.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// The family the font belongs to.
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
    /// Style variant.
    pub style: FontStyle,
}

impl Font {
    /// A system font variant.
    pub fn system(size: f32, style: FontStyle) -> Self {
        Self {
            family: FontFamily::System,
            size,
            style,
        }
    }

    /// A named font at the given size.
    pub fn named(name: impl Into<String>, size: f32) -> Self {
        Self {
            family: FontFamily::Named(name.into()),
            size,
            style: FontStyle::Regular,
        }
    }

    /// The font handed out when nothing better can be resolved.
    pub fn fallback() -> Self {
        Self::system(DEFAULT_FONT_SIZE, FontStyle::Regular)
    }

    /// The registered name, if this is not a system font.
    pub fn name(&self) -> Option<&str> {
        match &self.family {
            FontFamily::System => None,
            FontFamily::Named(name) => Some(name),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Font system collaborator.
pub trait FontProvider: Debug + Send + Sync {
    /// Construct the font registered as `name`, or `None` if the font system
    /// does not know it.
    fn named(&self, name: &str, size: f32) -> Option<Font>;

    /// Construct a system font variant.
    fn system(&self, size: f32, style: FontStyle) -> Font {
        Font::system(size, style)
    }
}

/// The default [FontProvider]: a set of known family names.
#[derive(Debug, Clone, Default)]
pub struct FontBook {
    families: HashSet<String>,
}

impl FontBook {
    /// Create an empty font book. Every named lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family name, returning the book for chaining.
    pub fn with_family(mut self, name: impl Into<String>) -> Self {
        self.register(name);
        self
    }

    /// Register a family name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.families.insert(name.into());
    }

    /// Check if a family is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.families.contains(name)
    }
}

impl FontProvider for FontBook {
    fn named(&self, name: &str, size: f32) -> Option<Font> {
        self.contains(name).then(|| Font::named(name, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names_are_case_insensitive() {
        assert_eq!(FontStyle::from_name(Some("Bold")), FontStyle::Bold);
        assert_eq!(FontStyle::from_name(Some("italic")), FontStyle::Italic);
        assert_eq!(FontStyle::from_name(Some("heavy")), FontStyle::Regular);
        assert_eq!(FontStyle::from_name(None), FontStyle::Regular);
    }

    #[test]
    fn font_book_only_knows_registered_families() {
        let book = FontBook::new().with_family("Avenir");
        assert_eq!(book.named("Avenir", 14.0), Some(Font::named("Avenir", 14.0)));
        assert_eq!(book.named("Comic", 14.0), None);
        assert_eq!(book.system(9.0, FontStyle::Bold), Font::system(9.0, FontStyle::Bold));
    }

    #[test]
    fn fallback_is_regular_system_twelve() {
        let font = Font::default();
        assert_eq!(font.family, FontFamily::System);
        assert_eq!(font.size, 12.0);
        assert_eq!(font.style, FontStyle::Regular);
        assert_eq!(font.name(), None);
    }
}
