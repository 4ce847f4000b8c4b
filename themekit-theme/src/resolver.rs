//! # Theme Resolver
//!
//! [ThemeResolver] owns one theme's raw data and turns keys into typed values.
//!
//! ## Overview
//!
//! A lookup goes through these steps:
//!
//! 1. **Own data**: the key is looked up verbatim in this theme. If it is not
//!    there and the key is a dotted path such as `button.font.size`, the path
//!    prefix is resolved (with all of these steps) to a style block and the
//!    last segment is looked up inside it.
//! 2. **Reference chasing**: while the value found is a reference (`"@other"`),
//!    the target key is resolved the same way. A chain that comes back to a
//!    key it is still resolving, or grows longer than the configured limit,
//!    resolves to nothing.
//! 3. **Parent fallback**: if the chain in this theme ends without a value,
//!    the parent theme resolves the original key within its own data and its
//!    own parents.
//! 4. **Coercion**: typed accessors convert the value, falling back to parsing
//!    strings, and to a fixed default when that fails.
//!
//! Colors and fonts are cached per requested key once they resolve.
//!
//! ## Usage Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::json;
//! use themekit_theme::resolver::ThemeResolver;
//! use vello::peniko::Color;
//!
//! let base = Arc::new(ThemeResolver::from_json(json!({
//!     "brand": "#FF0000",
//!     "spacing": "8",
//! })).unwrap());
//!
//! let theme = ThemeResolver::from_json(json!({
//!     "title": "@brand",
//!     "compact": "yes",
//! }))
//! .unwrap()
//! .with_parent(base);
//!
//! assert_eq!(theme.color("title"), Color::from_rgb8(255, 0, 0));
//! assert_eq!(theme.integer("spacing"), 8);
//! assert!(theme.bool("compact"));
//! assert_eq!(theme.integer("missing"), 0);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use vello::peniko::Color;

use crate::cache::{Derived, DerivedCache};
use crate::color::{ColorParser, HexColorParser};
use crate::config::ResolverConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::font::{Font, FontBook, FontProvider, FontStyle};
use crate::image::{ImageCatalog, ImageProvider, ImageRef};
use crate::value::{StyleMap, StyleValue};

/// Name given to resolvers that were not named explicitly.
pub const DEFAULT_THEME_NAME: &str = "Default";

/// Resolves theme keys to typed values.
///
/// Cheap to share behind an [Arc]; all accessors take `&self` and the caches
/// use interior locking.
pub struct ThemeResolver {
    name: String,
    data: StyleMap,
    parent: Option<Arc<ThemeResolver>>,
    config: ResolverConfig,
    fonts: Arc<dyn FontProvider>,
    images: Arc<dyn ImageProvider>,
    color_parser: Arc<dyn ColorParser>,
    color_cache: DerivedCache<Color>,
    font_cache: DerivedCache<Font>,
}

/// Keys whose resolution is in progress, outermost first.
///
/// Alias hops and dotted path prefixes are entered before they are resolved
/// and left once they finish, so meeting a key that is still on the stack is a
/// cycle.
struct ReferenceChain {
    path: Vec<String>,
    limit: usize,
}

impl ReferenceChain {
    fn new(limit: usize) -> Self {
        Self {
            path: Vec::new(),
            limit,
        }
    }

    fn enter(&mut self, key: &str) -> ThemeResult<()> {
        if self.path.iter().any(|visited| visited == key) {
            let mut path = self.path.clone();
            path.push(key.to_string());
            return Err(ThemeError::CyclicReference { path });
        }
        if self.path.len() > self.limit {
            return Err(ThemeError::ReferenceDepthExceeded {
                key: self.path[0].clone(),
                limit: self.limit,
            });
        }
        self.path.push(key.to_string());
        Ok(())
    }

    fn leave(&mut self) {
        self.path.pop();
    }
}

impl ThemeResolver {
    /// Create a resolver over `data` with default collaborators.
    pub fn new(data: StyleMap) -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            data,
            parent: None,
            config: ResolverConfig::default(),
            fonts: Arc::new(FontBook::new()),
            images: Arc::new(ImageCatalog::new()),
            color_parser: Arc::new(HexColorParser),
            color_cache: DerivedCache::new(),
            font_cache: DerivedCache::new(),
        }
    }

    /// Create a resolver from already parsed JSON. The top level must be an
    /// object.
    pub fn from_json(value: serde_json::Value) -> ThemeResult<Self> {
        match StyleValue::from_json(value) {
            Some(StyleValue::Map(data)) => Ok(Self::new(data)),
            _ => Err(ThemeError::type_mismatch("<root>", "mapping")),
        }
    }

    /// Set the theme name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Fall back to `parent` for keys this theme does not define.
    pub fn with_parent(mut self, parent: Arc<ThemeResolver>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the font system collaborator.
    pub fn with_font_provider(mut self, fonts: Arc<dyn FontProvider>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replace the image collaborator.
    pub fn with_image_provider(mut self, images: Arc<dyn ImageProvider>) -> Self {
        self.images = images;
        self
    }

    /// Replace the color parser.
    pub fn with_color_parser(mut self, parser: Arc<dyn ColorParser>) -> Self {
        self.color_parser = parser;
        self
    }

    /// The theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent theme, if any.
    pub fn parent(&self) -> Option<&Arc<ThemeResolver>> {
        self.parent.as_ref()
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// This theme's own data, without parents.
    pub fn data(&self) -> &StyleMap {
        &self.data
    }

    /// Check if `key` resolves to a value.
    pub fn contains(&self, key: &str) -> bool {
        self.try_lookup(key).is_ok()
    }

    /// Entry for `key` in this theme's own data, walking dotted paths into
    /// style blocks. References are left as they are.
    fn entry<'a>(&'a self, key: &str, chain: &mut ReferenceChain) -> ThemeResult<&'a StyleValue> {
        if let Some(value) = self.data.get(key) {
            return Ok(value);
        }

        let (block, leaf) = key.rsplit_once('.').ok_or_else(|| ThemeError::missing_key(key))?;
        if block.is_empty() || leaf.is_empty() {
            return Err(ThemeError::missing_key(key));
        }

        let block = self.resolve(block, chain).map_err(|err| {
            if err.is_missing() {
                ThemeError::missing_key(key)
            } else {
                err
            }
        })?;
        block
            .as_map()
            .and_then(|map| map.get(leaf))
            .ok_or_else(|| ThemeError::missing_key(key))
    }

    fn resolve<'a>(&'a self, key: &str, chain: &mut ReferenceChain) -> ThemeResult<&'a StyleValue> {
        chain.enter(key)?;
        let result = self.resolve_entered(key, chain);
        chain.leave();
        result
    }

    fn resolve_entered<'a>(
        &'a self,
        key: &str,
        chain: &mut ReferenceChain,
    ) -> ThemeResult<&'a StyleValue> {
        let local = self.entry(key, chain).and_then(|value| {
            match value.reference_target(self.config.reference_marker) {
                Some(target) => self.resolve(target, chain),
                None => Ok(value),
            }
        });

        match (local, &self.parent) {
            (Err(err), Some(parent)) if err.is_missing() => parent.try_lookup(key),
            (local, _) => local,
        }
    }

    /// Resolve `key` to the first value in its alias chain that is not a
    /// reference.
    ///
    /// The chain is followed in this theme first. If it ends without a value,
    /// the parent resolves `key` on its own terms.
    pub fn try_lookup(&self, key: &str) -> ThemeResult<&StyleValue> {
        let mut chain = ReferenceChain::new(self.config.max_reference_depth);
        self.resolve(key, &mut chain)
    }

    /// Follow `value` if it is a reference. Non-references are returned as is.
    ///
    /// Used for fields inside style blocks, which may point elsewhere.
    pub fn resolve_value<'a>(&'a self, value: &'a StyleValue) -> ThemeResult<&'a StyleValue> {
        match value.reference_target(self.config.reference_marker) {
            Some(target) => self.try_lookup(target),
            None => Ok(value),
        }
    }

    /// Log an absorbed failure at a level matching how unusual it is.
    fn absorb(&self, key: &str, err: &ThemeError) {
        match err {
            ThemeError::MissingKey { .. } => {
                log::trace!("theme '{}': {}", self.name, err)
            },
            ThemeError::CyclicReference { .. } | ThemeError::ReferenceDepthExceeded { .. } => {
                log::warn!("theme '{}': resolving '{}': {}", self.name, key, err)
            },
            _ => log::debug!("theme '{}': resolving '{}': {}", self.name, key, err),
        }
    }

    /// The resolved value for `key`, untyped.
    pub fn object(&self, key: &str) -> Option<&StyleValue> {
        self.try_lookup(key).map_err(|err| self.absorb(key, &err)).ok()
    }

    /// The resolved style block for `key`.
    pub fn style_block(&self, key: &str) -> Option<&StyleMap> {
        self.object(key).and_then(StyleValue::as_map)
    }

    /// The resolved value for `key` if it is natively a string.
    pub fn try_string(&self, key: &str) -> ThemeResult<&str> {
        let value = self.try_lookup(key)?;
        value
            .as_str()
            .ok_or_else(|| ThemeError::type_mismatch(key, "string"))
    }

    /// The resolved value for `key` if it is natively a string.
    ///
    /// Numbers and booleans are not stringified.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.try_string(key).map_err(|err| self.absorb(key, &err)).ok()
    }

    /// The resolved boolean for `key`.
    ///
    /// Native booleans are returned as is. Strings are true when they equal
    /// `true`, `yes` or `1`, ignoring case. Everything else is false.
    pub fn bool(&self, key: &str) -> bool {
        let Some(value) = self.object(key) else {
            return false;
        };
        match (value.as_bool(), value.as_str()) {
            (Some(value), _) => value,
            (None, Some(string)) => {
                ["true", "yes", "1"].iter().any(|t| string.eq_ignore_ascii_case(t))
            },
            (None, None) => false,
        }
    }

    fn number<T: std::str::FromStr>(
        &self,
        key: &str,
        native: impl FnOnce(&StyleValue) -> Option<T>,
        zero: T,
    ) -> T {
        let Some(value) = self.object(key) else {
            return zero;
        };
        if let Some(number) = native(value) {
            return number;
        }
        match value.as_str().map(str::parse::<T>) {
            Some(Ok(number)) => number,
            Some(Err(_)) => {
                self.absorb(key, &ThemeError::invalid_number(key, value.as_str().unwrap_or_default()));
                zero
            },
            None => zero,
        }
    }

    /// The resolved integer for `key`, parsing strings. `0` on failure.
    pub fn integer(&self, key: &str) -> i64 {
        self.number(key, StyleValue::as_i64, 0)
    }

    /// The resolved single precision number for `key`, parsing strings. `0` on
    /// failure.
    pub fn float(&self, key: &str) -> f32 {
        self.number(key, |value| value.as_f64().map(|v| v as f32), 0.0)
    }

    /// The resolved double precision number for `key`, parsing strings. `0` on
    /// failure.
    pub fn double(&self, key: &str) -> f64 {
        self.number(key, StyleValue::as_f64, 0.0)
    }

    /// Parse a raw color string through this resolver's parser. Not cached.
    pub fn parse_color(&self, raw: &str) -> ThemeResult<Color> {
        self.color_parser.parse(raw)
    }

    /// The color for `key`, or an error describing why there is none.
    ///
    /// Successful results are cached under `key`; failures are not.
    pub fn try_color(&self, key: &str) -> ThemeResult<Color> {
        self.color_cache.get_or_build(key, || {
            let raw = self.try_string(key)?;
            self.parse_color(raw).map(Derived::Cached)
        })
    }

    /// The color for `key`, or the configured default color (black).
    pub fn color(&self, key: &str) -> Color {
        self.try_color(key).unwrap_or_else(|err| {
            self.absorb(key, &err);
            self.config.default_color
        })
    }

    /// Build a font from a font block without touching the font cache.
    ///
    /// A block needs a numeric `size` (a number or numeric string). With a
    /// `name`, the font system is asked for that font and an unknown name falls
    /// back to the system font. Without one, `style` picks the system variant.
    /// Field values may be references.
    pub fn build_font(&self, block: &StyleMap) -> ThemeResult<Font> {
        self.construct_font("<font>", block).map(|font| match font {
            Derived::Cached(font) | Derived::Transient(font) => font,
        })
    }

    fn field<'a>(&'a self, block: &'a StyleMap, field: &str) -> Option<&'a StyleValue> {
        let value = block.get(field)?;
        self.resolve_value(value)
            .map_err(|err| self.absorb(field, &err))
            .ok()
    }

    fn construct_font(&self, key: &str, block: &StyleMap) -> ThemeResult<Derived<Font>> {
        let size = self.field(block, "size").ok_or_else(|| ThemeError::MissingFontSize {
            key: key.to_string(),
        })?;
        let size = match (size.to_f64(), size.as_str()) {
            (Some(size), _) => size as f32,
            (None, Some(raw)) => return Err(ThemeError::invalid_number(key, raw)),
            (None, None) => {
                return Err(ThemeError::MissingFontSize {
                    key: key.to_string(),
                })
            },
        };

        let style = FontStyle::from_name(self.field(block, "style").and_then(StyleValue::as_str));

        if let Some(name) = self.field(block, "name").and_then(StyleValue::as_str) {
            if let Some(font) = self.fonts.named(name, size) {
                return Ok(Derived::Cached(font));
            }
            self.absorb(
                key,
                &ThemeError::UnresolvableFontName {
                    name: name.to_string(),
                },
            );
            return Ok(Derived::Transient(self.fonts.system(size, style)));
        }

        Ok(Derived::Cached(self.fonts.system(size, style)))
    }

    /// The font for `key`, or an error describing why there is none.
    ///
    /// Fonts built from a known name or a system style are cached under `key`.
    /// When the name is unknown the system font is returned uncached.
    pub fn try_font(&self, key: &str) -> ThemeResult<Font> {
        self.font_cache.get_or_build(key, || {
            let block = self
                .try_lookup(key)?
                .as_map()
                .ok_or_else(|| ThemeError::type_mismatch(key, "font block"))?;
            self.construct_font(key, block)
        })
    }

    /// The font for `key`, or the regular system font at the configured
    /// default size (12pt).
    pub fn font(&self, key: &str) -> Font {
        self.try_font(key).unwrap_or_else(|err| {
            self.absorb(key, &err);
            Font::system(self.config.default_font_size, FontStyle::Regular)
        })
    }

    /// The image named by the string at `key`.
    pub fn image(&self, key: &str) -> Option<ImageRef> {
        let name = self.string(key)?;
        let image = self.images.image(name);
        if image.is_none() {
            log::debug!("theme '{}': image '{}' for '{}' not found", self.name, name, key);
        }
        image
    }

    /// Number of cached colors and fonts.
    pub fn cached_len(&self) -> (usize, usize) {
        (self.color_cache.len(), self.font_cache.len())
    }
}

impl Debug for ThemeResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("name", &self.name)
            .field("keys", &self.data.len())
            .field("parent", &self.parent.as_ref().map(|p| p.name()))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
