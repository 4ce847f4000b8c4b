#![warn(missing_docs)]

//! Runtime theme lookup and style application for UI toolkits.
//!
//! Themes are nested key/value data with `@references`, optional parent
//! themes and typed, cached accessors that never fail. Named style blocks can
//! be pushed onto views, labels and buttons.

pub use vello::peniko as color;

pub use themekit_theme as theme;
pub use themekit_widgets as widgets;

pub use themekit_theme::globals::{default_theme, set_default_theme};

/// A "prelude" for users of themekit.
///
/// Importing this module brings into scope the most common types
/// needed to resolve and apply a theme.
///
/// ```rust
/// use themekit::prelude::*;
/// use serde_json::json;
///
/// let theme = ThemeResolver::from_json(json!({
///     "card": { "backgroundColor": "#FAFAFA", "cornerRadius": "12" },
/// })).unwrap();
///
/// let mut view = ViewModel::new();
/// theme.apply(StyleTarget::View(&mut view), "card");
/// assert_eq!(view.corner_radius, 12.0);
/// ```
pub mod prelude {
    pub use crate::theme::config::ResolverConfig;
    pub use crate::theme::font::{Font, FontFamily, FontStyle};
    pub use crate::theme::globals::{default_theme, set_default_theme};
    pub use crate::theme::image::ImageRef;
    pub use crate::theme::{StyleMap, StyleValue, ThemeError, ThemeResolver, ThemeResult};

    pub use crate::widgets::apply::ApplyStyle;
    pub use crate::widgets::model::{ButtonModel, LabelModel, ViewModel};
    pub use crate::widgets::style::ResolvedStyle;
    pub use crate::widgets::surface::{
        AttributedText, ButtonSurface, ControlState, LabelSurface, StyleTarget, ViewSurface,
    };

    // Color
    pub use crate::color::Color;
}
