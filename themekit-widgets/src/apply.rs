//! # Style Application
//!
//! Pushes resolved styles onto widgets.
//!
//! ## Usage Examples
//!
//! ```rust
//! use serde_json::json;
//! use themekit_theme::ThemeResolver;
//! use themekit_widgets::apply::ApplyStyle;
//! use themekit_widgets::model::LabelModel;
//! use themekit_widgets::surface::StyleTarget;
//! use vello::peniko::Color;
//!
//! let theme = ThemeResolver::from_json(json!({
//!     "title": { "textColor": "#336699", "cornerRadius": "4" },
//! })).unwrap();
//!
//! let mut label = LabelModel::new("Hello");
//! theme.apply(StyleTarget::Label(&mut label), "title");
//!
//! assert_eq!(label.text_color, Color::from_rgb8(0x33, 0x66, 0x99));
//! assert!(label.view.clips_to_bounds);
//! ```
//!
//! ## Field Mapping
//!
//! | Field             | View | Label | Button                          |
//! |-------------------|------|-------|---------------------------------|
//! | `backgroundColor` | yes  | yes   | yes                             |
//! | `borderWidth`     | yes  | yes   | yes                             |
//! | `cornerRadius`    | yes  | yes   | yes, also enables clipping      |
//! | `borderColor`     | yes  | yes   | yes                             |
//! | `font`            |      | yes   | title label                     |
//! | `textColor`       |      | yes   | normal state only               |
//! | `kern`            |      | yes   | every state with a title        |

use themekit_theme::ThemeResolver;

use crate::style::ResolvedStyle;
use crate::surface::{AttributedText, ButtonSurface, ControlState, LabelSurface, StyleTarget, ViewSurface};

/// Apply the space separated styles in `key` to `target`.
///
/// Styles are merged in order before anything is pushed, so each setter is
/// called at most once (per state for buttons). Unknown targets are left alone.
pub fn apply(theme: &ThemeResolver, target: StyleTarget<'_>, key: &str) {
    if let StyleTarget::Unknown = target {
        log::trace!("not applying '{}' to an unknown target", key);
        return;
    }

    let style = ResolvedStyle::resolve(theme, key);
    log::trace!("applying '{}' to {}: {:?}", key, target.kind(), style);

    match target {
        StyleTarget::View(view) => apply_view(&style, view),
        StyleTarget::Label(label) => apply_label(&style, label),
        StyleTarget::Button(button) => apply_button(&style, button),
        StyleTarget::Unknown => {},
    }
}

/// Style application as a method on the resolver.
pub trait ApplyStyle {
    /// Apply the space separated styles in `key` to `target`.
    fn apply(&self, target: StyleTarget<'_>, key: &str);
}

impl ApplyStyle for ThemeResolver {
    fn apply(&self, target: StyleTarget<'_>, key: &str) {
        apply(self, target, key);
    }
}

fn apply_view<V: ViewSurface + ?Sized>(style: &ResolvedStyle, view: &mut V) {
    if let Some(color) = style.background_color {
        view.set_background_color(color);
    }
    if let Some(width) = style.border_width {
        view.set_border_width(width);
    }
    if let Some(radius) = style.corner_radius {
        view.set_corner_radius(radius);
        view.set_clips_to_bounds(true);
    }
    if let Some(color) = style.border_color {
        view.set_border_color(color);
    }
}

fn apply_label(style: &ResolvedStyle, label: &mut dyn LabelSurface) {
    apply_view(style, &mut *label);

    if let Some(font) = &style.font {
        label.set_font(font.clone());
    }
    if let Some(color) = style.text_color {
        label.set_text_color(color);
    }
    if let Some(kern) = style.kern {
        // Nothing to kern without text.
        if let Some(text) = label.text().map(str::to_string) {
            let attributed = AttributedText {
                text,
                kern,
                font: label.font(),
                color: label.text_color(),
            };
            label.set_attributed_text(attributed);
        }
    }
}

fn apply_button(style: &ResolvedStyle, button: &mut dyn ButtonSurface) {
    apply_view(style, &mut *button);

    if let Some(color) = style.text_color {
        button.set_title_color(color, ControlState::Normal);
    }
    if let Some(font) = &style.font {
        button.set_title_font(font.clone());
    }
    if let Some(kern) = style.kern {
        for state in ControlState::ALL {
            let (Some(text), Some(color), Some(font)) = (
                button.title(state).map(str::to_string),
                button.title_color(state),
                button.title_font(),
            ) else {
                continue;
            };
            button.set_attributed_title(
                AttributedText {
                    text,
                    kern,
                    font,
                    color,
                },
                state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ButtonModel, LabelModel, ViewModel};
    use serde_json::json;
    use themekit_theme::font::{Font, FontStyle};
    use vello::peniko::Color;

    fn theme() -> ThemeResolver {
        ThemeResolver::from_json(json!({
            "base": { "textColor": "#000000", "cornerRadius": "8", "backgroundColor": "#FFFFFF" },
            "highlight": { "textColor": "#FF0000" },
            "spaced": { "kern": 2, "font": { "size": 20, "style": "bold" } }
        }))
        .unwrap()
    }

    #[test]
    fn view_gets_view_fields_only() {
        let mut view = ViewModel::new();
        apply(&theme(), StyleTarget::View(&mut view), "base highlight");

        assert_eq!(view.corner_radius, 8.0);
        assert!(view.clips_to_bounds);
        assert_eq!(view.background_color, Some(Color::WHITE));
        assert_eq!(view.border_color, None);
    }

    #[test]
    fn label_field_level_override() {
        let mut label = LabelModel::new("Hi");
        apply(&theme(), StyleTarget::Label(&mut label), "base highlight");

        assert_eq!(label.text_color, Color::from_rgb8(255, 0, 0));
        assert_eq!(label.view.corner_radius, 8.0);
        assert_eq!(label.attributed_text, None);
    }

    #[test]
    fn label_kern_uses_final_font_and_color() {
        let mut label = LabelModel::new("Hi");
        apply(&theme(), StyleTarget::Label(&mut label), "spaced highlight");

        let attributed = label.attributed_text.unwrap();
        assert_eq!(attributed.text, "Hi");
        assert_eq!(attributed.kern, 2.0);
        assert_eq!(attributed.font, Font::system(20.0, FontStyle::Bold));
        assert_eq!(attributed.color, Color::from_rgb8(255, 0, 0));
    }

    #[test]
    fn button_text_color_is_normal_state_only() {
        let mut button = ButtonModel::new("OK", Color::BLACK);
        apply(&theme(), StyleTarget::Button(&mut button), "highlight");

        assert_eq!(button.title_color(ControlState::Normal), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(button.title_color(ControlState::Selected), Some(Color::BLACK));
        assert_eq!(button.title_color(ControlState::Highlighted), Some(Color::BLACK));
    }

    #[test]
    fn unknown_target_and_missing_styles_do_nothing() {
        apply(&theme(), StyleTarget::Unknown, "base");

        let mut label = LabelModel::new("Hi");
        apply(&theme(), StyleTarget::Label(&mut label), "nope");
        assert_eq!(label, LabelModel::new("Hi"));
    }
}
