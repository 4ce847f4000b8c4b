use std::sync::Arc;

use serde_json::json;
use themekit_theme::font::{Font, FontBook, FontStyle};
use themekit_theme::ThemeResolver;
use themekit_widgets::apply::{apply, ApplyStyle};
use themekit_widgets::model::{ButtonModel, LabelModel, ViewModel};
use themekit_widgets::surface::{
    AttributedText, ButtonSurface, ControlState, LabelSurface, StyleTarget, ViewSurface,
};
use vello::peniko::Color;

fn theme() -> ThemeResolver {
    let parent = Arc::new(
        ThemeResolver::from_json(json!({
            "brand": "#3366FF",
            "radius": "10",
            "base": {
                "backgroundColor": "@brand",
                "borderWidth": "1.5",
                "borderColor": "#000000",
                "cornerRadius": "@radius",
                "textColor": "#111111"
            }
        }))
        .unwrap()
        .with_name("Parent"),
    );

    ThemeResolver::from_json(json!({
        "highlight": { "textColor": "#FF0000" },
        "heading": {
            "font": { "name": "Avenir", "size": 22 },
            "kern": "0.5"
        },
        "ghost": { "font": { "name": "Nope", "size": 9, "style": "italic" } }
    }))
    .unwrap()
    .with_parent(parent)
    .with_font_provider(Arc::new(FontBook::new().with_family("Avenir")))
}

/// Records every setter call in order.
struct RecordingLabel {
    calls: Vec<String>,
    text: Option<String>,
    font: Font,
    color: Color,
}

impl RecordingLabel {
    fn new(text: Option<&str>) -> Self {
        Self {
            calls: Vec::new(),
            text: text.map(str::to_string),
            font: Font::default(),
            color: Color::BLACK,
        }
    }
}

impl ViewSurface for RecordingLabel {
    fn set_background_color(&mut self, _: Color) {
        self.calls.push("background_color".into());
    }

    fn set_border_width(&mut self, width: f64) {
        self.calls.push(format!("border_width {width}"));
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.calls.push(format!("corner_radius {radius}"));
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        self.calls.push(format!("clips_to_bounds {clips}"));
    }

    fn set_border_color(&mut self, _: Color) {
        self.calls.push("border_color".into());
    }
}

impl LabelSurface for RecordingLabel {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn font(&self) -> Font {
        self.font.clone()
    }

    fn set_font(&mut self, font: Font) {
        self.calls.push("font".into());
        self.font = font;
    }

    fn text_color(&self) -> Color {
        self.color
    }

    fn set_text_color(&mut self, color: Color) {
        self.calls.push("text_color".into());
        self.color = color;
    }

    fn set_attributed_text(&mut self, text: AttributedText) {
        self.calls.push(format!("attributed_text {}", text.kern));
    }
}

#[test]
fn test_field_level_override_across_styles() {
    let theme = theme();
    let mut label = LabelModel::new("Title");
    apply(&theme, StyleTarget::Label(&mut label), "base highlight");

    assert_eq!(label.text_color, Color::from_rgb8(255, 0, 0));
    assert_eq!(label.view.corner_radius, 10.0);
    assert_eq!(label.view.border_width, 1.5);
    assert_eq!(label.view.background_color, Some(Color::from_rgb8(0x33, 0x66, 0xFF)));
    assert!(label.view.clips_to_bounds);
}

#[test]
fn test_setters_called_once_in_order() {
    let theme = theme();
    let mut label = RecordingLabel::new(Some("Hi"));
    theme.apply(StyleTarget::Label(&mut label), "base highlight heading");

    assert_eq!(
        label.calls,
        vec![
            "background_color",
            "border_width 1.5",
            "corner_radius 10",
            "clips_to_bounds true",
            "border_color",
            "font",
            "text_color",
            "attributed_text 0.5",
        ]
    );
    assert_eq!(label.font, Font::named("Avenir", 22.0));
}

#[test]
fn test_label_without_text_is_not_kerned() {
    let theme = theme();
    let mut label = RecordingLabel::new(None);
    theme.apply(StyleTarget::Label(&mut label), "heading");

    assert_eq!(label.calls, vec!["font"]);
}

#[test]
fn test_button_kern_covers_every_titled_state() {
    let theme = theme();
    let mut button = ButtonModel::new("Go", Color::BLACK).with_title("Going", ControlState::Highlighted);
    button.titles.remove(&ControlState::Selected);

    theme.apply(StyleTarget::Button(&mut button), "highlight heading");

    assert_eq!(button.title_font, Some(Font::named("Avenir", 22.0)));

    let normal = &button.attributed_titles[&ControlState::Normal];
    assert_eq!(normal.text, "Go");
    assert_eq!(normal.color, Color::from_rgb8(255, 0, 0));
    assert_eq!(normal.font, Font::named("Avenir", 22.0));
    assert_eq!(normal.kern, 0.5);

    let highlighted = &button.attributed_titles[&ControlState::Highlighted];
    assert_eq!(highlighted.text, "Going");
    assert_eq!(highlighted.color, Color::BLACK);

    assert!(!button.attributed_titles.contains_key(&ControlState::Selected));
    assert_eq!(button.title_color(ControlState::Selected), Some(Color::BLACK));
}

#[test]
fn test_unresolvable_font_name_falls_back_to_system_style() {
    let theme = theme();
    let mut label = LabelModel::new("x");
    theme.apply(StyleTarget::Label(&mut label), "ghost");

    assert_eq!(label.font, Font::system(9.0, FontStyle::Italic));
}

#[test]
fn test_view_ignores_text_fields() {
    let theme = theme();
    let mut view = ViewModel::new();
    theme.apply(StyleTarget::View(&mut view), "heading highlight");

    assert_eq!(view, ViewModel::new());
}

#[test]
fn test_unknown_target_is_a_no_op() {
    let theme = theme();
    theme.apply(StyleTarget::Unknown, "base highlight heading");
}
