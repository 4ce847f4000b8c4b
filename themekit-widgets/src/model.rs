//! Headless surfaces.
//!
//! Plain data implementations of the surface traits. They hold whatever was
//! pushed onto them, which makes them usable as view models for a renderer or
//! for checking what a style does without a UI toolkit.

use std::collections::HashMap;

use themekit_theme::font::Font;
use vello::peniko::Color;

use crate::surface::{AttributedText, ButtonSurface, ControlState, LabelSurface, ViewSurface};

/// Styleable rectangle attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    /// Background fill.
    pub background_color: Option<Color>,
    /// Border stroke width.
    pub border_width: f64,
    /// Corner radius.
    pub corner_radius: f64,
    /// Whether content is clipped to the bounds.
    pub clips_to_bounds: bool,
    /// Border stroke color.
    pub border_color: Option<Color>,
}

impl ViewModel {
    /// Create an unstyled view.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewSurface for ViewModel {
    fn set_background_color(&mut self, color: Color) {
        self.background_color = Some(color);
    }

    fn set_border_width(&mut self, width: f64) {
        self.border_width = width;
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius;
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        self.clips_to_bounds = clips;
    }

    fn set_border_color(&mut self, color: Color) {
        self.border_color = Some(color);
    }
}

/// A text label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelModel {
    /// View attributes.
    pub view: ViewModel,
    /// Plain text.
    pub text: Option<String>,
    /// Font.
    pub font: Font,
    /// Text color.
    pub text_color: Color,
    /// Styled text, set when kerning was applied.
    pub attributed_text: Option<AttributedText>,
}

impl LabelModel {
    /// Create a label showing `text` in the regular system font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl Default for LabelModel {
    fn default() -> Self {
        Self {
            view: ViewModel::new(),
            text: None,
            font: Font::default(),
            text_color: Color::BLACK,
            attributed_text: None,
        }
    }
}

impl ViewSurface for LabelModel {
    fn set_background_color(&mut self, color: Color) {
        self.view.set_background_color(color);
    }

    fn set_border_width(&mut self, width: f64) {
        self.view.set_border_width(width);
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.view.set_corner_radius(radius);
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        self.view.set_clips_to_bounds(clips);
    }

    fn set_border_color(&mut self, color: Color) {
        self.view.set_border_color(color);
    }
}

impl LabelSurface for LabelModel {
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn font(&self) -> Font {
        self.font.clone()
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn text_color(&self) -> Color {
        self.text_color
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_attributed_text(&mut self, text: AttributedText) {
        self.attributed_text = Some(text);
    }
}

/// A button with per-state titles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonModel {
    /// View attributes.
    pub view: ViewModel,
    /// Plain titles per state.
    pub titles: HashMap<ControlState, String>,
    /// Title colors per state.
    pub title_colors: HashMap<ControlState, Color>,
    /// Styled titles per state, set when kerning was applied.
    pub attributed_titles: HashMap<ControlState, AttributedText>,
    /// Font of the title label.
    pub title_font: Option<Font>,
}

impl ButtonModel {
    /// Create a button with the same title and color in every state.
    pub fn new(title: impl Into<String>, color: Color) -> Self {
        let title = title.into();
        Self {
            titles: ControlState::ALL.iter().map(|s| (*s, title.clone())).collect(),
            title_colors: ControlState::ALL.iter().map(|s| (*s, color)).collect(),
            title_font: Some(Font::default()),
            ..Self::default()
        }
    }

    /// Set the title shown in `state`.
    pub fn with_title(mut self, title: impl Into<String>, state: ControlState) -> Self {
        self.titles.insert(state, title.into());
        self
    }
}

impl ViewSurface for ButtonModel {
    fn set_background_color(&mut self, color: Color) {
        self.view.set_background_color(color);
    }

    fn set_border_width(&mut self, width: f64) {
        self.view.set_border_width(width);
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.view.set_corner_radius(radius);
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        self.view.set_clips_to_bounds(clips);
    }

    fn set_border_color(&mut self, color: Color) {
        self.view.set_border_color(color);
    }
}

impl ButtonSurface for ButtonModel {
    fn title(&self, state: ControlState) -> Option<&str> {
        self.titles.get(&state).map(String::as_str)
    }

    fn title_color(&self, state: ControlState) -> Option<Color> {
        self.title_colors.get(&state).copied()
    }

    fn set_title_color(&mut self, color: Color, state: ControlState) {
        self.title_colors.insert(state, color);
    }

    fn title_font(&self) -> Option<Font> {
        self.title_font.clone()
    }

    fn set_title_font(&mut self, font: Font) {
        self.title_font = Some(font);
    }

    fn set_attributed_title(&mut self, title: AttributedText, state: ControlState) {
        self.attributed_titles.insert(state, title);
    }
}
