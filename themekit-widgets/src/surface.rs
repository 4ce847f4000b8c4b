//! The setters a UI layer exposes to have styles pushed onto it.
//!
//! Each widget kind that can be styled implements one of [ViewSurface],
//! [LabelSurface] or [ButtonSurface]; [StyleTarget] is the closed set of kinds
//! [apply](crate::apply::apply) dispatches over.

use themekit_theme::font::Font;
use vello::peniko::Color;

/// Interaction states of a multi-state control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Idle.
    Normal,
    /// Toggled on.
    Selected,
    /// Being pressed.
    Highlighted,
}

impl ControlState {
    /// Every state, in the order kerning is applied.
    pub const ALL: [ControlState; 3] = [
        ControlState::Normal,
        ControlState::Selected,
        ControlState::Highlighted,
    ];
}

/// Text rendered with a single letter spacing, font and color.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedText {
    /// The characters.
    pub text: String,
    /// Extra space between letters, in points.
    pub kern: f64,
    /// The font the text is drawn in.
    pub font: Font,
    /// The text color.
    pub color: Color,
}

/// Any styleable rectangle.
pub trait ViewSurface {
    /// Set the background fill.
    fn set_background_color(&mut self, color: Color);
    /// Set the border stroke width.
    fn set_border_width(&mut self, width: f64);
    /// Set the corner radius.
    fn set_corner_radius(&mut self, radius: f64);
    /// Clip content to the (rounded) bounds.
    fn set_clips_to_bounds(&mut self, clips: bool);
    /// Set the border stroke color.
    fn set_border_color(&mut self, color: Color);
}

/// A view displaying a single piece of text.
pub trait LabelSurface: ViewSurface {
    /// The plain text currently displayed.
    fn text(&self) -> Option<&str>;
    /// The current font.
    fn font(&self) -> Font;
    /// Set the font.
    fn set_font(&mut self, font: Font);
    /// The current text color.
    fn text_color(&self) -> Color;
    /// Set the text color.
    fn set_text_color(&mut self, color: Color);
    /// Replace the displayed text with styled text.
    fn set_attributed_text(&mut self, text: AttributedText);
}

/// A control with a title per [ControlState].
pub trait ButtonSurface: ViewSurface {
    /// The title shown in `state`.
    fn title(&self, state: ControlState) -> Option<&str>;
    /// The title color used in `state`.
    fn title_color(&self, state: ControlState) -> Option<Color>;
    /// Set the title color used in `state`.
    fn set_title_color(&mut self, color: Color, state: ControlState);
    /// The font of the title label.
    fn title_font(&self) -> Option<Font>;
    /// Set the font of the title label.
    fn set_title_font(&mut self, font: Font);
    /// Replace the title shown in `state` with styled text.
    fn set_attributed_title(&mut self, title: AttributedText, state: ControlState);
}

/// A styleable target, tagged by kind.
pub enum StyleTarget<'a> {
    /// A plain view.
    View(&'a mut dyn ViewSurface),
    /// A label.
    Label(&'a mut dyn LabelSurface),
    /// A button.
    Button(&'a mut dyn ButtonSurface),
    /// Something that cannot be styled. Applying to it does nothing.
    Unknown,
}

impl StyleTarget<'_> {
    /// Short name of the kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleTarget::View(_) => "view",
            StyleTarget::Label(_) => "label",
            StyleTarget::Button(_) => "button",
            StyleTarget::Unknown => "unknown",
        }
    }
}
