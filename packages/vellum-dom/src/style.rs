//! Resolved style values, as handed over by the cascade.

use peniko::Color;
use peniko::color::palette;
use taffy::Rect;

/// The `background-image` property. Only single-layer backgrounds are supported.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BackgroundImage {
    #[default]
    None,
    /// An image resource locator, resolved by an image loader at paint time.
    Url(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundRepeat {
    #[default]
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundAttachment {
    #[default]
    Scroll,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionKeyword {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl PositionKeyword {
    /// The keyword expressed as a percentage along its axis.
    pub fn percentage(self) -> f64 {
        match self {
            Self::Left | Self::Top => 0.0,
            Self::Center => 50.0,
            Self::Right | Self::Bottom => 100.0,
        }
    }
}

/// One component of `background-position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionComponent {
    Keyword(PositionKeyword),
    Percentage(f64),
    /// A length already resolved to px.
    Length(f64),
}

impl PositionComponent {
    pub fn is_keyword(self, keywords: &[PositionKeyword]) -> bool {
        matches!(self, Self::Keyword(keyword) if keywords.contains(&keyword))
    }
}

/// The `background-position` property: one or two components in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundPosition {
    pub first: PositionComponent,
    pub second: Option<PositionComponent>,
}

impl BackgroundPosition {
    pub fn single(value: PositionComponent) -> Self {
        Self {
            first: value,
            second: None,
        }
    }

    pub fn pair(first: PositionComponent, second: PositionComponent) -> Self {
        Self {
            first,
            second: Some(second),
        }
    }
}

impl Default for BackgroundPosition {
    /// `0% 0%`
    fn default() -> Self {
        Self::pair(
            PositionComponent::Percentage(0.0),
            PositionComponent::Percentage(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Hidden,
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecorationLine {
    Overline,
    Underline,
    LineThrough,
}

/// Resolved style of a box. Fields hold computed values; border widths live on the box
/// itself as used values from layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub color: Color,
    pub font_size: f32,
    pub background_color: Color,
    pub background_image: BackgroundImage,
    pub background_position: BackgroundPosition,
    pub background_repeat: BackgroundRepeat,
    pub background_attachment: BackgroundAttachment,
    pub border_color: Rect<Color>,
    pub border_style: Rect<BorderStyle>,
    /// Decoration lines in declaration order.
    pub text_decoration: Vec<TextDecorationLine>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            color: palette::css::BLACK,
            font_size: 16.0,
            background_color: palette::css::TRANSPARENT,
            background_image: BackgroundImage::None,
            background_position: BackgroundPosition::default(),
            background_repeat: BackgroundRepeat::default(),
            background_attachment: BackgroundAttachment::default(),
            border_color: uniform(palette::css::BLACK),
            border_style: uniform(BorderStyle::None),
            text_decoration: Vec::new(),
        }
    }
}

impl ComputedStyle {
    /// Sets the same border color and style on all four sides.
    pub fn with_border(mut self, style: BorderStyle, color: Color) -> Self {
        self.border_style = uniform(style);
        self.border_color = uniform(color);
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_background_image(mut self, url: impl Into<String>) -> Self {
        self.background_image = BackgroundImage::Url(url.into());
        self
    }
}

fn uniform<T: Copy>(value: T) -> Rect<T> {
    Rect {
        left: value,
        right: value,
        top: value,
        bottom: value,
    }
}
