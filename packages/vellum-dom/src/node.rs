use std::cell::Cell;
use std::sync::Arc;

use kurbo::{Point, Rect};
use taffy::Size;

use crate::replaced::Replacement;
use crate::style::ComputedStyle;

/// Builds a [`taffy::Rect`] from widths given in CSS order (top, right, bottom, left).
pub fn sides(top: f32, right: f32, bottom: f32, left: f32) -> taffy::Rect<f32> {
    taffy::Rect {
        left,
        right,
        top,
        bottom,
    }
}

/// A line of shaped text, positioned by layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub text: String,
    /// Distance from the top of the box to the baseline.
    pub baseline: f64,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, baseline: f64) -> Self {
        Self {
            text: text.into(),
            baseline,
        }
    }
}

/// Embedded content and the (rare) boxes laid out inside it.
#[derive(Debug, Clone)]
pub struct ReplacedContent {
    pub replacement: Arc<dyn Replacement>,
    pub children: Vec<LayoutBox>,
}

/// What a box paints besides its background and border.
#[derive(Debug, Clone)]
pub enum BoxKind {
    Text(TextFragment),
    Replaced(ReplacedContent),
    /// Children in document order.
    Parent(Vec<LayoutBox>),
    Plain,
}

/// A node of the laid-out box tree.
///
/// `size` is the content size; `margin`, `border` and `padding` are used widths per side.
#[derive(Debug, Clone)]
pub struct LayoutBox {
    /// Tag name of the generating element, `None` for anonymous boxes.
    pub element_tag: Option<String>,
    pub position: Point,
    pub size: Size<f32>,
    pub margin: taffy::Rect<f32>,
    pub border: taffy::Rect<f32>,
    pub padding: taffy::Rect<f32>,
    pub style: Arc<ComputedStyle>,
    /// An `outside` list marker, painted before the box's own content.
    pub marker: Option<Box<LayoutBox>>,
    pub kind: BoxKind,
    // Set at most once per paint pass; see `mark_background_painted`.
    background_painted: Cell<bool>,
}

impl LayoutBox {
    pub fn new(kind: BoxKind) -> Self {
        let zero = sides(0.0, 0.0, 0.0, 0.0);
        Self {
            element_tag: None,
            position: Point::ZERO,
            size: Size {
                width: 0.0,
                height: 0.0,
            },
            margin: zero,
            border: zero,
            padding: zero,
            style: Arc::new(ComputedStyle::default()),
            marker: None,
            kind,
            background_painted: Cell::new(false),
        }
    }

    pub fn plain() -> Self {
        Self::new(BoxKind::Plain)
    }

    pub fn parent(children: Vec<LayoutBox>) -> Self {
        Self::new(BoxKind::Parent(children))
    }

    pub fn text(fragment: TextFragment) -> Self {
        Self::new(BoxKind::Text(fragment))
    }

    pub fn replaced(replacement: Arc<dyn Replacement>) -> Self {
        Self::new(BoxKind::Replaced(ReplacedContent {
            replacement,
            children: Vec::new(),
        }))
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.element_tag = Some(tag.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Size { width, height };
        self
    }

    pub fn with_margin(mut self, margin: taffy::Rect<f32>) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_border(mut self, border: taffy::Rect<f32>) -> Self {
        self.border = border;
        self
    }

    pub fn with_padding(mut self, padding: taffy::Rect<f32>) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_style(mut self, style: ComputedStyle) -> Self {
        self.style = Arc::new(style);
        self
    }

    pub fn with_marker(mut self, marker: LayoutBox) -> Self {
        self.marker = Some(Box::new(marker));
        self
    }

    /// Case-insensitive match against the generating element's tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.element_tag
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(tag))
    }

    /// Child boxes in document order; empty for text and plain boxes.
    pub fn children(&self) -> &[LayoutBox] {
        match &self.kind {
            BoxKind::Parent(children) => children,
            BoxKind::Replaced(content) => &content.children,
            BoxKind::Text(_) | BoxKind::Plain => &[],
        }
    }

    pub fn border_box(&self) -> Rect {
        let x = self.position.x + f64::from(self.margin.left);
        let y = self.position.y + f64::from(self.margin.top);
        let width = self.border.left
            + self.padding.left
            + self.size.width
            + self.padding.right
            + self.border.right;
        let height = self.border.top
            + self.padding.top
            + self.size.height
            + self.padding.bottom
            + self.border.bottom;
        Rect::from_origin_size((x, y), (f64::from(width), f64::from(height)))
    }

    pub fn padding_box(&self) -> Rect {
        let border_box = self.border_box();
        Rect::new(
            border_box.x0 + f64::from(self.border.left),
            border_box.y0 + f64::from(self.border.top),
            border_box.x1 - f64::from(self.border.right),
            border_box.y1 - f64::from(self.border.bottom),
        )
    }

    pub fn content_box(&self) -> Rect {
        let padding_box = self.padding_box();
        Rect::new(
            padding_box.x0 + f64::from(self.padding.left),
            padding_box.y0 + f64::from(self.padding.top),
            padding_box.x1 - f64::from(self.padding.right),
            padding_box.y1 - f64::from(self.padding.bottom),
        )
    }

    pub fn background_painted(&self) -> bool {
        self.background_painted.get()
    }

    /// Records that the background was painted in the current pass.
    ///
    /// Returns `false` if it already was, in which case the caller must not paint again.
    /// The painter is the only writer; [`reset_paint_state`](Self::reset_paint_state)
    /// re-arms the flag for an independent pass.
    pub fn mark_background_painted(&self) -> bool {
        !self.background_painted.replace(true)
    }

    /// Clears the painted flag on this box, its marker and all descendants.
    pub fn reset_paint_state(&self) {
        self.background_painted.set(false);
        if let Some(marker) = &self.marker {
            marker.reset_paint_state();
        }
        for child in self.children() {
            child.reset_paint_state();
        }
    }
}
