mod background;
mod border;
mod replaced;
mod text;

use kurbo::Point;
use vellum_dom::{BoxKind, ComputedStyle, LayoutBox, Page, TextFragment};
use vellum_net::ImageResolver;
use vellum_scene::{PaintCx, SceneError};

pub use background::{background_position, has_background};
pub use border::paint_border;
pub use replaced::paint_replaced;
pub use text::decoration_y;

use crate::PaintResult;

/// The external text engine: paints the glyphs of one shaped run.
///
/// `origin` is the start of the run's baseline in the current user space.
pub trait TextRunPainter {
    fn paint_text_run(
        &self,
        cx: &mut PaintCx<'_>,
        fragment: &TextFragment,
        style: &ComputedStyle,
        origin: Point,
    ) -> Result<(), SceneError>;
}

/// Walks a box tree and pushes its paint into a [`PaintCx`].
///
/// Holds the collaborators painting needs besides the tree itself; the tree is read-only
/// apart from each box's background flag.
pub struct BoxPainter<'a> {
    pub(crate) text: &'a dyn TextRunPainter,
    pub(crate) images: &'a dyn ImageResolver,
}

impl<'a> BoxPainter<'a> {
    pub fn new(text: &'a dyn TextRunPainter, images: &'a dyn ImageResolver) -> Self {
        Self { text, images }
    }

    /// Paints the page background followed by the root box and its descendants.
    pub fn paint_page(&self, cx: &mut PaintCx<'_>, page: &Page) -> PaintResult {
        self.paint_page_background(cx, page)?;
        self.paint_box(cx, &page.root)
    }

    /// Paints `layout_box` and its descendants: background, outside marker, content, border.
    pub fn paint_box(&self, cx: &mut PaintCx<'_>, layout_box: &LayoutBox) -> PaintResult {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            tag = ?layout_box.element_tag,
            border_box = ?layout_box.border_box(),
            "paint_box"
        );

        if has_background(layout_box) {
            self.paint_background(cx, layout_box, true)?;
        }

        if let Some(marker) = &layout_box.marker {
            self.paint_box(cx, marker)?;
        }

        match &layout_box.kind {
            // Text boxes carry no border of their own: the inline box around them does.
            BoxKind::Text(fragment) => return self.paint_text(cx, layout_box, fragment),
            BoxKind::Replaced(content) => {
                paint_replaced(cx, layout_box, content.replacement.as_ref())?;
                for child in &content.children {
                    self.paint_box(cx, child)?;
                }
            }
            BoxKind::Parent(children) => {
                for child in children {
                    self.paint_box(cx, child)?;
                }
            }
            BoxKind::Plain => {}
        }

        paint_border(cx, layout_box)
    }
}
