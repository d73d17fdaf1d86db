use kurbo::{Line, Point};
use vellum_dom::style::TextDecorationLine;
use vellum_dom::{LayoutBox, TextFragment};
use vellum_scene::PaintCx;

use super::BoxPainter;
use crate::PaintResult;

/// Decoration lines sit this many em away from the baseline.
const DECORATION_OFFSET_EM: f64 = 0.15;

impl BoxPainter<'_> {
    /// Paints a text box's glyphs through the text engine, then its decoration lines.
    pub(crate) fn paint_text(
        &self,
        cx: &mut PaintCx<'_>,
        layout_box: &LayoutBox,
        fragment: &TextFragment,
    ) -> PaintResult {
        let style = &layout_box.style;
        // Shaping a run at font-size 0 is degenerate; nothing would be visible anyway.
        if style.font_size == 0.0 {
            log::debug!("Skipping text run {:?} with font-size 0", fragment.text);
            return Ok(());
        }

        let origin = Point::new(
            layout_box.position.x,
            layout_box.position.y + fragment.baseline,
        );
        self.text.paint_text_run(cx, fragment, style, origin)?;

        let x = layout_box.position.x;
        let width = f64::from(layout_box.size.width);
        for &decoration in &style.text_decoration {
            let y = decoration_y(decoration, layout_box, fragment);
            cx.with_saved(|cx| {
                cx.stroke_line(Line::new((x, y), (x + width, y)), 1.0, style.color)
            })?;
        }
        Ok(())
    }
}

/// Vertical position of a decoration line for a text box.
///
/// Overline and underline are placed relative to the baseline; line-through goes through
/// the middle of the box regardless of the baseline.
pub fn decoration_y(
    decoration: TextDecorationLine,
    layout_box: &LayoutBox,
    fragment: &TextFragment,
) -> f64 {
    let top = layout_box.position.y;
    let font_size = f64::from(layout_box.style.font_size);
    match decoration {
        TextDecorationLine::Overline => {
            fragment.baseline + top - font_size * DECORATION_OFFSET_EM
        }
        TextDecorationLine::Underline => {
            fragment.baseline + top + font_size * DECORATION_OFFSET_EM
        }
        TextDecorationLine::LineThrough => top + f64::from(layout_box.size.height) * 0.5,
    }
}
