use kurbo::Rect;
use vellum_dom::{LayoutBox, Replacement};
use vellum_scene::PaintCx;

use crate::PaintResult;

/// Paints replaced content, stretched to the box's content size.
///
/// The replacement draws in its intrinsic coordinate space; it is scaled independently on
/// each axis, so its aspect ratio is not preserved.
pub fn paint_replaced(
    cx: &mut PaintCx<'_>,
    layout_box: &LayoutBox,
    replacement: &dyn Replacement,
) -> PaintResult {
    let intrinsic_width = replacement.intrinsic_width();
    let intrinsic_height = replacement.intrinsic_height();
    if intrinsic_width <= 0.0 || intrinsic_height <= 0.0 {
        log::debug!("Skipping replaced content without intrinsic size: {replacement:?}");
        return Ok(());
    }

    let origin = layout_box.padding_box().origin();
    let width = f64::from(layout_box.size.width);
    let height = f64::from(layout_box.size.height);

    cx.with_saved(|cx| {
        cx.translate(origin.to_vec2());
        cx.clip_rect(Rect::new(0.0, 0.0, width, height))?;
        cx.scale(width / intrinsic_width, height / intrinsic_height);
        replacement.draw(cx)?;
        Ok(())
    })
}
