use vellum_dom::LayoutBox;
use vellum_dom::style::BorderStyle;
use vellum_scene::PaintCx;

use crate::PaintResult;
use crate::geometry::{Edge, Quad, Trapezoid};

/// Strokes the four sides of a box's border.
///
/// Each side is the trapezoid between the border edge and the padding edge; adjacent
/// trapezoids share their corner vertices, so corners are mitred with no gap or overlap.
///
/// The border-style property is only partly supported:
/// - ✅ solid, and ❌ double / groove / ridge / inset / outset rendered as solid
/// - ❌ dotted, dashed: approximated with a dash pattern along the side's centerline,
///   without clipping, so dots and dashes do not join up at the corners
/// - ❌ none, hidden: painted as solid; layout gives these sides a used width of 0
pub fn paint_border(cx: &mut PaintCx<'_>, layout_box: &LayoutBox) -> PaintResult {
    let widths = &layout_box.border;
    if Edge::ALL.iter().all(|edge| edge.pick(widths) == 0.0) {
        return Ok(());
    }

    let outer = Quad::from_rect(layout_box.border_box());
    let inner = Quad::from_rect(layout_box.padding_box());

    for (edge, trapezoid) in Trapezoid::border_band(&outer, &inner) {
        paint_border_side(cx, layout_box, edge, &trapezoid)?;
    }
    Ok(())
}

fn paint_border_side(
    cx: &mut PaintCx<'_>,
    layout_box: &LayoutBox,
    edge: Edge,
    trapezoid: &Trapezoid,
) -> PaintResult {
    let style = &layout_box.style;
    let width = f64::from(edge.pick(&layout_box.border));
    let color = edge.pick(&style.border_color);
    let border_style = edge.pick(&style.border_style);

    if width == 0.0 || color.components[3] <= 0.0 {
        return Ok(());
    }

    cx.with_saved(|cx| {
        match border_style {
            // TODO: dots and dashes should be laid out per side and meet at the corners.
            BorderStyle::Dotted => cx.set_dash(&[width]),
            BorderStyle::Dashed => cx.set_dash(&[4.0 * width]),
            _ => cx.clip_path(&trapezoid.to_path())?,
        }
        cx.stroke_line(trapezoid.centerline(), width, color)?;
        Ok(())
    })
}
