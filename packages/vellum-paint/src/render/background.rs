//! Background color and image painting.
//!
//! See <https://www.w3.org/TR/CSS21/colors.html#background>

use kurbo::{Size, Vec2};
use peniko::Extend;
use vellum_dom::style::{
    BackgroundAttachment, BackgroundImage, BackgroundPosition, BackgroundRepeat, PositionComponent,
    PositionKeyword,
};
use vellum_dom::{LayoutBox, Page};
use vellum_scene::PaintCx;

use super::BoxPainter;
use crate::PaintResult;

/// Whether the box has a visible background color or any background image.
pub fn has_background(layout_box: &LayoutBox) -> bool {
    let style = &layout_box.style;
    style.background_color.components[3] > 0.0 || style.background_image != BackgroundImage::None
}

impl BoxPainter<'_> {
    /// Paints the background of the page box, then the page area's background.
    ///
    /// The page area takes the root element's background. If the root is `html` and has no
    /// background of its own, the first `body` child's background is used instead. Either
    /// way the background is positioned as if painted on its own element, but is not
    /// clipped to it.
    pub fn paint_page_background(&self, cx: &mut PaintCx<'_>, page: &Page) -> PaintResult {
        // TODO: the page box's background should be positioned from the page origin, not
        // from the page's border box.
        self.paint_background(cx, &page.page_box, false)?;

        let root = &page.root;
        if has_background(root) {
            self.paint_background(cx, root, false)?;
        } else if root.has_tag("html") {
            if let Some(body) = root.children().iter().find(|child| child.has_tag("body")) {
                // Painted now, before anything on the root element.
                self.paint_background(cx, body, false)?;
            }
        }
        Ok(())
    }

    /// Paints the background color and image of `layout_box`, at most once per pass.
    ///
    /// With `clip` the background is confined to the border box; without, it covers the
    /// whole current clip region.
    pub fn paint_background(
        &self,
        cx: &mut PaintCx<'_>,
        layout_box: &LayoutBox,
        clip: bool,
    ) -> PaintResult {
        if !layout_box.mark_background_painted() || !has_background(layout_box) {
            return Ok(());
        }

        let style = &layout_box.style;
        let area = layout_box.border_box();

        cx.with_saved(|cx| {
            // Fixed backgrounds position against the viewport, which is the clip in effect
            // before this box's own.
            let positioning_area = match style.background_attachment {
                BackgroundAttachment::Scroll => area,
                BackgroundAttachment::Fixed => cx.clip_extents(),
            };

            if clip {
                cx.clip_rect(area)?;
            }

            if style.background_color.components[3] > 0.0 {
                cx.paint(style.background_color)?;
            }

            let BackgroundImage::Url(uri) = &style.background_image else {
                return Ok(());
            };
            let image = match self.images.resolve(uri) {
                Ok(image) => image,
                Err(err) => {
                    log::warn!("Skipping background image {uri}: {err}");
                    return Ok(());
                }
            };
            let image_size = Size::new(f64::from(image.width), f64::from(image.height));

            cx.translate(positioning_area.origin().to_vec2());

            let (x, y) = background_position(
                &style.background_position,
                positioning_area.size(),
                image_size,
            );
            cx.translate(Vec2::new(x, y));

            let repeat = style.background_repeat;
            if repeat != BackgroundRepeat::Repeat {
                let mut tile_area = cx.clip_extents();
                if matches!(repeat, BackgroundRepeat::NoRepeat | BackgroundRepeat::RepeatX) {
                    tile_area.y0 = 0.0;
                    tile_area.y1 = image_size.height;
                }
                if matches!(repeat, BackgroundRepeat::NoRepeat | BackgroundRepeat::RepeatY) {
                    tile_area.x0 = 0.0;
                    tile_area.x1 = image_size.width;
                }
                cx.clip_rect(tile_area)?;
            }

            cx.paint(&image.to_peniko(Extend::Repeat))?;
            Ok(())
        })
    }
}

/// Resolves `background-position` to the offset of the image's top-left corner within the
/// positioning area.
///
/// See <https://www.w3.org/TR/CSS21/colors.html#propdef-background-position>
pub fn background_position(
    position: &BackgroundPosition,
    area: Size,
    image: Size,
) -> (f64, f64) {
    use PositionKeyword::*;

    let mut first = position.first;
    let mut second = position
        .second
        .unwrap_or(PositionComponent::Keyword(Center));

    // Keywords may come in either order; normalize to [horizontal, vertical].
    if second.is_keyword(&[Left, Right]) || first.is_keyword(&[Top, Bottom]) {
        std::mem::swap(&mut first, &mut second);
    }

    (
        resolve_component(first, area.width, image.width),
        resolve_component(second, area.height, image.height),
    )
}

fn resolve_component(component: PositionComponent, area: f64, image: f64) -> f64 {
    let percentage = match component {
        PositionComponent::Keyword(keyword) => keyword.percentage(),
        PositionComponent::Percentage(percentage) => percentage,
        PositionComponent::Length(length) => return length,
    };
    (area - image) * percentage / 100.0
}

#[cfg(test)]
mod tests {
    use vellum_dom::style::PositionComponent::{Keyword, Length, Percentage};
    use vellum_dom::style::PositionKeyword::*;

    use super::*;

    const AREA: Size = Size::new(100.0, 100.0);
    const IMAGE: Size = Size::new(20.0, 20.0);

    #[test]
    fn keyword_pair_in_horizontal_vertical_order() {
        let position = BackgroundPosition::pair(Keyword(Center), Keyword(Top));
        assert_eq!(background_position(&position, AREA, IMAGE), (40.0, 0.0));
    }

    #[test]
    fn single_value_centers_the_other_axis() {
        let position = BackgroundPosition::single(Length(10.0));
        assert_eq!(background_position(&position, AREA, IMAGE), (10.0, 40.0));
    }

    #[test]
    fn vertical_keyword_first_is_swapped() {
        let position = BackgroundPosition::pair(Keyword(Bottom), Keyword(Right));
        assert_eq!(background_position(&position, AREA, IMAGE), (80.0, 80.0));

        let position = BackgroundPosition::pair(Keyword(Top), Percentage(25.0));
        assert_eq!(background_position(&position, AREA, IMAGE), (20.0, 0.0));
    }

    #[test]
    fn single_vertical_keyword_lands_on_vertical_axis() {
        let position = BackgroundPosition::single(Keyword(Bottom));
        assert_eq!(background_position(&position, AREA, IMAGE), (40.0, 80.0));
    }

    #[test]
    fn percentages_can_push_the_image_outside() {
        let position = BackgroundPosition::pair(Percentage(100.0), Percentage(0.0));
        let area = Size::new(10.0, 10.0);
        assert_eq!(background_position(&position, area, IMAGE), (-10.0, 0.0));
    }
}
