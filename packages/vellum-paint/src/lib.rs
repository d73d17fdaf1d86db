//! Paint a laid-out [`vellum_dom::Page`] by pushing drawing commands into an impl
//! [`vellum_scene::PaintScene`].

mod config;
mod error;
pub mod geometry;
mod render;

use vellum_dom::Page;
use vellum_net::ImageResolver;
use vellum_scene::{PaintCx, PaintScene};

pub use config::{PaintConfig, PaintConfigBuilder};
pub use error::{PaintError, PaintResult};
pub use render::{
    BoxPainter, TextRunPainter, background_position, decoration_y, has_background, paint_border,
    paint_replaced,
};

/// Paint a [`Page`] by pushing drawing commands into an impl [`PaintScene`].
///
/// This function assumes that the styles and layout of the page's boxes are already
/// resolved. The scene is reset first. Glyphs are painted by `text`, and background images
/// are loaded through `images`.
///
/// Painting a page marks the backgrounds it painted; call [`Page::reset_paint_state`]
/// before painting the same tree again.
///
/// A backend failure aborts the pass and is returned; whatever was drawn before it stays
/// in the scene.
pub fn paint_scene(
    scene: &mut dyn PaintScene,
    page: &Page,
    config: &PaintConfig,
    text: &dyn TextRunPainter,
    images: &dyn ImageResolver,
) -> PaintResult {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("paint_scene", scale = config.scale).entered();

    scene.reset();
    let mut cx = PaintCx::new(scene, config.viewport_rect(), config.base_transform());
    BoxPainter::new(text, images).paint_page(&mut cx, page)?;
    cx.finish()?;
    Ok(())
}
