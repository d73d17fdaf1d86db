//! A 2D canvas abstraction for the vellum paint stage.
//!
//! Painting code never talks to a backend directly. It pushes commands through a
//! [`PaintCx`], which owns the current transform, the clip stack and the dash pattern,
//! and forwards the resulting commands into an impl [`PaintScene`].
//!
//! The [`PaintScene`] implementation decides what to do with the commands: rasterize them,
//! translate them to a vector format, or (as [`RecordingScene`] does) keep them as a
//! display list for later inspection.

mod cx;
mod error;
mod recording;

use kurbo::{Affine, BezPath, Stroke};
use peniko::{BlendMode, BrushRef};

pub use cx::PaintCx;
pub use error::SceneError;
pub use recording::{RecordingScene, SceneCommand};

/// The drawing operations a backend must support.
///
/// Shapes are passed as flattened [`BezPath`]s so that the trait stays object safe and the
/// painter can hold a `&mut dyn PaintScene` across its recursion.
pub trait PaintScene {
    /// Removes all content from the scene
    fn reset(&mut self);

    /// Pushes a new layer clipped by the specified shape and composed with previous layers
    /// using the specified blend mode.
    fn push_layer(
        &mut self,
        blend: BlendMode,
        alpha: f32,
        transform: Affine,
        clip: &BezPath,
    ) -> Result<(), SceneError>;

    /// Pops the current layer.
    fn pop_layer(&mut self) -> Result<(), SceneError>;

    /// Strokes a shape using the specified style and brush.
    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: BrushRef<'_>,
        shape: &BezPath,
    ) -> Result<(), SceneError>;

    /// Fills a shape using the specified brush.
    ///
    /// `brush_transform` is applied on top of `transform` to position the brush; `None`
    /// anchors image brushes at the origin of the shape's coordinate space.
    fn fill(
        &mut self,
        transform: Affine,
        brush: BrushRef<'_>,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) -> Result<(), SceneError>;
}
