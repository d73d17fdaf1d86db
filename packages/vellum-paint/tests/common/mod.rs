//! Shared fixtures: a recording text engine, an in-memory image store and scene helpers.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use kurbo::{Affine, Point, Rect, Shape};
use peniko::{Brush, Color};
use vellum_dom::{ComputedStyle, RasterImage, TextFragment};
use vellum_net::{ImageError, ImageResolver};
use vellum_paint::{BoxPainter, TextRunPainter};
use vellum_scene::{PaintCx, RecordingScene, SceneCommand, SceneError};

pub const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

pub const RED: Color = Color::new([1.0, 0.0, 0.0, 1.0]);
pub const GREEN: Color = Color::new([0.0, 0.5, 0.0, 1.0]);
pub const BLUE: Color = Color::new([0.0, 0.0, 1.0, 1.0]);
pub const CLEAR: Color = Color::new([0.0, 0.0, 0.0, 0.0]);

/// Records each run it is asked to paint and emits nothing.
#[derive(Default)]
pub struct RecordingText {
    pub runs: RefCell<Vec<(String, Point)>>,
}

impl TextRunPainter for RecordingText {
    fn paint_text_run(
        &self,
        _cx: &mut PaintCx<'_>,
        fragment: &TextFragment,
        _style: &ComputedStyle,
        origin: Point,
    ) -> Result<(), SceneError> {
        self.runs.borrow_mut().push((fragment.text.clone(), origin));
        Ok(())
    }
}

/// Images keyed by locator; anything else fails as an unsupported format.
#[derive(Default)]
pub struct MemoryImages {
    images: HashMap<String, RasterImage>,
}

impl MemoryImages {
    pub fn with(mut self, uri: &str, width: u32, height: u32) -> Self {
        let data = vec![255; (width * height * 4) as usize];
        self.images
            .insert(uri.to_owned(), RasterImage::new(width, height, Arc::new(data)));
        self
    }
}

impl ImageResolver for MemoryImages {
    fn resolve(&self, uri: &str) -> Result<RasterImage, ImageError> {
        self.images
            .get(uri)
            .cloned()
            .ok_or_else(|| ImageError::UnsupportedFormat(format!("no image at {uri}")))
    }
}

/// Runs `f` against a fresh context over [`VIEWPORT`] and returns the recorded commands.
pub fn record<F>(text: &RecordingText, images: &MemoryImages, f: F) -> Vec<SceneCommand>
where
    F: FnOnce(&BoxPainter<'_>, &mut PaintCx<'_>),
{
    let mut scene = RecordingScene::new();
    {
        let mut cx = PaintCx::new(&mut scene, VIEWPORT, Affine::IDENTITY);
        let painter = BoxPainter::new(text, images);
        f(&painter, &mut cx);
        cx.finish().expect("every save is restored");
    }
    assert_eq!(scene.layer_depth(), 0, "every clip layer is popped");
    scene.into_commands()
}

pub fn drawing(commands: &[SceneCommand]) -> Vec<&SceneCommand> {
    commands.iter().filter(|cmd| cmd.is_drawing()).collect()
}

/// Device-space bounds of every clip pushed, in order.
pub fn clips(commands: &[SceneCommand]) -> Vec<Rect> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            SceneCommand::PushLayer {
                transform, clip, ..
            } => Some(transform.transform_rect_bbox(clip.bounding_box())),
            _ => None,
        })
        .collect()
}

/// Device-space bounds and brush of every fill, in order.
pub fn fills(commands: &[SceneCommand]) -> Vec<(Rect, &Brush)> {
    commands
        .iter()
        .filter_map(|cmd| match cmd {
            SceneCommand::Fill {
                transform,
                shape,
                brush,
                ..
            } => Some((transform.transform_rect_bbox(shape.bounding_box()), brush)),
            _ => None,
        })
        .collect()
}

pub fn solid(brush: &Brush) -> Option<Color> {
    match brush {
        Brush::Solid(color) => Some(*color),
        _ => None,
    }
}
