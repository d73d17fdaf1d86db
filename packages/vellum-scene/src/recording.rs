//! A [`PaintScene`] that keeps every command as a display list.

use kurbo::{Affine, BezPath, Stroke};
use peniko::{BlendMode, Brush, BrushRef};

use crate::{PaintScene, SceneError};

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    PushLayer {
        blend: BlendMode,
        alpha: f32,
        transform: Affine,
        clip: BezPath,
    },
    PopLayer,
    Fill {
        transform: Affine,
        brush: Brush,
        brush_transform: Option<Affine>,
        shape: BezPath,
    },
    Stroke {
        style: Stroke,
        transform: Affine,
        brush: Brush,
        shape: BezPath,
    },
}

impl SceneCommand {
    /// Whether this command puts paint on the surface (as opposed to managing layers).
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Fill { .. } | Self::Stroke { .. })
    }
}

/// Records commands instead of rasterizing them.
///
/// An optional command budget makes the scene fail once exhausted, which is how a
/// resource-limited backend surfaces to the painter.
#[derive(Debug, Default)]
pub struct RecordingScene {
    commands: Vec<SceneCommand>,
    layer_depth: usize,
    budget: Option<usize>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene that reports a backend failure after `budget` commands.
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget: Some(budget),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<SceneCommand> {
        self.commands
    }

    /// Number of layers currently pushed and not yet popped.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    fn record(&mut self, command: SceneCommand) -> Result<(), SceneError> {
        if self.budget.is_some_and(|budget| self.commands.len() >= budget) {
            return Err(SceneError::Backend(format!(
                "command budget of {} exhausted",
                self.commands.len()
            )));
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(?command, "record");
        self.commands.push(command);
        Ok(())
    }
}

fn to_owned_brush(brush: BrushRef<'_>) -> Brush {
    match brush {
        BrushRef::Solid(color) => Brush::Solid(color),
        BrushRef::Gradient(gradient) => Brush::Gradient(gradient.clone()),
        BrushRef::Image(image) => Brush::Image(image.clone()),
    }
}

impl PaintScene for RecordingScene {
    fn reset(&mut self) {
        self.commands.clear();
        self.layer_depth = 0;
    }

    fn push_layer(
        &mut self,
        blend: BlendMode,
        alpha: f32,
        transform: Affine,
        clip: &BezPath,
    ) -> Result<(), SceneError> {
        self.record(SceneCommand::PushLayer {
            blend,
            alpha,
            transform,
            clip: clip.clone(),
        })?;
        self.layer_depth += 1;
        Ok(())
    }

    fn pop_layer(&mut self) -> Result<(), SceneError> {
        if self.layer_depth == 0 {
            return Err(SceneError::UnbalancedLayer);
        }
        self.record(SceneCommand::PopLayer)?;
        self.layer_depth -= 1;
        Ok(())
    }

    fn stroke(
        &mut self,
        style: &Stroke,
        transform: Affine,
        brush: BrushRef<'_>,
        shape: &BezPath,
    ) -> Result<(), SceneError> {
        self.record(SceneCommand::Stroke {
            style: style.clone(),
            transform,
            brush: to_owned_brush(brush),
            shape: shape.clone(),
        })
    }

    fn fill(
        &mut self,
        transform: Affine,
        brush: BrushRef<'_>,
        brush_transform: Option<Affine>,
        shape: &BezPath,
    ) -> Result<(), SceneError> {
        self.record(SceneCommand::Fill {
            transform,
            brush: to_owned_brush(brush),
            brush_transform,
            shape: shape.clone(),
        })
    }
}
