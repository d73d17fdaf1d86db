//! Scoped graphics state threaded through every paint call.

use kurbo::{Affine, BezPath, Cap, Line, Rect, Shape, Stroke, Vec2};
use peniko::{BlendMode, BrushRef, Mix};

use crate::{PaintScene, SceneError};

/// Tolerance used when flattening rectangles into paths.
const PATH_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone)]
struct GraphicsState {
    /// User space to device space
    transform: Affine,
    /// Bounding box of the intersected clip region, in device space
    clip: Rect,
    /// Number of scene layers pushed when this state was current
    layers: usize,
    dashes: Vec<f64>,
}

/// A paint context: the current transform, clip extents and dash pattern, plus the
/// [`PaintScene`] the resulting commands go to.
///
/// Every temporary state change is bracketed by [`save`](Self::save) and
/// [`restore`](Self::restore), usually through [`with_saved`](Self::with_saved). Restoring
/// pops exactly the clip layers pushed since the matching save.
pub struct PaintCx<'s> {
    scene: &'s mut dyn PaintScene,
    state: GraphicsState,
    saved: Vec<GraphicsState>,
}

impl<'s> PaintCx<'s> {
    /// Creates a context whose initial clip is `viewport` (in user space) and whose
    /// user space maps to device space through `base_transform`.
    pub fn new(scene: &'s mut dyn PaintScene, viewport: Rect, base_transform: Affine) -> Self {
        Self {
            scene,
            state: GraphicsState {
                transform: base_transform,
                clip: base_transform.transform_rect_bbox(viewport),
                layers: 0,
                dashes: Vec::new(),
            },
            saved: Vec::new(),
        }
    }

    /// Number of states currently saved.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    pub fn dashes(&self) -> &[f64] {
        &self.state.dashes
    }

    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    /// Restores the most recently saved state, popping any clip layer pushed since.
    pub fn restore(&mut self) -> Result<(), SceneError> {
        let previous = self.saved.pop().ok_or(SceneError::UnbalancedRestore)?;
        while self.state.layers > previous.layers {
            self.scene.pop_layer()?;
            self.state.layers -= 1;
        }
        self.state = previous;
        Ok(())
    }

    /// Runs `f` between a save and a restore. The state is restored whether `f`
    /// succeeds or fails; the first error wins.
    pub fn with_saved<T, E>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<SceneError>,
    {
        self.save();
        let result = f(self);
        let restored = self.restore();
        match (result, restored) {
            (Err(err), _) => Err(err),
            (Ok(_), Err(err)) => Err(err.into()),
            (Ok(value), Ok(())) => Ok(value),
        }
    }

    /// Checks that every save was matched by a restore.
    pub fn finish(self) -> Result<(), SceneError> {
        match self.saved.len() {
            0 => Ok(()),
            n => Err(SceneError::UnfinishedState(n)),
        }
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform.pre_translate(offset);
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform = self.state.transform.pre_scale_non_uniform(sx, sy);
    }

    pub fn set_dash(&mut self, dashes: &[f64]) {
        self.state.dashes = dashes.to_vec();
    }

    /// The extents of the current clip region in user space.
    pub fn clip_extents(&self) -> Rect {
        self.state
            .transform
            .inverse()
            .transform_rect_bbox(self.state.clip)
    }

    /// Intersects the clip region with a rectangle given in user space.
    pub fn clip_rect(&mut self, rect: Rect) -> Result<(), SceneError> {
        self.clip_path(&rect.to_path(PATH_TOLERANCE))
    }

    /// Intersects the clip region with a path given in user space.
    pub fn clip_path(&mut self, path: &BezPath) -> Result<(), SceneError> {
        let transform = self.state.transform;
        self.scene
            .push_layer(BlendMode::from(Mix::Clip), 1.0, transform, path)?;
        self.state.layers += 1;
        let device_bounds = transform.transform_rect_bbox(path.bounding_box());
        self.state.clip = self.state.clip.intersect(device_bounds);
        Ok(())
    }

    /// Fills the whole current clip region with `brush`.
    ///
    /// Image brushes are anchored at the user-space origin, so translating before a paint
    /// moves the pattern, not the painted area.
    pub fn paint<'b>(&mut self, brush: impl Into<BrushRef<'b>>) -> Result<(), SceneError> {
        let area = self.clip_extents();
        if area.is_zero_area() {
            return Ok(());
        }
        self.fill_rect(area, brush)
    }

    pub fn fill_rect<'b>(
        &mut self,
        rect: Rect,
        brush: impl Into<BrushRef<'b>>,
    ) -> Result<(), SceneError> {
        self.fill_path(&rect.to_path(PATH_TOLERANCE), brush)
    }

    pub fn fill_path<'b>(
        &mut self,
        path: &BezPath,
        brush: impl Into<BrushRef<'b>>,
    ) -> Result<(), SceneError> {
        self.scene
            .fill(self.state.transform, brush.into(), None, path)
    }

    /// Strokes a straight line with butt caps and the current dash pattern.
    pub fn stroke_line<'b>(
        &mut self,
        line: Line,
        width: f64,
        brush: impl Into<BrushRef<'b>>,
    ) -> Result<(), SceneError> {
        let mut style = Stroke::new(width).with_caps(Cap::Butt);
        if !self.state.dashes.is_empty() {
            style = style.with_dashes(0.0, self.state.dashes.iter().copied());
        }
        let mut path = BezPath::new();
        path.move_to(line.p0);
        path.line_to(line.p1);
        self.scene
            .stroke(&style, self.state.transform, brush.into(), &path)
    }
}

impl std::fmt::Debug for PaintCx<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintCx")
            .field("state", &self.state)
            .field("depth", &self.saved.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::Color;

    use super::*;
    use crate::{RecordingScene, SceneCommand};

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 100.0)
    }

    #[test]
    fn restore_pops_layers_pushed_since_save() {
        let mut scene = RecordingScene::default();
        {
            let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
            cx.save();
            cx.clip_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
            cx.clip_rect(Rect::new(5.0, 5.0, 10.0, 10.0)).unwrap();
            cx.restore().unwrap();
            cx.finish().unwrap();
        }
        let pops = scene
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, SceneCommand::PopLayer))
            .count();
        assert_eq!(pops, 2);
        assert_eq!(scene.layer_depth(), 0);
    }

    #[test]
    fn clip_extents_follow_translation_and_intersection() {
        let mut scene = RecordingScene::default();
        let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
        cx.clip_rect(Rect::new(10.0, 10.0, 60.0, 40.0)).unwrap();
        cx.translate(Vec2::new(10.0, 10.0));
        assert_eq!(cx.clip_extents(), Rect::new(0.0, 0.0, 50.0, 30.0));
    }

    #[test]
    fn base_scale_maps_viewport_to_device_space() {
        let mut scene = RecordingScene::default();
        let cx = PaintCx::new(&mut scene, viewport(), Affine::scale(2.0));
        assert_eq!(cx.clip_extents(), viewport());
        assert_eq!(cx.state.clip, Rect::new(0.0, 0.0, 400.0, 200.0));
    }

    #[test]
    fn with_saved_restores_on_error() {
        let mut scene = RecordingScene::default();
        let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
        let result: Result<(), SceneError> = cx.with_saved(|cx| {
            cx.translate(Vec2::new(5.0, 5.0));
            cx.clip_rect(Rect::new(0.0, 0.0, 1.0, 1.0))?;
            Err(SceneError::Backend("boom".into()))
        });
        assert_eq!(result, Err(SceneError::Backend("boom".into())));
        assert_eq!(cx.depth(), 0);
        assert_eq!(cx.transform(), Affine::IDENTITY);
        assert_eq!(cx.clip_extents(), viewport());
    }

    #[test]
    fn unmatched_restore_is_an_error() {
        let mut scene = RecordingScene::default();
        let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
        assert_eq!(cx.restore(), Err(SceneError::UnbalancedRestore));
    }

    #[test]
    fn dashes_apply_to_strokes_until_restore() {
        let mut scene = RecordingScene::default();
        {
            let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
            let line = Line::new(Point::ZERO, Point::new(10.0, 0.0));
            cx.save();
            cx.set_dash(&[3.0]);
            cx.stroke_line(line, 1.0, Color::BLACK).unwrap();
            cx.restore().unwrap();
            assert!(cx.dashes().is_empty());
            cx.stroke_line(line, 1.0, Color::BLACK).unwrap();
        }
        let dash_patterns: Vec<Vec<f64>> = scene
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                SceneCommand::Stroke { style, .. } => Some(style.dash_pattern.to_vec()),
                _ => None,
            })
            .collect();
        assert_eq!(dash_patterns, vec![vec![3.0], vec![]]);
    }

    #[test]
    fn paint_covers_current_clip() {
        let mut scene = RecordingScene::default();
        {
            let mut cx = PaintCx::new(&mut scene, viewport(), Affine::IDENTITY);
            cx.clip_rect(Rect::new(20.0, 20.0, 40.0, 50.0)).unwrap();
            cx.paint(Color::WHITE).unwrap();
        }
        let filled = scene.commands().iter().find_map(|cmd| match cmd {
            SceneCommand::Fill { shape, .. } => Some(shape.bounding_box()),
            _ => None,
        });
        assert_eq!(filled, Some(Rect::new(20.0, 20.0, 40.0, 50.0)));
    }
}
