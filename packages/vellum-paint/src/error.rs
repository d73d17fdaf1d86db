use thiserror::Error;
use vellum_scene::SceneError;

/// Errors that abort a paint pass.
///
/// Image and text anomalies never show up here: they degrade the output of the box they
/// belong to and painting carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PaintError {
    #[error(transparent)]
    Scene(#[from] SceneError),
}

pub type PaintResult<T = ()> = Result<T, PaintError>;
