use thiserror::Error;

/// Failures reported by a [`PaintScene`](crate::PaintScene) backend.
///
/// None of these are recoverable by the painter: they abort the traversal and leave
/// whatever was already drawn in place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("paint backend failure: {0}")]
    Backend(String),

    #[error("layer popped without a matching push")]
    UnbalancedLayer,

    #[error("graphics state restored without a matching save")]
    UnbalancedRestore,

    #[error("{0} graphics state(s) still saved when the pass finished")]
    UnfinishedState(usize),
}
