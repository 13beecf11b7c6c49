use thiserror::Error;

/// Rejected [`SceneParams`](crate::scene::SceneParams).
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("authored shape has no points")]
    EmptyShape,
    #[error("center index {index} out of range for {len} points")]
    CenterOutOfRange { index: usize, len: usize },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}
