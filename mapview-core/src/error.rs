//! Screen transform error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    #[error("Matrix is not a similarity transform (shear or non-uniform scale)")]
    NotSimilarity,

    #[error("Failed to (de)serialize screen parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScreenError {
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
}
