//! Error type for pipeline execution.

use thiserror::Error;

/// Error type for pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Buffer construction or geometry error.
    #[error(transparent)]
    Core(#[from] filmfx_core::Error),

    /// Error from an individual image operation.
    #[error(transparent)]
    Ops(#[from] filmfx_ops::OpsError),

    /// Parameter record failed validation before any stage ran.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for pipeline execution.
pub type PipelineResult<T> = Result<T, PipelineError>;
