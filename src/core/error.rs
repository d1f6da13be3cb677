//! Error types for the SVM front-end

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SVMError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Empty dataset")]
    EmptyDataset,

    #[error("Solver failure: {0}")]
    SolverFailure(String),
}

pub type Result<T> = std::result::Result<T, SVMError>;
