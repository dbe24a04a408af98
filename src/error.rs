//! Error types for the recognition engine.

use crate::types::CallerId;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Unknown caller: {0}")]
    UnknownCaller(CallerId),

    #[error("Invalid visibility: {0:?}")]
    InvalidVisibility(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
