//! Error types for the BMI engine

use thiserror::Error;

/// Errors raised by the pure BMI engine
///
/// Both variants are local to one calculation: returning one never leaves
/// anything behind that would affect the next request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Height or weight outside the positive, finite domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Status label that does not name any known category
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl EngineError {
    /// Stable machine-readable code, used by the HTTP and WASM surfaces
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput(_) => "INVALID_INPUT",
            EngineError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
        }
    }
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
