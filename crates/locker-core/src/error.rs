//! Core error types for locker-core.

use thiserror::Error;

/// Core error type for locker-core.
///
/// Incorrect passwords and deadline expiry are gate outcomes, not errors;
/// this type only covers failures of the console streams themselves.
#[derive(Error, Debug)]
pub enum CoreError {
    /// IO errors from the prompt or input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
