use std::result::Result as StdResult;
use thiserror::Error;

/// Errors that can occur when preparing test fixtures.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("Filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture file is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// A type alias for `Result` with `TestInfraError`.
pub type Result<T> = StdResult<T, TestInfraError>;
