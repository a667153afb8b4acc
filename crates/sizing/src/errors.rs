use thiserror::Error;

/// Errors raised by the sizing core.
/// All are recoverable at the boundary: the caller re-prompts the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SizingError>;
