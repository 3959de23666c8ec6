//! Crate-wide error type.

use thiserror::Error;

/// Errors raised when a caller hands the crate an argument it cannot interpret.
///
/// Text transformations themselves are total; only name-based lookups can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Unknown capability => {0}")]
    UnknownCapability(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
