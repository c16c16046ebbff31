//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while constructing scanners and resolvers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The opening delimiter of a token scanner is empty.
    #[error("open delimiter must not be empty")]
    EmptyOpenDelimiter,

    /// The closing delimiter of a token scanner is empty.
    #[error("close delimiter must not be empty")]
    EmptyCloseDelimiter,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
