//! Error types for sqlstanza
//!
//! Building and rendering a [`Statement`](crate::Statement) never fails. These
//! errors only come from the opt-in checks and from parsing configuration.

use thiserror::Error;

/// Result type alias for sqlstanza operations
pub type StanzaResult<T> = Result<T, StanzaError>;

/// Error types for the opt-in checks
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StanzaError {
    /// The rendered text and the argument list disagree on the bind count
    #[error("Placeholder mismatch: placeholders({placeholders}) != args({args})")]
    PlaceholderMismatch { placeholders: usize, args: usize },

    /// Unrecognised dialect name
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

impl StanzaError {
    /// Create a placeholder mismatch error
    pub fn mismatch(placeholders: usize, args: usize) -> Self {
        Self::PlaceholderMismatch { placeholders, args }
    }

    /// Check if this is a placeholder mismatch error
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::PlaceholderMismatch { .. })
    }
}
