//! Error types for Rupa

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rupa error types
///
/// Degenerate inputs (empty store, zero radius, empty selection) are not
/// errors; they produce empty results or no-op applies. Any call that
/// returns an error leaves the point field untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A collaborator broke a precondition (missing device buffer, length
    /// mismatch, non-rigid or non-finite transform)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The alignment solver reported no convergence
    #[error("Solver did not converge")]
    NotConverged,

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl Error {
    /// Shorthand for [`Error::InvalidState`]
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidState(msg.into())
    }
}
