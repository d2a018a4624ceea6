//! Error types raised by save repositories.

use thiserror::Error;

/// Errors surfaced by [`crate::repository::SaveRepository`] implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No save record exists. Treated as "new game" by the load path, never
    /// as a failure.
    #[error("no save record exists")]
    NotFound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record exists but cannot be applied: unparseable data or an
    /// incompatible schema version.
    #[error("corrupted save record: {0}")]
    Corrupt(String),

    #[error("save record lock was poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
