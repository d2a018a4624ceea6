//! Error raised when a required directory is missing from the environment.

use thiserror::Error;

/// Errors surfaced by [`crate::env::Env`] accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("item directory not available")]
    ItemsNotAvailable,

    #[error("quest directory not available")]
    QuestsNotAvailable,

    #[error("npc directory not available")]
    NpcsNotAvailable,
}
