//! Error types raised by the runtime layer.

use thiserror::Error;

use game_core::{ItemId, QuestError, QuestId};

use crate::repository::RepositoryError;

/// Errors surfaced by runtime operations.
///
/// Persistence and restore failures are never fatal to the running session:
/// callers log them and skip the affected slice rather than tearing the
/// session down.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Quest(#[from] QuestError),

    #[error("unresolved item reference {0}")]
    UnresolvedItem(ItemId),

    #[error("unresolved quest reference '{0}'")]
    UnresolvedQuest(QuestId),

    #[error("unresolved npc reference '{0}'")]
    UnresolvedNpc(String),

    #[error("item {0} is not in the inventory")]
    ItemNotHeld(ItemId),

    #[error("required dependency missing: {0}")]
    MissingDependency(&'static str),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
