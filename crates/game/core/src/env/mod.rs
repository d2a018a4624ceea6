//! Traits describing read-only game content.
//!
//! Directories expose static item, quest, and NPC definitions keyed by
//! stable identifiers. The [`Env`] aggregate bundles them so ledgers and the
//! restore path can resolve identifiers without hard coupling to concrete
//! implementations.
mod error;
mod items;
mod npcs;
mod quests;

pub use error::DirectoryError;
pub use items::{ItemDefinition, ItemDirectory};
pub use npcs::{LevelReward, NpcDirectory, NpcProfile};
pub use quests::{
    ObjectiveKind, ObjectiveSpec, QuestDefinition, QuestDirectory, QuestRequirement, QuestReward,
};

/// Aggregates the read-only directories required by ledger operations.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I, Q, N>
where
    I: ItemDirectory + ?Sized,
    Q: QuestDirectory + ?Sized,
    N: NpcDirectory + ?Sized,
{
    items: Option<&'a I>,
    quests: Option<&'a Q>,
    npcs: Option<&'a N>,
}

pub type GameEnv<'a> = Env<'a, dyn ItemDirectory + 'a, dyn QuestDirectory + 'a, dyn NpcDirectory + 'a>;

impl<'a, I, Q, N> Env<'a, I, Q, N>
where
    I: ItemDirectory + ?Sized,
    Q: QuestDirectory + ?Sized,
    N: NpcDirectory + ?Sized,
{
    pub fn new(items: Option<&'a I>, quests: Option<&'a Q>, npcs: Option<&'a N>) -> Self {
        Self {
            items,
            quests,
            npcs,
        }
    }

    pub fn with_all(items: &'a I, quests: &'a Q, npcs: &'a N) -> Self {
        Self::new(Some(items), Some(quests), Some(npcs))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            quests: None,
            npcs: None,
        }
    }

    /// Returns the ItemDirectory, or an error if not available.
    pub fn items(&self) -> Result<&'a I, DirectoryError> {
        self.items.ok_or(DirectoryError::ItemsNotAvailable)
    }

    /// Returns the QuestDirectory, or an error if not available.
    pub fn quests(&self) -> Result<&'a Q, DirectoryError> {
        self.quests.ok_or(DirectoryError::QuestsNotAvailable)
    }

    /// Returns the NpcDirectory, or an error if not available.
    pub fn npcs(&self) -> Result<&'a N, DirectoryError> {
        self.npcs.ok_or(DirectoryError::NpcsNotAvailable)
    }
}

impl<'a, I, Q, N> Env<'a, I, Q, N>
where
    I: ItemDirectory + 'a,
    Q: QuestDirectory + 'a,
    N: NpcDirectory + 'a,
{
    /// Converts this environment into a trait-object based [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let items: Option<&'a dyn ItemDirectory> = self.items.map(|items| items as _);
        let quests: Option<&'a dyn QuestDirectory> = self.quests.map(|quests| quests as _);
        let npcs: Option<&'a dyn NpcDirectory> = self.npcs.map(|npcs| npcs as _);
        Env::new(items, quests, npcs)
    }
}
