//! Quest and friendship reward granting.

use game_core::{GameState, ItemDirectory, ItemId, QuestReward};

use crate::directory::DirectoryManager;
use crate::scene::SceneHost;

/// Grants a quest's rewards after hand-in.
///
/// Each variant has exactly one handler arm; unresolvable item rewards are
/// logged and skipped rather than aborting the remaining grants.
pub fn grant_rewards(
    rewards: &[QuestReward],
    state: &mut GameState,
    directories: &DirectoryManager,
    host: &mut dyn SceneHost,
) {
    for reward in rewards {
        match reward {
            QuestReward::Item { item, amount } => {
                deliver_item(*item, *amount, state, directories, host);
            }
            QuestReward::Gold { amount } => {
                tracing::debug!("Reward hook: grant {} gold", amount);
            }
            QuestReward::Experience { amount } => {
                tracing::debug!("Reward hook: grant {} experience", amount);
            }
            QuestReward::Custom { key } => {
                tracing::debug!("Reward hook: custom reward '{}'", key);
            }
        }
    }
}

/// Adds `amount` units of an item to the inventory one at a time, dropping
/// units on the ground when the inventory is full.
///
/// Also used for friendship level rewards.
pub(crate) fn deliver_item(
    item: ItemId,
    amount: u32,
    state: &mut GameState,
    directories: &DirectoryManager,
    host: &mut dyn SceneHost,
) {
    let Some(definition) = directories.items().definition(item) else {
        tracing::error!("Cannot grant reward: {} not in item directory", item);
        return;
    };

    for _ in 0..amount {
        if !state.inventory.add_item(item, 1, definition.max_stack) {
            tracing::warn!("Inventory full, dropping reward {} on the ground", item);
            host.spawn_item_drop(item);
        }
    }
}
