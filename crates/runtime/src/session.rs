//! The per-process game session.
//!
//! [`Session`] owns the ledgers, the content directories, the persistence
//! gateway, and the load orchestrator, and exposes the gameplay entry points
//! that keep the systems synchronized. It is constructed once at startup and
//! passed by reference to whatever drives the game; nothing in here is a
//! global.

use game_core::{
    FriendshipBook, GameConfig, GameState, ItemDirectory, ItemId, NpcDirectory, QuestDirectory,
    QuestId, QuestReward, RefreshTargets, SceneIndex,
};

use crate::directory::DirectoryManager;
use crate::error::{Result, RuntimeError};
use crate::loader::{ApplyReport, Frame, LoadOrchestrator, LoadOutcome, LoadPhase, sync_world_items};
use crate::repository::SaveRepository;
use crate::rewards::{deliver_item, grant_rewards};
use crate::scene::{Projection, SceneHost};

/// One play session: ledgers plus the services that act on them.
pub struct Session {
    config: GameConfig,
    state: GameState,
    directories: DirectoryManager,
    repository: Box<dyn SaveRepository>,
    loader: LoadOrchestrator,
}

impl Session {
    pub fn new(
        config: GameConfig,
        directories: DirectoryManager,
        repository: Box<dyn SaveRepository>,
    ) -> Self {
        let state = GameState::new(&config);
        let loader = LoadOrchestrator::new(config.grace_ticks);
        Self {
            config,
            state,
            directories,
            repository,
            loader,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn directories(&self) -> &DirectoryManager {
        &self.directories
    }

    pub fn load_phase(&self) -> LoadPhase {
        self.loader.phase()
    }

    // --- persistence -----------------------------------------------------

    /// Saves the session. Returns `Ok(false)` when the save was skipped
    /// (load in flight, or no player in the scene).
    pub fn save(&mut self, host: &mut dyn SceneHost, projection: &mut dyn Projection) -> Result<bool> {
        let mut frame = Frame {
            state: &mut self.state,
            env: self.directories.as_env(),
            host,
            projection,
        };
        self.loader.save_game(&*self.repository, &mut frame)
    }

    /// Starts a load. See [`LoadOrchestrator::request_load`].
    pub fn request_load(
        &mut self,
        host: &mut dyn SceneHost,
        projection: &mut dyn Projection,
    ) -> Result<LoadOutcome> {
        let mut frame = Frame {
            state: &mut self.state,
            env: self.directories.as_env(),
            host,
            projection,
        };
        self.loader.request_load(&*self.repository, &mut frame)
    }

    /// Scene-lifecycle notification from the host engine.
    ///
    /// While a load is pending this arms the orchestrator's grace period.
    /// Otherwise it performs the normal after-scene-load duties: play the
    /// scene's default music track and hide already-collected world items
    /// (skipped in the menu scene, which has neither).
    pub fn on_scene_ready(&mut self, scene: SceneIndex, host: &mut dyn SceneHost) {
        if self.loader.load_pending() {
            self.loader.notify_scene_ready(scene);
            return;
        }

        if scene == self.config.menu_scene {
            return;
        }

        if let Some(track) = self.config.default_track_for(scene) {
            host.play_music(track);
        }
        sync_world_items(&self.state, host);
    }

    /// Per-frame drive; returns a report when a deferred load applied this
    /// tick.
    pub fn tick(
        &mut self,
        host: &mut dyn SceneHost,
        projection: &mut dyn Projection,
    ) -> Option<ApplyReport> {
        let mut frame = Frame {
            state: &mut self.state,
            env: self.directories.as_env(),
            host,
            projection,
        };
        self.loader.tick(&mut frame)
    }

    // --- gameplay entry points -------------------------------------------

    /// Player picked up a placed collectible.
    ///
    /// Adds the item to the inventory; on success marks the world id as
    /// collected and hides the instance. Returns whether the full quantity
    /// was stored (a full inventory leaves the item in the world).
    pub fn collect_world_item(
        &mut self,
        world_id: &str,
        item: ItemId,
        quantity: u32,
        host: &mut dyn SceneHost,
        projection: &mut dyn Projection,
    ) -> Result<bool> {
        if self.state.world.is_collected(world_id) {
            return Ok(false);
        }

        let definition = self
            .directories
            .items()
            .definition(item)
            .ok_or(RuntimeError::UnresolvedItem(item))?;

        let added = self
            .state
            .inventory
            .add_item(item, quantity, definition.max_stack);
        if added {
            self.state.world.mark_collected(world_id);
            host.hide_world_object(world_id);
        }
        self.after_inventory_change(projection);
        Ok(added)
    }

    /// Accepts a quest for the player.
    pub fn accept_quest(&mut self, id: &QuestId, projection: &mut dyn Projection) -> Result<()> {
        let definition = self
            .directories
            .quests()
            .definition(id)
            .ok_or_else(|| RuntimeError::UnresolvedQuest(id.clone()))?;
        self.state.quests.accept(definition)?;

        // Items already held count toward fresh collect objectives.
        let counts = self.state.inventory.counts().clone();
        self.state.quests.update_collect_objectives(&counts);
        projection.refresh(RefreshTargets::QUEST_LOG);
        Ok(())
    }

    /// Derived quest state: objectives complete and hand-in items covered.
    pub fn ready_to_hand_in(&self, id: &QuestId) -> Result<bool> {
        let definition = self
            .directories
            .quests()
            .definition(id)
            .ok_or_else(|| RuntimeError::UnresolvedQuest(id.clone()))?;
        Ok(self
            .state
            .quests
            .ready_to_hand_in(definition, &self.state.inventory))
    }

    /// Hands a completed quest in: consumes required items, grants rewards,
    /// and retires the quest.
    pub fn hand_in_quest(
        &mut self,
        id: &QuestId,
        host: &mut dyn SceneHost,
        projection: &mut dyn Projection,
    ) -> Result<Vec<QuestReward>> {
        let definition = self
            .directories
            .quests()
            .definition(id)
            .ok_or_else(|| RuntimeError::UnresolvedQuest(id.clone()))?;

        let rewards = self
            .state
            .quests
            .hand_in(definition, &mut self.state.inventory)?;
        grant_rewards(&rewards, &mut self.state, &self.directories, host);

        tracing::info!("Quest '{}' handed in", id);
        self.after_inventory_change(projection);
        projection.refresh(RefreshTargets::QUEST_LOG);
        Ok(rewards)
    }

    /// Gives one unit of an item to an NPC as a gift.
    ///
    /// Applies affinity points and grants any newly reached friendship
    /// level rewards. Returns the points awarded.
    pub fn give_gift(
        &mut self,
        npc: &str,
        item: ItemId,
        host: &mut dyn SceneHost,
        projection: &mut dyn Projection,
    ) -> Result<i32> {
        let profile = self
            .directories
            .npcs()
            .profile(npc)
            .ok_or_else(|| RuntimeError::UnresolvedNpc(npc.to_owned()))?;

        if self.state.inventory.remove_item(item, 1) == 0 {
            return Err(RuntimeError::ItemNotHeld(item));
        }

        let points = FriendshipBook::gift_points(profile, item, &self.config);
        let new_levels = self.state.friendships.add_points(npc, points, &self.config);

        for level in new_levels {
            tracing::info!("{} reached heart level {}", npc, level);
            if let Some(reward) = profile.level_rewards.get(&level).copied() {
                deliver_item(
                    reward.item,
                    reward.amount,
                    &mut self.state,
                    &self.directories,
                    host,
                );
            }
        }

        self.after_inventory_change(projection);
        projection.refresh(RefreshTargets::HEARTS);
        Ok(points)
    }

    /// Records a finished one-shot conversation.
    pub fn complete_dialogue(&mut self, dialogue_id: &str) -> bool {
        self.state.dialogue.mark_completed(dialogue_id)
    }

    /// The player finished talking to an NPC; advances talk objectives.
    pub fn talked_to(&mut self, npc: &str, projection: &mut dyn Projection) {
        if self.state.quests.advance_talk_objectives(npc) {
            projection.refresh(RefreshTargets::QUEST_LOG);
        }
    }

    /// Re-derives collect-objective progress after any inventory mutation
    /// and refreshes the dependent projections.
    fn after_inventory_change(&mut self, projection: &mut dyn Projection) {
        let counts = self.state.inventory.counts().clone();
        let quests_changed = self.state.quests.update_collect_objectives(&counts);

        let mut targets = RefreshTargets::INVENTORY;
        if quests_changed {
            targets |= RefreshTargets::QUEST_LOG;
        }
        projection.refresh(targets);
    }
}
