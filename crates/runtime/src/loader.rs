//! The load orchestrator.
//!
//! Loading a save may require switching scenes first, and the state can only
//! be applied once the new scene has finished initializing. The original
//! flow (set a should-load flag, load the scene, wait an end-of-frame plus
//! a short grace period, then apply) is modeled here as an explicit state
//! machine driven by the host's per-frame tick:
//!
//! ```text
//! Idle --request_load--> PendingSceneSwitch --notify_scene_ready-->
//!     AwaitingSceneReady { grace_left } --tick*--> (apply) --> Done
//! ```
//!
//! When the snapshot already targets the active scene, `request_load`
//! applies synchronously and skips the detour entirely.

use game_core::{
    GameEnv, GameState, InventorySlotRecord, QuestId, RefreshTargets, SaveData, SceneIndex,
};

use crate::error::Result;
use crate::repository::{RepositoryError, SaveRepository};
use crate::scene::{Projection, SceneHost};

/// Phase of the deferred load protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum LoadPhase {
    /// No load in flight.
    Idle,
    /// Snapshot read, scene load requested, waiting for the switch.
    PendingSceneSwitch,
    /// Scene reported ready; counting down the grace period so dependent
    /// systems can finish initializing.
    AwaitingSceneReady { grace_left: u32 },
    /// A snapshot has been applied this session.
    Done,
}

/// What `request_load` did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No save record exists; treated as a fresh start, not an error.
    NoSave,
    /// The snapshot targeted the active scene and was applied synchronously.
    Applied(ApplyReport),
    /// A scene switch was requested; application is deferred until the new
    /// scene signals readiness.
    SceneSwitch(SceneIndex),
}

/// Which slices of a snapshot could not be applied.
///
/// A load is partial-failure tolerant: dropped entries are reported and the
/// rest of the snapshot still applies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Inventory records whose item id no longer resolves.
    pub dropped_items: Vec<InventorySlotRecord>,
    /// Quest ids (active or handed-in) that no longer resolve.
    pub dropped_quests: Vec<QuestId>,
    /// Camera boundary region named in the save but absent from the scene.
    pub missing_boundary: Option<String>,
    /// World-item instances deactivated by the collected-set sync.
    pub hidden_world_items: usize,
}

impl ApplyReport {
    /// True when every slice applied without drops.
    pub fn is_clean(&self) -> bool {
        self.dropped_items.is_empty()
            && self.dropped_quests.is_empty()
            && self.missing_boundary.is_none()
    }
}

/// Everything the apply phase needs from the current frame.
///
/// Built fresh for each call: a scene switch destroys and recreates
/// non-persistent objects, so the orchestrator never caches host,
/// projection, or directory references across frames.
pub struct Frame<'a> {
    pub state: &'a mut GameState,
    pub env: GameEnv<'a>,
    pub host: &'a mut dyn SceneHost,
    pub projection: &'a mut dyn Projection,
}

/// Coordinates the multi-phase restore sequence across a scene transition.
pub struct LoadOrchestrator {
    phase: LoadPhase,
    /// Snapshot waiting to be applied after a scene switch.
    pending: Option<SaveData>,
    grace_ticks: u32,
}

impl LoadOrchestrator {
    pub fn new(grace_ticks: u32) -> Self {
        Self {
            phase: LoadPhase::Idle,
            pending: None,
            grace_ticks,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// True while a deferred load is waiting for a scene switch or grace
    /// period. Saving is refused in this window.
    pub fn load_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Reads the snapshot and either applies it now or defers application
    /// across a scene switch.
    ///
    /// A missing save record is a no-op (`LoadOutcome::NoSave`); corrupt
    /// records and I/O failures surface as errors.
    pub fn request_load(
        &mut self,
        repository: &dyn SaveRepository,
        frame: &mut Frame<'_>,
    ) -> Result<LoadOutcome> {
        let data = match repository.load() {
            Ok(data) => data,
            Err(RepositoryError::NotFound) => {
                tracing::info!("No save record found, starting fresh");
                return Ok(LoadOutcome::NoSave);
            }
            Err(e) => return Err(e.into()),
        };

        let active = frame.host.active_scene();
        if active != data.scene {
            let target = data.scene;
            tracing::info!("Save targets {}, switching from {}", target, active);
            self.pending = Some(data);
            self.phase = LoadPhase::PendingSceneSwitch;
            frame.host.request_scene_load(target);
            return Ok(LoadOutcome::SceneSwitch(target));
        }

        let report = self.apply(data, frame);
        self.phase = LoadPhase::Done;
        Ok(LoadOutcome::Applied(report))
    }

    /// Scene-lifecycle notification from the host.
    ///
    /// Only meaningful while a load is pending; arms (or re-arms) the grace
    /// countdown. Re-entrant: a second notification just restarts the wait.
    pub fn notify_scene_ready(&mut self, scene: SceneIndex) {
        if self.pending.is_none() {
            return;
        }
        tracing::debug!("Scene {} ready, starting grace period", scene);
        self.phase = LoadPhase::AwaitingSceneReady {
            grace_left: self.grace_ticks,
        };
    }

    /// Per-frame drive. Counts down the grace period and applies the
    /// pending snapshot when it expires.
    pub fn tick(&mut self, frame: &mut Frame<'_>) -> Option<ApplyReport> {
        let LoadPhase::AwaitingSceneReady { grace_left } = self.phase else {
            return None;
        };

        if let Some(remaining) = grace_left.checked_sub(1)
            && remaining > 0
        {
            self.phase = LoadPhase::AwaitingSceneReady {
                grace_left: remaining,
            };
            return None;
        }

        let data = self.pending.take()?;
        let report = self.apply(data, frame);
        self.phase = LoadPhase::Done;
        Some(report)
    }

    /// Pulls a snapshot from every ledger plus the scene context and writes
    /// it through the persistence gateway.
    ///
    /// Returns `Ok(false)` (skipped, logged) when the player is absent or a
    /// load is in flight; repository failures are real errors.
    pub fn save_game(
        &self,
        repository: &dyn SaveRepository,
        frame: &mut Frame<'_>,
    ) -> Result<bool> {
        if self.load_pending() {
            tracing::warn!("Refusing to save while a load is in flight ({})", self.phase);
            return Ok(false);
        }

        let Some(player_position) = frame.host.player_position() else {
            tracing::warn!("Refusing to save: no player in the active scene");
            return Ok(false);
        };

        // Bring derived state up to date so the record is internally
        // consistent.
        frame.state.inventory.rebuild_counts();
        let counts = frame.state.inventory.counts().clone();
        frame.state.quests.update_collect_objectives(&counts);

        let (quest_progress, handed_in_quests) = frame.state.quests.snapshot();
        let mut data = SaveData::new();
        data.inventory = frame.state.inventory.snapshot();
        data.completed_dialogues = frame.state.dialogue.snapshot();
        data.collected_world_items = frame.state.world.snapshot();
        data.quest_progress = quest_progress;
        data.handed_in_quests = handed_in_quests;
        data.friendship_levels = frame.state.friendships.snapshot();
        data.scene = frame.host.active_scene();
        data.player_position = player_position;
        data.map_boundary = frame.host.current_boundary();
        data.music_track = frame.host.current_music();

        repository.store(&data)?;
        tracing::info!("Saved game (scene {})", data.scene);
        Ok(true)
    }

    /// Applies a snapshot to the current scene, in dependency order.
    ///
    /// The ordering is load-bearing:
    /// 1. inventory (other systems read its counts while restoring),
    /// 2. player teleport + camera re-bind/warp (before any UI reads
    ///    positions),
    /// 3. quest progress (re-linked against the quest directory),
    /// 4. collected-world-item set + scene sync (after inventory, so
    ///    visibility decisions see current counts),
    /// 5. projection refresh + per-NPC quest-state recomputation.
    ///
    /// Unresolvable entries are dropped into the report; the rest of the
    /// snapshot still applies.
    fn apply(&mut self, data: SaveData, frame: &mut Frame<'_>) -> ApplyReport {
        let mut report = ApplyReport::default();

        // Resume the saved music track before anything visible happens.
        if let Some(track) = &data.music_track {
            frame.host.play_music(track);
        }

        // 1. Inventory.
        match frame.env.items() {
            Ok(items) => {
                let dropped = frame.state.inventory.restore(&data.inventory, items);
                for record in &dropped {
                    tracing::error!(
                        "Dropping saved slot {}: unknown item {}",
                        record.slot,
                        record.item
                    );
                }
                report.dropped_items = dropped;
            }
            Err(e) => tracing::error!("Skipping inventory restore: {}", e),
        }

        // 2. Player position, then camera boundary and warp.
        match frame.host.player_position() {
            Some(previous) => {
                frame.host.teleport_player(data.player_position);
                if let Some(region) = &data.map_boundary {
                    if frame.host.bind_camera_boundary(region) {
                        let delta = data.player_position.delta_from(previous);
                        frame.host.warp_camera(data.player_position, delta);
                    } else {
                        tracing::warn!("Camera boundary '{}' not found in scene", region);
                        report.missing_boundary = Some(region.clone());
                    }
                }
            }
            None => {
                tracing::warn!("No player object in the scene, skipping teleport");
            }
        }

        // 3. Quests, re-linked against the directory.
        match frame.env.quests() {
            Ok(quests) => {
                let dropped =
                    frame
                        .state
                        .quests
                        .restore(data.quest_progress, data.handed_in_quests, quests);
                for id in &dropped {
                    tracing::error!("Dropping saved quest '{}': not in quest directory", id);
                }
                report.dropped_quests = dropped;
            }
            Err(e) => tracing::error!("Skipping quest restore: {}", e),
        }

        // Re-derive collect objectives from the restored inventory.
        let counts = frame.state.inventory.counts().clone();
        frame.state.quests.update_collect_objectives(&counts);

        // Dialogue history rides along with the quest slice.
        frame.state.dialogue.restore(data.completed_dialogues);

        // 4. World collection, then hide collected instances.
        frame.state.world.restore(data.collected_world_items);
        report.hidden_world_items = sync_world_items(frame.state, frame.host);

        // 5. Visual projections and NPC quest indicators.
        frame.projection.refresh(RefreshTargets::all());
        let npcs = frame.host.npc_names();
        frame.projection.sync_npc_quest_states(&npcs);

        tracing::info!(
            "Applied save data (dropped {} items, {} quests)",
            report.dropped_items.len(),
            report.dropped_quests.len()
        );

        report
    }
}

/// Deactivates every placed collectible whose identifier is in the
/// collected set. Idempotent: hiding an already-hidden object is a no-op on
/// the host side.
pub(crate) fn sync_world_items(state: &GameState, host: &mut dyn SceneHost) -> usize {
    let mut hidden = 0;
    for world_id in host.world_item_ids() {
        if state.world.is_collected(&world_id) {
            host.hide_world_object(&world_id);
            hidden += 1;
        }
    }
    tracing::debug!("World sync complete, deactivated {} items", hidden);
    hidden
}
