//! Engine-glue seams.
//!
//! The host engine owns scenes, cameras, audio, and UI objects. The runtime
//! reaches them only through these traits, handed in fresh on every call so
//! a scene switch can never leave the runtime holding references into a
//! destroyed scene. Tests drive the runtime with scripted implementations.

use game_core::{ItemId, RefreshTargets, SceneIndex, WorldPosition};

/// Scene, camera, audio, and world-object operations provided by the host
/// engine.
pub trait SceneHost {
    /// Index of the currently active scene.
    fn active_scene(&self) -> SceneIndex;

    /// Begin loading another scene. The request cannot be cancelled; the
    /// ready notification arrives later via the session.
    fn request_scene_load(&mut self, scene: SceneIndex);

    /// Current player position, if a player object exists in the scene.
    fn player_position(&self) -> Option<WorldPosition>;

    fn teleport_player(&mut self, position: WorldPosition);

    /// Re-bind the camera confinement to the named collider region.
    /// Returns false when no region with that name exists in the scene.
    fn bind_camera_boundary(&mut self, region: &str) -> bool;

    /// Name of the currently bound confinement region.
    fn current_boundary(&self) -> Option<String>;

    /// Snap the camera onto a warped target so it does not pan across the
    /// map after a teleport.
    fn warp_camera(&mut self, position: WorldPosition, delta: WorldPosition);

    /// World identifiers of every placed collectible instantiated in the
    /// active scene.
    fn world_item_ids(&self) -> Vec<String>;

    /// Deactivate the world object with the given identifier.
    fn hide_world_object(&mut self, world_id: &str);

    /// Spawn a dropped item near the player. Used when rewards overflow the
    /// inventory.
    fn spawn_item_drop(&mut self, item: ItemId);

    fn play_music(&mut self, track: &str);

    fn current_music(&self) -> Option<String>;

    /// Names of every NPC instance present in the active scene.
    fn npc_names(&self) -> Vec<String>;
}

/// UI-refresh operations provided by the host's presentation layer.
pub trait Projection {
    /// Re-render the named projections from current ledger state.
    fn refresh(&mut self, targets: RefreshTargets);

    /// Re-run quest-state recomputation for the given NPC instances (their
    /// indicators depend on quest and inventory state).
    fn sync_npc_quest_states(&mut self, npcs: &[String]);
}
