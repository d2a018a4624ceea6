use serde::{Deserialize, Serialize};

use crate::state::SceneIndex;

/// Default music assignment for one scene.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneTrack {
    pub scene: SceneIndex,
    pub track: String,
}

/// Points awarded per gift depending on the receiving NPC's affinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftPoints {
    pub loved: i32,
    pub liked: i32,
    pub hated: i32,
    pub neutral: i32,
}

impl Default for GiftPoints {
    fn default() -> Self {
        Self {
            loved: GameConfig::DEFAULT_LOVED_GIFT_POINTS,
            liked: GameConfig::DEFAULT_LIKED_GIFT_POINTS,
            hated: GameConfig::DEFAULT_HATED_GIFT_POINTS,
            neutral: GameConfig::DEFAULT_NEUTRAL_GIFT_POINTS,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of inventory slots available to the player.
    /// Clamped to [`GameConfig::MAX_INVENTORY_SLOTS`].
    pub slot_count: usize,

    /// Ticks to wait after a scene reports ready before applying restore
    /// data, so dependent systems can finish initializing. Fixed, not
    /// adaptive: systems that take longer than this may still be observed
    /// half-initialized by the apply phase.
    pub grace_ticks: u32,

    /// Friendship points required for each heart level.
    /// Index 0 is heart 1; the final entry is also the point cap.
    pub heart_thresholds: Vec<u32>,

    /// Gift affinity point values.
    pub gift_points: GiftPoints,

    /// NPC exempt from friendship point accumulation entirely.
    pub exempt_npc: Option<String>,

    /// Scene index of the start menu; world-item sync is skipped there.
    pub menu_scene: SceneIndex,

    /// Default music track per scene, played when a scene loads outside of
    /// a save restore.
    pub scene_tracks: Vec<SceneTrack>,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_INVENTORY_SLOTS: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SLOT_COUNT: usize = 20;
    /// Roughly 0.1s at a 60Hz tick rate.
    pub const DEFAULT_GRACE_TICKS: u32 = 6;
    pub const DEFAULT_HEART_THRESHOLDS: [u32; 5] = [100, 300, 600, 1000, 1500];
    pub const DEFAULT_LOVED_GIFT_POINTS: i32 = 50;
    pub const DEFAULT_LIKED_GIFT_POINTS: i32 = 20;
    pub const DEFAULT_HATED_GIFT_POINTS: i32 = -20;
    pub const DEFAULT_NEUTRAL_GIFT_POINTS: i32 = 10;

    pub fn new() -> Self {
        Self {
            slot_count: Self::DEFAULT_SLOT_COUNT,
            grace_ticks: Self::DEFAULT_GRACE_TICKS,
            heart_thresholds: Self::DEFAULT_HEART_THRESHOLDS.to_vec(),
            gift_points: GiftPoints::default(),
            exempt_npc: None,
            menu_scene: SceneIndex(0),
            scene_tracks: Vec::new(),
        }
    }

    /// The default music track for a scene, if one is configured.
    pub fn default_track_for(&self, scene: SceneIndex) -> Option<&str> {
        self.scene_tracks
            .iter()
            .find(|entry| entry.scene == scene)
            .map(|entry| entry.track.as_str())
    }

    /// The point cap: friendship points never exceed the last threshold.
    pub fn max_friendship_points(&self) -> u32 {
        self.heart_thresholds.last().copied().unwrap_or(0)
    }

    /// Highest heart level reachable with the configured thresholds.
    pub fn max_heart_level(&self) -> u8 {
        self.heart_thresholds.len() as u8
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
