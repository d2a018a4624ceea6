//! Scripted host/projection fakes and content fixtures shared by the
//! integration tests.
#![allow(dead_code)]

use game_core::{
    GameConfig, ItemDefinition, ItemId, LevelReward, NpcProfile, ObjectiveKind, ObjectiveSpec,
    QuestDefinition, QuestId, QuestRequirement, QuestReward, RefreshTargets, SceneIndex,
    SceneTrack, WorldPosition,
};
use runtime::directory::{DirectoryManager, ItemDirectoryImpl, NpcDirectoryImpl, QuestDirectoryImpl};
use runtime::scene::{Projection, SceneHost};

pub const TIN_CAN: ItemId = ItemId(5);
pub const FEATHER: ItemId = ItemId(7);
pub const FISH: ItemId = ItemId(9);

/// Wires `tracing` output into the test harness. Safe to call from every
/// test; only the first call installs the subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Scripted [`SceneHost`] that records every call.
pub struct FakeSceneHost {
    pub scene: SceneIndex,
    pub player: Option<WorldPosition>,
    /// Collider regions that exist in the scene.
    pub regions: Vec<String>,
    pub bound_region: Option<String>,
    pub warps: Vec<(WorldPosition, WorldPosition)>,
    /// Placed collectibles instantiated in the scene.
    pub world_items: Vec<String>,
    pub hidden: Vec<String>,
    pub music: Option<String>,
    pub npcs: Vec<String>,
    pub requested_loads: Vec<SceneIndex>,
    pub drops: Vec<ItemId>,
}

impl FakeSceneHost {
    pub fn new(scene: u32) -> Self {
        Self {
            scene: SceneIndex(scene),
            player: Some(WorldPosition::ORIGIN),
            regions: vec!["F1".to_owned(), "T1".to_owned()],
            bound_region: Some("F1".to_owned()),
            warps: Vec::new(),
            world_items: Vec::new(),
            hidden: Vec::new(),
            music: None,
            npcs: vec!["Chirp".to_owned(), "Fishsticks".to_owned()],
            requested_loads: Vec::new(),
            drops: Vec::new(),
        }
    }
}

impl SceneHost for FakeSceneHost {
    fn active_scene(&self) -> SceneIndex {
        self.scene
    }

    fn request_scene_load(&mut self, scene: SceneIndex) {
        self.requested_loads.push(scene);
    }

    fn player_position(&self) -> Option<WorldPosition> {
        self.player
    }

    fn teleport_player(&mut self, position: WorldPosition) {
        self.player = Some(position);
    }

    fn bind_camera_boundary(&mut self, region: &str) -> bool {
        if self.regions.iter().any(|known| known == region) {
            self.bound_region = Some(region.to_owned());
            true
        } else {
            false
        }
    }

    fn current_boundary(&self) -> Option<String> {
        self.bound_region.clone()
    }

    fn warp_camera(&mut self, position: WorldPosition, delta: WorldPosition) {
        self.warps.push((position, delta));
    }

    fn world_item_ids(&self) -> Vec<String> {
        self.world_items.clone()
    }

    fn hide_world_object(&mut self, world_id: &str) {
        if !self.hidden.iter().any(|hidden| hidden == world_id) {
            self.hidden.push(world_id.to_owned());
        }
    }

    fn spawn_item_drop(&mut self, item: ItemId) {
        self.drops.push(item);
    }

    fn play_music(&mut self, track: &str) {
        self.music = Some(track.to_owned());
    }

    fn current_music(&self) -> Option<String> {
        self.music.clone()
    }

    fn npc_names(&self) -> Vec<String> {
        self.npcs.clone()
    }
}

/// Recording [`Projection`].
#[derive(Default)]
pub struct RecordingProjection {
    pub refreshes: Vec<RefreshTargets>,
    pub npc_syncs: Vec<Vec<String>>,
}

impl Projection for RecordingProjection {
    fn refresh(&mut self, targets: RefreshTargets) {
        self.refreshes.push(targets);
    }

    fn sync_npc_quest_states(&mut self, npcs: &[String]) {
        self.npc_syncs.push(npcs.to_vec());
    }
}

/// The standing quest fixture: collect three tin cans, hand them in, get a
/// feather and some gold.
pub fn gather_cans_id() -> QuestId {
    QuestId::from("gather_cans")
}

pub fn gather_cans_definition() -> QuestDefinition {
    QuestDefinition {
        id: gather_cans_id(),
        name: "Litter Patrol".to_owned(),
        description: "Chirp wants the meadow cleaned up.".to_owned(),
        objectives: vec![ObjectiveSpec {
            kind: ObjectiveKind::CollectItem { item: TIN_CAN },
            description: "Collect 3 tin cans".to_owned(),
            required_amount: 3,
        }],
        required_items: vec![QuestRequirement {
            item: TIN_CAN,
            amount: 3,
        }],
        rewards: vec![
            QuestReward::Item {
                item: FEATHER,
                amount: 1,
            },
            QuestReward::Gold { amount: 25 },
        ],
    }
}

pub fn directories() -> DirectoryManager {
    let items = ItemDirectoryImpl::from_definitions(vec![
        ItemDefinition::new(TIN_CAN, "Tin Can", 99),
        ItemDefinition::new(FEATHER, "Feather", 1),
        ItemDefinition::new(FISH, "Fish", 10),
    ]);

    let quests = QuestDirectoryImpl::from_definitions(vec![gather_cans_definition()]);

    let mut chirp = NpcProfile::new("Chirp");
    chirp.loved_items.push(FEATHER);
    chirp.hated_items.push(TIN_CAN);
    chirp
        .level_rewards
        .insert(1, LevelReward { item: FISH, amount: 1 });

    let mut fritter = NpcProfile::new("Fritter");
    fritter.liked_items.push(FISH);

    let npcs = NpcDirectoryImpl::from_profiles(vec![chirp, fritter]);

    DirectoryManager::new(items, quests, npcs)
}

pub fn config() -> GameConfig {
    let mut config = GameConfig::new();
    config.exempt_npc = Some("Fritter".to_owned());
    config.menu_scene = SceneIndex(0);
    config.scene_tracks = vec![SceneTrack {
        scene: SceneIndex(2),
        track: "ForestTheme".to_owned(),
    }];
    config
}
