//! Load orchestrator scenarios: synchronous apply, deferred apply across a
//! scene switch, world-item sync, and partial-failure tolerance.

mod common;

use game_core::{
    GameConfig, InventorySlotRecord, QuestId, QuestProgress, SaveData, SceneIndex, WorldPosition,
};
use runtime::repository::InMemorySaveRepo;
use runtime::{LoadOutcome, LoadPhase, Session};

use common::{FakeSceneHost, RecordingProjection, TIN_CAN, directories, gather_cans_definition};

fn forest_save() -> SaveData {
    let mut data = SaveData::new();
    data.inventory = vec![InventorySlotRecord {
        item: TIN_CAN,
        slot: 2,
        quantity: 2,
    }];
    data.quest_progress = vec![QuestProgress::from_definition(&gather_cans_definition())];
    data.collected_world_items = ["Can_Area1_1".to_owned()].into();
    data.scene = SceneIndex(2);
    data.player_position = WorldPosition::new(10.0, 3.0, 0.0);
    data.map_boundary = Some("T1".to_owned());
    data.music_track = Some("ForestTheme".to_owned());
    data
}

fn session_with(record: SaveData) -> Session {
    Session::new(
        common::config(),
        directories(),
        Box::new(InMemorySaveRepo::with_record(record)),
    )
}

#[test]
fn load_without_a_save_is_a_no_op() {
    common::init_tracing();
    let mut session = Session::new(
        common::config(),
        directories(),
        Box::new(InMemorySaveRepo::new()),
    );
    let mut host = FakeSceneHost::new(2);
    let mut projection = RecordingProjection::default();

    let outcome = session.request_load(&mut host, &mut projection).unwrap();
    assert_eq!(outcome, LoadOutcome::NoSave);
    assert_eq!(session.load_phase(), LoadPhase::Idle);
    assert!(host.requested_loads.is_empty());
}

#[test]
fn matching_scene_applies_synchronously() {
    common::init_tracing();
    let mut session = session_with(forest_save());
    let mut host = FakeSceneHost::new(2);
    host.world_items = vec!["Can_Area1_1".to_owned(), "Can_Area1_2".to_owned()];
    let mut projection = RecordingProjection::default();

    let outcome = session.request_load(&mut host, &mut projection).unwrap();
    let LoadOutcome::Applied(report) = outcome else {
        panic!("expected synchronous apply, got {outcome:?}");
    };

    assert!(report.dropped_items.is_empty());
    assert!(report.dropped_quests.is_empty());
    assert_eq!(session.load_phase(), LoadPhase::Done);
    // No scene switch was requested.
    assert!(host.requested_loads.is_empty());

    // Ledgers restored.
    assert_eq!(session.state().inventory.count_of(TIN_CAN), 2);
    assert!(session.state().quests.is_active(&common::gather_cans_id()));

    // Scene context restored: player, camera, music.
    assert_eq!(host.player, Some(WorldPosition::new(10.0, 3.0, 0.0)));
    assert_eq!(host.bound_region.as_deref(), Some("T1"));
    assert_eq!(host.warps.len(), 1);
    assert_eq!(host.music.as_deref(), Some("ForestTheme"));

    // Collected world item hidden; the uncollected one untouched.
    assert_eq!(host.hidden, vec!["Can_Area1_1".to_owned()]);
    assert_eq!(report.hidden_world_items, 1);

    // Projections refreshed and NPC quest state re-synced.
    assert!(!projection.refreshes.is_empty());
    assert_eq!(projection.npc_syncs.len(), 1);
}

#[test]
fn differing_scene_defers_apply_until_ready_plus_grace() {
    common::init_tracing();
    let grace = GameConfig::DEFAULT_GRACE_TICKS;
    let mut session = session_with(forest_save());
    let mut host = FakeSceneHost::new(0);
    let mut projection = RecordingProjection::default();

    let outcome = session.request_load(&mut host, &mut projection).unwrap();
    assert_eq!(outcome, LoadOutcome::SceneSwitch(SceneIndex(2)));
    assert_eq!(session.load_phase(), LoadPhase::PendingSceneSwitch);
    assert_eq!(host.requested_loads, vec![SceneIndex(2)]);
    // Nothing applied yet.
    assert_eq!(session.state().inventory.count_of(TIN_CAN), 0);

    // The host finishes the switch and signals readiness.
    host.scene = SceneIndex(2);
    host.world_items = vec!["Can_Area1_1".to_owned()];
    session.on_scene_ready(SceneIndex(2), &mut host);
    assert_eq!(
        session.load_phase(),
        LoadPhase::AwaitingSceneReady { grace_left: grace }
    );

    // The grace period holds the apply back.
    for _ in 0..grace - 1 {
        assert!(session.tick(&mut host, &mut projection).is_none());
        assert_eq!(session.state().inventory.count_of(TIN_CAN), 0);
    }

    let report = session
        .tick(&mut host, &mut projection)
        .expect("apply on final grace tick");
    assert!(report.dropped_quests.is_empty());
    assert_eq!(session.load_phase(), LoadPhase::Done);
    assert_eq!(session.state().inventory.count_of(TIN_CAN), 2);
    assert_eq!(host.hidden, vec!["Can_Area1_1".to_owned()]);

    // Later ticks are inert.
    assert!(session.tick(&mut host, &mut projection).is_none());
}

#[test]
fn save_is_refused_while_a_load_is_in_flight() {
    common::init_tracing();
    let mut session = session_with(forest_save());
    let mut host = FakeSceneHost::new(0);
    let mut projection = RecordingProjection::default();

    session.request_load(&mut host, &mut projection).unwrap();
    assert_eq!(session.load_phase(), LoadPhase::PendingSceneSwitch);

    assert!(!session.save(&mut host, &mut projection).unwrap());
}

#[test]
fn unresolvable_quests_are_dropped_and_the_rest_load() {
    common::init_tracing();
    let mut data = forest_save();
    data.quest_progress.push(QuestProgress {
        quest_id: QuestId::from("ghost_quest"),
        objectives: Vec::new(),
    });
    data.handed_in_quests.insert(QuestId::from("old_quest"));

    let mut session = session_with(data);
    let mut host = FakeSceneHost::new(2);
    let mut projection = RecordingProjection::default();

    let LoadOutcome::Applied(report) = session.request_load(&mut host, &mut projection).unwrap()
    else {
        panic!("expected synchronous apply");
    };

    assert_eq!(
        report.dropped_quests,
        vec![QuestId::from("ghost_quest"), QuestId::from("old_quest")]
    );
    // The valid quest still loaded, with collect progress re-derived from
    // the restored inventory.
    let progress = session
        .state()
        .quests
        .progress(&common::gather_cans_id())
        .unwrap();
    assert_eq!(progress.objectives[0].current_amount, 2);
    assert!(session.state().quests.handed_in().is_empty());
}

#[test]
fn unresolvable_items_are_dropped_from_restored_slots() {
    common::init_tracing();
    let mut data = forest_save();
    data.inventory.push(InventorySlotRecord {
        item: game_core::ItemId(404),
        slot: 5,
        quantity: 1,
    });

    let mut session = session_with(data);
    let mut host = FakeSceneHost::new(2);
    let mut projection = RecordingProjection::default();

    let LoadOutcome::Applied(report) = session.request_load(&mut host, &mut projection).unwrap()
    else {
        panic!("expected synchronous apply");
    };

    assert_eq!(report.dropped_items.len(), 1);
    assert_eq!(report.dropped_items[0].item, game_core::ItemId(404));
    assert_eq!(session.state().inventory.count_of(TIN_CAN), 2);
}

#[test]
fn missing_camera_boundary_is_reported_not_fatal() {
    common::init_tracing();
    let mut data = forest_save();
    data.map_boundary = Some("F9".to_owned());

    let mut session = session_with(data);
    let mut host = FakeSceneHost::new(2);
    let mut projection = RecordingProjection::default();

    let LoadOutcome::Applied(report) = session.request_load(&mut host, &mut projection).unwrap()
    else {
        panic!("expected synchronous apply");
    };

    assert_eq!(report.missing_boundary.as_deref(), Some("F9"));
    // The rest of the apply went through.
    assert_eq!(session.state().inventory.count_of(TIN_CAN), 2);
    assert!(host.warps.is_empty());
}

#[test]
fn scene_ready_outside_a_load_plays_default_music_and_syncs() {
    common::init_tracing();
    let mut session = session_with(forest_save());
    let mut host = FakeSceneHost::new(2);
    host.world_items = vec!["Can_Area1_1".to_owned()];
    let mut projection = RecordingProjection::default();

    // Collect the can so the sync has something to hide, then re-enter the
    // scene without any load pending.
    session
        .collect_world_item("Can_Area1_1", TIN_CAN, 1, &mut host, &mut projection)
        .unwrap();
    host.hidden.clear();

    session.on_scene_ready(SceneIndex(2), &mut host);

    assert_eq!(host.music.as_deref(), Some("ForestTheme"));
    assert_eq!(host.hidden, vec!["Can_Area1_1".to_owned()]);

    // Syncing again changes nothing.
    session.on_scene_ready(SceneIndex(2), &mut host);
    assert_eq!(host.hidden, vec!["Can_Area1_1".to_owned()]);
}

#[test]
fn menu_scene_skips_sync_and_music() {
    common::init_tracing();
    let mut session = session_with(forest_save());
    let mut host = FakeSceneHost::new(0);

    session.on_scene_ready(SceneIndex(0), &mut host);

    assert!(host.music.is_none());
    assert!(host.hidden.is_empty());
}
