//! Scene Tests - Multi-door Scenes Driven by a Walking Observer
//!
//! Tests for the scene driver: door arena, hint overlay and sound cues.

use door_scene_engine::door::{DoorEvent, DoorState, SwingDirection};
use door_scene_engine::game::{DoorId, DoorScene, SceneConfig, WalkPath};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

/// Run a walk to completion, collecting every door event in order.
fn run_walk(scene: &mut DoorScene, walk: &mut WalkPath) -> Vec<(DoorId, DoorEvent)> {
    let mut events = Vec::new();
    while !walk.is_finished() {
        let frame = scene.tick(walk.advance(DT), DT);
        for door in frame.doors {
            if let Some(event) = door.event {
                events.push((door.id, event));
            }
        }
    }
    events
}

#[test]
fn test_walk_out_and_back_through_front_door() {
    let config = SceneConfig::default();
    let mut scene = DoorScene::new(&config).unwrap();
    let mut walk = WalkPath::through_doorway(
        config.observer_start,
        Vec2::new(0.0, -8.0),
        Vec2::new(0.0, -16.0),
        6.0,
    );

    let events = run_walk(&mut scene, &mut walk);

    // Leaving the room walks against +Z, coming back walks along it
    assert_eq!(
        events,
        vec![
            (DoorId(0), DoorEvent::Opened(SwingDirection::Inward)),
            (DoorId(0), DoorEvent::Closed),
            (DoorId(0), DoorEvent::Opened(SwingDirection::Outward)),
            (DoorId(0), DoorEvent::Closed),
        ]
    );
    assert_eq!(scene.drain_cues(), 2);

    let door = scene.doors().get(DoorId(0)).unwrap();
    assert_eq!(door.state(), DoorState::Closed);
}

#[test]
fn test_two_door_scene_updates_doors_independently() {
    let config = SceneConfig::two_doors();
    let mut scene = DoorScene::new(&config).unwrap();
    let front = scene.doors().find("front").unwrap();
    let back = scene.doors().find("back").unwrap();

    // Walk from the front door straight across the room to the back door
    let mut walk = WalkPath::new(
        vec![Vec3::new(0.0, 2.4, -12.0), Vec3::new(0.0, 2.4, 14.0)],
        6.0,
    );
    scene.teleport(walk.position());
    let events = run_walk(&mut scene, &mut walk);

    let front_events: Vec<_> = events.iter().filter(|(id, _)| *id == front).collect();
    let back_events: Vec<_> = events.iter().filter(|(id, _)| *id == back).collect();

    // Entering through the front: moving +Z, front faces +Z
    assert_eq!(front_events[0].1, DoorEvent::Opened(SwingDirection::Outward));
    assert_eq!(front_events[1].1, DoorEvent::Closed);
    // Leaving through the back: moving +Z, back faces -Z
    assert_eq!(back_events[0].1, DoorEvent::Opened(SwingDirection::Inward));
    assert_eq!(back_events.len(), 2);
}

#[test]
fn test_two_doors_opening_same_frame_queue_two_cues() {
    let mut config = SceneConfig::two_doors();
    config.doors[1].center = Vec2::new(2.0, -8.0);
    let mut scene = DoorScene::new(&config).unwrap();

    let spot = Vec3::new(1.0, 2.4, -7.0);
    scene.teleport(spot);
    let frame = scene.tick(spot, DT);
    assert_eq!(frame.cues, 2);
    assert_eq!(scene.drain_cues(), 2);
}

#[test]
fn test_hint_reappears_when_door_opens() {
    let config = SceneConfig::default();
    let mut scene = DoorScene::new(&config).unwrap();
    let start = config.observer_start;

    // Let the intro hint expire while standing still
    for _ in 0..(9 * 60) {
        scene.tick(start, DT);
    }
    assert!(!scene.hint().is_visible());

    let mut walk = WalkPath::new(vec![start, Vec3::new(0.0, 2.4, -6.0)], 6.0);
    let mut shown = false;
    while !walk.is_finished() {
        let frame = scene.tick(walk.advance(DT), DT);
        if frame.cues > 0 {
            shown = frame.hint_visible;
        }
    }
    assert!(shown);
}

#[test]
fn test_scene_from_json() {
    let json = r#"{
        "doors": [
            { "name": "gate", "center": [10.0, 0.0], "facing": [1.0, 0.0], "open_radius": 2.0, "close_radius": 3.0 }
        ]
    }"#;
    let config = SceneConfig::from_json_str(json).unwrap();
    let mut scene = DoorScene::new(&config).unwrap();
    let gate = scene.doors().find("gate").unwrap();

    scene.teleport(Vec3::new(7.5, 1.0, 0.0));
    let frame = scene.tick(Vec3::new(7.5, 1.0, 0.0), DT);
    assert_eq!(frame.doors[gate.0].event, None);

    let frame = scene.tick(Vec3::new(8.5, 1.0, 0.0), DT);
    assert_eq!(
        frame.doors[gate.0].event,
        Some(DoorEvent::Opened(SwingDirection::Outward))
    );
}
