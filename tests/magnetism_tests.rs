//! Headless integration tests for the magnetism simulation loop.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering — so they run
//! fast and deterministically in CI.  Entities are spawned directly into the
//! world and stepped with `app.update()`.
//!
//! Profiles here disable delta-time scaling so displacement per update is
//! independent of the wall-clock `Time` deltas a headless run produces; the
//! exact delta-scaling numbers are covered by the unit tests in
//! `src/magnet.rs`.

use bevy::prelude::*;
use infinite_snake::collectible::{CollectedScore, Collectible};
use infinite_snake::magnet::{Magnetic, MagnetProfile};
use infinite_snake::simulation::SnakeSimPlugin;
use infinite_snake::snake::SnakeAgent;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with the full simulation plugin installed.
fn sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SnakeSimPlugin);
    app
}

/// An element profile with delta-time scaling off: fixed pull per update.
fn frame_locked_element() -> MagnetProfile {
    MagnetProfile {
        apply_delta_time: false,
        ..MagnetProfile::ELEMENT
    }
    .validated()
    .unwrap()
}

fn spawn_static_snake(app: &mut App, pos: Vec2, alive: bool) -> Entity {
    app.world_mut()
        .spawn((SnakeAgent { alive }, Transform::from_translation(pos.extend(0.5))))
        .id()
}

fn spawn_test_element(app: &mut App, pos: Vec2, profile: MagnetProfile) -> Entity {
    app.world_mut()
        .spawn((
            Collectible::Element,
            Magnetic { profile },
            Transform::from_translation(pos.extend(0.2)),
        ))
        .id()
}

fn element_pos(app: &App, id: Entity) -> Vec2 {
    app.world()
        .get::<Transform>(id)
        .expect("element still exists")
        .translation
        .truncate()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// An element inside a live snake's attraction window drifts toward it,
/// a fixed amount per update, without overshooting into the footprint.
#[test]
fn element_drifts_toward_live_snake() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(90.0, 0.0), true);
    let element = spawn_test_element(&mut app, Vec2::ZERO, frame_locked_element());

    app.update();
    let after_one = element_pos(&app, element);
    // pull = (1 − 90/100) × 4 = 0.4 per update, along +x.
    assert!(
        (after_one.x - 0.4).abs() < 1e-4,
        "expected x ≈ 0.4 after one update, got {}",
        after_one.x
    );
    assert_eq!(after_one.y, 0.0);

    app.update();
    app.update();
    let after_three = element_pos(&app, element);
    assert!(
        after_three.x > after_one.x,
        "element must keep closing on the snake"
    );
    assert!(
        after_three.x < 90.0 - 20.0,
        "element must still be outside the footprint after three updates"
    );
}

/// A dead snake exerts no pull at any distance.
#[test]
fn dead_snake_leaves_collectibles_untouched() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(60.0, 0.0), false);
    let element = spawn_test_element(&mut app, Vec2::ZERO, frame_locked_element());

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(element_pos(&app, element), Vec2::ZERO);
}

/// An element out of range stays exactly where it spawned.
#[test]
fn element_beyond_range_never_moves() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(150.0, 0.0), true);
    let element = spawn_test_element(&mut app, Vec2::ZERO, frame_locked_element());

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(element_pos(&app, element), Vec2::ZERO);
}

/// A collectible already inside its minimum-approach threshold of a live
/// snake is collected: despawned and credited to the score.
#[test]
fn collectible_at_threshold_is_collected() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(10.0, 0.0), true);
    let element = spawn_test_element(&mut app, Vec2::ZERO, frame_locked_element());

    app.update();

    assert!(
        app.world().get::<Collectible>(element).is_none(),
        "element within the footprint must be collected"
    );
    let score = app.world().resource::<CollectedScore>();
    assert_eq!(score.elements, 1);
    assert_eq!(score.power_ups, 0);
}

/// Dead snakes collect nothing even at zero distance.
#[test]
fn dead_snake_collects_nothing() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(5.0, 0.0), false);
    let element = spawn_test_element(&mut app, Vec2::ZERO, frame_locked_element());

    for _ in 0..3 {
        app.update();
    }
    assert!(app.world().get::<Collectible>(element).is_some());
    assert_eq!(app.world().resource::<CollectedScore>().elements, 0);
}

/// An entity that is both a snake and magnetic is excluded from the
/// attraction pass: the sets are disjoint by construction.
#[test]
fn snake_is_never_attracted_to_another_snake() {
    let mut app = sim_app();
    spawn_static_snake(&mut app, Vec2::new(60.0, 0.0), true);
    let hybrid = app
        .world_mut()
        .spawn((
            SnakeAgent { alive: true },
            Magnetic {
                profile: frame_locked_element(),
            },
            Transform::from_translation(Vec3::ZERO),
        ))
        .id();

    for _ in 0..3 {
        app.update();
    }
    let pos = app
        .world()
        .get::<Transform>(hybrid)
        .unwrap()
        .translation
        .truncate();
    assert_eq!(pos, Vec2::ZERO);
}
