//! Deterministic scenario layouts for manual verification.
//!
//! Selected via the `SNAKE_SIM_TEST` environment variable in `main.rs`
//! (e.g. `SNAKE_SIM_TEST=single_pull cargo run`).  Scenario snakes carry no
//! [`crate::snake::Wander`] component, so they hold position and the logged
//! collectible trajectories depend on the magnetism pass alone.

use crate::collectible::{spawn_element, Collectible};
use crate::config::MagnetTuning;
use crate::snake::{spawn_snake, SnakeAgent};
use bevy::prelude::*;

/// Scenario bookkeeping: frame counter and log cadence.
#[derive(Resource, Debug, Clone)]
pub struct ScenarioConfig {
    pub enabled: bool,
    pub frames: u32,
    pub log_every: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            frames: 0,
            log_every: 30,
        }
    }
}

/// One static snake at (60, 0), one element at the origin.
/// Expected: the element drifts right and is collected within a second or so.
pub fn spawn_scenario_single_pull(mut commands: Commands, tuning: Res<MagnetTuning>) {
    spawn_snake(&mut commands, Vec2::new(60.0, 0.0));
    if let Err(e) = spawn_element(&mut commands, &tuning, Vec2::ZERO) {
        eprintln!("⚠ Scenario spawn failed: {e}");
    }
}

/// Same layout as `single_pull` but the snake is dead.
/// Expected: the element never moves.
pub fn spawn_scenario_dead_snake(mut commands: Commands, tuning: Res<MagnetTuning>) {
    let snake = spawn_snake(&mut commands, Vec2::new(60.0, 0.0));
    commands.entity(snake).insert(SnakeAgent { alive: false });
    if let Err(e) = spawn_element(&mut commands, &tuning, Vec2::ZERO) {
        eprintln!("⚠ Scenario spawn failed: {e}");
    }
}

/// Two live snakes at (±60, 0), one element at the origin.
/// Expected: opposing pulls cancel and the element stays put.
pub fn spawn_scenario_dual_snake(mut commands: Commands, tuning: Res<MagnetTuning>) {
    spawn_snake(&mut commands, Vec2::new(60.0, 0.0));
    spawn_snake(&mut commands, Vec2::new(-60.0, 0.0));
    if let Err(e) = spawn_element(&mut commands, &tuning, Vec2::ZERO) {
        eprintln!("⚠ Scenario spawn failed: {e}");
    }
}

/// Periodically print every collectible's position for eyeball verification.
pub fn scenario_logging_system(
    mut scenario: ResMut<ScenarioConfig>,
    query: Query<(&Transform, &Collectible)>,
) {
    if !scenario.enabled {
        return;
    }
    scenario.frames += 1;
    if scenario.frames % scenario.log_every != 0 {
        return;
    }
    for (transform, kind) in query.iter() {
        info!(
            "[frame {}] {:?} at ({:.2}, {:.2})",
            scenario.frames, kind, transform.translation.x, transform.translation.y
        );
    }
}
