//! Simulation plugin and per-tick system ordering.

use crate::collectible::{collection_system, CollectedScore};
use crate::config::{load_magnet_tuning, MagnetTuning};
use crate::magnet::magnetism_system;
use crate::snake::snake_wander_system;
use bevy::prelude::*;

pub struct SnakeSimPlugin;

impl Plugin for SnakeSimPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MagnetTuning>()
            .init_resource::<CollectedScore>()
            .add_systems(Startup, load_magnet_tuning)
            .add_systems(
                Update,
                // Strict chain: snakes move first so the magnetism pass
                // snapshots this tick's positions, and collection runs last so
                // it sees post-pull positions.
                (snake_wander_system, magnetism_system, collection_system).chain(),
            );
    }
}
