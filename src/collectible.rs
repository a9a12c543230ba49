//! Collectible entities: the magnetically-susceptible objects on the board.
//!
//! ## Flow
//!
//! 1. `spawn_element()` / `spawn_power_up()` place a collectible with a
//!    validated [`MagnetProfile`] taken from the live tuning resource.
//! 2. The magnetism pass (see [`crate::magnet`]) drifts collectibles toward
//!    nearby live snakes each tick.
//! 3. [`collection_system`] removes a collectible once it sits at-or-inside
//!    its minimum-approach threshold of a live snake head and tallies it in
//!    [`CollectedScore`].  The magnetism core itself never performs removal.

use crate::config::MagnetTuning;
use crate::constants::{SPAWN_MARGIN, WORLD_HEIGHT, WORLD_WIDTH};
use crate::error::SimResult;
use crate::magnet::{Magnetic, MagnetProfile};
use crate::snake::SnakeAgent;
use bevy::prelude::*;
use rand::Rng;

// ── Components & Resources ────────────────────────────────────────────────────

/// What kind of pickup a collectible is.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collectible {
    Element,
    PowerUp,
}

/// Running tally of everything collected this session.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CollectedScore {
    pub elements: u32,
    pub power_ups: u32,
}

// ── Spawn helpers ─────────────────────────────────────────────────────────────

/// Spawn one collectible at `pos` with an explicit profile.
///
/// The profile must already be validated; the preset constructors on
/// [`MagnetTuning`] and [`MagnetProfile`] only hand out validated profiles.
pub fn spawn_collectible(
    commands: &mut Commands,
    kind: Collectible,
    pos: Vec2,
    profile: MagnetProfile,
) -> Entity {
    commands
        .spawn((
            kind,
            Magnetic { profile },
            Transform::from_translation(pos.extend(0.2)),
            Visibility::default(),
        ))
        .id()
}

/// Spawn a common element using the tuned element profile.
pub fn spawn_element(
    commands: &mut Commands,
    tuning: &MagnetTuning,
    pos: Vec2,
) -> SimResult<Entity> {
    let profile = tuning.element_profile()?;
    Ok(spawn_collectible(commands, Collectible::Element, pos, profile))
}

/// Spawn a power-up using the tuned power-up profile.
pub fn spawn_power_up(
    commands: &mut Commands,
    tuning: &MagnetTuning,
    pos: Vec2,
) -> SimResult<Entity> {
    let profile = tuning.power_up_profile()?;
    Ok(spawn_collectible(commands, Collectible::PowerUp, pos, profile))
}

/// Scatter the opening board: `element_count` elements and `power_up_count`
/// power-ups uniformly inside the playfield minus the spawn margin.
pub fn spawn_initial_collectibles(
    commands: &mut Commands,
    tuning: &MagnetTuning,
    element_count: usize,
    power_up_count: usize,
) -> SimResult<()> {
    let mut rng = rand::thread_rng();
    let half_w = WORLD_WIDTH / 2.0 - SPAWN_MARGIN;
    let half_h = WORLD_HEIGHT / 2.0 - SPAWN_MARGIN;

    for _ in 0..element_count {
        let pos = Vec2::new(rng.gen_range(-half_w..half_w), rng.gen_range(-half_h..half_h));
        spawn_element(commands, tuning, pos)?;
    }
    for _ in 0..power_up_count {
        let pos = Vec2::new(rng.gen_range(-half_w..half_w), rng.gen_range(-half_h..half_h));
        spawn_power_up(commands, tuning, pos)?;
    }
    Ok(())
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Despawn collectibles that have closed to their minimum-approach threshold
/// of a live snake head, crediting [`CollectedScore`].
///
/// Runs after the magnetism pass so it sees post-pull positions.  Uses the
/// same threshold the attraction window bottoms out at: once the magnet stops
/// pulling, the pickup is considered reached.
pub fn collection_system(
    mut commands: Commands,
    mut score: ResMut<CollectedScore>,
    q_snakes: Query<(&Transform, &SnakeAgent)>,
    q_collectibles: Query<(Entity, &Transform, &Magnetic, &Collectible), Without<SnakeAgent>>,
) {
    for (entity, transform, magnetic, kind) in q_collectibles.iter() {
        let pos = transform.translation.truncate();
        let threshold_sq = magnetic.profile.min_approach().powi(2);

        let reached = q_snakes.iter().any(|(snake_transform, agent)| {
            agent.alive
                && snake_transform
                    .translation
                    .truncate()
                    .distance_squared(pos)
                    <= threshold_sq
        });
        if !reached {
            continue;
        }

        commands.entity(entity).despawn();
        match kind {
            Collectible::Element => score.elements += 1,
            Collectible::PowerUp => score.power_ups += 1,
        }
    }
}
