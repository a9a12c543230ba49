//! Snake agents: the creatures whose heads exert magnetic pull.
//!
//! The magnetism core only ever reads a snake's position and liveness; it
//! neither moves nor owns snakes.  Movement belongs to whatever drives the
//! game loop — here a small autonomous wander stands in for it so the demo
//! binary has something to watch.

use crate::constants::{SNAKE_DRIFT_SPEED, SNAKE_TURN_RATE, WORLD_HEIGHT, WORLD_WIDTH};
use bevy::prelude::*;
use rand::Rng;

/// A player- or AI-controlled snake, read by the magnetism pass.
#[derive(Component, Debug, Clone, Copy)]
pub struct SnakeAgent {
    /// Dead snakes stay in the world (their body becomes pickups elsewhere in
    /// the game) but exert no pull and collect nothing.
    pub alive: bool,
}

/// Autonomous wander state for demo snakes.  Scenario snakes omit this
/// component and simply hold position.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wander {
    /// Current heading (rad).
    pub heading: f32,
    /// Forward speed (u/s).
    pub speed: f32,
}

/// Spawn a live snake head at `pos`.
pub fn spawn_snake(commands: &mut Commands, pos: Vec2) -> Entity {
    commands
        .spawn((
            SnakeAgent { alive: true },
            Transform::from_translation(pos.extend(0.5)),
            Visibility::default(),
        ))
        .id()
}

/// Spawn a wandering demo snake with a random initial heading.
pub fn spawn_wandering_snake(commands: &mut Commands, pos: Vec2) -> Entity {
    let mut rng = rand::thread_rng();
    let entity = spawn_snake(commands, pos);
    commands.entity(entity).insert(Wander {
        heading: rng.gen_range(0.0..std::f32::consts::TAU),
        speed: SNAKE_DRIFT_SPEED,
    });
    entity
}

/// Move wandering snakes: jitter the heading, step forward, and turn around
/// at the playfield edge.
pub fn snake_wander_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Wander, &SnakeAgent)>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();
    let half_w = WORLD_WIDTH / 2.0;
    let half_h = WORLD_HEIGHT / 2.0;

    for (mut transform, mut wander, agent) in query.iter_mut() {
        if !agent.alive {
            continue;
        }

        wander.heading += rng.gen_range(-SNAKE_TURN_RATE..SNAKE_TURN_RATE) * dt;
        let step = Vec2::new(wander.heading.cos(), wander.heading.sin()) * wander.speed * dt;
        transform.translation.x += step.x;
        transform.translation.y += step.y;

        // Point back at the origin once outside the playfield.
        if transform.translation.x.abs() > half_w || transform.translation.y.abs() > half_h {
            wander.heading =
                (-transform.translation.y).atan2(-transform.translation.x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::world::CommandQueue;

    #[test]
    fn spawn_snake_inserts_live_agent_at_position() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let id = spawn_snake(&mut commands, Vec2::new(3.0, -4.0));
        queue.apply(&mut world);

        let agent = world.get::<SnakeAgent>(id).expect("agent component");
        assert!(agent.alive);
        let transform = world.get::<Transform>(id).expect("transform component");
        assert_eq!(transform.translation.truncate(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn wandering_snake_carries_wander_state() {
        let mut world = World::new();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let id = spawn_wandering_snake(&mut commands, Vec2::ZERO);
        queue.apply(&mut world);

        let wander = world.get::<Wander>(id).expect("wander component");
        assert_eq!(wander.speed, SNAKE_DRIFT_SPEED);
        assert!((0.0..std::f32::consts::TAU).contains(&wander.heading));
    }
}
