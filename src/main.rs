use bevy::prelude::*;
use bevy::window::WindowResolution;
use rand::Rng;
use std::env;

use infinite_snake::collectible::spawn_initial_collectibles;
use infinite_snake::config::{load_magnet_tuning, MagnetTuning};
use infinite_snake::simulation::SnakeSimPlugin;
use infinite_snake::snake::spawn_wandering_snake;
use infinite_snake::testing::{
    scenario_logging_system, spawn_scenario_dead_snake, spawn_scenario_dual_snake,
    spawn_scenario_single_pull, ScenarioConfig,
};

/// Seed the demo world: scattered collectibles plus a few wandering snakes
/// near the centre.
fn spawn_initial_world(mut commands: Commands, tuning: Res<MagnetTuning>) {
    if let Err(e) = spawn_initial_collectibles(
        &mut commands,
        &tuning,
        tuning.initial_element_count,
        tuning.initial_power_up_count,
    ) {
        eprintln!("⚠ Failed to seed collectibles: {e}");
    }

    let mut rng = rand::thread_rng();
    for _ in 0..tuning.initial_snake_count {
        let pos = Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        spawn_wandering_snake(&mut commands, pos);
    }
}

fn main() {
    // Check for scenario mode
    let scenario = env::var("SNAKE_SIM_TEST").ok();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Infinite Snake".into(),
            resolution: WindowResolution::new(1200, 680),
            ..Default::default()
        }),
        ..Default::default()
    }))
    .insert_resource(ClearColor(Color::BLACK))
    // Insert MagnetTuning with compiled defaults; load_magnet_tuning will
    // overwrite it from assets/magnetism.toml (if present) in the Startup
    // schedule.
    .insert_resource(MagnetTuning::default())
    .add_plugins(SnakeSimPlugin);

    if let Some(name) = scenario {
        app.insert_resource(ScenarioConfig {
            enabled: true,
            ..Default::default()
        });

        match name.as_str() {
            "single_pull" => app.add_systems(
                Startup,
                spawn_scenario_single_pull.after(load_magnet_tuning),
            ),
            "dead_snake" => app.add_systems(
                Startup,
                spawn_scenario_dead_snake.after(load_magnet_tuning),
            ),
            "dual_snake" => app.add_systems(
                Startup,
                spawn_scenario_dual_snake.after(load_magnet_tuning),
            ),
            _ => app.add_systems(
                Startup,
                spawn_scenario_single_pull.after(load_magnet_tuning),
            ),
        };

        app.add_systems(Update, scenario_logging_system);

        println!("Running scenario: {}", name);
    } else {
        app.insert_resource(ScenarioConfig::default())
            .add_systems(Startup, spawn_initial_world.after(load_magnet_tuning));
    }

    app.run();
}
