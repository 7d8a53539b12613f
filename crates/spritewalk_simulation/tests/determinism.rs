//! Тесты детерминизма
//!
//! Один и тот же скрипт input → идентичный snapshot муверов

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spritewalk_simulation::{
    create_headless_app, mover_snapshot, spawn_character, ActionInput, CharacterMover,
    GroundCollider, HeadlessPhysicsPlugin, JumpPerformed, MoverPlugin,
};

#[test]
fn test_determinism_same_script() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 300;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым скриптом (seed {}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_scripts_diverge() {
    const TICK_COUNT: usize = 120;

    let snapshot1 = run_simulation(1, TICK_COUNT);
    let snapshot2 = run_simulation(2, TICK_COUNT);

    assert_ne!(snapshot1, snapshot2);
}

/// Запускает симуляцию со случайным (seeded) input и возвращает snapshot
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app();
    app.add_plugins((MoverPlugin, HeadlessPhysicsPlugin));

    app.world_mut().spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        GroundCollider::ground(Vec2::new(100.0, 0.5)),
    ));

    let movers = {
        let mut commands = app.world_mut().commands();
        [
            spawn_character(&mut commands, CharacterMover::top_down(), Vec2::new(0.0, 3.0)),
            spawn_character(&mut commands, CharacterMover::side_scroller(), Vec2::new(0.0, 0.5)),
        ]
    };
    app.world_mut().flush();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..tick_count {
        for &entity in &movers {
            let move_vector = Vec2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
            let run: f32 = if rng.gen_bool(0.5) { 1.0 } else { 0.0 };

            if let Some(mut input) = app.world_mut().get_mut::<ActionInput>(entity) {
                input.move_vector = move_vector;
                input.run = run;
            }

            if rng.gen_bool(0.05) {
                app.world_mut().send_event(JumpPerformed { entity });
            }
        }

        app.update();
    }

    mover_snapshot(app.world_mut())
}
