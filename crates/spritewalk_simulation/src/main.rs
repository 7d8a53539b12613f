//! Headless симуляция SPRITEWALK
//!
//! Скриптованный прогон: TopDown персонаж ходит по квадрату,
//! SideScroller падает на пол, бежит вправо и прыгает.

use bevy::prelude::*;
use spritewalk_simulation::{
    create_headless_app, log_info, set_log_level, spawn_character, ActionInput, Body2d, CharacterMover,
    GroundCollider, HeadlessPhysicsPlugin, JumpPerformed, LogLevel, MoverPlugin, MovementState,
};

const TICKS: u32 = 600;

fn main() {
    let mut app = create_headless_app();
    app.add_plugins((MoverPlugin, HeadlessPhysicsPlugin));

    // Отчёт: Info и выше (jump/enable debug скрыт)
    set_log_level(LogLevel::Info);
    log_info("Starting SPRITEWALK headless simulation");

    // Пол: верхняя грань на y = 0
    app.world_mut().spawn((
        Transform::from_xyz(0.0, -0.5, 0.0),
        GroundCollider::ground(Vec2::new(50.0, 0.5)),
    ));

    let (walker, jumper) = {
        let mut commands = app.world_mut().commands();
        let walker = spawn_character(&mut commands, CharacterMover::top_down(), Vec2::new(0.0, 5.0));
        let jumper = spawn_character(&mut commands, CharacterMover::side_scroller(), Vec2::new(0.0, 1.0));
        (walker, jumper)
    };
    app.world_mut().flush();

    for tick in 0..TICKS {
        script_walker(app.world_mut(), walker, tick);
        script_jumper(app.world_mut(), jumper, tick);

        app.update();

        if tick % 100 == 0 {
            report(app.world(), tick, walker, "walker");
            report(app.world(), tick, jumper, "jumper");
        }
    }

    log_info("Simulation complete!");
}

/// Квадрат: вправо → вверх → влево → вниз, по 60 тиков, бег на нечётных сторонах
fn script_walker(world: &mut World, entity: Entity, tick: u32) {
    let side = (tick / 60) % 4;
    let move_vector = match side {
        0 => Vec2::X,
        1 => Vec2::Y,
        2 => Vec2::NEG_X,
        _ => Vec2::NEG_Y,
    };

    if let Some(mut input) = world.get_mut::<ActionInput>(entity) {
        input.move_vector = move_vector;
        input.run = if side % 2 == 1 { 1.0 } else { 0.0 };
    }
}

/// Ждём приземления, бежим вправо, прыгаем каждые 90 тиков
fn script_jumper(world: &mut World, entity: Entity, tick: u32) {
    if let Some(mut input) = world.get_mut::<ActionInput>(entity) {
        input.move_vector = if tick >= 60 { Vec2::X } else { Vec2::ZERO };
        input.run = 1.0;
    }

    if tick >= 60 && tick % 90 == 0 {
        world.send_event(JumpPerformed { entity });
    }
}

fn report(world: &World, tick: u32, entity: Entity, name: &str) {
    let (Some(transform), Some(state), Some(body)) = (
        world.get::<Transform>(entity),
        world.get::<MovementState>(entity),
        world.get::<Body2d>(entity),
    ) else {
        return;
    };

    log_info(&format!(
        "Tick {}: {} at ({:.2}, {:.2}) velocity ({:.2}, {:.2}) facing {:?} walking {} running {} grounded {}",
        tick,
        name,
        transform.translation.x,
        transform.translation.y,
        body.velocity.x,
        body.velocity.y,
        state.facing,
        state.is_walking,
        state.is_running,
        state.is_grounded,
    ));
}
