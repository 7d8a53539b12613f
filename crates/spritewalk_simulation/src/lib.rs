//! SPRITEWALK Simulation Core
//!
//! ECS-логика 2D sprite-персонажа на Bevy 0.16:
//! input → motion state → velocity, ground probe, jump gate, animator/sprite sinks.
//!
//! Два варианта поведения (MotionProfile):
//! - TopDown: x/y движение, facing Down/Left/Up, jump = только animator trigger
//! - SideScroller: только x, gravity по y, jump только с земли
//!
//! Физика подключается отдельно:
//! - HeadlessPhysicsPlugin (headless bin, тесты)
//! - Rapier + RapierBridgePlugin (client)

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// Публичные модули
pub mod components;
pub mod input;
pub mod lifecycle;
pub mod logger;
pub mod motion;
pub mod physics;

// Re-export базовых типов для удобства
pub use components::*;
pub use input::{ActionInput, InputSample, JumpPerformed};
pub use lifecycle::{disable_mover, enable_mover, spawn_character};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel,
    LogPrinter,
};
pub use motion::{classify, plan_jump, plan_motion, PhysicsCommand};
pub use physics::{HeadlessPhysicsConfig, HeadlessPhysicsPlugin, RapierBridgePlugin};

/// Частота simulation tick (FixedUpdate + шаг headless времени)
pub const TICK_HZ: f64 = 60.0;

/// Порядок mover систем внутри одного tick (Update)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoverSet {
    /// Инициализация новых муверов (Awake)
    Init,
    /// ActionInput → InputSample
    Sample,
    /// Ground probe (SideScroller)
    Probe,
    /// JumpPerformed → gate + impulse
    Jump,
    /// Classifier + applicator + animator/sprite
    Motion,
}

/// Главный plugin мувера
///
/// Порядок выполнения (Update, chain):
/// 1. initialize_added_movers
/// 2. sample_input
/// 3. update_ground_contact
/// 4. handle_jump_events (видит grounded текущего tick)
/// 5. update_motion
pub struct MoverPlugin;

impl Plugin for MoverPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<JumpPerformed>()
            .register_type::<CharacterMover>()
            .register_type::<MovementState>()
            .register_type::<AnimatorParams>()
            .configure_sets(
                Update,
                (
                    MoverSet::Init,
                    MoverSet::Sample,
                    MoverSet::Probe,
                    MoverSet::Jump,
                    MoverSet::Motion,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    lifecycle::initialize_added_movers.in_set(MoverSet::Init),
                    input::sample_input.in_set(MoverSet::Sample),
                    physics::update_ground_contact.in_set(MoverSet::Probe),
                    motion::handle_jump_events.in_set(MoverSet::Jump),
                    motion::update_motion.in_set(MoverSet::Motion),
                ),
            );
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время шагает вручную (1 update = 1/TICK_HZ sec) → прогоны воспроизводимы.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();

    let tick = Duration::from_secs_f64(1.0 / TICK_HZ);
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(TimeUpdateStrategy::ManualDuration(tick));

    app
}

/// Snapshot муверов для сравнения детерминизма
///
/// Порядок по Entity index, значения через Debug (bit-exact для f32).
pub fn mover_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &MovementState, &Body2d, &Transform, &AnimatorParams)>();
    let mut movers: Vec<_> = query.iter(world).collect();
    movers.sort_by_key(|(entity, ..)| entity.index());

    for (entity, state, body, transform, animator) in movers {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(
            format!("{:?}{:?}{:?}{:?}", state, body, transform.translation, animator).as_bytes(),
        );
    }

    snapshot
}
