//! Lifecycle персонажа: spawn (Awake), enable/disable (OnEnable/OnDisable)
//!
//! Update = цепочка MoverSet (см. MoverPlugin).

use bevy::prelude::*;

use crate::components::{AnimatorParams, CharacterMover, InputBound, MovementState};
use crate::logger;

/// Spawn персонажа с полным набором компонентов (включённый)
///
/// Required Components CharacterMover добавляют state/input/body/animator.
pub fn spawn_character(commands: &mut Commands, mover: CharacterMover, position: Vec2) -> Entity {
    commands
        .spawn((
            mover,
            Transform::from_translation(position.extend(0.0)),
            InputBound,
        ))
        .id()
}

/// OnEnable: input снова сэмплируется, jump events принимаются
pub fn enable_mover(commands: &mut Commands, entity: Entity) {
    commands.entity(entity).insert(InputBound);
    logger::log(&format!("Mover {:?} enabled", entity));
}

/// OnDisable: tick больше не обрабатывается, jump events отбрасываются
///
/// Velocity не сбрасываем: тело сохраняет последнюю скорость.
pub fn disable_mover(commands: &mut Commands, entity: Entity) {
    commands.entity(entity).remove::<InputBound>();
    logger::log(&format!("Mover {:?} disabled", entity));
}

/// Система: инициализация только что добавленных муверов
///
/// - Facing/Direction по профилю (SideScroller стартует с Left)
/// - Warning на подозрительный конфиг (конфиг не отклоняется)
pub fn initialize_added_movers(
    mut query: Query<
        (Entity, &CharacterMover, &mut MovementState, &mut AnimatorParams),
        Added<CharacterMover>,
    >,
) {
    for (entity, mover, mut state, mut animator) in query.iter_mut() {
        state.facing = mover.profile.initial_facing();
        animator.direction = state.facing.as_animator_value();

        for issue in mover.suspicious_settings() {
            logger::log_warning(&format!("Mover {:?}: {}", entity, issue));
        }

        logger::log(&format!(
            "Mover {:?} initialized ({:?}, walk: {}, run: {})",
            entity, mover.profile, mover.walk_speed, mover.run_speed
        ));
    }
}
