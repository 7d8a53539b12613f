//! Motion systems: classifier + applicator + animator/sprite sinks

use bevy::prelude::*;

use super::applicator::{plan_jump, plan_motion};
use super::classifier::classify;
use crate::components::{AnimatorParams, Body2d, CharacterMover, InputBound, MovementState, SpriteFacing};
use crate::input::{InputSample, JumpPerformed};
use crate::logger;

/// Система: per-tick обновление движения
///
/// InputSample → classify → plan_motion → Body2d + SpriteFacing + AnimatorParams.
/// Animator, sprite и state пишутся только при изменении значения
/// (`Direction` только когда facing реально изменился).
pub fn update_motion(
    mut query: Query<
        (
            &CharacterMover,
            &InputSample,
            &mut MovementState,
            &mut Body2d,
            &mut SpriteFacing,
            &mut AnimatorParams,
        ),
        With<InputBound>,
    >,
) {
    for (mover, sample, mut state, mut body, mut sprite, mut animator) in query.iter_mut() {
        let next = classify(sample, &state, mover.profile);

        let speed = mover.speed_for(next.gait);
        plan_motion(mover.profile, sample, speed, body.velocity).apply(&mut body);

        if animator.is_walking != next.is_walking {
            animator.is_walking = next.is_walking;
        }
        if animator.is_running != next.is_running {
            animator.is_running = next.is_running;
        }
        if next.facing != state.facing {
            animator.direction = next.facing.as_animator_value();
        }
        if next.flip_x != sprite.flip_x {
            sprite.flip_x = next.flip_x;
        }

        state.set_if_neq(next);
    }
}

/// Система: обработка JumpPerformed (edge-triggered)
///
/// - Мувер выключен / entity нет → event отбрасывается
/// - SideScroller не на земле → event отбрасывается (без retry, без очереди)
/// - Иначе: применяем PhysicsCommand + animator trigger `Jump`
pub fn handle_jump_events(
    mut jump_events: EventReader<JumpPerformed>,
    mut query: Query<
        (&CharacterMover, &MovementState, &mut Body2d, &mut AnimatorParams),
        With<InputBound>,
    >,
) {
    for event in jump_events.read() {
        let Ok((mover, state, mut body, mut animator)) = query.get_mut(event.entity) else {
            logger::log(&format!(
                "Jump dropped: mover {:?} not found or disabled",
                event.entity
            ));
            continue;
        };

        let Some(command) = plan_jump(mover.profile, state, mover.jump_force, body.velocity) else {
            logger::log(&format!("Jump dropped: mover {:?} is not grounded", event.entity));
            continue;
        };

        command.apply(&mut body);
        animator.set_jump_trigger();

        logger::log(&format!(
            "Jump performed: mover {:?} (impulse: {:?})",
            event.entity, command.jump_impulse
        ));
    }
}
