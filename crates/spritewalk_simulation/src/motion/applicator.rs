//! Physics Applicator
//!
//! Превращает sample/состояние в PhysicsCommand (velocity + optional jump impulse).
//! Команда применяется к Body2d сразу же, ничего не накапливается между tick.

use bevy::prelude::*;

use crate::components::{Body2d, MotionProfile, MovementState};
use crate::input::InputSample;

/// Команда для velocity sink (производится и потребляется в один tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsCommand {
    pub velocity: Vec2,
    /// Some(jump_force) если команда содержит прыжок
    pub jump_impulse: Option<f32>,
}

impl PhysicsCommand {
    pub fn apply(&self, body: &mut Body2d) {
        body.velocity = self.velocity;
    }
}

/// Velocity от движения
///
/// - TopDown: velocity = move * speed (обе оси, гравитации нет)
/// - SideScroller: velocity.x = move.x * speed, velocity.y не трогаем (gravity/jump)
pub fn plan_motion(
    profile: MotionProfile,
    sample: &InputSample,
    speed: f32,
    current_velocity: Vec2,
) -> PhysicsCommand {
    let velocity = match profile {
        MotionProfile::TopDown => sample.move_vector * speed,
        MotionProfile::SideScroller => {
            Vec2::new(sample.move_vector.x * speed, current_velocity.y)
        }
    };

    PhysicsCommand {
        velocity,
        jump_impulse: None,
    }
}

/// Реакция на JumpPerformed
///
/// - TopDown: всегда Some, velocity без изменений (только animator trigger)
/// - SideScroller: None если не grounded (event молча отбрасывается),
///   иначе velocity.y = jump_force
pub fn plan_jump(
    profile: MotionProfile,
    state: &MovementState,
    jump_force: f32,
    current_velocity: Vec2,
) -> Option<PhysicsCommand> {
    match profile {
        MotionProfile::TopDown => Some(PhysicsCommand {
            velocity: current_velocity,
            jump_impulse: None,
        }),
        MotionProfile::SideScroller if state.is_grounded => Some(PhysicsCommand {
            velocity: Vec2::new(current_velocity.x, jump_force),
            jump_impulse: Some(jump_force),
        }),
        MotionProfile::SideScroller => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_right() -> InputSample {
        InputSample {
            move_vector: Vec2::new(1.0, 0.0),
            run_active: false,
        }
    }

    #[test]
    fn test_top_down_sets_both_axes() {
        let sample = InputSample {
            move_vector: Vec2::new(0.5, -1.0),
            run_active: true,
        };
        let cmd = plan_motion(MotionProfile::TopDown, &sample, 4.0, Vec2::new(9.0, 9.0));
        assert_eq!(cmd.velocity, Vec2::new(2.0, -4.0));
        assert_eq!(cmd.jump_impulse, None);
    }

    #[test]
    fn test_side_scroller_keeps_vertical_velocity() {
        let cmd = plan_motion(MotionProfile::SideScroller, &walk_right(), 2.0, Vec2::new(0.0, -3.5));
        assert_eq!(cmd.velocity, Vec2::new(2.0, -3.5));
    }

    #[test]
    fn test_idle_stops_horizontal() {
        let idle = InputSample::default();

        let top_down = plan_motion(MotionProfile::TopDown, &idle, 2.0, Vec2::new(1.0, 1.0));
        assert_eq!(top_down.velocity, Vec2::ZERO);

        let side = plan_motion(MotionProfile::SideScroller, &idle, 2.0, Vec2::new(1.0, 1.0));
        assert_eq!(side.velocity, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_jump_requires_ground_for_side_scroller() {
        let airborne = MovementState::default();
        assert_eq!(
            plan_jump(MotionProfile::SideScroller, &airborne, 5.0, Vec2::new(1.0, -2.0)),
            None
        );

        let grounded = MovementState {
            is_grounded: true,
            ..default()
        };
        let cmd = plan_jump(MotionProfile::SideScroller, &grounded, 5.0, Vec2::new(1.0, -2.0))
            .expect("grounded jump");
        assert_eq!(cmd.velocity, Vec2::new(1.0, 5.0));
        assert_eq!(cmd.jump_impulse, Some(5.0));
    }

    #[test]
    fn test_top_down_jump_is_animation_only() {
        let cmd = plan_jump(MotionProfile::TopDown, &MovementState::default(), 5.0, Vec2::new(1.0, 2.0))
            .expect("top-down jump always accepted");
        assert_eq!(cmd.velocity, Vec2::new(1.0, 2.0));
        assert_eq!(cmd.jump_impulse, None);
    }

    #[test]
    fn test_apply_writes_body() {
        let mut body = Body2d::default();
        PhysicsCommand {
            velocity: Vec2::new(3.0, 1.0),
            jump_impulse: None,
        }
        .apply(&mut body);
        assert_eq!(body.velocity, Vec2::new(3.0, 1.0));
    }
}
