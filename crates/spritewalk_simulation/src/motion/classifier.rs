//! Motion State Classifier
//!
//! InputSample + предыдущее состояние → новое MovementState.
//! Чистая функция: sprite flip и animator пишет вызывающая система.

use crate::components::{Facing, Gait, MotionProfile, MovementState};
use crate::input::InputSample;

/// Классифицировать движение на текущий tick
///
/// Порядок разрешения facing (первое совпадение побеждает, нет совпадения → без изменений):
/// 1. x > 0 → Left, flip_x = true
/// 2. x < 0 → Left, flip_x = false
/// 3. (TopDown) y > 0 → Up
/// 4. (TopDown) y < 0 → Down
///
/// Horizontal input маскирует vertical в том же tick.
pub fn classify(
    sample: &InputSample,
    previous: &MovementState,
    profile: MotionProfile,
) -> MovementState {
    let gait = Gait::from_run_active(sample.run_active);
    let moving = sample.is_moving();

    let mut facing = previous.facing;
    let mut flip_x = previous.flip_x;

    let x = sample.move_vector.x;
    let y = sample.move_vector.y;

    if x > 0.0 {
        facing = Facing::Left;
        flip_x = true;
    } else if x < 0.0 {
        facing = Facing::Left;
        flip_x = false;
    } else if profile.uses_vertical_input() && y > 0.0 {
        facing = Facing::Up;
    } else if profile.uses_vertical_input() && y < 0.0 {
        facing = Facing::Down;
    }

    MovementState {
        facing,
        flip_x,
        gait,
        is_walking: moving && gait == Gait::Walk,
        is_running: moving && gait == Gait::Run,
        is_grounded: previous.is_grounded,
    }
}
