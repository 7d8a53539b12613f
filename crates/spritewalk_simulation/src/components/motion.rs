//! Motion state: facing, gait, walking/running/grounded флаги

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Направление взгляда персонажа
///
/// Числовое значение = animator float `Direction`.
/// SideScroller производит только `Left` (flip_x задаёт зеркалирование).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Down,
    Left,
    Up,
}

impl Facing {
    pub fn as_animator_value(self) -> f32 {
        match self {
            Facing::Down => 0.0,
            Facing::Left => 1.0,
            Facing::Up => 2.0,
        }
    }
}

/// Выбранная скорость на текущий tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Gait {
    #[default]
    Walk,
    Run,
}

impl Gait {
    pub fn from_run_active(run_active: bool) -> Self {
        if run_active {
            Gait::Run
        } else {
            Gait::Walk
        }
    }
}

/// Состояние движения персонажа
///
/// Инварианты:
/// - is_walking и is_running никогда не true одновременно
/// - facing меняется только при ненулевом input (horizontal приоритетнее vertical)
/// - is_grounded пишет только ground probe (classifier переносит как есть)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct MovementState {
    pub facing: Facing,
    /// Horizontal flip спрайта (true = input вправо)
    pub flip_x: bool,
    pub gait: Gait,
    pub is_walking: bool,
    pub is_running: bool,
    pub is_grounded: bool,
}

impl MovementState {
    pub fn is_idle(&self) -> bool {
        !self.is_walking && !self.is_running
    }
}

/// Rendering sink: зеркалирование спрайта
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub struct SpriteFacing {
    pub flip_x: bool,
}
