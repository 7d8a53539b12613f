//! CharacterMover: конфигурация персонажа (inspector constants) + lifecycle marker

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::animator::AnimatorParams;
use super::body::{Body2d, LayerMask, LAYER_GROUND};
use super::motion::{Facing, Gait, MovementState, SpriteFacing};
use crate::input::{ActionInput, InputSample};

/// Вариант поведения мувера
///
/// Два варианта не объединены:
/// - `TopDown`: полный 2D контроль (x и y), facing Down/Left/Up, jump = только анимация
/// - `SideScroller`: только x, вертикаль принадлежит gravity/jump, facing всегда Left,
///   jump требует grounded (ground probe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum MotionProfile {
    #[default]
    TopDown,
    SideScroller,
}

impl MotionProfile {
    /// Участвует ли вертикальная ось input в движении/facing
    pub fn uses_vertical_input(self) -> bool {
        matches!(self, MotionProfile::TopDown)
    }

    /// Facing при spawn (SideScroller знает только Left)
    pub fn initial_facing(self) -> Facing {
        match self {
            MotionProfile::TopDown => Facing::Down,
            MotionProfile::SideScroller => Facing::Left,
        }
    }

    /// Нужен ли ground probe (и gate на прыжок)
    pub fn uses_ground_probe(self) -> bool {
        matches!(self, MotionProfile::SideScroller)
    }
}

/// Конфигурация мувера (compile-time/inspector constants, не меняется в runtime)
///
/// Required Components: всё состояние персонажа добавляется автоматически.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
#[require(
    Transform,
    ActionInput,
    InputSample,
    MovementState,
    Body2d,
    AnimatorParams,
    SpriteFacing
)]
pub struct CharacterMover {
    pub profile: MotionProfile,
    /// Скорость ходьбы (units/sec)
    pub walk_speed: f32,
    /// Скорость бега (units/sec)
    pub run_speed: f32,
    /// velocity.y после прыжка (только SideScroller)
    pub jump_force: f32,
    /// Радиус overlap-круга ground probe (только SideScroller)
    pub ground_check_radius: f32,
    /// Смещение центра probe от позиции персонажа (ZERO = сама позиция)
    pub ground_check_offset: Vec2,
    /// Слои, которые считаются землёй (только SideScroller)
    pub ground_layer: LayerMask,
}

impl Default for CharacterMover {
    fn default() -> Self {
        Self::top_down()
    }
}

impl CharacterMover {
    pub fn top_down() -> Self {
        Self {
            profile: MotionProfile::TopDown,
            walk_speed: 2.0,
            run_speed: 4.0,
            jump_force: 0.0,
            ground_check_radius: 0.0,
            ground_check_offset: Vec2::ZERO,
            ground_layer: LayerMask::NONE,
        }
    }

    pub fn side_scroller() -> Self {
        Self {
            profile: MotionProfile::SideScroller,
            walk_speed: 2.0,
            run_speed: 4.0,
            jump_force: 5.0,
            ground_check_radius: 0.2,
            ground_check_offset: Vec2::ZERO,
            ground_layer: LAYER_GROUND,
        }
    }

    /// Скорость для выбранного gait
    pub fn speed_for(&self, gait: Gait) -> f32 {
        match gait {
            Gait::Walk => self.walk_speed,
            Gait::Run => self.run_speed,
        }
    }

    /// Подозрительные значения конфига (не ошибка: мувер работает с любыми числами)
    pub fn suspicious_settings(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.walk_speed <= 0.0 || self.run_speed <= 0.0 {
            issues.push(format!(
                "non-positive speed (walk: {}, run: {})",
                self.walk_speed, self.run_speed
            ));
        }
        if self.run_speed < self.walk_speed {
            issues.push(format!(
                "run_speed {} is slower than walk_speed {}",
                self.run_speed, self.walk_speed
            ));
        }
        if self.profile.uses_ground_probe() {
            if self.ground_check_radius < 0.0 {
                issues.push(format!("negative ground_check_radius {}", self.ground_check_radius));
            }
            if self.ground_layer.is_empty() {
                issues.push("empty ground_layer: character can never be grounded".to_string());
            }
            if self.jump_force <= 0.0 {
                issues.push(format!("non-positive jump_force {}", self.jump_force));
            }
        }

        issues
    }
}

/// Marker: мувер включён (input привязан, jump events принимаются)
///
/// Аналог OnEnable/OnDisable: без этого компонента все mover системы
/// пропускают entity, а JumpPerformed для него отбрасываются.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InputBound;

/// Marker для player-controlled персонажа (keyboard backend пишет только в них)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
