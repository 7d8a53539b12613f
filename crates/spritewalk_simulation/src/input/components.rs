//! Input components: сырые значения actions и tick-sample

use bevy::prelude::*;

/// Сырые значения input actions карты "Character"
///
/// Пишет input backend (keyboard в client, скрипт в headless/тестах).
/// - `move_vector`: action "Move" (Vec2)
/// - `run`: action "Run" (scalar, > 0 = зажат)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct ActionInput {
    pub move_vector: Vec2,
    pub run: f32,
}

/// Input, прочитанный в начале tick (ephemeral, перезаписывается каждый tick)
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct InputSample {
    pub move_vector: Vec2,
    pub run_active: bool,
}

impl InputSample {
    /// Снять sample с сырых значений actions
    ///
    /// Non-finite компоненты (NaN/inf) обнуляются: до velocity они не доходят.
    pub fn from_actions(actions: &ActionInput) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v } else { 0.0 };

        Self {
            move_vector: Vec2::new(
                sanitize(actions.move_vector.x),
                sanitize(actions.move_vector.y),
            ),
            run_active: actions.run > 0.0,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_vector.length() > 0.0
    }
}
