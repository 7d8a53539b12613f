//! Animation sink: параметры аниматора спрайта

use bevy::prelude::*;

/// Имена параметров (для rendering layer / отладки)
pub const PARAM_DIRECTION: &str = "Direction";
pub const PARAM_IS_WALKING: &str = "IsWalking";
pub const PARAM_IS_RUNNING: &str = "IsRunning";
pub const PARAM_IS_GROUNDED: &str = "IsGrounded";
pub const PARAM_JUMP: &str = "Jump";

/// Параметры аниматора
///
/// Пишут mover системы, читает rendering layer.
/// `jump` — one-shot trigger: остаётся выставленным пока его не заберёт `consume_jump`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct AnimatorParams {
    pub direction: f32,
    pub is_walking: bool,
    pub is_running: bool,
    pub is_grounded: bool,
    jump: bool,
}

impl AnimatorParams {
    pub fn set_jump_trigger(&mut self) {
        self.jump = true;
    }

    pub fn is_jump_pending(&self) -> bool {
        self.jump
    }

    /// Забрать trigger (true ровно один раз на каждый set)
    pub fn consume_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump)
    }

    /// Bool параметр по имени (None для неизвестного имени или float параметра)
    pub fn bool_param(&self, name: &str) -> Option<bool> {
        match name {
            PARAM_IS_WALKING => Some(self.is_walking),
            PARAM_IS_RUNNING => Some(self.is_running),
            PARAM_IS_GROUNDED => Some(self.is_grounded),
            PARAM_JUMP => Some(self.jump),
            _ => None,
        }
    }
}
