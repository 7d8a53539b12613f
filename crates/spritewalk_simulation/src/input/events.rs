//! Input events

use bevy::prelude::*;

/// Event: action "Jump" performed (edge-triggered)
///
/// Генерируется:
/// - Keyboard backend (just_pressed, один раз на нажатие)
/// - Скрипты headless/тестов
///
/// Обрабатывается:
/// - handle_jump_events: gate по grounded (SideScroller) + impulse + animator trigger
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpPerformed {
    pub entity: Entity,
}
