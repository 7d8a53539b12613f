//! Keyboard input backend
//!
//! ```text
//! ButtonInput<KeyCode>
//!     ↓ InputBindings (action map "Character")
//! ActionInput (Move, Run) + JumpPerformed (Jump, just_pressed)
//!     ↓
//! MoverSet::Sample / MoverSet::Jump
//! ```
//!
//! Tab переключает управляемого персонажа (disable старого / enable нового).

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;
use spritewalk_simulation::{
    disable_mover, enable_mover, ActionInput, Body2d, CharacterMover, InputBound, JumpPerformed, MoverSet,
    Player,
};

pub struct KeyboardInputPlugin;

impl Plugin for KeyboardInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputBindings>().add_systems(
            Update,
            (switch_player_character, read_keyboard)
                .chain()
                .before(MoverSet::Sample),
        );
    }
}

/// Привязки клавиш для action map "Character"
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub action_map: &'static str,
    pub move_up: Vec<KeyCode>,
    pub move_down: Vec<KeyCode>,
    pub move_left: Vec<KeyCode>,
    pub move_right: Vec<KeyCode>,
    pub run: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub switch_character: KeyCode,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            action_map: "Character",
            move_up: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            move_down: vec![KeyCode::KeyS, KeyCode::ArrowDown],
            move_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            move_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            run: vec![KeyCode::ShiftLeft, KeyCode::ShiftRight],
            jump: vec![KeyCode::Space],
            switch_character: KeyCode::Tab,
        }
    }
}

impl InputBindings {
    /// Action "Move": 2D composite, диагональ нормализуется
    pub fn move_vector(&self, keys: &ButtonInput<KeyCode>) -> Vec2 {
        let axis = |negative: &[KeyCode], positive: &[KeyCode]| {
            let neg: f32 = if keys.any_pressed(negative.iter().copied()) { 1.0 } else { 0.0 };
            let pos: f32 = if keys.any_pressed(positive.iter().copied()) { 1.0 } else { 0.0 };
            pos - neg
        };

        Vec2::new(
            axis(&self.move_left, &self.move_right),
            axis(&self.move_down, &self.move_up),
        )
        .normalize_or_zero()
    }

    /// Action "Run": scalar (1.0 = зажат)
    pub fn run_value(&self, keys: &ButtonInput<KeyCode>) -> f32 {
        if keys.any_pressed(self.run.iter().copied()) {
            1.0
        } else {
            0.0
        }
    }

    /// Action "Jump": performed только в кадр нажатия
    pub fn jump_performed(&self, keys: &ButtonInput<KeyCode>) -> bool {
        keys.any_just_pressed(self.jump.iter().copied())
    }
}

/// Keyboard → ActionInput активного персонажа, Jump → JumpPerformed
fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut players: Query<(Entity, &mut ActionInput), (With<Player>, With<InputBound>)>,
    mut jump_events: EventWriter<JumpPerformed>,
) {
    for (entity, mut actions) in players.iter_mut() {
        actions.move_vector = bindings.move_vector(&keys);
        actions.run = bindings.run_value(&keys);

        if bindings.jump_performed(&keys) {
            jump_events.write(JumpPerformed { entity });
        }
    }
}

/// Tab: Player marker переходит к следующему муверу
///
/// Уходящий персонаж останавливается (input и velocity обнуляются), затем disable.
fn switch_player_character(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut movers: Query<
        (Entity, Has<Player>, &mut ActionInput, &mut Body2d, Option<&mut Velocity>),
        With<CharacterMover>,
    >,
) {
    if !keys.just_pressed(bindings.switch_character) {
        return;
    }

    let mut entities: Vec<(Entity, bool)> = movers.iter().map(|(e, is_player, ..)| (e, is_player)).collect();
    if entities.len() < 2 {
        return;
    }
    entities.sort_by_key(|(entity, _)| entity.index());

    let Some(current) = entities.iter().position(|(_, is_player)| *is_player) else {
        return;
    };
    let next = (current + 1) % entities.len();
    let (old_entity, new_entity) = (entities[current].0, entities[next].0);

    if let Ok((_, _, mut actions, mut body, velocity)) = movers.get_mut(old_entity) {
        *actions = ActionInput::default();
        body.velocity = Vec2::ZERO;
        if let Some(mut velocity) = velocity {
            velocity.linvel = Vec2::ZERO;
        }
    }

    commands.entity(old_entity).remove::<Player>();
    disable_mover(&mut commands, old_entity);

    commands.entity(new_entity).insert(Player);
    enable_mover(&mut commands, new_entity);

    spritewalk_simulation::log_info(&format!(
        "{}: control switched {:?} → {:?}",
        bindings.action_map, old_entity, new_entity
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_move_is_normalized() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::ArrowUp);

        let move_vector = bindings.move_vector(&keys);
        assert!((move_vector.length() - 1.0).abs() < 1e-6);
        assert!(move_vector.x > 0.0 && move_vector.y > 0.0);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::KeyD);

        assert_eq!(bindings.move_vector(&keys), Vec2::ZERO);
    }

    #[test]
    fn test_jump_is_edge_triggered() {
        let bindings = InputBindings::default();
        let mut keys = ButtonInput::<KeyCode>::default();

        keys.press(KeyCode::Space);
        assert!(bindings.jump_performed(&keys));

        // Следующий кадр: клавиша всё ещё зажата, но уже не just_pressed
        keys.clear();
        assert!(!bindings.jump_performed(&keys));
        assert_eq!(bindings.run_value(&keys), 0.0);
    }
}
