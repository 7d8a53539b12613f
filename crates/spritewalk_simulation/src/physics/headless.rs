//! Headless интегратор (когда Rapier не подключен)
//!
//! - Gravity только для SideScroller в воздухе (TopDown полностью кинематический)
//! - Grounded + падение → velocity.y = 0
//! - velocity → Transform.translation
//!
//! Детерминизм: FixedUpdate (60Hz).

use bevy::prelude::*;

use crate::components::{Body2d, CharacterMover, MovementState};

/// Настройки headless физики
#[derive(Resource, Debug, Clone, Copy)]
pub struct HeadlessPhysicsConfig {
    /// Ускорение свободного падения (units/sec²), отрицательное = вниз
    pub gravity: f32,
}

impl Default for HeadlessPhysicsConfig {
    fn default() -> Self {
        Self { gravity: -9.81 }
    }
}

/// Один шаг гравитации
pub fn gravity_step(velocity: Vec2, gravity: f32, grounded: bool, delta: f32) -> Vec2 {
    if grounded {
        velocity
    } else {
        Vec2::new(velocity.x, velocity.y + gravity * delta)
    }
}

/// Система: gravity для SideScroller в воздухе
pub fn apply_gravity(
    mut query: Query<(&CharacterMover, &MovementState, &mut Body2d)>,
    config: Res<HeadlessPhysicsConfig>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mover, state, mut body) in query.iter_mut() {
        if !mover.profile.uses_ground_probe() {
            continue;
        }
        body.velocity = gravity_step(body.velocity, config.gravity, state.is_grounded, delta);
    }
}

/// Система: приземление гасит падение (прыжок вверх не трогаем)
pub fn stop_on_ground(mut query: Query<(&CharacterMover, &MovementState, &mut Body2d)>) {
    for (mover, state, mut body) in query.iter_mut() {
        if mover.profile.uses_ground_probe() && state.is_grounded && body.velocity.y < 0.0 {
            body.velocity.y = 0.0;
        }
    }
}

/// Система: velocity → Transform (position += velocity * dt)
pub fn integrate_velocity_to_transform(
    mut query: Query<(&Body2d, &mut Transform), With<CharacterMover>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity.extend(0.0) * delta;
    }
}

/// Plugin headless физики
///
/// Client вместо него подключает Rapier + RapierBridgePlugin.
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeadlessPhysicsConfig>().add_systems(
            FixedUpdate,
            (apply_gravity, stop_on_ground, integrate_velocity_to_transform).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_logic() {
        let delta = 1.0 / 60.0;
        let velocity = gravity_step(Vec2::ZERO, -9.81, false, delta);

        // После 1/60 sec: velocity.y = -9.81 / 60 ≈ -0.1635
        assert!(velocity.y < -0.16);
        assert!(velocity.y > -0.17);
        assert_eq!(velocity.x, 0.0);
    }

    #[test]
    fn test_grounded_stops_gravity_logic() {
        let velocity = gravity_step(Vec2::new(2.0, 0.0), -9.81, true, 1.0 / 60.0);
        assert_eq!(velocity, Vec2::new(2.0, 0.0));
    }
}
