//! Bridge Body2d ↔ Rapier Velocity
//!
//! Rapier владеет интеграцией (gravity, коллизии), мувер делает read-modify-write:
//! 1. read_velocity_from_rapier: Rapier Velocity → Body2d (до MoverSet::Sample)
//! 2. mover systems меняют Body2d
//! 3. write_velocity_to_rapier: Body2d → Rapier Velocity (после MoverSet::Motion)

use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::components::{Body2d, CharacterMover};
use crate::MoverSet;

pub fn read_velocity_from_rapier(
    mut query: Query<(&Velocity, &mut Body2d), With<CharacterMover>>,
) {
    for (rapier_velocity, mut body) in query.iter_mut() {
        body.velocity = rapier_velocity.linvel;
    }
}

pub fn write_velocity_to_rapier(
    mut query: Query<(&Body2d, &mut Velocity), With<CharacterMover>>,
) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}

/// Plugin синхронизации для client (RapierPhysicsPlugin подключает сам client)
pub struct RapierBridgePlugin;

impl Plugin for RapierBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                read_velocity_from_rapier.before(MoverSet::Sample),
                write_velocity_to_rapier.after(MoverSet::Motion),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_rapier_velocity() {
        let mut world = World::new();
        let entity = world
            .spawn((
                CharacterMover::side_scroller(),
                Velocity::linear(Vec2::new(0.0, -3.0)),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(read_velocity_from_rapier);
        schedule.run(&mut world);

        assert_eq!(world.get::<Body2d>(entity).map(|b| b.velocity), Some(Vec2::new(0.0, -3.0)));

        if let Some(mut body) = world.get_mut::<Body2d>(entity) {
            body.velocity.x = 2.0;
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(write_velocity_to_rapier);
        schedule.run(&mut world);

        assert_eq!(world.get::<Velocity>(entity).map(|v| v.linvel), Some(Vec2::new(2.0, -3.0)));
    }
}
