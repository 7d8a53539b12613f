//! Ground Probe (только SideScroller)
//!
//! Overlap круга фиксированного радиуса (центр = позиция персонажа + ground_check_offset)
//! с GroundCollider'ами, чьи layers пересекаются с маской мувера.
//! Без гистерезиса: один tick без контакта сразу снимает право на прыжок.

use bevy::prelude::*;

use crate::components::{AnimatorParams, CharacterMover, GroundCollider, LayerMask, MovementState};

/// Пересекается ли круг с axis-aligned прямоугольником (касание = пересечение)
pub fn circle_overlaps_box(center: Vec2, radius: f32, box_center: Vec2, half_extents: Vec2) -> bool {
    // Ближайшая к центру круга точка прямоугольника
    let closest = center.clamp(box_center - half_extents, box_center + half_extents);
    center.distance_squared(closest) <= radius * radius
}

/// Ground check против набора коллайдеров
pub fn probe_ground<'a>(
    center: Vec2,
    radius: f32,
    mask: LayerMask,
    colliders: impl IntoIterator<Item = (Vec2, &'a GroundCollider)>,
) -> bool {
    colliders.into_iter().any(|(position, collider)| {
        mask.intersects(collider.layers)
            && circle_overlaps_box(center, radius, position, collider.half_extents)
    })
}

/// Система: ground probe каждый tick
///
/// Пишет MovementState.is_grounded и зеркалит в animator `IsGrounded`.
/// Работает и для выключенных муверов: тело продолжает падать, gravity нужен свежий контакт.
pub fn update_ground_contact(
    mut movers: Query<(Entity, &CharacterMover, &Transform, &mut MovementState, &mut AnimatorParams)>,
    colliders: Query<(Entity, &Transform, &GroundCollider)>,
) {
    for (entity, mover, transform, mut state, mut animator) in movers.iter_mut() {
        if !mover.profile.uses_ground_probe() {
            continue;
        }

        let center = transform.translation.truncate() + mover.ground_check_offset;
        let grounded = probe_ground(
            center,
            mover.ground_check_radius,
            mover.ground_layer,
            colliders
                .iter()
                .filter(|(collider_entity, _, _)| *collider_entity != entity)
                .map(|(_, collider_transform, collider)| {
                    (collider_transform.translation.truncate(), collider)
                }),
        );

        if state.is_grounded != grounded {
            state.is_grounded = grounded;
        }
        if animator.is_grounded != grounded {
            animator.is_grounded = grounded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{LAYER_CHARACTERS, LAYER_GROUND};

    #[test]
    fn test_circle_above_box() {
        // Пол: верхняя грань на y = 0
        let floor_center = Vec2::new(0.0, -0.5);
        let half = Vec2::new(10.0, 0.5);

        assert!(circle_overlaps_box(Vec2::new(0.0, 0.1), 0.2, floor_center, half));
        assert!(!circle_overlaps_box(Vec2::new(0.0, 0.3), 0.2, floor_center, half));
    }

    #[test]
    fn test_touching_counts_as_overlap() {
        assert!(circle_overlaps_box(Vec2::new(0.0, 1.0), 1.0, Vec2::ZERO, Vec2::ZERO));
    }

    #[test]
    fn test_corner_distance_is_euclidean() {
        // Угол (1, 1); центр (1.5, 1.5) на расстоянии ~0.707
        assert!(!circle_overlaps_box(Vec2::new(1.5, 1.5), 0.7, Vec2::ZERO, Vec2::ONE));
        assert!(circle_overlaps_box(Vec2::new(1.5, 1.5), 0.75, Vec2::ZERO, Vec2::ONE));
    }

    #[test]
    fn test_probe_filters_by_layer() {
        let floor = GroundCollider::ground(Vec2::new(5.0, 0.5));
        let crate_box = GroundCollider {
            half_extents: Vec2::splat(0.5),
            layers: LAYER_CHARACTERS,
        };
        let center = Vec2::new(0.0, 0.1);

        assert!(probe_ground(center, 0.2, LAYER_GROUND, [(Vec2::new(0.0, -0.5), &floor)]));
        assert!(!probe_ground(center, 0.2, LAYER_GROUND, [(Vec2::new(0.0, -0.5), &crate_box)]));
        assert!(!probe_ground(center, 0.2, LayerMask::NONE, [(Vec2::new(0.0, -0.5), &floor)]));
    }

    #[test]
    fn test_probe_without_colliders() {
        let none: [(Vec2, &GroundCollider); 0] = [];
        assert!(!probe_ground(Vec2::ZERO, 10.0, LayerMask::ALL, none));
    }
}
