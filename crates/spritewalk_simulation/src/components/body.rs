//! Physics-facing компоненты: velocity sink, ground colliders, collision layers
//!
//! ## Layers (битовая маска):
//! - Bit 0 (0b1 = 1): Reserved
//! - Bit 1 (0b10 = 2): Ground (платформы, пол)
//! - Bit 2 (0b100 = 4): Characters
//!
//! Ground probe мувера тестирует только коллайдеры, чьи `layers`
//! пересекаются с `CharacterMover::ground_layer`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Битовая маска collision layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        LayerMask(self.0 | rhs.0)
    }
}

/// Layer 2: Ground (StaticBody — пол, платформы)
pub const LAYER_GROUND: LayerMask = LayerMask(0b10);

/// Layer 3: Characters
pub const LAYER_CHARACTERS: LayerMask = LayerMask(0b100);

/// Velocity sink персонажа (units/sec)
///
/// Headless: интегрируется `HeadlessPhysicsPlugin`.
/// Client: синхронизируется с Rapier `Velocity` (`RapierBridgePlugin`).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct Body2d {
    pub velocity: Vec2,
}

/// Axis-aligned прямоугольник, по которому работает ground probe
///
/// Центр = Transform.translation (xy).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct GroundCollider {
    pub half_extents: Vec2,
    pub layers: LayerMask,
}

impl GroundCollider {
    pub fn ground(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            layers: LAYER_GROUND,
        }
    }
}
