//! ECS Components персонажа
//!
//! Организация по доменам:
//! - mover: конфигурация (CharacterMover, MotionProfile) + lifecycle markers (InputBound, Player)
//! - motion: состояние движения (MovementState, Facing, Gait, SpriteFacing)
//! - body: velocity sink и ground colliders (Body2d, GroundCollider, LayerMask)
//! - animator: параметры аниматора (AnimatorParams)

pub mod animator;
pub mod body;
pub mod motion;
pub mod mover;

// Re-exports для удобного импорта
pub use animator::*;
pub use body::*;
pub use motion::*;
pub use mover::*;
