//! Motion domain: классификация движения и применение velocity
//!
//! - classifier: InputSample + previous → MovementState (чистая функция)
//! - applicator: PhysicsCommand (motion velocity, jump impulse)
//! - systems: ECS обвязка (update_motion, handle_jump_events)

pub mod applicator;
pub mod classifier;
pub mod systems;


pub use applicator::{plan_jump, plan_motion, PhysicsCommand};
pub use classifier::classify;
pub use systems::*;
