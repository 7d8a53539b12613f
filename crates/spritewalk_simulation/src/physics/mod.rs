//! Physics module
//!
//! - ground: ground probe (circle overlap vs GroundCollider)
//! - headless: gravity + интеграция без Rapier (headless bin, тесты)
//! - rapier_sync: Body2d ↔ Rapier Velocity (client)

pub mod ground;
pub mod headless;
pub mod rapier_sync;

// Re-export основных типов
pub use ground::{circle_overlaps_box, probe_ground, update_ground_contact};
pub use headless::{HeadlessPhysicsConfig, HeadlessPhysicsPlugin};
pub use rapier_sync::RapierBridgePlugin;
