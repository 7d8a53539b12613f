//! Input domain: action values → per-tick sample, jump edge events
//!
//! ```text
//! Input backend (keyboard / script)
//!     ↓ пишет
//! ActionInput (component) + JumpPerformed (event)
//!     ↓ sample_input
//! InputSample (component, per tick)
//!     ↓
//! motion systems
//! ```

pub mod components;
pub mod events;
pub mod systems;

pub use components::*;
pub use events::*;
pub use systems::*;
