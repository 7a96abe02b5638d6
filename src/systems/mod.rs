//! [Systems](System) provide the logic for modifying the state of [Entities](crate::entities::Entity)
//! and their associated [Components](crate::components::Component).
//!
//! A [System] must be manually added to a [Coordinator](crate::coordinator::Coordinator)
//! for it to become active. Its membership set is kept up to date on every structural change.

mod system;
mod system_registry;

pub use system::*;
pub use system_registry::*;
