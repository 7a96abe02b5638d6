//! An entity-component-system runtime with property reflection.
//!
//! A [Coordinator](coordinator::Coordinator) owns one world: the entity registry, one dense store per
//! component kind, the reflection table of every registered kind, and the registered systems
//! together with the entities matching their required [Archetype](archetypes::Archetype).
//!
//! ```ignore
//! use inspect_ecs::prelude::*;
//!
//! #[derive(Component)]
//! struct Position { x: f64, y: f64, z: f64 }
//!
//! let mut ecs = Coordinator::new();
//! let position = ecs.register_component::<Position>()?;
//! let entity = ecs.create_entity()?;
//! ecs.add_component(entity, Position { x: 1.0, y: 2.0, z: 3.0 })?;
//! ecs.set_property(entity, position, "x", 9.0)?;
//! assert_eq!(ecs.get_property::<f64>(entity, position, "x")?, 9.0);
//! ```

extern crate self as inspect_ecs;

pub mod archetypes;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod data_structures;
pub mod entities;
pub mod error;
pub mod reflection;
pub mod systems;

pub mod prelude {
	pub use crate::archetype;
	pub use crate::archetypes::Archetype;
	pub use crate::components::{Component, ComponentHandle, ComponentId};
	pub use crate::config::{WorldConfig, MAX_COMPONENTS, MAX_ENTITIES};
	pub use crate::coordinator::{Coordinator, SharedCoordinator};
	pub use crate::entities::Entity;
	pub use crate::error::{EcsError, Result};
	pub use crate::reflection::{ComponentInfo, PropertyInfo, PropertyKey, PropertyType, PropertyValue, Value, ValueKind};
	pub use crate::systems::{System, SystemHandle};
}

#[cfg(test)]
mod tests;
