//! [Components](Component) are the plain data records attached to [entities](crate::entities::Entity).
//!
//! Each registered component kind gets a dense [ComponentId] and its own densely packed
//! [ComponentStore], reachable through the type-erased [AnyComponentStore] interface.

mod component_id;
mod component_registry;
mod component_set;
mod component_store;
mod component_type;

pub use component_id::*;
pub use component_registry::*;
pub use component_set::*;
pub use component_store::*;
pub use component_type::*;
pub use inspect_ecs_derive::Component;
