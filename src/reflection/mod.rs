//! Property reflection: generic, name- or index-addressed access to component fields.
//!
//! Every [Component](crate::components::Component) describes itself once as a [ComponentInfo],
//! an ordered table of [PropertyInfo] entries. Each entry pairs the field's metadata
//! (name, title, description, byte offset and [PropertyType] tag) with a typed accessor,
//! so inspectors and serializers can enumerate and edit any component without per-type code.
//!
//! Access is type checked: asking for a `V` whose [ValueKind] differs from the tag's
//! fails with [TypeMismatch](crate::error::EcsError::TypeMismatch).

mod component_info;
mod property_info;
mod property_type;
mod property_value;
mod reflection_registry;

pub use component_info::*;
pub use property_info::*;
pub use property_type::*;
pub use property_value::*;
pub use reflection_registry::*;
