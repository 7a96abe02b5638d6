use crate::components::ComponentId;
use crate::reflection::{self, ComponentInfo};
use std::any::TypeId;

/// A plain data record that can be attached to an [entity](crate::entities::Entity).
///
/// Usually implemented through `#[derive(Component)]`, which also generates the
/// reflection table returned by [describe](Component::describe).
///
/// A `kind` override must store the same [ValueKind](crate::reflection::ValueKind) as the field:
///
/// ```compile_fail
/// use inspect_ecs::prelude::*;
///
/// #[derive(Component)]
/// struct Speed {
/// 	#[property(kind = "String")]
/// 	value: f64,
/// }
/// ```
pub trait Component: 'static + Send + Sync + Sized {
	/// Builds the component's reflection metadata.
	/// Called at most once per process; the result is cached.
	fn describe() -> ComponentInfo;
}

/// A runtime representation of a registered [Component] type.
#[derive(Clone, Debug)]
pub struct ComponentType {
	id: ComponentId,
	type_id: TypeId,
	type_name: &'static str,
	info: &'static ComponentInfo,
}

impl ComponentType {
	/// Returns the [ComponentType] of T registered under `id`.
	pub(crate) fn of<T: Component>(id: ComponentId) -> Self {
		Self {
			id,
			type_id: TypeId::of::<T>(),
			type_name: std::any::type_name::<T>(),
			info: reflection::component_info::<T>(),
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	/// Stable hash of the Rust type.
	pub const fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub const fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Display name taken from the reflection metadata.
	pub fn name(&self) -> &'static str {
		self.info.name()
	}

	pub const fn info(&self) -> &'static ComponentInfo {
		self.info
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.type_id == other.type_id
	}
}
