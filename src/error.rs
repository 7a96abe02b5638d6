//! Error types returned by every fallible [Coordinator](crate::coordinator::Coordinator) operation.

use crate::components::ComponentId;
use crate::entities::Entity;
use crate::reflection::ValueKind;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EcsError>;

/// Recoverable failures reported by the ECS world.
///
/// Broken internal invariants (an archetype disagreeing with the component stores)
/// are not part of this taxonomy; they are checked with debug assertions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	/// The entity was never created, or has already been destroyed.
	#[error("unknown entity {0}")]
	UnknownEntity(Entity),

	/// A fixed-size limit (entities or component kinds) has been reached.
	#[error("{what} capacity exceeded (limit {limit})")]
	CapacityExceeded {
		/// Which limit was hit.
		what: &'static str,
		/// The configured maximum.
		limit: usize,
	},

	/// A component kind or system type was registered twice.
	#[error("{0} is already registered")]
	AlreadyRegistered(&'static str),

	/// The component type has not been registered with this world.
	#[error("component kind {0} is not registered")]
	ComponentKindNotRegistered(&'static str),

	/// The entity does not own a component of the requested kind.
	#[error("entity {entity} has no {component} component")]
	ComponentNotPresent {
		/// The queried entity.
		entity: Entity,
		/// Name of the component kind.
		component: &'static str,
	},

	/// No component kind is registered under this id.
	#[error("unknown component kind {0}")]
	UnknownComponentKind(ComponentId),

	/// The property ordinal is past the end of the component's property table.
	#[error("property index {index} out of range for {component} ({count} properties)")]
	PropertyIndexOutOfRange {
		/// Name of the component kind.
		component: &'static str,
		/// The requested ordinal.
		index: usize,
		/// Number of properties the component declares.
		count: usize,
	},

	/// No property with this name exists on the component.
	#[error("{component} has no property named '{name}'")]
	PropertyNameNotFound {
		/// Name of the component kind.
		component: &'static str,
		/// The requested name.
		name: String,
	},

	/// The requested value type does not match the property's type tag.
	#[error("property '{property}' holds {expected:?}, not {found:?}")]
	TypeMismatch {
		/// Name of the property.
		property: &'static str,
		/// Value kind recorded in the property's descriptor.
		expected: ValueKind,
		/// Value kind the caller asked for.
		found: ValueKind,
	},

	/// The property was applied to a value that is not an instance of its component type.
	#[error("property '{property}' belongs to {component}")]
	WrongComponent {
		/// Name of the property.
		property: &'static str,
		/// Rust type name of the component that declares the property.
		component: &'static str,
	},

	/// The system type has not been registered with this world.
	#[error("system {0} is not registered")]
	SystemNotRegistered(&'static str),

	/// A [ComponentHandle](crate::components::ComponentHandle) outlived a structural change of its store.
	#[error("stale component handle for entity {0}")]
	StaleHandle(Entity),

	/// A [WorldConfig](crate::config::WorldConfig) failed validation.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// A configuration document could not be parsed.
	#[error("failed to parse configuration: {0}")]
	Config(String),
}

impl From<toml::de::Error> for EcsError {
	fn from(error: toml::de::Error) -> Self {
		EcsError::Config(error.to_string())
	}
}
