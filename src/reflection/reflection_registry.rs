use crate::components::{Component, ComponentId};
use crate::error::{EcsError, Result};
use crate::reflection::{ComponentInfo, PropertyInfo, PropertyKey, PropertyValue, Value};
use lazy_static::lazy_static;
use nohash_hasher::NoHashHasher;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

lazy_static! {
	static ref COMPONENT_INFO: Mutex<HashMap<TypeId, &'static ComponentInfo, Hasher>> =
		Mutex::new(HashMap::default());
}

/// Returns the reflection metadata of `C`, describing the type on first use.
///
/// Descriptions live for the rest of the process and are shared by every world.
pub fn component_info<C: Component>() -> &'static ComponentInfo {
	let key = TypeId::of::<C>();
	let cached = COMPONENT_INFO.lock().get(&key).copied();
	if let Some(info) = cached {
		return info;
	}

	// Describe outside the lock; a racing thread may win, in which case its table is kept.
	let info = C::describe();
	debug_assert_eq!(info.type_id(), key, "{} described another type", std::any::type_name::<C>());

	let mut map = COMPONENT_INFO.lock();
	*map.entry(key).or_insert_with(|| &*Box::leak(Box::new(info)))
}

/// Metadata of one property of `C`.
pub fn property_info<'k, C: Component>(key: impl Into<PropertyKey<'k>>) -> Result<&'static PropertyInfo> {
	component_info::<C>().property(key)
}

/// Reads a property of a component value that does not have to live in a world.
pub fn get_property<'k, V: PropertyValue, C: Component>(component: &C, key: impl Into<PropertyKey<'k>>) -> Result<V> {
	property_info::<C>(key)?.read(component)
}

/// Writes a property of a component value that does not have to live in a world.
pub fn set_property<'k, V: PropertyValue, C: Component>(
	component: &mut C, key: impl Into<PropertyKey<'k>>, value: V,
) -> Result<()> {
	property_info::<C>(key)?.write(component, value)
}

/// Per-world table from [ComponentId] to reflection metadata.
pub struct ReflectionRegistry {
	infos: Vec<&'static ComponentInfo>,
}

impl ReflectionRegistry {
	pub(crate) fn new() -> Self {
		Self { infos: Vec::new() }
	}

	/// Records the metadata of `C` under `id`. Ids must be registered in order.
	pub(crate) fn register<C: Component>(&mut self, id: ComponentId) {
		debug_assert_eq!(id.index(), self.infos.len(), "component ids must be registered in order");
		let info = component_info::<C>();
		log::debug!("reflecting {} with {} properties", info.name(), info.properties().len());
		self.infos.push(info);
	}

	/// Name, description and property table of the component registered under `id`.
	pub fn component_metadata(&self, id: ComponentId) -> Result<&'static ComponentInfo> {
		self.infos.get(id.index()).copied().ok_or(EcsError::UnknownComponentKind(id))
	}

	pub fn property_metadata<'k>(&self, id: ComponentId, key: impl Into<PropertyKey<'k>>) -> Result<&'static PropertyInfo> {
		self.component_metadata(id)?.property(key)
	}

	/// Reads a property of `component`, which must be an instance of the kind registered under `id`.
	pub fn get<'k, V: PropertyValue>(
		&self, component: &dyn Any, id: ComponentId, key: impl Into<PropertyKey<'k>>,
	) -> Result<V> {
		self.property_metadata(id, key)?.read(component)
	}

	pub fn set<'k, V: PropertyValue>(
		&self, component: &mut dyn Any, id: ComponentId, key: impl Into<PropertyKey<'k>>, value: V,
	) -> Result<()> {
		self.property_metadata(id, key)?.write(component, value)
	}

	pub fn get_value<'k>(&self, component: &dyn Any, id: ComponentId, key: impl Into<PropertyKey<'k>>) -> Result<Value> {
		self.property_metadata(id, key)?.read_value(component)
	}

	pub fn set_value<'k>(
		&self, component: &mut dyn Any, id: ComponentId, key: impl Into<PropertyKey<'k>>, value: Value,
	) -> Result<()> {
		self.property_metadata(id, key)?.write_value(component, value)
	}
}
