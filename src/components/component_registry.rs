use crate::archetypes::Archetype;
use crate::components::{AnyComponentStore, Component, ComponentId, ComponentStore, ComponentType};
use crate::config::MAX_COMPONENTS;
use crate::entities::Entity;
use crate::error::{EcsError, Result};
use nohash_hasher::NoHashHasher;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::hash::BuildHasherDefault;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Owns one [ComponentStore] per registered [Component] type.
///
/// Component ids are assigned in registration order and index both `types` and `stores`.
pub struct ComponentRegistry {
	types: Vec<ComponentType>,
	stores: Vec<Box<dyn AnyComponentStore>>,
	ids: HashMap<TypeId, ComponentId, Hasher>,
}

impl ComponentRegistry {
	pub(crate) fn new() -> Self {
		Self {
			types: Vec::new(),
			stores: Vec::new(),
			ids: HashMap::default(),
		}
	}

	/// Registers `T` and assigns it the next free [ComponentId].
	pub fn register<T: Component>(&mut self) -> Result<ComponentId> {
		if self.ids.contains_key(&TypeId::of::<T>()) {
			return Err(EcsError::AlreadyRegistered(type_name::<T>()));
		}
		if self.types.len() >= MAX_COMPONENTS {
			return Err(EcsError::CapacityExceeded {
				what: "component kind",
				limit: MAX_COMPONENTS,
			});
		}

		let id = ComponentId::from_index(self.types.len());
		let component_type = ComponentType::of::<T>(id);
		log::debug!("registered component {} ({}) as {}", component_type.name(), type_name::<T>(), id);

		self.ids.insert(TypeId::of::<T>(), id);
		self.types.push(component_type);
		self.stores.push(Box::new(ComponentStore::<T>::new()));
		Ok(id)
	}

	/// The [ComponentId] assigned to `T`.
	pub fn id_of<T: Component>(&self) -> Result<ComponentId> {
		self.ids
			.get(&TypeId::of::<T>())
			.copied()
			.ok_or(EcsError::ComponentKindNotRegistered(type_name::<T>()))
	}

	/// The [ComponentId] assigned to the type with the given [TypeId].
	pub fn id_of_type(&self, type_id: TypeId) -> Option<ComponentId> {
		self.ids.get(&type_id).copied()
	}

	/// Runtime description of the component registered under `id`.
	pub fn component_type(&self, id: ComponentId) -> Result<&ComponentType> {
		self.types.get(id.index()).ok_or(EcsError::UnknownComponentKind(id))
	}

	/// All registered component types, in id order.
	pub fn types(&self) -> &[ComponentType] {
		&self.types
	}

	pub fn len(&self) -> usize {
		self.types.len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.is_empty()
	}

	pub fn store<T: Component>(&self) -> Result<&ComponentStore<T>> {
		let id = self.id_of::<T>()?;
		let store = self.stores[id.index()].as_any().downcast_ref::<ComponentStore<T>>();
		store.ok_or(EcsError::ComponentKindNotRegistered(type_name::<T>()))
	}

	pub(crate) fn store_mut<T: Component>(&mut self) -> Result<&mut ComponentStore<T>> {
		let id = self.id_of::<T>()?;
		let store = self.stores[id.index()].as_any_mut().downcast_mut::<ComponentStore<T>>();
		store.ok_or(EcsError::ComponentKindNotRegistered(type_name::<T>()))
	}

	/// The type-erased store of the component registered under `id`.
	pub fn store_dyn(&self, id: ComponentId) -> Result<&dyn AnyComponentStore> {
		self.stores.get(id.index()).map(|s| s.as_ref()).ok_or(EcsError::UnknownComponentKind(id))
	}

	pub(crate) fn store_dyn_mut(&mut self, id: ComponentId) -> Result<&mut dyn AnyComponentStore> {
		match self.stores.get_mut(id.index()) {
			Some(store) => Ok(store.as_mut()),
			None => Err(EcsError::UnknownComponentKind(id)),
		}
	}

	/// The entity's component of kind `id` as `&dyn Any`.
	pub(crate) fn component(&self, entity: Entity, id: ComponentId) -> Result<&dyn Any> {
		let store = self.store_dyn(id)?;
		let name = self.types[id.index()].name();
		store.component(entity).ok_or(EcsError::ComponentNotPresent { entity, component: name })
	}

	pub(crate) fn component_mut(&mut self, entity: Entity, id: ComponentId) -> Result<&mut dyn Any> {
		let name = self.component_type(id)?.name();
		let store = self.store_dyn_mut(id)?;
		store.component_mut(entity).ok_or(EcsError::ComponentNotPresent { entity, component: name })
	}

	/// Drops every component the archetype says the entity owns.
	pub(crate) fn entity_destroyed(&mut self, entity: Entity, archetype: Archetype) {
		for id in archetype.iter() {
			let removed = self.stores[id.index()].remove_entity(entity);
			debug_assert!(removed, "archetype of {} lists {} but its store holds no value", entity, id);
		}
	}

	/// Builds the archetype bits of the entity from the stores alone.
	pub(crate) fn stored_archetype(&self, entity: Entity) -> Archetype {
		self.stores
			.iter()
			.enumerate()
			.filter(|(_, store)| store.contains(entity))
			.map(|(i, _)| ComponentId::from_index(i))
			.collect()
	}
}
