use crate::archetypes::Archetype;
use crate::components::{
	Component, ComponentHandle, ComponentId, ComponentRegistry, ComponentSet, ComponentStore, ComponentType,
};
use crate::config::WorldConfig;
use crate::entities::{Entity, EntityRegistry};
use crate::error::{EcsError, Result};
use crate::reflection::{ComponentInfo, PropertyInfo, PropertyKey, PropertyValue, ReflectionRegistry, Value};
use crate::systems::{System, SystemHandle, SystemRegistry};
use parking_lot::Mutex;
use std::any::{type_name, Any};
use std::sync::Arc;

/// A [Coordinator] behind a lock, for collaborators that call back into the world from other threads.
pub type SharedCoordinator = Arc<Mutex<Coordinator>>;

/// A container for [entities](Entity), their [components](Component) and [systems](System).
///
/// The coordinator owns the entity, component, reflection and system registries of one world
/// and keeps them consistent: every structural change updates the entity's [Archetype],
/// the component stores and the systems' membership sets together.
///
/// All operations run to completion on the calling thread; there is no internal locking.
pub struct Coordinator {
	config: WorldConfig,
	entities: EntityRegistry,
	components: ComponentRegistry,
	reflection: ReflectionRegistry,
	systems: SystemRegistry,
}

impl Coordinator {
	/// Creates a world with the default [WorldConfig].
	pub fn new() -> Self {
		let config = WorldConfig::default();
		Self {
			entities: EntityRegistry::new(config.max_entities, config.initial_capacity),
			components: ComponentRegistry::new(),
			reflection: ReflectionRegistry::new(),
			systems: SystemRegistry::new(),
			config,
		}
	}

	/// Creates a world after validating `config`.
	pub fn with_config(config: WorldConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			entities: EntityRegistry::new(config.max_entities, config.initial_capacity),
			components: ComponentRegistry::new(),
			reflection: ReflectionRegistry::new(),
			systems: SystemRegistry::new(),
			config,
		})
	}

	/// Moves the world behind a [SharedCoordinator].
	pub fn into_shared(self) -> SharedCoordinator {
		Arc::new(Mutex::new(self))
	}

	pub fn config(&self) -> &WorldConfig {
		&self.config
	}

	/// Creates an [entity](Entity) with no [components](Component) attached.
	///
	/// Fails with [CapacityExceeded](EcsError::CapacityExceeded) once the configured limit of live entities is reached.
	pub fn create_entity(&mut self) -> Result<Entity> {
		let entity = self.entities.create_entity()?;
		self.systems.entity_archetype_changed(entity, Archetype::EMPTY);
		log::trace!("created entity {}", entity);
		Ok(entity)
	}

	/// Destroys the entity together with all of its [components](Component).
	pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
		let archetype = self.entities.archetype(entity)?;
		self.components.entity_destroyed(entity, archetype);
		self.entities.destroy_entity(entity)?;
		self.systems.entity_destroyed(entity);
		log::trace!("destroyed entity {}", entity);
		Ok(())
	}

	/// The [Archetype] of the entity's current components.
	pub fn archetype(&self, entity: Entity) -> Result<Archetype> {
		self.entities.archetype(entity)
	}

	pub fn is_alive(&self, entity: Entity) -> bool {
		self.entities.is_alive(entity)
	}

	/// Number of live entities.
	pub fn entity_count(&self) -> usize {
		self.entities.len()
	}

	/// Iterate over the live entities in index order.
	pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
		self.entities.iter().map(|(entity, _)| entity)
	}

	/// Registers the component type `T`, assigning it the next [ComponentId]
	/// and recording its reflection metadata.
	pub fn register_component<T: Component>(&mut self) -> Result<ComponentId> {
		let id = self.components.register::<T>()?;
		self.reflection.register::<T>(id);
		Ok(id)
	}

	/// The [ComponentId] assigned to `T`.
	pub fn component_id<T: Component>(&self) -> Result<ComponentId> {
		self.components.id_of::<T>()
	}

	/// Runtime description (type hash, type name, metadata) of a registered component kind.
	pub fn component_type(&self, id: ComponentId) -> Result<&ComponentType> {
		self.components.component_type(id)
	}

	/// All registered component kinds, in id order.
	pub fn component_types(&self) -> &[ComponentType] {
		self.components.types()
	}

	/// Builds the [Archetype] of a set of registered component types, e.g. `archetype_of::<(Position, Velocity)>()`.
	pub fn archetype_of<S: ComponentSet>(&self) -> Result<Archetype> {
		let mut types = Vec::new();
		S::collect_types(&mut types);

		let mut archetype = Archetype::new();
		for (type_id, name) in types {
			let id = self.components.id_of_type(type_id).ok_or(EcsError::ComponentKindNotRegistered(name))?;
			archetype.insert(id);
		}
		Ok(archetype)
	}

	/// Attaches `value` to the entity.
	///
	/// If the entity already owns a `T`, the stored value is replaced in place:
	/// the archetype and system memberships are left untouched.
	pub fn add_component<T: Component>(&mut self, entity: Entity, value: T) -> Result<()> {
		let archetype = self.entities.archetype(entity)?;
		let id = self.components.id_of::<T>()?;

		let inserted = self.components.store_mut::<T>()?.insert(entity, value);
		debug_assert_eq!(inserted, !archetype.contains(id), "archetype of {} out of sync with {}", entity, id);

		if inserted {
			let archetype = archetype.with(id);
			self.entities.set_archetype(entity, archetype)?;
			self.systems.entity_archetype_changed(entity, archetype);
			log::trace!("added {} to {}, archetype {:?}", type_name::<T>(), entity, archetype);
		}

		self.debug_check(entity);
		Ok(())
	}

	/// Detaches and returns the entity's `T`.
	pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Result<T> {
		let archetype = self.entities.archetype(entity)?;
		let id = self.components.id_of::<T>()?;

		let value = self.components.store_mut::<T>()?.remove(entity).ok_or(EcsError::ComponentNotPresent {
			entity,
			component: self.components.types()[id.index()].name(),
		})?;

		let archetype = archetype.without(id);
		self.entities.set_archetype(entity, archetype)?;
		self.systems.entity_archetype_changed(entity, archetype);
		log::trace!("removed {} from {}, archetype {:?}", type_name::<T>(), entity, archetype);

		self.debug_check(entity);
		Ok(value)
	}

	/// Checks whether the entity owns a `T`.
	pub fn has_component<T: Component>(&self, entity: Entity) -> Result<bool> {
		let archetype = self.entities.archetype(entity)?;
		let id = self.components.id_of::<T>()?;
		Ok(archetype.contains(id))
	}

	/// Gets a reference to the entity's `T`.
	pub fn get_component<T: Component>(&self, entity: Entity) -> Result<&T> {
		self.entities.archetype(entity)?;
		let store = self.components.store::<T>()?;
		store.get(entity).ok_or_else(|| self.not_present::<T>(entity))
	}

	/// The dense store holding every `T` of this world.
	pub fn store<T: Component>(&self) -> Result<&ComponentStore<T>> {
		self.components.store::<T>()
	}

	/// Gets a mutable reference to the entity's `T`.
	pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Result<&mut T> {
		self.entities.archetype(entity)?;
		let component = self.not_present::<T>(entity);
		let store = self.components.store_mut::<T>()?;
		store.get_mut(entity).ok_or(component)
	}

	/// The entity's component of kind `id`, type-erased.
	///
	/// The reference borrows the world, so it cannot be held across a structural change.
	pub fn component_ref(&self, entity: Entity, id: ComponentId) -> Result<&dyn Any> {
		let archetype = self.entities.archetype(entity)?;
		let name = self.components.component_type(id)?.name();
		if !archetype.contains(id) {
			return Err(EcsError::ComponentNotPresent { entity, component: name });
		}
		self.components.component(entity, id)
	}

	/// Mutable counterpart of [component_ref](Self::component_ref).
	pub fn component_mut(&mut self, entity: Entity, id: ComponentId) -> Result<&mut dyn Any> {
		let archetype = self.entities.archetype(entity)?;
		let name = self.components.component_type(id)?.name();
		if !archetype.contains(id) {
			return Err(EcsError::ComponentNotPresent { entity, component: name });
		}
		self.components.component_mut(entity, id)
	}

	/// A detached reference to the slot holding the entity's component of kind `id`.
	///
	/// Unlike [component_ref](Self::component_ref) the handle can be kept across calls;
	/// [resolve_handle](Self::resolve_handle) rejects it once the store has relocated values.
	pub fn component_handle(&self, entity: Entity, id: ComponentId) -> Result<ComponentHandle> {
		self.component_ref(entity, id)?;
		let store = self.components.store_dyn(id)?;
		let slot = store.slot(entity).ok_or(EcsError::StaleHandle(entity))?;

		Ok(ComponentHandle {
			component: id,
			entity,
			slot: slot as u32,
			epoch: store.epoch(),
		})
	}

	/// The component a [ComponentHandle] points at, if no removal happened in its store since it was taken.
	pub fn resolve_handle(&self, handle: &ComponentHandle) -> Result<&dyn Any> {
		self.entities.archetype(handle.entity)?;
		let store = self.components.store_dyn(handle.component)?;
		if store.epoch() != handle.epoch {
			return Err(EcsError::StaleHandle(handle.entity));
		}

		match store.component_at(handle.slot as usize) {
			Some((owner, component)) if owner == handle.entity => Ok(component),
			_ => Err(EcsError::StaleHandle(handle.entity)),
		}
	}

	/// Name, description and property table of a registered component kind.
	pub fn component_metadata(&self, id: ComponentId) -> Result<&'static ComponentInfo> {
		self.reflection.component_metadata(id)
	}

	/// Metadata of one property, addressed by ordinal or name.
	pub fn property_metadata<'k>(&self, id: ComponentId, key: impl Into<PropertyKey<'k>>) -> Result<&'static PropertyInfo> {
		self.reflection.property_metadata(id, key)
	}

	/// Reads a property of the entity's component of kind `id`.
	///
	/// ```ignore
	/// let x: f64 = ecs.get_property(entity, position, "x")?;
	/// ```
	pub fn get_property<'k, V: PropertyValue>(
		&self, entity: Entity, id: ComponentId, key: impl Into<PropertyKey<'k>>,
	) -> Result<V> {
		self.check_present(entity, id)?;
		self.reflection.get(self.components.component(entity, id)?, id, key)
	}

	/// Writes a property of the entity's component of kind `id`.
	pub fn set_property<'k, V: PropertyValue>(
		&mut self, entity: Entity, id: ComponentId, key: impl Into<PropertyKey<'k>>, value: V,
	) -> Result<()> {
		self.check_present(entity, id)?;
		self.reflection.set(self.components.component_mut(entity, id)?, id, key, value)
	}

	/// Reads a property as a dynamically typed [Value].
	pub fn get_property_value<'k>(&self, entity: Entity, id: ComponentId, key: impl Into<PropertyKey<'k>>) -> Result<Value> {
		self.check_present(entity, id)?;
		self.reflection.get_value(self.components.component(entity, id)?, id, key)
	}

	/// Writes a property from a dynamically typed [Value] of the property's kind.
	pub fn set_property_value<'k>(
		&mut self, entity: Entity, id: ComponentId, key: impl Into<PropertyKey<'k>>, value: Value,
	) -> Result<()> {
		self.check_present(entity, id)?;
		self.reflection.set_value(self.components.component_mut(entity, id)?, id, key, value)
	}

	/// Add a new [system](System) to the world.
	///
	/// It starts with an empty required archetype and therefore matches every live entity.
	pub fn register_system<S: System>(&mut self, system: S) -> Result<SystemHandle> {
		self.systems.register(system, self.entities.iter())
	}

	/// Sets the component set system `S` needs and recomputes its membership.
	pub fn set_required_archetype<S: System>(&mut self, archetype: Archetype) -> Result<()> {
		self.systems.set_required_archetype::<S>(archetype, self.entities.iter())
	}

	/// The archetype system `S` requires.
	pub fn required_archetype<S: System>(&self) -> Result<Archetype> {
		let handle = self.systems.handle_of::<S>()?;
		Ok(self.systems.required_archetype(handle))
	}

	/// Iterate over the entities currently matching system `S`, in ascending order.
	pub fn system_entities<S: System>(&self) -> Result<impl Iterator<Item = Entity> + '_> {
		let handle = self.systems.handle_of::<S>()?;
		Ok(self.systems.entities(handle).iter().copied())
	}

	/// Iterate over the entities currently matching the system behind `handle`.
	pub fn handle_entities(&self, handle: SystemHandle) -> impl Iterator<Item = Entity> + '_ {
		self.systems.entities(handle).iter().copied()
	}

	pub fn system<S: System>(&self) -> Result<&S> {
		self.systems.get::<S>()
	}

	pub fn system_mut<S: System>(&mut self) -> Result<&mut S> {
		self.systems.get_mut::<S>()
	}

	/// Execute every [system](System) once, in registration order.
	///
	/// Each system receives a snapshot of its members taken right before it runs,
	/// so structural changes it makes only affect the systems that run after it.
	pub fn run_systems(&mut self) {
		for index in 0..self.systems.len() {
			let mut system = match self.systems.take(index) {
				Some(system) => system,
				None => continue,
			};

			let handle = self.systems.handle_at(index);
			let entities: Vec<Entity> = self.systems.entities(handle).iter().copied().collect();
			log::trace!("running {} on {} entities", self.systems.name(handle), entities.len());
			system.run(self, &entities);

			self.systems.restore(index, system);
		}
	}

	/// Fails unless the entity is live, `id` is registered and the entity owns that component.
	fn check_present(&self, entity: Entity, id: ComponentId) -> Result<()> {
		let archetype = self.entities.archetype(entity)?;
		let info = self.reflection.component_metadata(id)?;
		match archetype.contains(id) {
			true => Ok(()),
			false => Err(EcsError::ComponentNotPresent {
				entity,
				component: info.name(),
			}),
		}
	}

	fn not_present<T: Component>(&self, entity: Entity) -> EcsError {
		let component = match self.components.id_of::<T>() {
			Ok(id) => self.components.types()[id.index()].name(),
			Err(_) => type_name::<T>(),
		};
		EcsError::ComponentNotPresent { entity, component }
	}

	#[inline(always)]
	fn debug_check(&self, entity: Entity) {
		if let Ok(archetype) = self.entities.archetype(entity) {
			debug_assert_eq!(
				archetype,
				self.components.stored_archetype(entity),
				"archetype of {} disagrees with the component stores",
				entity
			);
		}
	}
}

impl Default for Coordinator {
	fn default() -> Self {
		Self::new()
	}
}
