use crate::archetypes::Archetype;
use crate::entities::Entity;
use crate::error::{EcsError, Result};
use crate::systems::System;
use nohash_hasher::NoHashHasher;
use std::any::{type_name, TypeId};
use std::collections::{BTreeSet, HashMap};
use std::hash::BuildHasherDefault;

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// Identifies a registered [System] within its world.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SystemHandle {
	index: usize,
}

impl SystemHandle {
	/// Position of the system in registration order.
	pub const fn index(&self) -> usize {
		self.index
	}
}

struct SystemEntry {
	name: &'static str,
	/// Taken out while the system runs.
	system: Option<Box<dyn System>>,
	archetype: Archetype,
	entities: BTreeSet<Entity>,
}

impl SystemEntry {
	fn update(&mut self, entity: Entity, archetype: &Archetype) {
		match archetype.satisfies(&self.archetype) {
			true => self.entities.insert(entity),
			false => self.entities.remove(&entity),
		};
	}
}

/// Holds the registered [systems](System), their required [archetypes](Archetype),
/// and the live set of entities matching each of them.
pub struct SystemRegistry {
	entries: Vec<SystemEntry>,
	index: HashMap<TypeId, usize, Hasher>,
}

impl SystemRegistry {
	pub(crate) fn new() -> Self {
		Self {
			entries: Vec::new(),
			index: HashMap::default(),
		}
	}

	/// Adds a system with an empty required archetype, matching every entity in `live`.
	pub(crate) fn register<S: System>(
		&mut self, system: S, live: impl Iterator<Item = (Entity, Archetype)>,
	) -> Result<SystemHandle> {
		let key = TypeId::of::<S>();
		if self.index.contains_key(&key) {
			return Err(EcsError::AlreadyRegistered(type_name::<S>()));
		}

		let handle = SystemHandle { index: self.entries.len() };
		let mut entry = SystemEntry {
			name: type_name::<S>(),
			system: Some(Box::new(system)),
			archetype: Archetype::EMPTY,
			entities: BTreeSet::new(),
		};
		live.for_each(|(entity, archetype)| entry.update(entity, &archetype));

		log::debug!("registered system {} as #{}", entry.name, handle.index);
		self.index.insert(key, handle.index);
		self.entries.push(entry);
		Ok(handle)
	}

	/// The handle of a registered system type.
	pub fn handle_of<S: System>(&self) -> Result<SystemHandle> {
		self.index
			.get(&TypeId::of::<S>())
			.map(|index| SystemHandle { index: *index })
			.ok_or(EcsError::SystemNotRegistered(type_name::<S>()))
	}

	/// Associates the system with the component set it needs and recomputes its membership.
	pub(crate) fn set_required_archetype<S: System>(
		&mut self, archetype: Archetype, live: impl Iterator<Item = (Entity, Archetype)>,
	) -> Result<()> {
		let handle = self.handle_of::<S>()?;
		let entry = &mut self.entries[handle.index];
		entry.archetype = archetype;
		entry.entities.clear();
		live.for_each(|(entity, archetype)| entry.update(entity, &archetype));

		log::debug!("system {} requires {:?} ({} members)", entry.name, archetype, entry.entities.len());
		Ok(())
	}

	/// Re-evaluates the entity against every system's requirement.
	pub fn entity_archetype_changed(&mut self, entity: Entity, archetype: Archetype) {
		for entry in self.entries.iter_mut() {
			entry.update(entity, &archetype);
		}
	}

	/// Drops the entity from every membership set.
	pub fn entity_destroyed(&mut self, entity: Entity) {
		for entry in self.entries.iter_mut() {
			entry.entities.remove(&entity);
		}
	}

	pub fn required_archetype(&self, handle: SystemHandle) -> Archetype {
		self.entries[handle.index].archetype
	}

	/// The system's current members, in ascending order.
	pub fn entities(&self, handle: SystemHandle) -> &BTreeSet<Entity> {
		&self.entries[handle.index].entities
	}

	pub fn name(&self, handle: SystemHandle) -> &'static str {
		self.entries[handle.index].name
	}

	pub fn get<S: System>(&self) -> Result<&S> {
		let handle = self.handle_of::<S>()?;
		let system = self.entries[handle.index].system.as_deref();
		system
			.and_then(|s| s.as_any().downcast_ref::<S>())
			.ok_or(EcsError::SystemNotRegistered(type_name::<S>()))
	}

	pub fn get_mut<S: System>(&mut self) -> Result<&mut S> {
		let handle = self.handle_of::<S>()?;
		let system = self.entries[handle.index].system.as_deref_mut();
		system
			.and_then(|s| s.as_any_mut().downcast_mut::<S>())
			.ok_or(EcsError::SystemNotRegistered(type_name::<S>()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub(crate) fn handle_at(&self, index: usize) -> SystemHandle {
		debug_assert!(index < self.entries.len());
		SystemHandle { index }
	}

	pub(crate) fn take(&mut self, index: usize) -> Option<Box<dyn System>> {
		self.entries[index].system.take()
	}

	pub(crate) fn restore(&mut self, index: usize, system: Box<dyn System>) {
		self.entries[index].system = Some(system);
	}
}
