use crate::archetypes::Archetype;
use crate::entities::Entity;
use crate::error::{EcsError, Result};
use std::collections::VecDeque;

/// Per-index bookkeeping, stored as parallel vectors.
#[derive(Default)]
struct EntityInstanceVec {
	alive: Vec<bool>,
	generations: Vec<u32>,
	archetypes: Vec<Archetype>,
}

impl EntityInstanceVec {
	fn len(&self) -> usize {
		self.alive.len()
	}

	fn push(&mut self) -> u32 {
		let index = self.alive.len() as u32;
		self.alive.push(false);
		self.generations.push(0);
		self.archetypes.push(Archetype::EMPTY);
		index
	}

	fn reserve(&mut self, count: usize) {
		self.alive.reserve(count);
		self.generations.reserve(count);
		self.archetypes.reserve(count);
	}
}

/// Allocates and recycles [entities](Entity) and stores each live entity's [Archetype].
pub struct EntityRegistry {
	max_entities: usize,
	live: usize,
	instances: EntityInstanceVec,
	free: VecDeque<u32>,
}

impl EntityRegistry {
	pub(crate) fn new(max_entities: usize, initial_capacity: usize) -> Self {
		let mut instances = EntityInstanceVec::default();
		instances.reserve(initial_capacity);

		Self {
			max_entities,
			live: 0,
			instances,
			free: VecDeque::new(),
		}
	}

	/// Creates a new [entity](Entity) with an empty [Archetype].
	/// Indices of destroyed entities are reused before new ones are allocated.
	pub fn create_entity(&mut self) -> Result<Entity> {
		if self.live >= self.max_entities {
			log::warn!("entity limit of {} reached", self.max_entities);
			return Err(EcsError::CapacityExceeded {
				what: "entity",
				limit: self.max_entities,
			});
		}

		let index = match self.free.pop_front() {
			Some(index) => index,
			None => self.instances.push(),
		};

		let i = index as usize;
		debug_assert!(!self.instances.alive[i], "free list contained a live entity");
		self.instances.alive[i] = true;
		self.instances.archetypes[i] = Archetype::EMPTY;
		self.live += 1;

		Ok(Entity {
			index,
			generation: self.instances.generations[i],
		})
	}

	/// Releases the entity's index. The caller is responsible for dropping its components first.
	pub(crate) fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
		let i = self.instance_index(entity)?;

		self.instances.alive[i] = false;
		self.instances.archetypes[i] = Archetype::EMPTY;
		self.instances.generations[i] = self.instances.generations[i].wrapping_add(1);
		self.free.push_back(entity.index);
		self.live -= 1;
		Ok(())
	}

	/// The [Archetype] the entity currently holds.
	pub fn archetype(&self, entity: Entity) -> Result<Archetype> {
		let i = self.instance_index(entity)?;
		Ok(self.instances.archetypes[i])
	}

	pub(crate) fn set_archetype(&mut self, entity: Entity, archetype: Archetype) -> Result<()> {
		let i = self.instance_index(entity)?;
		self.instances.archetypes[i] = archetype;
		Ok(())
	}

	/// Checks whether the handle refers to a live entity.
	pub fn is_alive(&self, entity: Entity) -> bool {
		self.instance_index(entity).is_ok()
	}

	/// Number of live entities.
	pub fn len(&self) -> usize {
		self.live
	}

	pub fn is_empty(&self) -> bool {
		self.live == 0
	}

	/// Maximum number of simultaneously live entities.
	pub fn max_entities(&self) -> usize {
		self.max_entities
	}

	/// Iterate over every live [entity](Entity) and its [Archetype], in index order.
	pub fn iter(&self) -> impl Iterator<Item = (Entity, Archetype)> + '_ {
		(0..self.instances.len()).filter(|i| self.instances.alive[*i]).map(|i| {
			let entity = Entity {
				index: i as u32,
				generation: self.instances.generations[i],
			};
			(entity, self.instances.archetypes[i])
		})
	}

	#[inline(always)]
	fn instance_index(&self, entity: Entity) -> Result<usize> {
		let i = entity.index as usize;
		match i < self.instances.len()
			&& self.instances.alive[i]
			&& self.instances.generations[i] == entity.generation
		{
			true => Ok(i),
			false => Err(EcsError::UnknownEntity(entity)),
		}
	}
}
