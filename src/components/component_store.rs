use crate::components::{Component, ComponentId};
use crate::entities::Entity;
use nohash_hasher::IntMap;
use std::any::Any;

/// A densely packed array of one [Component] type.
///
/// `slots` and `entity_slots` are kept as mutual inverses: `slots[entity_slots[e]] == e`
/// for every stored entity. Removal moves the last value into the freed slot, so slot
/// indices are only stable until the next removal; `epoch` counts those removals.
pub struct ComponentStore<T> {
	values: Vec<T>,
	slots: Vec<Entity>,
	entity_slots: IntMap<u32, u32>,
	epoch: u32,
}

impl<T: Component> ComponentStore<T> {
	pub(crate) fn new() -> Self {
		Self {
			values: Vec::new(),
			slots: Vec::new(),
			entity_slots: IntMap::default(),
			epoch: 0,
		}
	}

	/// Stores `value` for `entity`.
	/// Returns *false* if the entity already had a value, which is then replaced in place.
	pub(crate) fn insert(&mut self, entity: Entity, value: T) -> bool {
		if let Some(slot) = self.slot_of(entity) {
			self.values[slot] = value;
			return false;
		}

		let slot = self.values.len() as u32;
		self.values.push(value);
		self.slots.push(entity);
		self.entity_slots.insert(entity.index, slot);
		true
	}

	/// Swap-and-pop removal. The last value takes over the freed slot.
	pub(crate) fn remove(&mut self, entity: Entity) -> Option<T> {
		let slot = self.slot_of(entity)?;
		self.entity_slots.remove(&entity.index);

		let value = self.values.swap_remove(slot);
		self.slots.swap_remove(slot);

		if let Some(moved) = self.slots.get(slot) {
			self.entity_slots.insert(moved.index, slot as u32);
		}

		self.epoch = self.epoch.wrapping_add(1);
		Some(value)
	}

	pub fn get(&self, entity: Entity) -> Option<&T> {
		self.slot_of(entity).map(|slot| &self.values[slot])
	}

	pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
		self.slot_of(entity).map(|slot| &mut self.values[slot])
	}

	/// Dense view of the stored values, in slot order.
	pub fn values(&self) -> &[T] {
		&self.values
	}

	/// Iterate over `(entity, value)` pairs in slot order.
	pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
		self.slots.iter().copied().zip(self.values.iter())
	}

	#[inline(always)]
	fn slot_of(&self, entity: Entity) -> Option<usize> {
		let slot = *self.entity_slots.get(&entity.index)? as usize;
		match self.slots[slot] == entity {
			true => Some(slot),
			false => None,
		}
	}
}

/// Type-erased access to a [ComponentStore], one per registered component kind.
pub trait AnyComponentStore: Send + Sync {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;

	/// Drop the entity's value, if any. Returns whether a value was removed.
	fn remove_entity(&mut self, entity: Entity) -> bool;

	fn contains(&self, entity: Entity) -> bool;

	/// The entity's component as `&dyn Any`.
	fn component(&self, entity: Entity) -> Option<&dyn Any>;

	fn component_mut(&mut self, entity: Entity) -> Option<&mut dyn Any>;

	/// Current slot of the entity's value.
	fn slot(&self, entity: Entity) -> Option<usize>;

	/// The value at `slot` together with its owner.
	fn component_at(&self, slot: usize) -> Option<(Entity, &dyn Any)>;

	/// Number of removals performed so far.
	fn epoch(&self) -> u32;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<T: Component> AnyComponentStore for ComponentStore<T> {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}

	fn remove_entity(&mut self, entity: Entity) -> bool {
		self.remove(entity).is_some()
	}

	fn contains(&self, entity: Entity) -> bool {
		self.slot_of(entity).is_some()
	}

	fn component(&self, entity: Entity) -> Option<&dyn Any> {
		self.get(entity).map(|c| c as &dyn Any)
	}

	fn component_mut(&mut self, entity: Entity) -> Option<&mut dyn Any> {
		self.get_mut(entity).map(|c| c as &mut dyn Any)
	}

	fn slot(&self, entity: Entity) -> Option<usize> {
		self.slot_of(entity)
	}

	fn component_at(&self, slot: usize) -> Option<(Entity, &dyn Any)> {
		let entity = *self.slots.get(slot)?;
		Some((entity, &self.values[slot] as &dyn Any))
	}

	fn epoch(&self) -> u32 {
		self.epoch
	}

	fn len(&self) -> usize {
		self.values.len()
	}
}

/// A cached reference to a component slot that detects relocation.
///
/// Obtained from [Coordinator::component_handle](crate::coordinator::Coordinator::component_handle);
/// resolving it after any removal from the same store fails with
/// [StaleHandle](crate::error::EcsError::StaleHandle) instead of returning another entity's data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ComponentHandle {
	pub(crate) component: ComponentId,
	pub(crate) entity: Entity,
	pub(crate) slot: u32,
	pub(crate) epoch: u32,
}

impl ComponentHandle {
	pub const fn component(&self) -> ComponentId {
		self.component
	}

	pub const fn entity(&self) -> Entity {
		self.entity
	}

	pub const fn slot(&self) -> u32 {
		self.slot
	}
}
