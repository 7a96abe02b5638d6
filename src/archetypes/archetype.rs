use crate::components::ComponentId;
use crate::config::MAX_COMPONENTS;
use crate::data_structures::BitField;
use std::fmt::{Debug, Display, Formatter};

const WORDS: usize = (MAX_COMPONENTS + 31) / 32;

/// The set of [component kinds](crate::components::Component) an [entity](crate::entities::Entity) owns,
/// or that a [system](crate::systems::System) requires.
///
/// Bit `i` is set when the component with [ComponentId] `i` is part of the set.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Archetype {
	bits: BitField<WORDS>,
}

impl Archetype {
	/// The empty archetype. Every archetype is a superset of it.
	pub const EMPTY: Archetype = Archetype { bits: BitField::new() };

	/// Creates an empty [Archetype].
	pub const fn new() -> Self {
		Self::EMPTY
	}

	/// Creates an [Archetype] containing the specified components.
	pub fn from_ids(ids: &[ComponentId]) -> Self {
		let mut archetype = Self::new();
		for id in ids {
			archetype.insert(*id);
		}
		archetype
	}

	/// Returns a copy of the archetype with `id` added.
	#[must_use]
	pub fn with(mut self, id: ComponentId) -> Self {
		self.insert(id);
		self
	}

	/// Returns a copy of the archetype with `id` removed.
	#[must_use]
	pub fn without(mut self, id: ComponentId) -> Self {
		self.remove(id);
		self
	}

	#[inline(always)]
	pub fn insert(&mut self, id: ComponentId) {
		self.bits.set(id.index(), true);
	}

	#[inline(always)]
	pub fn remove(&mut self, id: ComponentId) {
		self.bits.set(id.index(), false);
	}

	#[inline(always)]
	pub fn contains(&self, id: ComponentId) -> bool {
		self.bits.get(id.index())
	}

	/// Checks whether every component of `required` is present in `self`,
	/// i.e. `(self & required) == required`.
	#[inline(always)]
	pub fn satisfies(&self, required: &Archetype) -> bool {
		required.bits.is_subset_of(&self.bits)
	}

	pub fn clear(&mut self) {
		self.bits.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.bits.is_empty()
	}

	/// Number of component kinds in the archetype.
	pub fn len(&self) -> usize {
		self.bits.count_ones()
	}

	/// Iterate over the contained [component ids](ComponentId) in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = ComponentId> + '_ {
		self.bits.iter_ones().map(ComponentId::from_index)
	}
}

impl FromIterator<ComponentId> for Archetype {
	fn from_iter<I: IntoIterator<Item = ComponentId>>(iter: I) -> Self {
		let mut archetype = Archetype::new();
		iter.into_iter().for_each(|id| archetype.insert(id));
		archetype
	}
}

impl std::ops::BitAnd for Archetype {
	type Output = Archetype;

	fn bitand(self, rhs: Self) -> Self::Output {
		Archetype { bits: self.bits & rhs.bits }
	}
}

impl std::ops::BitOr for Archetype {
	type Output = Archetype;

	fn bitor(self, rhs: Self) -> Self::Output {
		Archetype { bits: self.bits | rhs.bits }
	}
}

impl Debug for Archetype {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "Archetype({:?})", self.bits)
	}
}

impl Display for Archetype {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:b}", self.bits)
	}
}
