use std::fmt::{Display, Formatter};

/// A unique handle to an entity.
///
/// The `index` is recycled once the entity is destroyed; the `generation` is bumped at the same time,
/// so handles to destroyed entities never alias their successors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Entity {
	pub(crate) index: u32,
	pub(crate) generation: u32,
}

impl Entity {
	/// Slot of the entity in its registry.
	#[inline(always)]
	pub const fn index(&self) -> u32 {
		self.index
	}

	/// Number of times the index was recycled before this entity was created.
	#[inline(always)]
	pub const fn generation(&self) -> u32 {
		self.generation
	}
}

impl Display for Entity {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}v{}", self.index, self.generation)
	}
}
