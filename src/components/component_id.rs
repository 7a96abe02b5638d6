//! A dense runtime identifier tied to a registered [Component](crate::components::Component) type.
//!
//! Ids are handed out per [Coordinator](crate::coordinator::Coordinator) in registration order,
//! starting at 0, and are never reused. They index the bits of every
//! [Archetype](crate::archetypes::Archetype), so they are bounded by [MAX_COMPONENTS].

use crate::config::MAX_COMPONENTS;
use std::fmt::{Display, Formatter};

/// Index of a registered component kind, in `0..MAX_COMPONENTS`.
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: u8,
}

impl ComponentId {
	/// Builds an id from a raw index.
	///
	/// # Panics
	/// If `index` is not below [MAX_COMPONENTS].
	pub fn from_index(index: usize) -> Self {
		assert!(index < MAX_COMPONENTS, "component index {} out of range", index);
		Self { value: index as u8 }
	}

	#[inline(always)]
	pub const fn index(&self) -> usize {
		self.value as usize
	}
}

impl Display for ComponentId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.value)
	}
}
