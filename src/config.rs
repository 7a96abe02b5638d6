//! World sizing, loaded once when a [Coordinator](crate::coordinator::Coordinator) is built.

use crate::error::{EcsError, Result};
use serde::{Deserialize, Serialize};

/// Hard upper bound on the number of simultaneously live entities.
pub const MAX_ENTITIES: usize = 10_000;

/// Number of distinct component kinds a world can register.
/// Also the width of every [Archetype](crate::archetypes::Archetype).
pub const MAX_COMPONENTS: usize = 32;

/// Per-world configuration.
///
/// ```toml
/// max_entities = 4096
/// initial_capacity = 256
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
	/// Live entity limit of the world, at most [MAX_ENTITIES].
	pub max_entities: usize,
	/// Entity slots reserved up front.
	pub initial_capacity: usize,
}

impl Default for WorldConfig {
	fn default() -> Self {
		Self {
			max_entities: MAX_ENTITIES,
			initial_capacity: 0,
		}
	}
}

impl WorldConfig {
	/// Parses and validates a TOML document. Missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: WorldConfig = toml::from_str(source)?;
		config.validate()?;
		log::debug!("loaded world config {:?}", config);
		Ok(config)
	}

	/// Returns a copy with a different live entity limit.
	pub fn with_max_entities(mut self, max_entities: usize) -> Self {
		self.max_entities = max_entities;
		self
	}

	/// Returns a copy with a different up-front reservation.
	pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}

	/// Checks the limits against the compile-time maximums.
	pub fn validate(&self) -> Result<()> {
		if self.max_entities == 0 {
			return Err(EcsError::InvalidConfig("max_entities must be at least 1".into()));
		}
		if self.max_entities > MAX_ENTITIES {
			return Err(EcsError::InvalidConfig(format!(
				"max_entities {} exceeds the maximum of {}",
				self.max_entities, MAX_ENTITIES
			)));
		}
		if self.initial_capacity > self.max_entities {
			return Err(EcsError::InvalidConfig(format!(
				"initial_capacity {} exceeds max_entities {}",
				self.initial_capacity, self.max_entities
			)));
		}
		Ok(())
	}
}
