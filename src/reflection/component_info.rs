use crate::error::{EcsError, Result};
use crate::reflection::{PropertyInfo, PropertyKey};
use std::any::{type_name, TypeId};
use std::fmt::{Debug, Formatter};

/// Reflection metadata of a component type: display name, description and its property table.
pub struct ComponentInfo {
	name: &'static str,
	description: &'static str,
	type_id: TypeId,
	type_name: &'static str,
	properties: Vec<PropertyInfo>,
}

impl ComponentInfo {
	/// Starts describing the component type `C` under the display name `name`.
	pub fn builder<C: 'static>(name: &'static str) -> ComponentInfoBuilder {
		ComponentInfoBuilder {
			info: ComponentInfo {
				name,
				description: "",
				type_id: TypeId::of::<C>(),
				type_name: type_name::<C>(),
				properties: Vec::new(),
			},
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn description(&self) -> &'static str {
		self.description
	}

	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Properties in declaration order; a property's position is its ordinal.
	pub fn properties(&self) -> &[PropertyInfo] {
		&self.properties
	}

	/// Resolves a property by ordinal or name.
	pub fn property<'k>(&self, key: impl Into<PropertyKey<'k>>) -> Result<&PropertyInfo> {
		match key.into() {
			PropertyKey::Index(index) => {
				self.properties.get(index).ok_or(EcsError::PropertyIndexOutOfRange {
					component: self.name,
					index,
					count: self.properties.len(),
				})
			},
			PropertyKey::Name(name) => {
				self.properties.iter().find(|p| p.name() == name).ok_or_else(|| {
					EcsError::PropertyNameNotFound {
						component: self.name,
						name: name.to_owned(),
					}
				})
			},
		}
	}
}

impl Debug for ComponentInfo {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ComponentInfo")
			.field("name", &self.name)
			.field("type_name", &self.type_name)
			.field("properties", &self.properties)
			.finish()
	}
}

/// Collects the property table of a [ComponentInfo].
pub struct ComponentInfoBuilder {
	info: ComponentInfo,
}

impl ComponentInfoBuilder {
	pub fn description(mut self, description: &'static str) -> Self {
		self.info.description = description;
		self
	}

	/// Appends a property; its ordinal is the number of properties added before it.
	///
	/// # Panics
	/// If a property with the same name was already added.
	pub fn property(mut self, mut property: PropertyInfo) -> Self {
		assert!(
			self.info.properties.iter().all(|p| p.name() != property.name()),
			"duplicate property '{}' on component {}",
			property.name(),
			self.info.name
		);
		property.set_index(self.info.properties.len());
		self.info.properties.push(property);
		self
	}

	pub fn build(self) -> ComponentInfo {
		self.info
	}
}
