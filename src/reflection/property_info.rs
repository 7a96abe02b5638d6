use crate::error::{EcsError, Result};
use crate::reflection::{PropertyType, PropertyValue, Value};
use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter};

/// Addresses a property either by ordinal or by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PropertyKey<'l> {
	Index(usize),
	Name(&'l str),
}

impl From<usize> for PropertyKey<'_> {
	fn from(index: usize) -> Self {
		PropertyKey::Index(index)
	}
}

impl<'l> From<&'l str> for PropertyKey<'l> {
	fn from(name: &'l str) -> Self {
		PropertyKey::Name(name)
	}
}

impl<'l> From<&'l String> for PropertyKey<'l> {
	fn from(name: &'l String) -> Self {
		PropertyKey::Name(name.as_str())
	}
}

/// Reads and writes one field of a type-erased component.
trait FieldAccess: Send + Sync {
	fn get<'a>(&self, component: &'a dyn Any) -> Option<&'a dyn Any>;
	fn get_mut<'a>(&self, component: &'a mut dyn Any) -> Option<&'a mut dyn Any>;
	fn read_value(&self, component: &dyn Any) -> Option<Value>;
	/// Hands the value back when it is of the wrong kind.
	fn write_value(&self, component: &mut dyn Any, value: Value) -> std::result::Result<(), Value>;
}

struct FieldAccessor<C, V> {
	get: fn(&C) -> &V,
	get_mut: fn(&mut C) -> &mut V,
}

impl<C: 'static, V: PropertyValue> FieldAccess for FieldAccessor<C, V> {
	fn get<'a>(&self, component: &'a dyn Any) -> Option<&'a dyn Any> {
		component.downcast_ref::<C>().map(|c| (self.get)(c) as &dyn Any)
	}

	fn get_mut<'a>(&self, component: &'a mut dyn Any) -> Option<&'a mut dyn Any> {
		component.downcast_mut::<C>().map(|c| (self.get_mut)(c) as &mut dyn Any)
	}

	fn read_value(&self, component: &dyn Any) -> Option<Value> {
		let c = component.downcast_ref::<C>()?;
		Some((self.get)(c).clone().into_value())
	}

	fn write_value(&self, component: &mut dyn Any, value: Value) -> std::result::Result<(), Value> {
		let c = match component.downcast_mut::<C>() {
			Some(c) => c,
			None => return Err(value),
		};
		let field = (self.get_mut)(c);
		match value.kind() == V::KIND {
			true => {
				if let Some(value) = V::from_value(value) {
					*field = value;
				}
				Ok(())
			},
			false => Err(value),
		}
	}
}

/// Describes one inspectable field of a component: its metadata and how to reach it.
///
/// Built once per component type (see [ComponentInfo](crate::reflection::ComponentInfo)) and immutable afterwards.
pub struct PropertyInfo {
	index: usize,
	name: &'static str,
	title: &'static str,
	description: &'static str,
	offset: Option<usize>,
	property_type: PropertyType,
	value_type: &'static str,
	owner: &'static str,
	access: Box<dyn FieldAccess>,
}

impl PropertyInfo {
	/// Starts describing a field of `C` holding a `V`.
	/// The type tag defaults to [PropertyType::default_for] of `V`'s kind and the title to `name`.
	pub fn field<C: 'static, V: PropertyValue>(
		name: &'static str, get: fn(&C) -> &V, get_mut: fn(&mut C) -> &mut V,
	) -> Self {
		Self {
			index: 0,
			name,
			title: name,
			description: "",
			offset: None,
			property_type: PropertyType::default_for(V::KIND),
			value_type: type_name::<V>(),
			owner: type_name::<C>(),
			access: Box::new(FieldAccessor { get, get_mut }),
		}
	}

	pub fn with_title(mut self, title: &'static str) -> Self {
		self.title = title;
		self
	}

	pub fn with_description(mut self, description: &'static str) -> Self {
		self.description = description;
		self
	}

	/// Records the byte offset of the field within the component, as given by `core::mem::offset_of!`.
	pub fn with_offset(mut self, offset: usize) -> Self {
		self.offset = Some(offset);
		self
	}

	/// Overrides the type tag.
	///
	/// # Panics
	/// If the tag's storage kind does not match the field's Rust type.
	pub fn with_type(mut self, property_type: PropertyType) -> Self {
		assert!(
			property_type.accepts(self.property_type.value_kind()),
			"property '{}' of type {} cannot be tagged {:?}",
			self.name,
			self.value_type,
			property_type
		);
		self.property_type = property_type;
		self
	}

	pub(crate) fn set_index(&mut self, index: usize) {
		self.index = index;
	}

	/// Ordinal of the property within its component, in declaration order.
	pub fn index(&self) -> usize {
		self.index
	}

	/// Name of the property, unique within its component.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Display title.
	pub fn title(&self) -> &'static str {
		self.title
	}

	pub fn description(&self) -> &'static str {
		self.description
	}

	/// Byte offset of the field within the component, when recorded.
	pub fn offset(&self) -> Option<usize> {
		self.offset
	}

	pub fn property_type(&self) -> PropertyType {
		self.property_type
	}

	/// Rust type name of the stored value.
	pub fn value_type(&self) -> &'static str {
		self.value_type
	}

	/// Rust type name of the component the property belongs to.
	pub fn owner(&self) -> &'static str {
		self.owner
	}

	/// Reads the field from `component`, which must be the component type this property belongs to.
	pub fn read<V: PropertyValue>(&self, component: &dyn Any) -> Result<V> {
		self.check_kind::<V>()?;
		let field = self.access.get(component).and_then(|f| f.downcast_ref::<V>());
		field.cloned().ok_or_else(|| self.wrong_component())
	}

	/// Overwrites the field of `component`.
	pub fn write<V: PropertyValue>(&self, component: &mut dyn Any, value: V) -> Result<()> {
		self.check_kind::<V>()?;
		let wrong_component = self.wrong_component();
		let field = self.access.get_mut(component).and_then(|f| f.downcast_mut::<V>());
		match field {
			Some(field) => {
				*field = value;
				Ok(())
			},
			None => Err(wrong_component),
		}
	}

	/// Reads the field as a dynamically typed [Value].
	pub fn read_value(&self, component: &dyn Any) -> Result<Value> {
		self.access.read_value(component).ok_or_else(|| self.wrong_component())
	}

	/// Overwrites the field from a dynamically typed [Value] of the matching kind.
	pub fn write_value(&self, component: &mut dyn Any, value: Value) -> Result<()> {
		let found = value.kind();
		let expected = self.property_type.value_kind();
		if found != expected {
			return Err(EcsError::TypeMismatch {
				property: self.name,
				expected,
				found,
			});
		}
		self.access.write_value(component, value).map_err(|_| self.wrong_component())
	}

	fn check_kind<V: PropertyValue>(&self) -> Result<()> {
		match self.property_type.value_kind() == V::KIND {
			true => Ok(()),
			false => Err(self.mismatch::<V>()),
		}
	}

	fn wrong_component(&self) -> EcsError {
		EcsError::WrongComponent {
			property: self.name,
			component: self.owner,
		}
	}

	fn mismatch<V: PropertyValue>(&self) -> EcsError {
		EcsError::TypeMismatch {
			property: self.name,
			expected: self.property_type.value_kind(),
			found: V::KIND,
		}
	}
}

impl Debug for PropertyInfo {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PropertyInfo")
			.field("index", &self.index)
			.field("name", &self.name)
			.field("title", &self.title)
			.field("offset", &self.offset)
			.field("property_type", &self.property_type)
			.field("value_type", &self.value_type)
			.field("owner", &self.owner)
			.finish()
	}
}
