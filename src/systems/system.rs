use crate::coordinator::Coordinator;
use crate::entities::Entity;
use std::any::Any;

/// It provides the logic for modifying the state of [Entities](crate::entities::Entity)
/// and their associated [Components](crate::components::Component).
///
/// A system sees the entities whose archetype is a superset of its
/// [required archetype](crate::coordinator::Coordinator::set_required_archetype).
pub trait System: AsAny + Send + 'static {
	/// Executes the system once.
	///
	/// # Arguments
	/// * `world` - The world the system is registered in
	/// * `entities` - The system's members at the time the run started, in ascending order
	fn run(&mut self, world: &mut Coordinator, entities: &[Entity]);
}

/// Upcast to [Any], implemented for every `'static` type so registered systems can be downcast.
pub trait AsAny {
	fn as_any(&self) -> &dyn Any;
	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}
