/// Build the [Archetype](crate::archetypes::Archetype) of a list of registered component types
/// in the specified [Coordinator](crate::coordinator::Coordinator).
///
/// Evaluates to a `Result`, failing if any of the types is not registered.
///
/// ```ignore
/// let required = archetype!(ecs, [Position, Velocity])?;
/// ```
#[macro_export]
macro_rules! archetype {
	($ecs: expr, [$($t: ty),* $(,)?]) => {
		$ecs.archetype_of::<($($t,)*)>()
	};
}
