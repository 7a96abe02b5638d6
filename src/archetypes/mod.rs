//! [Archetypes](Archetype) are bit sets of [component kinds](crate::components::Component).
//!
//! Every [entity](crate::entities::Entity) carries the archetype of the components it currently owns,
//! and every [system](crate::systems::System) declares the archetype it requires.

mod archetype;
mod archetype_macros;

pub use archetype::Archetype;
