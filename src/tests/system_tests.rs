use crate::prelude::*;
use crate::tests::{init_logging, Label, Position, Velocity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashMap};

#[derive(Default)]
struct Movement {
	runs: usize,
	visited: usize,
}

impl System for Movement {
	fn run(&mut self, world: &mut Coordinator, entities: &[Entity]) {
		self.runs += 1;
		for entity in entities {
			let velocity = world.get_component::<Velocity>(*entity).unwrap().clone();
			let position = world.get_component_mut::<Position>(*entity).unwrap();
			position.x += velocity.x;
			position.y += velocity.y;
			position.z += velocity.z;
			self.visited += 1;
		}
	}
}

/// Strips the velocity of every entity it sees.
struct Brake;

impl System for Brake {
	fn run(&mut self, world: &mut Coordinator, entities: &[Entity]) {
		for entity in entities {
			world.remove_component::<Velocity>(*entity).unwrap();
		}
	}
}

fn world() -> (Coordinator, Archetype) {
	init_logging();
	let mut ecs = Coordinator::new();
	ecs.register_component::<Position>().unwrap();
	ecs.register_component::<Velocity>().unwrap();
	ecs.register_component::<Label>().unwrap();
	let archetype = archetype!(ecs, [Position, Velocity]).unwrap();
	(ecs, archetype)
}

#[test]
pub fn membership_follows_archetypes() {
	let (mut ecs, archetype) = world();
	ecs.register_system(Movement::default()).unwrap();
	ecs.set_required_archetype::<Movement>(archetype).unwrap();
	assert_eq!(ecs.required_archetype::<Movement>().unwrap(), archetype);

	let entity = ecs.create_entity().unwrap();
	ecs.add_component(entity, Position::default()).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 0);

	ecs.add_component(entity, Velocity { x: 1.0, y: 0.0, z: 0.0 }).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().collect::<Vec<_>>(), [entity]);

	ecs.add_component(entity, Label::default()).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 1, "Supersets still match");

	ecs.remove_component::<Position>(entity).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 0);

	ecs.add_component(entity, Position::default()).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 1);

	ecs.destroy_entity(entity).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 0);
}

#[test]
pub fn empty_requirement_matches_everything() {
	let (mut ecs, _) = world();
	let existing = ecs.create_entity().unwrap();

	let handle = ecs.register_system(Brake).unwrap();
	assert_eq!(ecs.required_archetype::<Brake>().unwrap(), Archetype::EMPTY);
	assert_eq!(ecs.handle_entities(handle).collect::<Vec<_>>(), [existing]);

	let created = ecs.create_entity().unwrap();
	assert_eq!(ecs.handle_entities(handle).collect::<Vec<_>>(), [existing, created]);
}

#[test]
pub fn requirement_changes_recompute_membership() {
	let (mut ecs, archetype) = world();
	let moving = ecs.create_entity().unwrap();
	let still = ecs.create_entity().unwrap();
	ecs.add_component(moving, Position::default()).unwrap();
	ecs.add_component(moving, Velocity::default()).unwrap();
	ecs.add_component(still, Position::default()).unwrap();

	ecs.register_system(Movement::default()).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().count(), 2);

	ecs.set_required_archetype::<Movement>(archetype).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().collect::<Vec<_>>(), [moving]);

	let position = ecs.component_id::<Position>().unwrap();
	ecs.set_required_archetype::<Movement>(Archetype::from_ids(&[position])).unwrap();
	assert_eq!(ecs.system_entities::<Movement>().unwrap().collect::<Vec<_>>(), [moving, still]);
}

#[test]
pub fn registration_errors() {
	let (mut ecs, archetype) = world();
	ecs.register_system(Brake).unwrap();
	assert!(matches!(ecs.register_system(Brake), Err(EcsError::AlreadyRegistered(_))));
	assert!(matches!(
		ecs.set_required_archetype::<Movement>(archetype),
		Err(EcsError::SystemNotRegistered(_))
	));
	assert!(matches!(ecs.system_entities::<Movement>(), Err(EcsError::SystemNotRegistered(_))));
	assert!(matches!(ecs.system::<Movement>(), Err(EcsError::SystemNotRegistered(_))));
}

#[test]
pub fn running_systems() {
	let (mut ecs, archetype) = world();
	let handle = ecs.register_system(Movement::default()).unwrap();
	ecs.set_required_archetype::<Movement>(archetype).unwrap();
	ecs.register_system(Brake).unwrap();
	ecs.set_required_archetype::<Brake>(archetype).unwrap();

	let entities: Vec<Entity> = (0..4).map(|_| ecs.create_entity().unwrap()).collect();
	for (i, entity) in entities.iter().enumerate() {
		ecs.add_component(*entity, Position::default()).unwrap();
		if i % 2 == 0 {
			ecs.add_component(*entity, Velocity { x: 1.0, y: 2.0, z: 3.0 }).unwrap();
		}
	}

	ecs.run_systems();
	assert_eq!(ecs.get_component::<Position>(entities[0]).unwrap(), &Position { x: 1.0, y: 2.0, z: 3.0 });
	assert_eq!(ecs.get_component::<Position>(entities[1]).unwrap(), &Position::default());
	assert_eq!(ecs.handle_entities(handle).count(), 0, "Brake removed every velocity");

	ecs.run_systems();
	let movement = ecs.system::<Movement>().unwrap();
	assert_eq!(movement.runs, 2);
	assert_eq!(movement.visited, 2);

	ecs.system_mut::<Movement>().unwrap().runs = 0;
	assert_eq!(ecs.system::<Movement>().unwrap().runs, 0);
}

#[test]
pub fn randomized_membership() {
	let (mut ecs, archetype) = world();
	ecs.register_system(Movement::default()).unwrap();
	ecs.set_required_archetype::<Movement>(archetype).unwrap();

	let mut rng = StdRng::seed_from_u64(0x5eed);
	let mut model: HashMap<Entity, (bool, bool)> = HashMap::new();

	for _ in 0..2000 {
		let mut alive: Vec<Entity> = model.keys().copied().collect();
		alive.sort();
		let target = match alive.is_empty() {
			true => None,
			false => Some(alive[rng.gen_range(0..alive.len())]),
		};

		match (rng.gen_range(0..6), target) {
			(0, _) | (_, None) => {
				if let Ok(entity) = ecs.create_entity() {
					model.insert(entity, (false, false));
				}
			},
			(1, Some(entity)) => {
				ecs.destroy_entity(entity).unwrap();
				model.remove(&entity);
			},
			(2, Some(entity)) => {
				ecs.add_component(entity, Position::default()).unwrap();
				model.get_mut(&entity).unwrap().0 = true;
			},
			(3, Some(entity)) => {
				ecs.add_component(entity, Velocity::default()).unwrap();
				model.get_mut(&entity).unwrap().1 = true;
			},
			(4, Some(entity)) => {
				let result = ecs.remove_component::<Position>(entity);
				assert_eq!(result.is_ok(), model[&entity].0);
				model.get_mut(&entity).unwrap().0 = false;
			},
			(_, Some(entity)) => {
				let result = ecs.remove_component::<Velocity>(entity);
				assert_eq!(result.is_ok(), model[&entity].1);
				model.get_mut(&entity).unwrap().1 = false;
			},
		}

		let expected: BTreeSet<Entity> =
			model.iter().filter(|(_, (p, v))| *p && *v).map(|(entity, _)| *entity).collect();
		let actual: BTreeSet<Entity> = ecs.system_entities::<Movement>().unwrap().collect();
		assert_eq!(expected, actual);
	}

	assert_eq!(ecs.entity_count(), model.len());
	for (entity, (position, velocity)) in model {
		assert_eq!(ecs.has_component::<Position>(entity).unwrap(), position);
		assert_eq!(ecs.has_component::<Velocity>(entity).unwrap(), velocity);
	}
}
