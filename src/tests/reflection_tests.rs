use crate::prelude::*;
use crate::reflection::{self, component_info, ReflectionRegistry};
use crate::tests::{init_logging, Label, Position};
use std::mem::offset_of;

#[derive(Component, Clone, Debug, Default)]
#[component(name = "Sprite", description = "A textured quad")]
struct Sprite {
	#[property(kind = "PointF")]
	anchor: Vec<f64>,
	#[property(kind = "Color", title = "Tint")]
	tint: u32,
	#[property(skip)]
	#[allow(dead_code)]
	cache: Vec<u8>,
	#[property(kind = "DoubleAngle")]
	rotation: f64,
	tags: Vec<String>,
}

/// Described by hand instead of through the derive.
#[derive(Clone, Default)]
struct Health {
	current: i32,
	maximum: i32,
}

impl Component for Health {
	fn describe() -> ComponentInfo {
		ComponentInfo::builder::<Self>("Health")
			.property(PropertyInfo::field::<Self, i32>("current", |h| &h.current, |h| &mut h.current))
			.property(
				PropertyInfo::field::<Self, i32>("maximum", |h| &h.maximum, |h| &mut h.maximum)
					.with_title("Maximum health")
					.with_type(PropertyType::IntPositive),
			)
			.build()
	}
}

#[test]
pub fn derived_metadata() {
	let info = component_info::<Position>();
	assert_eq!(info.name(), "Position");
	assert_eq!(info.description(), "Location in world space");
	assert_eq!(info.type_id(), std::any::TypeId::of::<Position>());

	let names: Vec<&str> = info.properties().iter().map(|p| p.name()).collect();
	assert_eq!(names, ["x", "y", "z"]);

	for (i, property) in info.properties().iter().enumerate() {
		assert_eq!(property.index(), i);
		assert_eq!(property.property_type(), PropertyType::Double);
	}

	let y = info.property("y").unwrap();
	assert_eq!(y.title(), "Y");
	assert_eq!(y.offset(), Some(offset_of!(Position, y)));
	assert_eq!(y.value_type(), "f64");
}

#[test]
pub fn attributes_override_defaults() {
	let info = component_info::<Sprite>();
	assert_eq!(info.description(), "A textured quad");
	assert_eq!(info.properties().len(), 4, "Skipped fields are not reflected");

	let tint = info.property(1usize).unwrap();
	assert_eq!(tint.name(), "tint");
	assert_eq!(tint.title(), "Tint");
	assert_eq!(tint.property_type(), PropertyType::Color);
	assert_eq!(tint.offset(), Some(offset_of!(Sprite, tint)));

	assert_eq!(info.property("anchor").unwrap().property_type(), PropertyType::PointF);
	assert_eq!(info.property("rotation").unwrap().property_type(), PropertyType::DoubleAngle);
	assert_eq!(info.property("tags").unwrap().property_type(), PropertyType::ArrayString);
	assert!(matches!(info.property("cache"), Err(EcsError::PropertyNameNotFound { .. })));

	let label = component_info::<Label>();
	let text = label.property("text").unwrap();
	assert_eq!(text.title(), "Text");
	assert_eq!(text.description(), "Shown above the entity");
	assert_eq!(label.property("priority").unwrap().property_type(), PropertyType::IntPositive);
	assert_eq!(label.property("visible").unwrap().title(), "Visible");
}

#[test]
pub fn metadata_is_cached() {
	let first = component_info::<Health>() as *const ComponentInfo;
	let second = component_info::<Health>() as *const ComponentInfo;
	assert_eq!(first, second);

	let info = component_info::<Health>();
	assert_eq!(info.property("maximum").unwrap().title(), "Maximum health");
	assert_eq!(info.property("current").unwrap().offset(), None);
}

#[test]
pub fn world_property_access() {
	init_logging();
	let mut ecs = Coordinator::new();
	let position = ecs.register_component::<Position>().unwrap();
	let entity = ecs.create_entity().unwrap();
	ecs.add_component(entity, Position { x: 1.0, y: 2.0, z: 3.0 }).unwrap();

	assert_eq!(ecs.get_property::<f64>(entity, position, "z").unwrap(), 3.0);
	assert_eq!(ecs.get_property::<f64>(entity, position, 0usize).unwrap(), 1.0);

	ecs.set_property(entity, position, "y", 7.5).unwrap();
	ecs.set_property(entity, position, PropertyKey::Index(2), -1.0).unwrap();
	assert_eq!(ecs.get_component::<Position>(entity).unwrap(), &Position { x: 1.0, y: 7.5, z: -1.0 });

	let metadata = ecs.component_metadata(position).unwrap();
	assert_eq!(metadata.name(), "Position");
	assert_eq!(ecs.property_metadata(position, "x").unwrap().index(), 0);
}

#[test]
pub fn property_errors() {
	let mut ecs = Coordinator::new();
	let position = ecs.register_component::<Position>().unwrap();
	let label = ecs.register_component::<Label>().unwrap();
	let entity = ecs.create_entity().unwrap();
	ecs.add_component(entity, Position::default()).unwrap();

	assert_eq!(
		ecs.get_property::<i32>(entity, position, "x"),
		Err(EcsError::TypeMismatch {
			property: "x",
			expected: ValueKind::Double,
			found: ValueKind::Int,
		})
	);
	assert_eq!(
		ecs.set_property(entity, position, "x", String::from("far")),
		Err(EcsError::TypeMismatch {
			property: "x",
			expected: ValueKind::Double,
			found: ValueKind::String,
		})
	);
	assert_eq!(
		ecs.get_property::<f64>(entity, position, 3usize),
		Err(EcsError::PropertyIndexOutOfRange {
			component: "Position",
			index: 3,
			count: 3,
		})
	);
	assert_eq!(
		ecs.get_property::<f64>(entity, position, "w"),
		Err(EcsError::PropertyNameNotFound {
			component: "Position",
			name: "w".into(),
		})
	);
	assert_eq!(
		ecs.get_property::<bool>(entity, label, "visible"),
		Err(EcsError::ComponentNotPresent { entity, component: "Label" })
	);

	let unknown = ComponentId::from_index(9);
	assert_eq!(ecs.get_property::<f64>(entity, unknown, "x"), Err(EcsError::UnknownComponentKind(unknown)));
	assert!(matches!(ecs.component_metadata(unknown), Err(EcsError::UnknownComponentKind(_))));

	// The failed writes left the value untouched.
	assert_eq!(ecs.get_component::<Position>(entity).unwrap(), &Position::default());
}

#[test]
pub fn dynamic_values() {
	let mut ecs = Coordinator::new();
	let label = ecs.register_component::<Label>().unwrap();
	let entity = ecs.create_entity().unwrap();
	ecs.add_component(entity, Label { text: "crate".into(), visible: true, priority: 4 }).unwrap();

	let text = ecs.get_property_value(entity, label, "text").unwrap();
	assert_eq!(text, Value::String("crate".into()));
	assert_eq!(text.kind(), ValueKind::String);
	assert_eq!(text.as_string().map(String::as_str), Some("crate"));
	assert_eq!(text.as_bool(), None);

	ecs.set_property_value(entity, label, "text", "barrel".into()).unwrap();
	ecs.set_property_value(entity, label, "priority", Value::Int(9)).unwrap();
	assert_eq!(ecs.get_property::<String>(entity, label, "text").unwrap(), "barrel");
	assert_eq!(ecs.get_property::<i32>(entity, label, "priority").unwrap(), 9);

	assert_eq!(
		ecs.set_property_value(entity, label, "visible", Value::Uint(1)),
		Err(EcsError::TypeMismatch {
			property: "visible",
			expected: ValueKind::Bool,
			found: ValueKind::Uint,
		})
	);
	assert!(ecs.get_property::<bool>(entity, label, "visible").unwrap());
}

#[test]
pub fn detached_instances() {
	let mut sprite = Sprite {
		anchor: vec![0.5, 0.5],
		tags: vec!["ui".into()],
		..Default::default()
	};

	let anchor: Vec<f64> = reflection::get_property(&sprite, "anchor").unwrap();
	assert_eq!(anchor, [0.5, 0.5]);

	reflection::set_property(&mut sprite, "rotation", 90.0).unwrap();
	reflection::set_property(&mut sprite, "tint", 0xff00ffu32).unwrap();
	reflection::set_property(&mut sprite, "tags", vec![String::from("hud")]).unwrap();
	assert_eq!(sprite.rotation, 90.0);
	assert_eq!(sprite.tint, 0xff00ff);
	assert_eq!(sprite.tags, ["hud"]);

	let property = reflection::property_info::<Sprite>("tint").unwrap();
	assert_eq!(property.read_value(&sprite).unwrap().as_uint(), Some(&0xff00ff));

	let mut health = Health { current: 3, maximum: 10 };
	reflection::set_property(&mut health, "current", 7).unwrap();
	assert_eq!(health.current, 7);
	assert!(matches!(
		reflection::get_property::<f64, _>(&health, "current"),
		Err(EcsError::TypeMismatch { .. })
	));
}

#[test]
pub fn reading_through_the_wrong_component() {
	let property = reflection::property_info::<Position>("x").unwrap();
	let mut health = Health::default();
	let wrong_component = EcsError::WrongComponent {
		property: "x",
		component: std::any::type_name::<Position>(),
	};
	assert_eq!(property.owner(), std::any::type_name::<Position>());

	assert_eq!(property.read::<f64>(&health), Err(wrong_component.clone()));
	assert_eq!(property.read_value(&health), Err(wrong_component.clone()));
	assert_eq!(property.write(&mut health, 1.0), Err(wrong_component.clone()));
	assert_eq!(property.write_value(&mut health, Value::Double(1.0)), Err(wrong_component));
	assert_eq!(
		property.write_value(&mut health, Value::Int(1)),
		Err(EcsError::TypeMismatch {
			property: "x",
			expected: ValueKind::Double,
			found: ValueKind::Int,
		})
	);
	assert_eq!(health.current, 0);
}

#[test]
pub fn registry_reads_type_erased_components() {
	let mut ecs = Coordinator::new();
	let position = ecs.register_component::<Position>().unwrap();
	let entity = ecs.create_entity().unwrap();
	ecs.add_component(entity, Position { x: 1.0, y: 2.0, z: 3.0 }).unwrap();

	let mut value = ecs.get_component::<Position>(entity).unwrap().clone();
	let mut registry = ReflectionRegistry::new();
	registry.register::<Position>(position);

	assert_eq!(registry.get::<f64>(&value, position, "y").unwrap(), 2.0);
	registry.set(&mut value, position, 2usize, 6.0).unwrap();
	assert_eq!(registry.get_value(&value, position, "z").unwrap(), Value::Double(6.0));
	registry.set_value(&mut value, position, "x", Value::Double(-1.0)).unwrap();
	assert_eq!(value, Position { x: -1.0, y: 2.0, z: 6.0 });
	assert!(matches!(
		registry.get::<f64>(&value, ComponentId::from_index(4), "x"),
		Err(EcsError::UnknownComponentKind(_))
	));
}

#[test]
pub fn property_type_numbers() {
	for (i, property_type) in PropertyType::ALL.iter().enumerate() {
		assert_eq!(property_type.number() as usize, i + 1);
		assert_eq!(PropertyType::from_number(property_type.number()), Some(*property_type));
	}
	assert_eq!(PropertyType::from_number(0), None);
	assert_eq!(PropertyType::from_number(33), None);
	assert_eq!(PropertyType::from_number(13), Some(PropertyType::DoubleAngle));
	assert_eq!(PropertyType::Image.value_kind(), ValueKind::Int);
	assert_eq!(PropertyType::PositiveSizeF.value_kind(), ValueKind::DoubleArray);
	assert_eq!(PropertyType::default_for(ValueKind::Uint), PropertyType::Color);
	assert!(PropertyType::DoubleAngle.accepts(ValueKind::Double));
	assert!(PropertyType::Color.accepts(ValueKind::Uint));
	assert!(!PropertyType::String.accepts(ValueKind::Double));
	assert!(!PropertyType::PointF.accepts(ValueKind::IntArray));
}

#[test]
#[should_panic]
pub fn tag_must_match_storage() {
	let _ = PropertyInfo::field::<Position, f64>("x", |p| &p.x, |p| &mut p.x).with_type(PropertyType::String);
}

#[test]
#[should_panic]
pub fn duplicate_property_names() {
	let _ = ComponentInfo::builder::<Position>("Position")
		.property(PropertyInfo::field::<Position, f64>("x", |p| &p.x, |p| &mut p.x))
		.property(PropertyInfo::field::<Position, f64>("x", |p| &p.y, |p| &mut p.y))
		.build();
}
