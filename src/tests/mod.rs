mod reflection_tests;
mod system_tests;

use crate::prelude::*;

pub(crate) fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
#[component(name = "Position", description = "Location in world space")]
pub(crate) struct Position {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub(crate) struct Velocity {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

#[derive(Component, Clone, Debug, Default, PartialEq)]
#[component(name = "Label")]
pub(crate) struct Label {
	#[property(title = "Text", description = "Shown above the entity")]
	pub text: String,
	pub visible: bool,
	#[property(kind = "IntPositive")]
	pub priority: i32,
}
