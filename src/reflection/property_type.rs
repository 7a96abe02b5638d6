use crate::reflection::ValueKind;

/// Semantic type tag of a reflected property.
///
/// The tag tells inspectors how to present the value (a spin box, a slider, a color picker...)
/// and fixes its storage [ValueKind]. Discriminants are persisted by collaborators and must never change.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PropertyType {
	/// `bool`.
	Bool = 1,
	/// `Vec<i32>`: enabled flag, value, min, max, step.
	BoolInt = 2,
	/// `Vec<f64>`: enabled flag, value, min, max, step.
	BoolDouble = 3,
	/// `Vec<u32>`: enabled flag, color.
	BoolColor = 4,

	/// `i32`.
	Int = 5,
	/// `i32`, at least 0.
	IntPositive = 6,
	/// `Vec<i32>`: value, min, max, step.
	IntRanged = 7,
	/// `Vec<i32>`: value, min, max, step, shown with a slider.
	IntSlider = 8,

	/// `f64`.
	Double = 9,
	/// `f64`, at least 0.0.
	DoublePositive = 10,
	/// `Vec<f64>`: value, min, max, step.
	DoubleRanged = 11,
	/// `Vec<f64>`: value, min, max, step, shown with a slider.
	DoubleSlider = 12,
	/// `f64` in degrees.
	DoubleAngle = 13,
	/// `f64` from 0.0 to 100.0.
	DoublePercent = 14,

	/// `Vec<i32>`: x, y.
	Point = 15,
	/// `Vec<f64>`: x, y.
	PointF = 16,
	/// `Vec<f64>`: x, y, z.
	Point3D = 17,
	/// `Vec<f64>`: x, y, variation.
	Variable2D = 18,
	/// `Vec<f64>`: x, y, z, variation.
	Variable3D = 19,

	/// `Vec<f64>`: x, y of an object position.
	PositionF = 20,
	/// `Vec<f64>`: x, y with a fine step.
	ScaleF = 21,
	/// `Vec<f64>`: x, y, both at least 0.0.
	PositiveScaleF = 22,
	/// `Vec<f64>`: width, height.
	SizeF = 23,
	/// `Vec<f64>`: width, height, both at least 0.0.
	PositiveSizeF = 24,

	/// Single line `String`.
	String = 25,
	/// Multi-line `String`.
	Textbox = 26,

	/// `i32` index into an enumerated list.
	List = 27,
	/// `Vec<i32>`.
	ArrayInt = 28,
	/// `Vec<f64>`.
	ArrayDouble = 29,
	/// `Vec<String>`.
	ArrayString = 30,

	/// `u32` packed RGBA color.
	Color = 31,
	/// `i32` key of an image asset.
	Image = 32,
}

impl PropertyType {
	pub const ALL: [PropertyType; 32] = {
		use PropertyType::*;
		[
			Bool, BoolInt, BoolDouble, BoolColor, Int, IntPositive, IntRanged, IntSlider, Double,
			DoublePositive, DoubleRanged, DoubleSlider, DoubleAngle, DoublePercent, Point, PointF,
			Point3D, Variable2D, Variable3D, PositionF, ScaleF, PositiveScaleF, SizeF, PositiveSizeF,
			String, Textbox, List, ArrayInt, ArrayDouble, ArrayString, Color, Image,
		]
	};

	/// The storage kind every property of this type uses.
	pub const fn value_kind(self) -> ValueKind {
		use PropertyType::*;
		match self {
			Bool => ValueKind::Bool,
			Int | IntPositive | List | Image => ValueKind::Int,
			Color => ValueKind::Uint,
			Double | DoublePositive | DoubleAngle | DoublePercent => ValueKind::Double,
			String | Textbox => ValueKind::String,
			BoolInt | IntRanged | IntSlider | Point | ArrayInt => ValueKind::IntArray,
			BoolColor => ValueKind::UintArray,
			BoolDouble | DoubleRanged | DoubleSlider | PointF | Point3D | Variable2D | Variable3D
			| PositionF | ScaleF | PositiveScaleF | SizeF | PositiveSizeF | ArrayDouble => ValueKind::DoubleArray,
			ArrayString => ValueKind::StringArray,
		}
	}

	/// Checks whether a field stored as `kind` can carry this tag.
	pub const fn accepts(self, kind: ValueKind) -> bool {
		self.value_kind() as u8 == kind as u8
	}

	/// Tag assumed for a field of the given storage kind when none is declared.
	pub const fn default_for(kind: ValueKind) -> PropertyType {
		match kind {
			ValueKind::Bool => PropertyType::Bool,
			ValueKind::Int => PropertyType::Int,
			ValueKind::Uint => PropertyType::Color,
			ValueKind::Double => PropertyType::Double,
			ValueKind::String => PropertyType::String,
			ValueKind::IntArray => PropertyType::ArrayInt,
			ValueKind::UintArray => PropertyType::BoolColor,
			ValueKind::DoubleArray => PropertyType::ArrayDouble,
			ValueKind::StringArray => PropertyType::ArrayString,
		}
	}

	/// Persisted tag number.
	pub const fn number(self) -> u8 {
		self as u8
	}

	/// Looks up a tag by its persisted number.
	pub fn from_number(number: u8) -> Option<PropertyType> {
		Self::ALL.iter().copied().find(|t| t.number() == number)
	}
}
