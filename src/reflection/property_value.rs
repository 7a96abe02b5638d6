use paste::paste;

/// A Rust type that can be stored in a reflected property.
///
/// Implemented for the fixed set of storage types listed in [ValueKind].
pub trait PropertyValue: 'static + Clone + Send + Sync {
	/// Storage kind used to type-check property access.
	const KIND: ValueKind;

	fn into_value(self) -> Value;

	fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_property_values {
    ($($variant: ident($t: ty)),* $(,)?) => {
        paste! {
            /// Storage type of a property, independent of how an inspector presents it.
            #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
            pub enum ValueKind {
                $($variant),*
            }

            /// A dynamically typed property value.
            #[derive(Clone, Debug, PartialEq)]
            pub enum Value {
                $($variant($t)),*
            }

            impl Value {
                pub fn kind(&self) -> ValueKind {
                    match self {
                        $(Value::$variant(_) => ValueKind::$variant),*
                    }
                }

                $(
                    #[doc = "Returns the contained value if this is a [Value::" $variant "]."]
                    pub fn [<as_ $variant:snake>](&self) -> Option<&$t> {
                        match self {
                            Value::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                )*
            }

            $(
                impl PropertyValue for $t {
                    const KIND: ValueKind = ValueKind::$variant;

                    fn into_value(self) -> Value {
                        Value::$variant(self)
                    }

                    fn from_value(value: Value) -> Option<Self> {
                        match value {
                            Value::$variant(value) => Some(value),
                            _ => None,
                        }
                    }
                }

                impl From<$t> for Value {
                    fn from(value: $t) -> Self {
                        Value::$variant(value)
                    }
                }
            )*
        }
    };
}

impl_property_values!(
	Bool(bool),
	Int(i32),
	Uint(u32),
	Double(f64),
	String(String),
	IntArray(Vec<i32>),
	UintArray(Vec<u32>),
	DoubleArray(Vec<f64>),
	StringArray(Vec<String>),
);

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}
