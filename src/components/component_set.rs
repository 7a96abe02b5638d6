use crate::components::Component;
use std::any::{type_name, TypeId};

/// A static list of [Component] types, implemented for tuples of up to 12 components.
/// Used to build [archetypes](crate::archetypes::Archetype) from types rather than ids.
pub trait ComponentSet {
	/// Push the `(TypeId, type name)` of every member into `out`.
	fn collect_types(out: &mut Vec<(TypeId, &'static str)>);
}

impl ComponentSet for () {
	fn collect_types(_: &mut Vec<(TypeId, &'static str)>) {}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        impl <$($t: Component),*> ComponentSet for ($($t,)*) {
            fn collect_types(out: &mut Vec<(TypeId, &'static str)>) {
                $(out.push((TypeId::of::<$t>(), type_name::<$t>()));)*
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
