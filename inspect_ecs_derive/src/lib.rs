mod attributes;
mod component;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implements `inspect_ecs::components::Component`, describing every named field as a property.
///
/// Struct attribute: `#[component(name = "...", description = "...")]`.
/// Field attribute: `#[property(title = "...", description = "...", kind = "DoubleAngle")]`,
/// or `#[property(skip)]` to leave the field out of the property table.
#[proc_macro_derive(Component, attributes(component, property))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    component::impl_component(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
