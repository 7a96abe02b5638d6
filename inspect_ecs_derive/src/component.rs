use crate::attributes::{ComponentAttributes, PropertyAttributes};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, Result};

pub fn impl_component(ast: &DeriveInput) -> Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields: Vec<&Field> = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(fields, "components must use named fields"))
            }
        },
        _ => return Err(syn::Error::new_spanned(name, "only structs can derive Component")),
    };

    let attributes = ComponentAttributes::parse(&ast.attrs)?;
    let display_name = attributes
        .name
        .unwrap_or_else(|| LitStr::new(&name.to_string(), name.span()));
    let description = attributes
        .description
        .map(|d| quote!(.description(#d)));

    let mut properties = Vec::new();
    let mut kind_checks = Vec::new();
    for field in fields {
        let attributes = PropertyAttributes::parse(&field.attrs)?;
        if attributes.skip {
            continue;
        }

        let ident = match &field.ident {
            Some(ident) => ident,
            None => continue,
        };
        let ty = &field.ty;
        let field_name = LitStr::new(&ident.to_string(), ident.span());
        let title = attributes
            .title
            .unwrap_or_else(|| LitStr::new(&title_case(&ident.to_string()), ident.span()));
        let description = attributes
            .description
            .map(|d| quote!(.with_description(#d)));
        let kind = attributes.kind.map(|k| {
            let variant = Ident::new(&k.value(), k.span());
            // Field types of generic components may name type parameters; those are checked at registration.
            if ast.generics.params.is_empty() {
                let message = LitStr::new(
                    &format!("property `{}` of {} cannot be tagged {}", ident, name, k.value()),
                    k.span(),
                );
                kind_checks.push(quote! {
                    const _: () = assert!(
                        inspect_ecs::reflection::PropertyType::#variant
                            .accepts(<#ty as inspect_ecs::reflection::PropertyValue>::KIND),
                        #message
                    );
                });
            }
            quote!(.with_type(inspect_ecs::reflection::PropertyType::#variant))
        });

        properties.push(quote! {
            .property(
                inspect_ecs::reflection::PropertyInfo::field::<Self, #ty>(#field_name, |c| &c.#ident, |c| &mut c.#ident)
                    .with_title(#title)
                    #description
                    .with_offset(::core::mem::offset_of!(Self, #ident))
                    #kind
            )
        });
    }

    Ok(quote! {
        #(#kind_checks)*

        impl #impl_generics inspect_ecs::components::Component for #name #ty_generics #where_clause {
            fn describe() -> inspect_ecs::reflection::ComponentInfo {
                inspect_ecs::reflection::ComponentInfo::builder::<Self>(#display_name)
                    #description
                    #(#properties)*
                    .build()
            }
        }
    })
}

/// `max_speed` becomes `Max Speed`.
fn title_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
