use syn::{Attribute, Lit, LitStr, Meta, NestedMeta, Result};

#[derive(Default)]
pub struct ComponentAttributes {
    pub name: Option<LitStr>,
    pub description: Option<LitStr>,
}

#[derive(Default)]
pub struct PropertyAttributes {
    pub title: Option<LitStr>,
    pub description: Option<LitStr>,
    pub kind: Option<LitStr>,
    pub skip: bool,
}

impl ComponentAttributes {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut result = Self::default();
        for meta in nested_metas(attrs, "component")? {
            match meta {
                Meta::NameValue(nv) if nv.path.is_ident("name") => result.name = Some(string(&nv.lit)?),
                Meta::NameValue(nv) if nv.path.is_ident("description") => {
                    result.description = Some(string(&nv.lit)?)
                }
                other => return Err(syn::Error::new_spanned(other, "expected `name` or `description`")),
            }
        }
        Ok(result)
    }
}

impl PropertyAttributes {
    pub fn parse(attrs: &[Attribute]) -> Result<Self> {
        let mut result = Self::default();
        for meta in nested_metas(attrs, "property")? {
            match meta {
                Meta::Path(path) if path.is_ident("skip") => result.skip = true,
                Meta::NameValue(nv) if nv.path.is_ident("title") => result.title = Some(string(&nv.lit)?),
                Meta::NameValue(nv) if nv.path.is_ident("description") => {
                    result.description = Some(string(&nv.lit)?)
                }
                Meta::NameValue(nv) if nv.path.is_ident("kind") => result.kind = Some(string(&nv.lit)?),
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected `title`, `description`, `kind` or `skip`",
                    ))
                }
            }
        }
        Ok(result)
    }
}

fn nested_metas(attrs: &[Attribute], name: &str) -> Result<Vec<Meta>> {
    let mut metas = Vec::new();
    for attr in attrs.iter().filter(|a| a.path.is_ident(name)) {
        match attr.parse_meta()? {
            Meta::List(list) => {
                for nested in list.nested {
                    match nested {
                        NestedMeta::Meta(meta) => metas.push(meta),
                        NestedMeta::Lit(lit) => return Err(syn::Error::new_spanned(lit, "unexpected literal")),
                    }
                }
            }
            other => return Err(syn::Error::new_spanned(other, format!("expected `#[{}(...)]`", name))),
        }
    }
    Ok(metas)
}

fn string(lit: &Lit) -> Result<LitStr> {
    match lit {
        Lit::Str(s) => Ok(s.clone()),
        other => Err(syn::Error::new_spanned(other, "expected a string literal")),
    }
}
