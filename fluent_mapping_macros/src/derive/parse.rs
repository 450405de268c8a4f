//! Parsing of `#[entity(...)]` attributes and struct fields.

use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Type, Visibility};

/// A struct the derive has accepted.
pub(crate) struct EntityInput {
    pub ident: Ident,
    pub vis: Visibility,
    pub name: String,
    pub fields: Vec<EntityField>,
}

/// One mapped field.
pub(crate) struct EntityField {
    pub ident: Ident,
    pub ty: Type,
    pub name: String,
}

#[derive(Default)]
struct EntityAttrs {
    name: Option<String>,
    skip: bool,
}

/// Iterate all `#[entity(...)]` attributes and collect their settings.
fn parse_entity_attrs(attrs: &[Attribute], allow_skip: bool) -> syn::Result<EntityAttrs> {
    let mut parsed = EntityAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("entity")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                parsed.name = Some(value.value());
                Ok(())
            } else if allow_skip && meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported entity attribute"))
            }
        })?;
    }
    Ok(parsed)
}

pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<EntityInput> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Entity cannot be derived for generic structs",
        ));
    }
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Entity can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Entity requires named fields",
        ));
    };

    let struct_attrs = parse_entity_attrs(&input.attrs, false)?;
    let mut fields = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let attrs = parse_entity_attrs(&field.attrs, true)?;
        if attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "named field expected"));
        };
        let name = attrs.name.unwrap_or_else(|| unraw(&ident));
        fields.push(EntityField {
            ident,
            ty: field.ty.clone(),
            name,
        });
    }

    Ok(EntityInput {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        name: struct_attrs.name.unwrap_or_else(|| unraw(&input.ident)),
        fields,
    })
}

/// Identifier text without a leading `r#`.
fn unraw(ident: &Ident) -> String {
    let text = ident.to_string();
    text.strip_prefix("r#").map_or_else(|| text.clone(), str::to_owned)
}
