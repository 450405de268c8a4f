//! Procedural macros for `fluent_mapping`.
//!
//! The [`Entity`] derive implements `fluent_mapping::Entity` for a struct
//! with named fields and generates a companion `<Name>Properties` struct
//! holding one typed `Property` handle per field. Mapping closures receive
//! that struct, so property names are checked by the compiler instead of
//! being spelled as strings.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `fluent_mapping::Entity`.
///
/// Supported attributes:
///
/// * `#[entity(name = "...")]` on the struct overrides the mapped entity name;
/// * `#[entity(name = "...")]` on a field overrides the property name;
/// * `#[entity(skip)]` on a field leaves it out of the property handles.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
