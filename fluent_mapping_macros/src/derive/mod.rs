//! Expansion of the `Entity` derive.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let entity = parse::parse_input(input)?;
    Ok(generate::entity_impl(&entity))
}
