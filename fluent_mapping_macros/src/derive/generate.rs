//! Token generation for the `Entity` derive.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::EntityInput;

pub(crate) fn entity_impl(entity: &EntityInput) -> TokenStream {
    let EntityInput {
        ident,
        vis,
        name,
        fields,
    } = entity;
    let properties_ident = format_ident!("{}Properties", ident);
    let struct_doc = format!("Typed property handles for [`{ident}`].");

    let field_decls = fields.iter().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        let doc = format!("Handle for the `{}` property.", field.name);
        quote! {
            #[doc = #doc]
            #vis #field_ident: ::fluent_mapping::Property<#ident, #ty>
        }
    });
    let field_inits = fields.iter().map(|field| {
        let field_ident = &field.ident;
        let property_name = &field.name;
        quote! { #field_ident: ::fluent_mapping::Property::new(#property_name) }
    });

    quote! {
        #[doc = #struct_doc]
        #[derive(Clone, Copy, Debug)]
        // `expect` would fail whenever every handle is read, so this stays `allow`.
        #[allow(dead_code, reason = "handles exist for every mapped field")]
        #vis struct #properties_ident {
            #( #field_decls, )*
        }

        impl ::fluent_mapping::Entity for #ident {
            const NAME: &'static str = #name;
            type Properties = #properties_ident;

            fn properties() -> Self::Properties {
                #properties_ident {
                    #( #field_inits, )*
                }
            }
        }

        impl ::fluent_mapping::Referenced for #ident {
            type Target = Self;
        }
    }
}
