//! Procedural macros for `vibe-guide`.
//!
//! `#[completion_schema]` turns a response struct into a `CompletionSchema`
//! provider: the schemars-derived JSON Schema is built once, decorated with the
//! struct's doc comments and cached behind a `OnceLock`.

mod attributes;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{parse_macro_input, spanned::Spanned, ItemStruct, LitStr};

use crate::attributes::{field_docs, struct_docs, SchemaArgs};

#[proc_macro_attribute]
pub fn completion_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match SchemaArgs::parse(attr) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };

    let item_struct = parse_macro_input!(item as ItemStruct);

    if let Err(err) = check_shape(&item_struct) {
        return err.to_compile_error().into();
    }

    let ident = &item_struct.ident;
    let type_name = LitStr::new(&ident.to_string(), Span::call_site());
    let schema_name = args.name.unwrap_or_else(|| type_name.clone());

    let description = args
        .description
        .or_else(|| struct_docs(&item_struct.attrs).map(|doc| LitStr::new(&doc, Span::call_site())));
    let description_tokens = match description {
        Some(lit) => quote! { Some(#lit) },
        None => quote! { None },
    };

    let field_docs = match field_docs(&item_struct) {
        Ok(docs) => docs,
        Err(err) => return err.to_compile_error().into(),
    };
    let field_doc_tokens = field_docs.into_iter().map(|(field, doc)| {
        let field = LitStr::new(&field, Span::call_site());
        let doc = LitStr::new(&doc, Span::call_site());
        quote! { (#field, #doc) }
    });

    let expanded = quote! {
        #item_struct

        impl vibe_guide::schema::CompletionSchema for #ident {
            fn schema() -> &'static vibe_guide::schema::SchemaHandle {
                static HANDLE: std::sync::OnceLock<vibe_guide::schema::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    let mut root = schemars::schema_for!(Self);
                    vibe_guide::schema::apply_doc_comments(
                        &mut root,
                        #schema_name,
                        #description_tokens,
                        &[#(#field_doc_tokens),*],
                    );
                    vibe_guide::schema::SchemaHandle::from_root_schema::<Self>(
                        #schema_name,
                        #type_name,
                        root,
                    )
                })
            }
        }
    };

    expanded.into()
}

fn check_shape(item: &ItemStruct) -> syn::Result<()> {
    if !matches!(item.fields, syn::Fields::Named(_)) {
        return Err(syn::Error::new(
            item.struct_token.span(),
            "`#[completion_schema]` only supports structs with named fields",
        ));
    }

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "`#[completion_schema]` does not support generic structs",
        ));
    }

    Ok(())
}
