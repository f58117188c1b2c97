use syn::{
    parse::Parser, punctuated::Punctuated, Attribute, Expr, ExprLit, Fields, ItemStruct, Lit,
    LitStr, Meta, MetaNameValue, Token,
};

/// Arguments accepted by `#[completion_schema(name = "...", description = "...")]`.
#[derive(Default)]
pub struct SchemaArgs {
    pub name: Option<LitStr>,
    pub description: Option<LitStr>,
}

impl SchemaArgs {
    pub fn parse(attr: proc_macro::TokenStream) -> syn::Result<Self> {
        let mut args = SchemaArgs::default();
        if attr.is_empty() {
            return Ok(args);
        }

        let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated.parse(attr)?;
        for pair in pairs {
            let key = pair
                .path
                .get_ident()
                .ok_or_else(|| syn::Error::new_spanned(&pair.path, "expected identifier"))?
                .clone();

            let value = match pair.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(value),
                    ..
                }) => value,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "expected string literal value",
                    ))
                }
            };

            let slot = match key.to_string().as_str() {
                "name" => &mut args.name,
                "description" => &mut args.description,
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unsupported argument `{other}`"),
                    ))
                }
            };

            if slot.replace(value).is_some() {
                return Err(syn::Error::new(key.span(), format!("duplicate `{key}` argument")));
            }
        }

        Ok(args)
    }
}

pub fn struct_docs(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit), ..
                    }),
                ..
            }) => Some(lit.value().trim().to_string()),
            _ => None,
        })
        .collect();

    (!lines.is_empty()).then(|| lines.join("\n"))
}

pub fn field_docs(item: &ItemStruct) -> syn::Result<Vec<(String, String)>> {
    let Fields::Named(fields) = &item.fields else {
        return Ok(Vec::new());
    };

    let mut docs = Vec::new();
    for field in &fields.named {
        let (Some(ident), Some(doc)) = (field.ident.as_ref(), struct_docs(&field.attrs)) else {
            continue;
        };
        let name = wire_name(&field.attrs)?.unwrap_or_else(|| ident.to_string());
        docs.push((name, doc));
    }
    Ok(docs)
}

/// Honors `#[serde(rename = "...")]` so docs land on the property name the
/// schema actually uses.
fn wire_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") && meta.input.peek(Token![=]) {
                let value: LitStr = meta.value()?.parse()?;
                renamed = Some(value.value());
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            } else if meta.input.peek(syn::token::Paren) {
                // nested forms like `rename(serialize = "..")` or `with(..)`
                let content;
                syn::parenthesized!(content in meta.input);
                let _: proc_macro2::TokenStream = content.parse()?;
            }
            Ok(())
        })?;
    }
    Ok(renamed)
}
