//! `#[suite]` attribute implementation.
//!
//! Strips the `#[case]` markers from an inline module and appends a
//! `register` function that hands each marked function to a `TestsRegistry`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, Attribute, Ident, Item, ItemFn, ItemMod, LitStr};

/// Main entry point for the suite attribute.
pub fn expand_suite(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut prefix: Option<LitStr> = None;
    let args = syn::meta::parser(|meta| {
        if meta.path.is_ident("prefix") {
            prefix = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported suite argument; expected `prefix = \"...\"`"))
        }
    });
    parse_macro_input!(attr with args);

    let module = parse_macro_input!(item as ItemMod);

    match expand_suite_impl(module, prefix.as_ref()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// A `#[case]` function found in the module.
struct Case {
    ident: Ident,
    name: String,
}

fn expand_suite_impl(mut module: ItemMod, prefix: Option<&LitStr>) -> syn::Result<TokenStream2> {
    let Some((brace, mut items)) = module.content.take() else {
        return Err(syn::Error::new_spanned(
            &module,
            "#[suite] requires an inline module (`mod name { ... }`)",
        ));
    };

    let mut cases = Vec::new();
    for item in items.iter_mut() {
        match item {
            Item::Fn(func) => {
                if let Some(case) = take_case(func)? {
                    cases.push(case);
                }
            }
            other => {
                if let Some(attr) = item_attrs(other).iter().find(|a| is_case(a)) {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "#[case] can only be applied to functions",
                    ));
                }
            }
        }
    }

    for (i, case) in cases.iter().enumerate() {
        if let Some(earlier) = cases[..i].iter().find(|c| c.name == case.name) {
            return Err(syn::Error::new(
                case.ident.span(),
                format!(
                    "duplicate case name `{}` (also used by `{}`)",
                    case.name, earlier.ident
                ),
            ));
        }
    }

    let registrations = cases.iter().map(|case| {
        let ident = &case.ident;
        let name = match prefix {
            Some(prefix) => format!("{}::{}", prefix.value(), case.name),
            None => case.name.clone(),
        };
        // Spanned so `line!()` resolves to the case function, not the module.
        let location = quote_spanned! {ident.span()=>
            ::rigor::Location::new(::core::file!(), ::core::line!())
        };
        quote! {
            registry.register(#name, #location, #ident)?;
        }
    });

    let register: Item = syn::parse_quote! {
        /// Register every case of this suite, in declaration order.
        pub fn register(
            registry: &::rigor::TestsRegistry,
        ) -> ::core::result::Result<(), ::rigor::RegistryError> {
            #(#registrations)*
            ::core::result::Result::Ok(())
        }
    };
    items.push(register);
    module.content = Some((brace, items));

    Ok(quote! { #module })
}

fn is_case(attr: &Attribute) -> bool {
    attr.path().is_ident("case")
}

/// Remove the `#[case]` attribute from `func`, validating its signature.
fn take_case(func: &mut ItemFn) -> syn::Result<Option<Case>> {
    let Some(position) = func.attrs.iter().position(is_case) else {
        return Ok(None);
    };
    let attr = func.attrs.remove(position);

    let mut name: Option<LitStr> = None;
    match &attr.meta {
        syn::Meta::Path(_) => {}
        syn::Meta::List(_) => {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    name = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported case argument; expected `name = \"...\"`"))
                }
            })?;
        }
        syn::Meta::NameValue(meta) => {
            return Err(syn::Error::new_spanned(
                meta,
                "expected `#[case]` or `#[case(name = \"...\")]`",
            ));
        }
    }

    let sig = &func.sig;
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "#[case] functions cannot be async",
        ));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "#[case] functions cannot be generic",
        ));
    }
    if !sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            "#[case] functions cannot take parameters",
        ));
    }

    let name = match name {
        Some(lit) if lit.value().is_empty() => {
            return Err(syn::Error::new_spanned(lit, "case name cannot be empty"));
        }
        Some(lit) => lit.value(),
        None => sig.ident.to_string(),
    };

    Ok(Some(Case {
        ident: sig.ident.clone(),
        name,
    }))
}

/// Attributes of the non-function items `#[case]` might be misplaced on.
fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::ExternCrate(i) => &i.attrs,
        Item::ForeignMod(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Macro(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::TraitAlias(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Union(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

#[cfg(test)]
mod tests;
