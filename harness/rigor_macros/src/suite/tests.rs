use super::*;
use syn::parse_quote;

fn expand(module: ItemMod, prefix: Option<&str>) -> syn::Result<String> {
    let prefix = prefix.map(|p| LitStr::new(p, proc_macro2::Span::call_site()));
    expand_suite_impl(module, prefix.as_ref()).map(|tokens| tokens.to_string())
}

fn expand_err(module: ItemMod) -> String {
    match expand_suite_impl(module, None) {
        Ok(tokens) => panic!("expected an error, got {tokens}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn test_cases_registered_in_order_and_markers_stripped() {
    let module: ItemMod = parse_quote! {
        mod arith {
            #[case]
            fn addition() {}

            fn helper() -> u32 { 4 }

            #[case(name = "Division")]
            fn division() {}
        }
    };

    let out = match expand(module, None) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    };

    assert!(!out.contains("# [case"), "{out}");
    assert!(out.contains("pub fn register"), "{out}");
    let addition = out.find("\"addition\"");
    let division = out.find("\"Division\"");
    assert!(matches!((addition, division), (Some(a), Some(d)) if a < d), "{out}");
    assert!(!out.contains("\"helper\""), "{out}");
}

#[test]
fn test_prefix_applied_to_every_case() {
    let module: ItemMod = parse_quote! {
        mod parser {
            #[case]
            fn empty_input() {}
            #[case(name = "Nested")]
            fn nested() {}
        }
    };

    let out = match expand(module, Some("parser")) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    };

    assert!(out.contains("\"parser::empty_input\""), "{out}");
    assert!(out.contains("\"parser::Nested\""), "{out}");
}

#[test]
fn test_suite_without_cases_still_has_register() {
    let module: ItemMod = parse_quote! {
        mod nothing {
            fn unrelated() {}
        }
    };

    let out = match expand(module, None) {
        Ok(out) => out,
        Err(err) => panic!("{err}"),
    };

    assert!(out.contains("pub fn register"), "{out}");
}

#[test]
fn test_non_inline_module_rejected() {
    let module: ItemMod = parse_quote! { mod elsewhere; };
    assert!(expand_err(module).contains("inline module"));
}

#[test]
fn test_case_with_parameters_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case]
            fn takes(x: u32) {}
        }
    };
    assert_eq!(expand_err(module), "#[case] functions cannot take parameters");
}

#[test]
fn test_generic_case_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case]
            fn generic<T: Default>() {}
        }
    };
    assert_eq!(expand_err(module), "#[case] functions cannot be generic");
}

#[test]
fn test_async_case_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case]
            async fn later() {}
        }
    };
    assert_eq!(expand_err(module), "#[case] functions cannot be async");
}

#[test]
fn test_case_on_struct_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case]
            struct NotAFunction;
        }
    };
    assert_eq!(expand_err(module), "#[case] can only be applied to functions");
}

#[test]
fn test_unknown_case_argument_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case(title = "x")]
            fn titled() {}
        }
    };
    assert!(expand_err(module).starts_with("unsupported case argument"));
}

#[test]
fn test_empty_case_name_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case(name = "")]
            fn unnamed() {}
        }
    };
    assert_eq!(expand_err(module), "case name cannot be empty");
}

#[test]
fn test_duplicate_case_names_rejected() {
    let module: ItemMod = parse_quote! {
        mod m {
            #[case(name = "same")]
            fn first() {}
            #[case(name = "same")]
            fn second() {}
        }
    };
    assert_eq!(
        expand_err(module),
        "duplicate case name `same` (also used by `first`)"
    );
}
