use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, BinOp, Data, DeriveInput, Expr, Fields, Lit, LitFloat, UnOp, parse_macro_input,
    spanned::Spanned,
};

/// Tolerance for the expansion-time sum check, matching the table builder's.
const SUM_TOLERANCE: f64 = 1e-9;

/// Variant attribute: #[probability(<expr>)]
///
/// Derives `vose_alias::VoseEnum` for a fieldless enum, turning each
/// variant's annotated probability into an entry of the generated
/// `ENTRIES` table.
///
/// When every annotation is built from numeric literals (the usual case),
/// the sum-to-1 requirement is enforced right here, so a miswritten
/// distribution fails to compile instead of erroring at the first
/// `vose()` call. Annotations that mention consts or other non-literal
/// expressions are left to the runtime check in `VoseAlias::from_dist`.
#[proc_macro_derive(VoseEnum, attributes(probability))]
pub fn derive_vose_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(
            input.ident.span(),
            "VoseEnum can only be derived for enums",
        )
        .to_compile_error()
        .into();
    };

    // Collect (variant_ident, probability_expr)
    let mut entries = Vec::new();
    // Literal-folded values, for the expansion-time sum check. Goes to None
    // as soon as one annotation is not constant-foldable.
    let mut folded: Option<Vec<f64>> = Some(Vec::new());

    for variant in &data_enum.variants {
        // Only fieldless enums make sense as sample outcomes
        match &variant.fields {
            Fields::Unit => {}
            _ => {
                return syn::Error::new(
                    variant.span(),
                    "VoseEnum only supports fieldless variants",
                )
                .to_compile_error()
                .into();
            }
        }

        // Find #[probability(...)]
        let mut prob_expr: Option<Expr> = None;
        for Attribute { meta, .. } in &variant.attrs {
            if meta.path().is_ident("probability") {
                match meta {
                    syn::Meta::List(list) => {
                        // Parse inside as an expression (e.g., 1.0/6.0 or 1/6)
                        match syn::parse2::<Expr>(list.tokens.clone()) {
                            Ok(e) => prob_expr = Some(e),
                            Err(e) => {
                                return syn::Error::new(
                                    list.span(),
                                    format!("invalid probability expr: {e}"),
                                )
                                .to_compile_error()
                                .into();
                            }
                        }
                    }
                    _ => {
                        return syn::Error::new(meta.span(), "use #[probability(<expr>)]")
                            .to_compile_error()
                            .into();
                    }
                }
            }
        }
        let Some(expr) = prob_expr else {
            return syn::Error::new(variant.span(), "missing #[probability(...)] on variant")
                .to_compile_error()
                .into();
        };

        if let Some(p) = fold_literal(&expr) {
            if p < 0.0 {
                return syn::Error::new(expr.span(), format!("negative probability: {p}"))
                    .to_compile_error()
                    .into();
            }
            if let Some(values) = folded.as_mut() {
                values.push(p);
            }
        } else {
            folded = None;
        }

        let ident = &variant.ident;

        // Upgrade integer literals to floats so 1/6 => 1.0/6.0
        let expr_f64 = to_f64_expr(expr);

        entries.push(quote! { (Self::#ident, (#expr_f64)) });
    }

    if let Some(values) = folded {
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return syn::Error::new(
                enum_ident.span(),
                format!("variant probabilities sum to {sum}, not 1"),
            )
            .to_compile_error()
            .into();
        }
    }

    // Generate const ENTRIES and a vose() inherent as sugar.
    let expanded = quote! {
        impl vose_alias::VoseEnum for #enum_ident {
            const ENTRIES: &'static [(Self, f64)] = &[
                #(#entries),*
            ];
        }

        impl #enum_ident {
            /// Build a `VoseAlias<#enum_ident>` from annotated probabilities.
            pub fn vose() -> ::core::result::Result<vose_alias::VoseAlias<Self>, vose_alias::VoseError>
            where
                Self: Copy
            {
                <Self as vose_alias::VoseEnum>::vose()
            }
        }
    };

    expanded.into()
}

/// Evaluate an annotation made only of numeric literals, `+ - * /`,
/// negation, and parentheses. Integer division is treated as float
/// division, mirroring [`to_f64_expr`]. Anything else (consts, fn calls)
/// yields `None` and defers validation to runtime.
fn fold_literal(e: &Expr) -> Option<f64> {
    match e {
        Expr::Lit(el) => match &el.lit {
            Lit::Float(f) => f.base10_parse().ok(),
            Lit::Int(i) => i.base10_parse::<f64>().ok(),
            _ => None,
        },
        Expr::Binary(b) => {
            let left = fold_literal(&b.left)?;
            let right = fold_literal(&b.right)?;
            match b.op {
                BinOp::Add(_) => Some(left + right),
                BinOp::Sub(_) => Some(left - right),
                BinOp::Mul(_) => Some(left * right),
                BinOp::Div(_) => Some(left / right),
                _ => None,
            }
        }
        Expr::Unary(u) => match u.op {
            UnOp::Neg(_) => Some(-fold_literal(&u.expr)?),
            _ => None,
        },
        Expr::Paren(p) => fold_literal(&p.expr),
        Expr::Group(g) => fold_literal(&g.expr),
        _ => None,
    }
}

/// Recursively rewrite integer literals to floating-point (e.g., 1 -> 1.0),
/// so that expressions like `1/6` use FP division.
fn to_f64_expr(mut e: Expr) -> Expr {
    match e {
        Expr::Lit(ref mut el) => {
            if let Lit::Int(int) = &el.lit {
                // 1 -> 1.0 (preserve span)
                let s = format!("{}.0", int.base10_digits());
                el.lit = Lit::Float(LitFloat::new(&s, int.span()));
            }
            e
        }
        Expr::Binary(mut b) => {
            b.left = Box::new(to_f64_expr(*b.left));
            b.right = Box::new(to_f64_expr(*b.right));
            Expr::Binary(b)
        }
        Expr::Paren(mut p) => {
            p.expr = Box::new(to_f64_expr(*p.expr));
            Expr::Paren(p)
        }
        Expr::Unary(mut u) => {
            u.expr = Box::new(to_f64_expr(*u.expr));
            Expr::Unary(u)
        }
        Expr::Group(mut g) => {
            g.expr = Box::new(to_f64_expr(*g.expr));
            Expr::Group(g)
        }
        _ => e,
    }
}
