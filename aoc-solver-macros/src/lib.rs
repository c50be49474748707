//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse_macro_input, Attribute, DeriveInput, Lit, LitInt};

/// Derive `aoc_solver::Solver` by dispatching part numbers to `PartSolver<N>`
///
/// # Attributes
///
/// - `max_parts`: Required. Parts `1..=max_parts` are dispatched to
///   `<Self as PartSolver<N>>::solve`; any other part number yields
///   `SolveError::PartNotImplemented`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day5;
///
/// impl AocParser for Day5 { /* ... */ }
/// impl PartSolver<1> for Day5 { /* ... */ }
/// impl PartSolver<2> for Day5 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let attr = find_attr(input, "aoc_solver")?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("expected `max_parts = <n>`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1")),
        Some(n) => n,
        None => return Err(syn::Error::new_spanned(attr, "missing `max_parts`")),
    };

    let arms = (1..=max_parts).map(|n| {
        let n = Literal::u8_unsuffixed(n);
        quote! { #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared), }
    });
    let parts = Literal::u8_unsuffixed(max_parts);

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for registering a solver with the plugin inventory
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2023)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. String literals used for filtering (e.g., ["2023", "grid"])
///
/// The type must be a unit struct implementing `Solver`; otherwise the
/// generated trait-bound check fails to compile:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2023, day = 16, tags = ["2023", "grid"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let attr = find_attr(input, "aoc")?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            day = Some(value.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => return Err(syn::Error::new_spanned(other, "tags must be strings")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `year`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required `day`"))?;
    if !(1..=25).contains(&day) {
        return Err(syn::Error::new_spanned(attr, "`day` must be within 1..=25"));
    }

    let year = Literal::u16_unsuffixed(year);
    let day = Literal::u8_unsuffixed(day);
    let tags = tags.iter().map(String::as_str);

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}

fn find_attr<'a>(input: &'a DeriveInput, name: &str) -> syn::Result<&'a Attribute> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                format!("this derive requires a #[{name}(...)] attribute"),
            )
        })
}
