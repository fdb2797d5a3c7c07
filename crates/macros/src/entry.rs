use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Ident, ItemFn, LitStr, Token};

/// Arguments to the attribute, on the form `input = "d01.txt", expect =
/// (1448, 1471)`.
struct Arguments {
    input: LitStr,
    expect: Expr,
}

impl Parse for Arguments {
    fn parse(stream: ParseStream<'_>) -> syn::Result<Self> {
        let mut input = None;
        let mut expect = None;

        while !stream.is_empty() {
            let name = stream.parse::<Ident>()?;
            stream.parse::<Token![=]>()?;

            if name == "input" {
                input = Some(stream.parse::<LitStr>()?);
            } else if name == "expect" {
                expect = Some(stream.parse::<Expr>()?);
            } else {
                return Err(syn::Error::new(
                    name.span(),
                    format_args!("unsupported option `{name}`"),
                ));
            }

            if stream.is_empty() {
                break;
            }

            stream.parse::<Token![,]>()?;
        }

        let Some(input) = input else {
            return Err(syn::Error::new(
                Span::call_site(),
                "missing `input = \"..\"` option",
            ));
        };

        let Some(expect) = expect else {
            return Err(syn::Error::new(
                Span::call_site(),
                "missing `expect = ..` option",
            ));
        };

        Ok(Self { input, expect })
    }
}

pub(crate) fn expand(args: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let Arguments { input, expect } = syn::parse2(args)?;

    let solver = syn::parse2::<ItemFn>(item)?;

    if solver.sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &solver.sig.inputs,
            "function must take exactly one input argument",
        ));
    }

    if solver.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            &solver.sig.fn_token,
            "function must not be async",
        ));
    }

    if solver.sig.ident == "main" {
        return Err(syn::Error::new_spanned(
            &solver.sig.ident,
            "function must not be named `main`, a main function is generated",
        ));
    }

    let name = solver.sig.ident.clone();

    Ok(quote! {
        #solver

        fn main() -> ::lib::macro_support::Result<()> {
            let opts = ::lib::cli::Opts::parse()?;
            let (input, path) = ::lib::input!(#input);
            let expected = #expect;

            match opts.mode {
                ::lib::cli::Mode::Default => {
                    let value = match #name(input) {
                        Ok(value) => value,
                        Err(error) => return Err(::lib::cli::error_context(path, input, error)),
                    };

                    ::lib::cli::report_answers(&opts, &value)?;

                    assert!(
                        ::lib::cli::OutputEq::output_eq(&value, &expected),
                        "{:?} (value) != {:?} (expected)",
                        value,
                        expected
                    );
                }
                ::lib::cli::Mode::Bench => {
                    let mut b = ::lib::cli::Bencher::new();
                    b.iter(&opts, Some(expected), || #name(input))?;
                }
            }

            Ok(())
        }
    })
}
