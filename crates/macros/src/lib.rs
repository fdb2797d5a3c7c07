use proc_macro::TokenStream;

mod entry;

/// Generate the entry point of a solution.
///
/// The annotated function takes the input to solve over and the generated
/// main handles argument parsing, reading the input file, reporting answers
/// and benchmarking.
///
/// ```ignore
/// use lib::prelude::*;
///
/// #[entry(input = "d01.txt", expect = (1448, 1471))]
/// fn solve(mut input: Input) -> Result<(u32, u32)> {
///     Ok((0, 0))
/// }
/// ```
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item: TokenStream) -> TokenStream {
    entry::expand(args.into(), item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
