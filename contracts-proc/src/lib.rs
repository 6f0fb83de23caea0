//! Procedural macros for the Stylus ownership contracts.
extern crate proc_macro;
use proc_macro::TokenStream;

/// Shorthand to print nice errors.
macro_rules! error {
    ($tokens:expr, $($msg:expr),+ $(,)?) => {{
        let error = syn::Error::new(syn::spanned::Spanned::span(&$tokens), format!($($msg),+));
        return error.to_compile_error().into();
    }};
    (@ $tokens:expr, $($msg:expr),+ $(,)?) => {{
        return Err(syn::Error::new(syn::spanned::Spanned::span(&$tokens), format!($($msg),+)))
    }};
}

mod interface_id;

/// Computes the ERC-165 interface id of a contract trait.
///
/// The trait is emitted unchanged, extended with an `INTERFACE_ID` associated
/// constant holding the XOR of the Solidity selectors of every function in
/// the trait, and an `interface_id` helper returning it as fixed bytes.
///
/// Function names are converted to camelCase for selector computation; a
/// `#[selector(name = "...")]` attribute on a trait function overrides the
/// derived name.
#[proc_macro_attribute]
pub fn interface_id(attr: TokenStream, input: TokenStream) -> TokenStream {
    interface_id::interface_id(&attr, input)
}
