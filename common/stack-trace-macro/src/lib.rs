//! `#[stack_trace_debug]` — generates a `Debug` impl for a `snafu`-derived
//! error enum that prints the `Display` message followed by the chain of
//! `source()` causes, one per line.
//!
//! Applied above `#[derive(Snafu)]` so the enum keeps its normal derive;
//! this macro only adds a manual `Debug` impl (the enum is expected to not
//! derive `Debug` itself).

use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;
use syn::parse_macro_input;

#[proc_macro_attribute]
pub fn stack_trace_debug(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        #input

        impl #impl_generics ::std::fmt::Debug for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self)?;
                let mut cause = ::std::error::Error::source(self);
                while let Some(err) = cause {
                    write!(f, "\ncaused by: {err}")?;
                    cause = err.source();
                }
                Ok(())
            }
        }
    };

    expanded.into()
}
