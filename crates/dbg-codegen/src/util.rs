use dbg_core::{Error, Result};

use proc_macro2::{Span, TokenStream};
use quote::quote;

/// Identifiers that cannot be written even as raw identifiers.
const UNRAWABLE: &[&str] = &["self", "Self", "super", "crate"];

/// Builds an identifier, escaping keywords as raw identifiers.
pub(crate) fn ident(name: &str) -> Result<syn::Ident> {
    if syn::parse_str::<syn::Ident>(name).is_ok() {
        return Ok(syn::Ident::new(name, Span::call_site()));
    }

    if UNRAWABLE.contains(&name) || syn::parse_str::<syn::Ident>(&format!("r#{name}")).is_err() {
        return Err(Error::generation(format!(
            "`{name}` cannot be used as a Rust identifier"
        )));
    }

    Ok(syn::Ident::new_raw(name, Span::call_site()))
}

macro_rules! ident {
    ( $($t:tt)* ) => {
        $crate::util::ident(&format!( $($t)* ))
    }
}

pub(crate) fn path(what: &str, src: &str) -> Result<syn::Path> {
    syn::parse_str(src)
        .map_err(|err| Error::generation(format!("invalid {what} `{src}`: {err}")))
}

pub(crate) fn opt_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value)),
        None => quote!(::std::option::Option::None),
    }
}
