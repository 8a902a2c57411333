use crate::{util, Import};

use dbg_core::{Error, Result};

use proc_macro2::TokenStream;
use quote::quote;

pub(crate) fn expand_imports(imports: &[Import]) -> Result<Vec<TokenStream>> {
    imports
        .iter()
        .map(|import| {
            let module = util::path("import module", &import.module_path())?;
            let name = util::ident(&import.name)?;

            Ok(quote! {
                use #module::#name;
            })
        })
        .collect()
}

/// The configuration lines must form a sequence of Rust items.
pub(crate) fn expand_config(lines: &[String]) -> Result<TokenStream> {
    let source = lines.join("\n");

    let file = syn::parse_file(&source)
        .map_err(|err| Error::generation(format!("invalid configuration line: {err}")))?;

    let items = &file.items;

    Ok(quote! {
        pub mod config {
            #( #items )*
        }
    })
}
