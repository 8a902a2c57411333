mod config;
mod delete;
mod lookup;
mod relation;
mod table;

pub(crate) use config::{expand_config, expand_imports};

use crate::names::Names;

use dbg_core::schema::Schema;

use proc_macro2::TokenStream;

pub(crate) struct Expand<'a> {
    pub schema: &'a Schema,

    pub names: &'a Names,

    /// Path prefix for runtime types
    pub rt: TokenStream,
}
