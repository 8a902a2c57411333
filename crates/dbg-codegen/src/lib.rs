//! Renders a dbglang [`Schema`] as Rust source targeting a persistence
//! runtime.

#[macro_use]
mod util;

mod config;
pub use config::{Config, Import, DEFAULT_RUNTIME};

mod expand;
use expand::Expand;

mod names;
use names::Names;

mod out;
pub use out::{Output, TableOutput};

use dbg_core::{schema::Schema, Result};

use quote::quote;

/// Generate Rust code for a schema.
///
/// Fails without producing output if any generated name cannot be
/// represented or any relation does not resolve.
pub fn generate(schema: &Schema, config: &Config) -> Result<Output> {
    // Compute every identifier up front
    let names = Names::from_schema(schema)?;

    let rt = util::path("runtime path", config.runtime_path())?;
    let imports = expand::expand_imports(config.imports())?;
    let config_mod = expand::expand_config(config.lines())?;

    for symbol in names.enums.keys() {
        if !config.imports().iter().any(|import| import.name == *symbol) {
            tracing::warn!(symbol = %symbol, "enumeration type is not imported");
        }
    }

    let expand = Expand {
        schema,
        names: &names,
        rt: quote!(#rt),
    };

    let tables = schema
        .tables()
        .map(|table| TableOutput {
            name: table.name.clone(),
            body: expand.expand_table(table),
        })
        .collect::<Vec<_>>();

    let mut procedures = vec![expand.expand_delete_support()];
    procedures.extend(schema.tables().map(|table| expand.expand_entity_delete(table)));
    procedures.extend(
        names
            .relation_deletes
            .iter()
            .map(|relation| expand.expand_relation_delete(relation)),
    );

    tracing::debug!(
        tables = tables.len(),
        procedures = procedures.len() - 1,
        "generated schema code"
    );

    Ok(Output {
        imports,
        config: config_mod,
        tables,
        procedures,
        lookup: expand.expand_lookup(),
    })
}
