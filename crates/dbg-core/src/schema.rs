mod builder;
pub(crate) use builder::Builder;

mod field;
pub use field::{ColumnType, Field, ForeignKey};

pub mod name;

mod relation;
pub use relation::{Cardinality, Endpoint, Link, Ownership, RelationGraph};

mod table;
pub use table::{Relationship, Repr, Table, TableKind};

mod verify;

use crate::{ast, Result};

use indexmap::IndexMap;

/// The resolved schema model: every table, declared or synthesized, and the
/// relation/ownership graph between them.
///
/// Built once per compilation and read-only afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    /// Tables in declaration order. A link entity takes the position of the
    /// relation statement that introduced it.
    pub tables: IndexMap<String, Table>,

    pub relations: RelationGraph,
}

pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Schema> {
    use anyhow::Context;
    use std::{fs, str};

    let path = path.as_ref();
    let contents = fs::read(path).with_context(|| {
        let path = path.canonicalize().unwrap_or(path.into());
        format!("Failed to read schema file from path {}", path.display())
    })?;
    let contents = str::from_utf8(&contents)?;

    from_str(contents)
}

pub fn from_str(source: &str) -> Result<Schema> {
    let schema = crate::ast::from_str(source)?;

    tracing::debug!(statements = schema.stmts.len(), "parsed schema document");

    let schema = Schema::from_ast(&schema)?;
    Ok(schema)
}

impl Schema {
    /// Get a table by its symbol
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.tables.values()
    }

    /// Resolve a lowercase relation name (as stored in `RelationSpec`) to
    /// the declared table.
    pub fn resolve(&self, lower: &str) -> Option<&Table> {
        self.relations
            .resolve(lower)
            .and_then(|name| self.tables.get(name))
    }

    pub(crate) fn from_ast(ast: &ast::Schema) -> Result<Schema> {
        Builder::default().from_ast(ast)
    }
}
