use super::Field;

use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct Table {
    /// Symbol as declared, or the concatenated endpoint symbols for a link
    pub name: String,

    /// Storage name, snake_case of the symbol
    pub table_name: String,

    pub kind: TableKind,

    /// Primary key fields in declaration order
    pub primary: IndexMap<String, Field>,

    /// Ordinary fields in declaration order
    pub field: IndexMap<String, Field>,

    /// Relation accessors keyed by accessor name
    pub relation: IndexMap<String, Relationship>,

    pub repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableKind {
    /// Declared by a table definition
    Declared,

    /// Synthesized for the relation `left - right`
    Link { left: String, right: String },
}

/// Accessor traversing one hop of a relation.
///
/// Declared tables get a collection accessor listing the link rows that
/// reference them; link tables get a single-valued accessor per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Symbol of the table the accessor yields
    pub target: String,

    /// True for collection accessors
    pub many: bool,

    /// Link column joining the two sides
    pub column: String,

    /// Name of the accessor traversing back
    pub back_populates: String,
}

/// Fields rendered by the table's textual representation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Repr {
    pub fields: Vec<String>,
}

impl Table {
    pub fn is_link(&self) -> bool {
        matches!(self.kind, TableKind::Link { .. })
    }

    /// Primary then ordinary fields, in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = &Field> + '_ {
        self.primary.values().chain(self.field.values())
    }

    pub fn column(&self, name: &str) -> Option<&Field> {
        self.primary.get(name).or_else(|| self.field.get(name))
    }

    /// Returns `true` if rows can be addressed by a non-null integer `id`
    /// primary key, which link columns refer to.
    pub fn has_integer_id(&self) -> bool {
        self.primary
            .get("id")
            .is_some_and(|field| field.ty.is_integer() && !field.nullable)
    }
}

impl Repr {
    pub(crate) fn all(table: &Table) -> Repr {
        Repr {
            fields: table.columns().map(|field| field.name.clone()).collect(),
        }
    }
}
