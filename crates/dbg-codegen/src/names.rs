use crate::util;

use dbg_core::schema::{name, ColumnType, Schema};
use dbg_core::{Error, Result};

use indexmap::IndexMap;

/// Items the generator emits next to the tables.
const GENERATED_ITEMS: &[&str] = &["DeleteScope", "Deleted", "Unlinked", "config", "lookup"];

/// Every identifier the generated code uses, resolved up front so expansion
/// itself cannot fail.
pub(crate) struct Names {
    /// Keyed by table symbol
    pub tables: IndexMap<String, TableNames>,

    /// Enumeration type symbol → type name
    pub enums: IndexMap<String, syn::Ident>,

    /// Relation-delete procedures in emission order
    pub relation_deletes: Vec<RelationDelete>,
}

pub(crate) struct TableNames {
    pub struct_name: syn::Ident,

    /// Entity-delete procedure
    pub delete_fn: syn::Ident,

    /// Column name → struct field
    pub fields: IndexMap<String, syn::Ident>,

    /// Relation name → accessor method
    pub accessors: IndexMap<String, syn::Ident>,
}

/// A directed (managing, deleted) pair of the relation graph.
pub(crate) struct RelationDelete {
    /// Table whose row is being deleted
    pub managing: String,

    /// Lowercase name of the related table, as stored in `RelationSpec`
    pub lower: String,

    /// Related table symbol
    pub deleted: String,

    /// Link entity symbol
    pub link: String,

    /// Accessor on `managing` listing its link rows
    pub ref_accessor: String,

    /// Accessor on the link row yielding the deleted side, present only if
    /// `managing` owns it
    pub owned_accessor: Option<String>,

    pub fn_name: syn::Ident,
}

impl Names {
    pub(crate) fn from_schema(schema: &Schema) -> Result<Names> {
        let mut tables = IndexMap::new();
        let mut enums = IndexMap::new();
        let mut procedures = IndexMap::new();

        for table in schema.tables() {
            if GENERATED_ITEMS.contains(&table.name.as_str()) {
                return Err(Error::generation(format!(
                    "table `{}` collides with a generated item of the same name",
                    table.name
                )));
            }

            let delete_fn = ident!("delete_{}", table.table_name)?;
            insert_procedure(&mut procedures, &delete_fn, &table.name)?;

            let mut fields = IndexMap::new();

            for field in table.columns() {
                fields.insert(field.name.clone(), util::ident(&field.name)?);

                if let ColumnType::Enum(symbol) = &field.ty {
                    if !enums.contains_key(symbol) {
                        enums.insert(symbol.clone(), util::ident(symbol)?);
                    }
                }
            }

            let mut accessors = IndexMap::new();

            for relation in table.relation.keys() {
                accessors.insert(relation.clone(), util::ident(relation)?);
            }

            let names = TableNames {
                struct_name: util::ident(&table.name)?,
                delete_fn,
                fields,
                accessors,
            };

            tables.insert(table.name.clone(), names);
        }

        let mut relation_deletes = vec![];

        for managing in schema.tables() {
            for lower in schema.relations.related(&managing.name) {
                let relation_delete = RelationDelete::resolve(schema, &managing.name, lower)?;
                insert_procedure(
                    &mut procedures,
                    &relation_delete.fn_name,
                    &format!("{} - {}", managing.name, relation_delete.deleted),
                )?;
                relation_deletes.push(relation_delete);
            }
        }

        Ok(Names {
            tables,
            enums,
            relation_deletes,
        })
    }
}

impl RelationDelete {
    fn resolve(schema: &Schema, managing: &str, lower: &str) -> Result<RelationDelete> {
        let relations = &schema.relations;

        let unresolved = |what: &str| {
            Error::generation(format!(
                "relation from `{managing}` to `{lower}` has no {what}"
            ))
        };

        let deleted = schema
            .resolve(lower)
            .ok_or_else(|| {
                Error::generation(format!(
                    "relation target `{lower}` of `{managing}` is not a table"
                ))
            })?
            .name
            .clone();

        let link = relations
            .lr_type(managing, &deleted)
            .filter(|link| schema.table(link).is_some())
            .ok_or_else(|| unresolved("link entity"))?
            .to_string();

        let ref_accessor = relations
            .ref_table(managing, &deleted)
            .filter(|accessor| schema.tables[managing].relation.contains_key(*accessor))
            .ok_or_else(|| unresolved("collection accessor"))?
            .to_string();

        let owned_accessor = match relations.destruction(managing, &deleted) {
            Some(accessor) if schema.tables[&link].relation.contains_key(accessor) => {
                Some(accessor.to_string())
            }
            Some(_) => return Err(unresolved("accessor for the owned side")),
            None => None,
        };

        let fn_name = ident!("delete_{lower}_from_{}", name::lower(managing))?;

        Ok(RelationDelete {
            managing: managing.to_string(),
            lower: lower.to_string(),
            deleted,
            link,
            ref_accessor,
            owned_accessor,
            fn_name,
        })
    }
}

fn insert_procedure(
    procedures: &mut IndexMap<String, String>,
    name: &syn::Ident,
    origin: &str,
) -> Result<()> {
    let name = name.to_string();

    if let Some(existing) = procedures.get(&name) {
        return Err(Error::generation(format!(
            "procedure `{name}` generated for both `{existing}` and `{origin}`"
        )));
    }

    procedures.insert(name, origin.to_string());
    Ok(())
}
