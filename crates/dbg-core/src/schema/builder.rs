use super::{
    name, Cardinality, ColumnType, Endpoint, Field, ForeignKey, Link, RelationGraph,
    Relationship, Repr, Schema, Table, TableKind,
};
use crate::{ast, Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub(crate) struct Builder {
    tables: IndexMap<String, Table>,
    relations: RelationGraph,
}

impl Builder {
    pub(crate) fn from_ast(mut self, ast: &ast::Schema) -> Result<Schema> {
        // Tables and link entities are registered in statement order so the
        // model keeps the document's layout.
        for stmt in &ast.stmts {
            match stmt {
                ast::Stmt::TableDef(table_def) => self.build_table(table_def)?,
                ast::Stmt::Relation(relation) => self.build_link_table(relation)?,
            }
        }

        // Endpoints are resolved once every table is known, so a relation may
        // precede the tables it names.
        for relation in ast.relations() {
            self.build_relation(relation)?;
        }

        tracing::debug!(
            tables = self.tables.len(),
            relations = self.relations.links.len(),
            "built schema model"
        );

        let schema = Schema {
            tables: self.tables,
            relations: self.relations,
        };

        schema.verify()?;

        Ok(schema)
    }

    fn build_table(&mut self, table_def: &ast::TableDef) -> Result<()> {
        let name = table_def.name();

        if self.tables.contains_key(name) {
            return Err(Error::invalid_schema(format!("duplicate table `{name}`")));
        }

        if let Some(existing) = self.relations.register(name) {
            return Err(Error::invalid_schema(format!(
                "tables `{existing}` and `{name}` differ only in case"
            )));
        }

        let mut table = Table {
            name: name.to_string(),
            table_name: name::storage_name(name),
            kind: TableKind::Declared,
            primary: IndexMap::new(),
            field: IndexMap::new(),
            relation: IndexMap::new(),
            repr: Repr::default(),
        };

        for field_def in &table_def.primaries {
            let mut field = build_type(name, field_def)?;

            if field.nullable {
                return Err(Error::invalid_schema(format!(
                    "primary key `{name}.{}` cannot be nullable",
                    field.name
                )));
            }

            field.primary_key = true;
            insert_field(&mut table, field)?;
        }

        for field_def in &table_def.fields {
            let field = build_type(name, field_def)?;
            insert_field(&mut table, field)?;
        }

        table.repr = match &table_def.repr {
            None | Some(ast::ReprDef::All) => Repr::all(&table),
            Some(ast::ReprDef::Fields(idents)) => {
                let mut fields = vec![];

                for ident in idents {
                    if table.column(ident.as_str()).is_none() {
                        return Err(Error::invalid_schema(format!(
                            "repr of `{name}` names unknown field `{ident}`"
                        )));
                    }

                    fields.push(ident.to_string());
                }

                Repr { fields }
            }
        };

        self.tables.insert(name.to_string(), table);
        Ok(())
    }

    /// Synthesizes the link entity for a relation. Endpoints are not
    /// resolved yet.
    fn build_link_table(&mut self, relation: &ast::Relation) -> Result<()> {
        let left = relation.left.ident.as_str();
        let right = relation.right.ident.as_str();

        let lleft = name::lower(left);
        let lright = name::lower(right);

        if lleft == lright {
            return Err(Error::invalid_schema(format!(
                "relation `{left} - {right}` relates a table to itself"
            )));
        }

        let link_name = name::link_name(left, right);

        if self.tables.contains_key(&link_name) {
            return Err(Error::invalid_schema(format!(
                "link entity `{link_name}` of relation `{left} - {right}` collides with an existing table"
            )));
        }

        let mut table = Table {
            name: link_name.clone(),
            table_name: name::storage_name(&link_name),
            kind: TableKind::Link {
                left: left.to_string(),
                right: right.to_string(),
            },
            primary: IndexMap::new(),
            field: IndexMap::new(),
            relation: IndexMap::new(),
            repr: Repr::default(),
        };

        for (lower, target) in [(&lleft, left), (&lright, right)] {
            let mut field = Field::new(name::key_column(lower), ColumnType::Integer);
            field.primary_key = true;
            field.foreign_key = Some(ForeignKey {
                table: target.to_string(),
                table_name: name::storage_name(target),
                column: "id".to_string(),
            });
            insert_field(&mut table, field)?;
        }

        for field_def in &relation.fields {
            let field = build_type(&link_name, field_def)?;
            insert_field(&mut table, field)?;
        }

        table.repr = Repr::all(&table);

        self.tables.insert(link_name, table);
        Ok(())
    }

    fn build_relation(&mut self, relation: &ast::Relation) -> Result<()> {
        let left = self.endpoint(relation, &relation.left, relation.left_marker.count)?;
        let right = self.endpoint(relation, &relation.right, relation.right_marker.count)?;

        if let Some(existing) = self.relations.lr_type(&left.table, &right.table) {
            return Err(Error::invalid_schema(format!(
                "`{}` and `{}` are already related through `{existing}`",
                left.table, right.table
            )));
        }

        let link = Link {
            name: name::link_name(&left.table, &right.table),
            left,
            right,
        };

        self.attach_accessors(&link);
        self.relations.insert(link);

        Ok(())
    }

    fn endpoint(
        &self,
        relation: &ast::Relation,
        symbol: &ast::WeightedSymbol,
        count: usize,
    ) -> Result<Endpoint> {
        let name = symbol.ident.as_str();

        let Some(table) = self.tables.get(name).filter(|table| !table.is_link()) else {
            return Err(Error::invalid_schema(format!(
                "relation `{} - {}` references undeclared table `{name}`",
                relation.left.ident, relation.right.ident
            )));
        };

        if !table.has_integer_id() {
            return Err(Error::invalid_schema(format!(
                "table `{name}` is related to other tables but has no non-nullable integer `id` primary key"
            )));
        }

        Ok(Endpoint {
            table: name.to_string(),
            lower: name::lower(name),
            weight: symbol.weight,
            cardinality: Cardinality::from_count(count),
        })
    }

    /// Single-valued accessors on the link row to each side and collection
    /// accessors on each side to the link rows.
    fn attach_accessors(&mut self, link: &Link) {
        let (left, right) = (&link.left, &link.right);
        let ref_left = name::ref_name(&left.lower);
        let ref_right = name::ref_name(&right.lower);

        let link_table = &mut self.tables[&link.name];

        for (side, ref_name) in [(left, &ref_right), (right, &ref_left)] {
            link_table.relation.insert(
                side.lower.clone(),
                Relationship {
                    target: side.table.clone(),
                    many: false,
                    column: name::key_column(&side.lower),
                    back_populates: ref_name.clone(),
                },
            );
        }

        for (side, ref_name) in [(left, &ref_right), (right, &ref_left)] {
            self.tables[&side.table].relation.insert(
                ref_name.clone(),
                Relationship {
                    target: link.name.clone(),
                    many: true,
                    column: name::key_column(&side.lower),
                    back_populates: side.lower.clone(),
                },
            );
        }
    }
}

fn build_type(table: &str, field_def: &ast::FieldDef) -> Result<Field> {
    let name = field_def.ident.as_str();
    let ty = &field_def.ty;

    let mut field = Field::new(name, ColumnType::from_symbol(ty.ident.as_str()));
    let mut sequence = false;

    for option in &ty.options {
        let (flag, mark) = match option {
            ast::TypeOption::Nullable(_) => (&mut field.nullable, '?'),
            ast::TypeOption::Unique(_) => (&mut field.unique, '!'),
            ast::TypeOption::Sequence(_) => (&mut sequence, '~'),
        };

        if *flag {
            return Err(Error::invalid_schema(format!(
                "option `{mark}` repeated on field `{table}.{name}`"
            )));
        }

        *flag = true;
    }

    if sequence {
        if field.nullable {
            return Err(Error::invalid_schema(format!(
                "field `{table}.{name}` requests a sequence but is nullable"
            )));
        }

        if !field.ty.is_integer() {
            return Err(Error::invalid_schema(format!(
                "field `{table}.{name}` requests a sequence but has type `{}`",
                field.ty
            )));
        }

        field.sequence = Some(name::sequence_name(table));
    }

    field.default = ty.default.as_ref().map(|default| default.text.clone());

    Ok(field)
}

fn insert_field(table: &mut Table, field: Field) -> Result<()> {
    if table.column(&field.name).is_some() {
        return Err(Error::invalid_schema(format!(
            "duplicate field `{}` in table `{}`",
            field.name, table.name
        )));
    }

    let fields = if field.primary_key {
        &mut table.primary
    } else {
        &mut table.field
    };

    fields.insert(field.name.clone(), field);
    Ok(())
}
