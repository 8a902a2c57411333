use super::{Schema, TableKind};
use crate::{Error, Result};

struct Verify<'a> {
    schema: &'a Schema,
}

impl Schema {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { schema: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_relations_are_reciprocal());

        self.verify_link_tables_are_related()?;
        self.verify_foreign_keys_resolve()?;
        Ok(())
    }

    fn verify_relations_are_reciprocal(&self) -> bool {
        let relations = &self.schema.relations;

        for link in &relations.links {
            let (left, right) = (&link.left.table, &link.right.table);

            assert!(relations.related(left).any(|lower| lower == link.right.lower));
            assert!(relations.related(right).any(|lower| lower == link.left.lower));
            assert!(relations.ref_table(left, right).is_some());
            assert!(relations.ref_table(right, left).is_some());
            assert_eq!(relations.lr_type(left, right), relations.lr_type(right, left));
        }

        for table in self.schema.tables() {
            for relation in table.relation.values() {
                let target = &self.schema.tables[&relation.target];
                let reverse = &target.relation[&relation.back_populates];
                assert_eq!(reverse.target, table.name);
            }
        }

        true
    }

    /// Every link table is backed by a resolved relation.
    fn verify_link_tables_are_related(&self) -> Result<()> {
        for table in self.schema.tables() {
            let TableKind::Link { left, right } = &table.kind else {
                continue;
            };

            if self.schema.relations.lr_type(left, right) != Some(table.name.as_str()) {
                return Err(Error::invalid_schema(format!(
                    "link entity `{}` is not backed by a relation",
                    table.name
                )));
            }
        }

        Ok(())
    }

    fn verify_foreign_keys_resolve(&self) -> Result<()> {
        for table in self.schema.tables() {
            for field in table.columns() {
                let Some(fk) = &field.foreign_key else {
                    continue;
                };

                let target = self.schema.table(&fk.table);

                if !target.is_some_and(|target| target.column(&fk.column).is_some()) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}.{}` references missing column `{fk}`",
                        table.name, field.name
                    )));
                }
            }
        }

        Ok(())
    }
}
