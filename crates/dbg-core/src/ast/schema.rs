use super::*;

/// A parsed document: newline separated statements.
#[derive(Debug)]
pub struct Schema {
    pub stmts: Vec<Stmt>,
}

#[derive(Debug)]
pub enum Stmt {
    TableDef(TableDef),
    Relation(Relation),
}

impl Parse for Schema {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        let mut stmts = vec![];

        loop {
            p.skip_newlines();

            if p.is_next::<Eof>() {
                return Ok(Schema { stmts });
            }

            stmts.push(p.parse()?);

            if !p.is_next::<Newline>() && !p.is_next::<Eof>() {
                return Err(p.error("newline after statement"));
            }
        }
    }
}

impl Parse for Stmt {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        if !p.is_next::<Ident>() {
            return Err(p.error("a table definition or a relation"));
        }

        if p.is_nth::<LParen>(1) {
            p.parse().map(Stmt::TableDef)
        } else {
            p.parse().map(Stmt::Relation)
        }
    }
}

impl Schema {
    pub fn table_defs(&self) -> impl Iterator<Item = &TableDef> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Stmt::TableDef(table_def) => Some(table_def),
            Stmt::Relation(_) => None,
        })
    }

    pub fn relations(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.stmts.iter().filter_map(|stmt| match stmt {
            Stmt::Relation(relation) => Some(relation),
            Stmt::TableDef(_) => None,
        })
    }
}
