use super::*;

/// `Symbol '(' PrimaryDefList ')' '{' FieldDefList ReprDef? '}'`
#[derive(Debug)]
pub struct TableDef {
    pub ident: Ident,
    pub l_paren: LParen,
    pub primaries: Vec<FieldDef>,
    pub r_paren: RParen,
    pub l_brace: LBrace,
    pub fields: Vec<FieldDef>,
    pub repr: Option<ReprDef>,
    pub r_brace: RBrace,
}

#[derive(Debug)]
pub enum ReprDef {
    /// `repr { a, b }`
    Fields(Vec<Ident>),

    /// `repr = all`
    All,
}

impl Parse for TableDef {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("TableDef", |p| {
            let ident = p.parse()?;
            let l_paren = p.parse()?;
            let primaries = p.rule("PrimaryDefList", |p| {
                let mut primaries = vec![p.parse::<FieldDef>()?];

                while p.parse::<Option<Comma>>()?.is_some() {
                    primaries.push(p.parse()?);
                }

                Ok(primaries)
            })?;
            let r_paren = p.parse()?;

            p.skip_newlines();
            let l_brace = p.parse()?;

            let fields = parse_field_def_list(p)?;

            let repr = if p.is_next::<keyword::Repr>() {
                let repr = p.parse()?;
                p.skip_newlines();
                Some(repr)
            } else {
                None
            };

            Ok(TableDef {
                ident,
                l_paren,
                primaries,
                r_paren,
                l_brace,
                fields,
                repr,
                r_brace: p.parse()?,
            })
        })
    }
}

impl Parse for ReprDef {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("ReprDef", |p| {
            p.parse::<keyword::Repr>()?;

            if p.is_next::<Eq>() {
                p.parse::<Eq>()?;
                p.parse::<keyword::All>()?;
                return Ok(ReprDef::All);
            }

            p.parse::<LBrace>()?;
            p.skip_newlines();

            let mut symbols = vec![p.parse::<Ident>()?];

            while p.parse::<Option<Comma>>()?.is_some() {
                p.skip_newlines();
                symbols.push(p.parse()?);
            }

            p.skip_newlines();
            p.parse::<RBrace>()?;

            Ok(ReprDef::Fields(symbols))
        })
    }
}

impl TableDef {
    pub fn name(&self) -> &str {
        self.ident.as_str()
    }
}
