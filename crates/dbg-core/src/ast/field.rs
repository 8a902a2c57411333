use super::*;

/// `Symbol ':' Type`
#[derive(Debug)]
pub struct FieldDef {
    pub ident: Ident,
    pub colon: Colon,
    pub ty: Type,
}

impl Parse for FieldDef {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("FieldDef", |p| {
            Ok(FieldDef {
                ident: p.parse()?,
                colon: p.parse()?,
                ty: p.parse()?,
            })
        })
    }
}

/// Returns `true` if the next tokens start a field definition (`Symbol ':'`).
pub(crate) fn is_field_def(p: &mut Parser<'_>) -> bool {
    p.is_next::<Ident>() && p.is_nth::<Colon>(1)
}

/// Parse field definitions, one per line, up to (not including) `}` or a
/// token that does not start a field. Blank lines are skipped.
pub(crate) fn parse_field_def_list(p: &mut Parser<'_>) -> Result<Vec<FieldDef>> {
    p.rule("FieldDefList", |p| {
        let mut fields = vec![];

        loop {
            p.skip_newlines();

            if !is_field_def(p) {
                return Ok(fields);
            }

            fields.push(p.parse()?);

            if !p.is_next::<Newline>() && !p.is_next::<RBrace>() {
                return Err(p.error("newline after field definition"));
            }
        }
    })
}
