use super::*;

/// `WeightedSymbol Left '-' Right WeightedSymbol '{' FieldDefList? '}'`
///
/// The dash may also follow both cardinality markers (`A <> - B`).
#[derive(Debug)]
pub struct Relation {
    pub left: WeightedSymbol,
    pub left_marker: Left,
    pub dash: Minus,
    pub right_marker: Right,
    pub right: WeightedSymbol,
    pub l_brace: LBrace,

    /// Extra fields of the link entity
    pub fields: Vec<FieldDef>,

    pub r_brace: RBrace,
}

/// `Symbol '^'*`
#[derive(Debug)]
pub struct WeightedSymbol {
    pub ident: Ident,

    /// Number of `^` marks
    pub weight: usize,
}

/// `'<'{1,2}`
#[derive(Debug)]
pub struct Left {
    pub count: usize,
}

/// `'>'{1,2}`
#[derive(Debug)]
pub struct Right {
    pub count: usize,
}

impl Parse for Relation {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("Relation", |p| {
            let left = p.parse()?;
            let left_marker = p.parse()?;
            let leading_dash = p.parse::<Option<Minus>>()?;
            let right_marker = p.parse()?;

            let dash = match leading_dash {
                Some(dash) => dash,
                None => p.parse()?,
            };

            let right = p.parse()?;

            p.skip_newlines();
            let l_brace = p.parse()?;
            let fields = parse_field_def_list(p)?;

            Ok(Relation {
                left,
                left_marker,
                dash,
                right_marker,
                right,
                l_brace,
                fields,
                r_brace: p.parse()?,
            })
        })
    }
}

impl Parse for WeightedSymbol {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("WeightedSymbol", |p| {
            Ok(WeightedSymbol {
                ident: p.parse()?,
                weight: p.count_repeated::<Caret>(),
            })
        })
    }
}

impl Parse for Left {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("Left", |p| {
            p.parse::<Lt>()?;
            let count = 1 + usize::from(p.parse::<Option<Lt>>()?.is_some());
            Ok(Left { count })
        })
    }
}

impl Parse for Right {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("Right", |p| {
            p.parse::<Gt>()?;
            let count = 1 + usize::from(p.parse::<Option<Gt>>()?.is_some());
            Ok(Right { count })
        })
    }
}
