use super::*;

/// `Symbol Option* ('=' Default)?`
#[derive(Debug)]
pub struct Type {
    /// Type symbol, before alias resolution
    pub ident: Ident,

    /// Option marks in source order
    pub options: Vec<TypeOption>,

    pub default: Option<DefaultExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeOption {
    /// `?`
    Nullable(Question),

    /// `!`
    Unique(Bang),

    /// `~`
    Sequence(Tilde),
}

/// `'=' Default`: the raw text following `=` up to the end of the line.
#[derive(Debug)]
pub struct DefaultExpr {
    pub eq: Eq,
    pub text: String,
    pub span: Span,
}

impl Parse for Type {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("Type", |p| {
            let ident = p.parse()?;

            let mut options = vec![];
            while let Some(option) = p.parse::<Option<TypeOption>>()? {
                options.push(option);
            }

            Ok(Type {
                ident,
                options,
                default: p.parse()?,
            })
        })
    }
}

impl Parse for TypeOption {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        match TypeOption::from_token(p.peek_token()) {
            Some(option) => {
                p.next_token();
                Ok(option)
            }
            None => Err(p.error("`?`, `!` or `~`")),
        }
    }
}

impl Peek for TypeOption {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        match token {
            Some(Token::Punct(Punct::Question(punct))) => Some(TypeOption::Nullable(punct.clone())),
            Some(Token::Punct(Punct::Bang(punct))) => Some(TypeOption::Unique(punct.clone())),
            Some(Token::Punct(Punct::Tilde(punct))) => Some(TypeOption::Sequence(punct.clone())),
            _ => None,
        }
    }
}

impl Parse for DefaultExpr {
    fn parse(p: &mut Parser<'_>) -> Result<Self> {
        p.rule("Default", |p| {
            let eq = p.parse()?;
            let (text, span) = p.rest_of_line();

            if text.is_empty() {
                return Err(p.error("a default expression"));
            }

            Ok(DefaultExpr { eq, text, span })
        })
    }
}

impl Peek for DefaultExpr {
    fn from_token(token: Option<&Token>) -> Option<Self> {
        // Only the leading `=` is visible as a token; the expression itself
        // is read raw by `parse`.
        Eq::from_token(token).map(|eq| DefaultExpr {
            eq,
            text: String::new(),
            span: Span::default(),
        })
    }
}
