use super::*;

macro_rules! define_keyword {
    ( $( $l:literal => $i:ident; )* ) => {
        $(
            #[derive(Debug, Clone, PartialEq)]
            pub struct $i;

            impl Parse for $i {
                fn parse(p: &mut Parser<'_>) -> Result<$i> {
                    match Self::from_token(p.peek_token()) {
                        Some(keyword) => {
                            p.next_token();
                            Ok(keyword)
                        }
                        None => Err(p.error(concat!("`", $l, "`"))),
                    }
                }
            }

            impl Peek for $i {
                fn from_token(token: Option<&Token>) -> Option<Self> {
                    match token {
                        Some(Token::Ident(ident)) if ident.as_str() == $l => Some(Self),
                        _ => None
                    }
                }
            }
        )*
    };
}

define_keyword! {
    "repr" => Repr;
    "all" => All;
}
