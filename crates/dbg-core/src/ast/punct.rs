use super::*;

macro_rules! punct {
    ( $( $i:ident => $ch:literal ;)* ) => {
        $(
            #[derive(Debug, Clone, PartialEq)]
            pub struct $i;

            impl Parse for $i {
                fn parse(p: &mut Parser<'_>) -> Result<$i> {
                    match Self::from_token(p.peek_token()) {
                        Some(punct) => {
                            p.next_token();
                            Ok(punct)
                        }
                        None => Err(p.error(Punct::$i($i).describe())),
                    }
                }
            }

            impl Peek for $i {
                fn from_token(token: Option<&Token>) -> Option<Self> {
                    match token {
                        Some(Token::Punct(Punct::$i(punct))) => Some(punct.clone()),
                        _ => None,
                    }
                }
            }

            impl From<$i> for Token {
                fn from(src: $i) -> Token {
                    Token::Punct(Punct::$i(src))
                }
            }
        )*

        #[derive(Debug, Clone, PartialEq)]
        pub enum Punct {
            $(
                $i($i),
            )*
        }

        impl Punct {
            pub(crate) fn from_char(ch: char) -> Option<Punct> {
                match ch {
                    $( $ch => Some(Punct::$i($i)), )*
                    _ => None,
                }
            }

            pub fn as_char(&self) -> char {
                match self {
                    $( Punct::$i(_) => $ch, )*
                }
            }
        }
    }
}

punct! {
    Caret => '^';
    Comma => ',';
    Colon => ':';
    Eq => '=';
    Dot => '.';
    Minus => '-';
    Tilde => '~';
    Question => '?';
    Bang => '!';
    LParen => '(';
    RParen => ')';
    LBrace => '{';
    RBrace => '}';
    Lt => '<';
    Gt => '>';
    Newline => '\n';
}

impl Punct {
    /// Human readable form used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Punct::Newline(_) => "newline".to_string(),
            punct => format!("`{}`", punct.as_char()),
        }
    }
}
