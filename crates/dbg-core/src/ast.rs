//! Syntax tree of a schema document, and the tokenizer and parser that
//! produce it.

mod eof;
pub use eof::Eof;

mod field;
pub use field::FieldDef;
use field::parse_field_def_list;

mod ident;
pub use ident::Ident;

pub mod keyword;

mod lit;
pub use lit::LitInt;

mod parse;
pub use parse::{from_str, tokenize};
use parse::{Parse, Parser, Peek, Result};

mod punct;
pub use punct::*;

mod relation;
pub use relation::{Left, Relation, Right, WeightedSymbol};

mod schema;
pub use schema::{Schema, Stmt};

mod span;
pub use span::{Position, Span};

mod table_def;
pub use table_def::{ReprDef, TableDef};

mod token;
pub use token::{Lexeme, Token};

mod ty;
pub use ty::{DefaultExpr, Type, TypeOption};
