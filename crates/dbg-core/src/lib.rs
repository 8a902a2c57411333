//! Front end of the dbglang schema compiler: tokenizer, parser and the
//! schema model builder that derives the relation/ownership graph.

pub mod ast;
pub use ast::tokenize;

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses dbglang's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
