//! Runtime contract the generated code is compiled against.

/// A table row type.
pub trait Table: Clone + 'static {
    /// Storage name of the table
    const NAME: &'static str;

    /// Column metadata, primary key columns first
    const COLUMNS: &'static [Column];

    /// Value of an integer valued column, `None` for other columns or a null
    /// value.
    fn int_column(&self, column: &str) -> Option<i64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub primary_key: bool,
    pub nullable: bool,
    pub unique: bool,
    pub default: Option<&'static str>,
    pub sequence: Option<&'static str>,
    pub foreign_key: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    SmallInteger,
    String(Option<u32>),
    DateTime,
    Date,
    Enum(&'static str),
}

pub type DateTime = String;

pub type Date = String;

pub trait Session {
    type Error;

    /// Rows of `T` whose integer column `column` equals `value`.
    fn select<T: Table>(&mut self, column: &'static str, value: i64) -> Result<Vec<T>, Self::Error>;

    fn delete<T: Table>(&mut self, row: &T) -> Result<(), Self::Error>;
}
