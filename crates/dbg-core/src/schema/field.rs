use std::fmt;

/// A resolved column of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Column name as written in the document
    pub name: String,

    pub ty: ColumnType,

    /// True if the field is part of the table's primary key
    pub primary_key: bool,

    /// Columns are NOT NULL unless declared with `?`
    pub nullable: bool,

    pub unique: bool,

    /// Raw default expression, never interpreted
    pub default: Option<String>,

    /// Sequence backing the column, requested with `~`
    pub sequence: Option<String>,

    pub foreign_key: Option<ForeignKey>,
}

/// Column type after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    SmallInteger,

    /// Variable length string with an optional maximum length
    String(Option<u32>),

    DateTime,
    Date,

    /// Any unrecognized symbol names an enumeration type
    Enum(String),
}

/// Reference from a link column to the `id` of an endpoint table.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// Symbol of the referenced table
    pub table: String,

    /// Storage name of the referenced table
    pub table_name: String,

    pub column: String,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>, ty: ColumnType) -> Field {
        Field {
            name: name.into(),
            ty,
            primary_key: false,
            nullable: false,
            unique: false,
            default: None,
            sequence: None,
            foreign_key: None,
        }
    }
}

impl ColumnType {
    /// Resolves a type symbol through the alias table.
    pub fn from_symbol(symbol: &str) -> ColumnType {
        match symbol {
            "int" | "Integer" => ColumnType::Integer,
            "SmallInteger" => ColumnType::SmallInteger,
            "TinyStr" => ColumnType::String(Some(20)),
            "NameStr" => ColumnType::String(Some(50)),
            "TextStr" => ColumnType::String(Some(200)),
            "InfoStr" => ColumnType::String(Some(500)),
            "String" => ColumnType::String(None),
            "DateTime" => ColumnType::DateTime,
            "Date" => ColumnType::Date,
            _ => ColumnType::Enum(symbol.to_string()),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::SmallInteger)
    }

    pub fn as_enum(&self) -> Option<&str> {
        match self {
            ColumnType::Enum(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => f.write_str("Integer"),
            ColumnType::SmallInteger => f.write_str("SmallInteger"),
            ColumnType::String(Some(len)) => write!(f, "String({len})"),
            ColumnType::String(None) => f.write_str("String"),
            ColumnType::DateTime => f.write_str("DateTime"),
            ColumnType::Date => f.write_str("Date"),
            ColumnType::Enum(name) => write!(f, "Enum({name})"),
        }
    }
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table_name, self.column)
    }
}
