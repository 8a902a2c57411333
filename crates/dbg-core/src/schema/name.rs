//! Naming conventions shared by the model builder and the code generator.

use heck::ToSnakeCase;

/// Storage name of a table: `UserItem` → `user_item`.
pub fn storage_name(symbol: &str) -> String {
    symbol.to_snake_case()
}

/// Lowercase name used by relation bookkeeping: `UserItem` → `useritem`.
pub fn lower(symbol: &str) -> String {
    symbol.to_lowercase()
}

/// Link entity synthesized for a relation: `User`, `Item` → `UserItem`.
pub fn link_name(left: &str, right: &str) -> String {
    format!("{left}{right}")
}

/// Accessor on one side of a relation that lists the link rows: `item` →
/// `ref_items`. A plain `s` is appended even to singular names.
pub fn ref_name(lower: &str) -> String {
    format!("ref_{lower}s")
}

/// Foreign key column a link entity holds for one side: `user` → `user_id`.
pub fn key_column(lower: &str) -> String {
    format!("{lower}_id")
}

/// Sequence requested by `~`: `User` → `user_id_seq`.
pub fn sequence_name(table: &str) -> String {
    format!("{}_id_seq", lower(table))
}
