use dbg_core::schema::{self, ColumnType, Ownership, TableKind};

use pretty_assertions::assert_eq;

const USER_ITEM: &str = "
# Users own the items they are linked to
User(id: int~) {
    name: NameStr!
    email: InfoStr?
    repr { id, name }
}

Item(id: int~) {
    title: TextStr
    created: DateTime = now()
}

User^ <> - Item {}
";

#[test]
fn tables_in_statement_order() {
    let schema = schema::from_str(USER_ITEM).unwrap();

    let names: Vec<_> = schema.tables().map(|table| table.name.as_str()).collect();
    assert_eq!(names, ["User", "Item", "UserItem"]);

    let user_item = schema.table("UserItem").unwrap();
    assert_eq!(user_item.table_name, "user_item");
    assert_eq!(
        user_item.kind,
        TableKind::Link {
            left: "User".to_string(),
            right: "Item".to_string()
        }
    );
}

#[test]
fn link_entity_keys() {
    let schema = schema::from_str(USER_ITEM).unwrap();
    let user_item = schema.table("UserItem").unwrap();

    let primaries: Vec<_> = user_item.primary.keys().map(String::as_str).collect();
    assert_eq!(primaries, ["user_id", "item_id"]);
    assert!(user_item.field.is_empty());

    for field in user_item.primary.values() {
        assert_eq!(field.ty, ColumnType::Integer);
        assert!(field.primary_key);
        assert!(!field.nullable);
    }

    let targets: Vec<_> = user_item
        .columns()
        .map(|field| field.foreign_key.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(targets, ["user.id", "item.id"]);
    assert_eq!(user_item.repr.fields, ["user_id", "item_id"]);
}

#[test]
fn user_owns_item() {
    let schema = schema::from_str(USER_ITEM).unwrap();
    let relations = &schema.relations;

    assert_eq!(relations.destruction("User", "Item"), Some("item"));
    assert_eq!(relations.destruction("Item", "User"), None);
    assert_eq!(relations.link("User", "Item").unwrap().ownership(), Ownership::Left);
}

#[test]
fn accessors() {
    let schema = schema::from_str(USER_ITEM).unwrap();

    let user = schema.table("User").unwrap();
    let ref_items = &user.relation["ref_items"];
    assert_eq!(ref_items.target, "UserItem");
    assert!(ref_items.many);
    assert_eq!(ref_items.column, "user_id");
    assert_eq!(ref_items.back_populates, "user");

    let item = schema.table("Item").unwrap();
    assert_eq!(item.relation.keys().collect::<Vec<_>>(), ["ref_users"]);

    let user_item = schema.table("UserItem").unwrap();
    let accessors: Vec<_> = user_item
        .relation
        .iter()
        .map(|(name, rel)| (name.as_str(), rel.target.as_str(), rel.many))
        .collect();
    assert_eq!(accessors, [("user", "User", false), ("item", "Item", false)]);
    assert_eq!(user_item.relation["item"].back_populates, "ref_users");
}

#[test]
fn declared_repr_and_defaults() {
    let schema = schema::from_str(USER_ITEM).unwrap();

    let user = schema.table("User").unwrap();
    assert_eq!(user.repr.fields, ["id", "name"]);

    let item = schema.table("Item").unwrap();
    assert_eq!(item.repr.fields, ["id", "title", "created"]);
    assert_eq!(item.field["created"].default.as_deref(), Some("now()"));
    assert_eq!(item.field["created"].ty, ColumnType::DateTime);
}

#[test]
fn symbols_resolve_to_declared_tables() {
    let schema = schema::from_str(USER_ITEM).unwrap();

    assert_eq!(schema.resolve("user").unwrap().name, "User");
    assert_eq!(schema.resolve("item").unwrap().name, "Item");
    assert!(schema.resolve("useritem").is_none());
}

#[test]
fn from_file_reads_document() {
    let dir = std::env::temp_dir().join(format!("dbg-core-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("user_item.dbg");
    std::fs::write(&path, USER_ITEM).unwrap();

    let schema = schema::from_file(&path).unwrap();
    assert_eq!(schema.tables.len(), 3);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn from_file_missing() {
    let err = schema::from_file("/nonexistent/schema.dbg").unwrap_err();
    assert!(err.to_string().contains("Failed to read schema file"), "{err}");
}
