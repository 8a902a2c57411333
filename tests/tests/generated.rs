use tests::prelude::*;
use tests::runtime::{Column, ColumnType};

use pretty_assertions::assert_eq;

#[test]
fn display_uses_repr() {
    let user = User {
        id: 1,
        name: "ann".to_string(),
        sex: Some(Sex::Female),
        joined: "2024-01-01 00:00:00".to_string(),
    };
    assert_eq!(user.to_string(), r#"User{ id:1, name:"ann" }"#);

    let item = Item {
        id: 2,
        title: "lamp".to_string(),
    };
    assert_eq!(item.to_string(), r#"Item{ id:2, title:"lamp" }"#);

    let link = StudentCourse {
        student_id: 1,
        course_id: 2,
        grade: None,
    };
    assert_eq!(
        link.to_string(),
        "StudentCourse{ student_id:1, course_id:2, grade:None }"
    );
}

#[test]
fn column_metadata() {
    assert_eq!(<User as Table>::NAME, "user");
    assert_eq!(<UserItem as Table>::NAME, "user_item");

    assert_eq!(
        <User as Table>::COLUMNS,
        [
            Column {
                name: "id",
                ty: ColumnType::Integer,
                primary_key: true,
                nullable: false,
                unique: false,
                default: None,
                sequence: Some("user_id_seq"),
                foreign_key: None,
            },
            Column {
                name: "name",
                ty: ColumnType::String(Some(50)),
                primary_key: false,
                nullable: false,
                unique: true,
                default: None,
                sequence: None,
                foreign_key: None,
            },
            Column {
                name: "sex",
                ty: ColumnType::Enum("Sex"),
                primary_key: false,
                nullable: true,
                unique: false,
                default: None,
                sequence: None,
                foreign_key: None,
            },
            Column {
                name: "joined",
                ty: ColumnType::DateTime,
                primary_key: false,
                nullable: false,
                unique: false,
                default: Some("now()"),
                sequence: None,
                foreign_key: None,
            },
        ]
    );

    let foreign_keys: Vec<_> = <BookChapter as Table>::COLUMNS
        .iter()
        .map(|column| column.foreign_key)
        .collect();
    assert_eq!(foreign_keys, [Some("book.id"), Some("chapter.id")]);

    let entry: Vec<_> = <Entry as Table>::COLUMNS
        .iter()
        .map(|column| (column.name, column.primary_key))
        .collect();
    assert_eq!(entry, [("day", true), ("slot", true), ("note", false)]);
}

#[test]
fn int_columns() {
    let link = StudentCourse {
        student_id: 4,
        course_id: 5,
        grade: Some(9),
    };
    assert_eq!(link.int_column("student_id"), Some(4));
    assert_eq!(link.int_column("grade"), Some(9));
    assert_eq!(link.int_column("missing"), None);

    let ungraded = StudentCourse { grade: None, ..link };
    assert_eq!(ungraded.int_column("grade"), None);

    let chapter = Chapter { id: 1, number: 12 };
    assert_eq!(chapter.int_column("number"), Some(12));

    let item = Item {
        id: 1,
        title: "lamp".to_string(),
    };
    assert_eq!(item.int_column("title"), None);
}

#[test]
fn accessors_follow_links() {
    let mut session = MemorySession::new();
    let ann = User {
        id: 1,
        name: "ann".to_string(),
        sex: None,
        joined: "2024-01-01 00:00:00".to_string(),
    };
    let lamp = Item {
        id: 5,
        title: "lamp".to_string(),
    };

    session
        .insert(ann.clone())
        .insert(lamp.clone())
        .insert(UserItem {
            user_id: 1,
            item_id: 5,
        });

    let links = ann.ref_items(&mut session).unwrap();
    assert_eq!(
        links,
        [UserItem {
            user_id: 1,
            item_id: 5
        }]
    );

    assert_eq!(links[0].item(&mut session).unwrap(), Some(lamp.clone()));
    assert_eq!(links[0].user(&mut session).unwrap(), Some(ann));
    assert_eq!(lamp.ref_users(&mut session).unwrap().len(), 1);

    assert_eq!(
        session.ops_log()[0],
        Op::Select {
            table: "user_item",
            column: "user_id",
            value: 1,
        }
    );

    // A back reference to a deleted row resolves to nothing
    session.delete(&lamp).unwrap();
    assert_eq!(links[0].item(&mut session).unwrap(), None);
}

#[test]
fn lookup_tables() {
    use tests::db::lookup::{self, get, get_pair};

    assert_eq!(get(lookup::RELATION_SPEC, "Book"), Some(&["author", "chapter"][..]));
    assert_eq!(get(lookup::RELATION_SPEC, "Entry"), None);

    assert_eq!(get_pair(lookup::REF_TABLE, "User", "Item"), Some("ref_items"));
    assert_eq!(get_pair(lookup::LR_REF, "Item", "User"), Some("ref_users"));
    assert_eq!(get_pair(lookup::LR_TYPE, "Item", "User"), Some("UserItem"));

    assert_eq!(
        get_pair(lookup::RELATION_SPEC_FOR_DESTRUCTION, "Author", "Book"),
        Some("book")
    );
    assert_eq!(
        get_pair(lookup::RELATION_SPEC_FOR_DESTRUCTION, "Book", "Author"),
        None
    );
    assert_eq!(
        get_pair(lookup::RELATION_SPEC_FOR_DESTRUCTION, "Passport", "Person"),
        Some("person")
    );
    assert_eq!(get(lookup::RELATION_SPEC_FOR_DESTRUCTION, "Student"), None);

    assert_eq!(
        get(lookup::FIELD_SPEC, "StudentCourse"),
        Some(&["student_id", "course_id", "grade"][..])
    );
    assert_eq!(get(lookup::CARDINALITY, "UserItem"), Some(("one", "one")));
    assert_eq!(get(lookup::CARDINALITY, "StudentCourse"), Some(("many", "many")));

    assert_eq!(get(lookup::DELETE_PROCEDURES, "UserItem"), Some("delete_user_item"));
    assert_eq!(
        get_pair(lookup::RELATION_DELETE_PROCEDURES, "Book", "Chapter"),
        Some("delete_chapter_from_book")
    );
}

#[test]
fn config_module() {
    assert_eq!(config::DATABASE, "memory");
}
