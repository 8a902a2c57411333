use tests::prelude::*;

use pretty_assertions::assert_eq;

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        sex: None,
        joined: "2024-01-01 00:00:00".to_string(),
    }
}

fn item(id: i64, title: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
    }
}

fn user_items() -> MemorySession {
    let mut session = MemorySession::new();

    session
        .insert(user(1, "ann"))
        .insert(user(2, "bob"))
        .insert(item(1, "lamp"))
        .insert(item(2, "desk"))
        .insert(item(3, "sofa"))
        .insert(UserItem {
            user_id: 1,
            item_id: 1,
        })
        .insert(UserItem {
            user_id: 1,
            item_id: 2,
        })
        .insert(UserItem {
            user_id: 2,
            item_id: 2,
        })
        .insert(UserItem {
            user_id: 2,
            item_id: 3,
        });

    session
}

fn library() -> MemorySession {
    let mut session = MemorySession::new();

    session
        .insert(Author {
            id: 1,
            name: "le guin".to_string(),
        })
        .insert(Book {
            id: 1,
            title: "the dispossessed".to_string(),
        })
        .insert(Book {
            id: 2,
            title: "the lathe of heaven".to_string(),
        })
        .insert(AuthorBook {
            author_id: 1,
            book_id: 1,
        })
        .insert(AuthorBook {
            author_id: 1,
            book_id: 2,
        });

    for (book_id, chapter_id) in [(1, 1), (1, 2), (2, 3)] {
        session
            .insert(Chapter {
                id: chapter_id,
                number: chapter_id as i16,
            })
            .insert(BookChapter {
                book_id,
                chapter_id,
            });
    }

    session
}

#[test]
fn owner_delete_removes_owned_rows() {
    let mut session = user_items();
    let mut scope = DeleteScope::new();

    let ann = user(1, "ann");
    let deleted = delete_user(&mut session, &mut scope, &ann).unwrap().unwrap();

    let users: Vec<_> = session.rows::<User>().into_iter().map(|u| u.id).collect();
    let items: Vec<_> = session.rows::<Item>().into_iter().map(|i| i.id).collect();
    assert_eq!(users, [2]);
    assert_eq!(items, [3]);

    // Desk was shared with bob: the item is gone, and so is bob's link to it
    assert_eq!(
        session.rows::<UserItem>(),
        [UserItem {
            user_id: 2,
            item_id: 3
        }]
    );

    assert_eq!(deleted.table, "user");
    assert_eq!(
        deleted.get("item"),
        Some(&Some(vec![
            Unlinked {
                link: None,
                target: Some(Deleted {
                    table: "item",
                    relations: vec![("user", None)],
                }),
            },
            Unlinked {
                link: None,
                target: Some(Deleted {
                    table: "item",
                    relations: vec![("user", None)],
                }),
            },
        ]))
    );
    assert_eq!(deleted.get("author"), None);
}

#[test]
fn owned_delete_leaves_owner() {
    let mut session = user_items();
    let mut scope = DeleteScope::new();

    let deleted = delete_item(&mut session, &mut scope, &item(2, "desk"))
        .unwrap()
        .unwrap();

    assert_eq!(deleted.relations, vec![("user", None)]);
    assert_eq!(session.count::<User>(), 2);
    assert_eq!(session.count::<Item>(), 2);
    assert_eq!(session.count::<UserItem>(), 2);
}

#[test]
fn cascade_follows_ownership_chain() {
    let mut session = library();
    let mut scope = DeleteScope::new();

    let author = session.rows::<Author>().remove(0);
    delete_author(&mut session, &mut scope, &author).unwrap();

    assert_eq!(
        session.deletes(),
        [
            ("author_book", vec![1, 1]),
            ("book_chapter", vec![1, 1]),
            ("chapter", vec![1]),
            ("book_chapter", vec![1, 2]),
            ("chapter", vec![2]),
            ("book", vec![1]),
            ("author_book", vec![1, 2]),
            ("book_chapter", vec![2, 3]),
            ("chapter", vec![3]),
            ("book", vec![2]),
            ("author", vec![1]),
        ]
    );

    assert_eq!(session.count::<Author>(), 0);
    assert_eq!(session.count::<Book>(), 0);
    assert_eq!(session.count::<Chapter>(), 0);
    assert_eq!(session.count::<AuthorBook>(), 0);
    assert_eq!(session.count::<BookChapter>(), 0);
    assert_eq!(scope.len(), 11);
}

#[test]
fn cascade_reports_nested_outcomes() {
    let mut session = library();
    let mut scope = DeleteScope::new();

    let book = session.rows::<Book>().remove(1);
    let deleted = delete_book(&mut session, &mut scope, &book).unwrap().unwrap();

    assert_eq!(
        deleted,
        Deleted {
            table: "book",
            relations: vec![
                ("author", None),
                (
                    "chapter",
                    Some(vec![Unlinked {
                        link: None,
                        target: Some(Deleted {
                            table: "chapter",
                            relations: vec![("book", None)],
                        }),
                    }])
                ),
            ],
        }
    );

    // The author does not belong to the book
    assert_eq!(session.count::<Author>(), 1);
    assert_eq!(session.count::<AuthorBook>(), 1);
    assert_eq!(session.count::<Chapter>(), 2);
}

#[test]
fn mutual_ownership_terminates() {
    let mut session = MemorySession::new();

    for id in 1..=2 {
        session
            .insert(Person {
                id,
                name: format!("person {id}"),
            })
            .insert(Passport {
                id,
                number: format!("P-{id}"),
            });
    }

    for (person_id, passport_id) in [(1, 1), (1, 2), (2, 2)] {
        session.insert(PersonPassport {
            person_id,
            passport_id,
        });
    }

    let mut scope = DeleteScope::new();
    let person = session.rows::<Person>().remove(0);
    delete_person(&mut session, &mut scope, &person).unwrap();

    // The second person is reached through the shared passport
    assert_eq!(
        session.deletes(),
        [
            ("person_passport", vec![1, 1]),
            ("passport", vec![1]),
            ("person_passport", vec![1, 2]),
            ("person_passport", vec![2, 2]),
            ("person", vec![2]),
            ("passport", vec![2]),
            ("person", vec![1]),
        ]
    );
    assert_eq!(session.count::<Person>(), 0);
    assert_eq!(session.count::<Passport>(), 0);
    assert_eq!(session.count::<PersonPassport>(), 0);
}

#[test]
fn mutual_ownership_from_either_side() {
    let mut session = MemorySession::new();
    session
        .insert(Person {
            id: 1,
            name: "ann".to_string(),
        })
        .insert(Passport {
            id: 7,
            number: "P-7".to_string(),
        })
        .insert(PersonPassport {
            person_id: 1,
            passport_id: 7,
        });

    let passport = session.rows::<Passport>().remove(0);
    let deleted = delete_passport(&mut session, &mut DeleteScope::new(), &passport)
        .unwrap()
        .unwrap();

    assert_eq!(
        deleted.get("person"),
        Some(&Some(vec![Unlinked {
            link: None,
            target: Some(Deleted {
                table: "person",
                relations: vec![("passport", Some(vec![]))],
            }),
        }]))
    );
    assert_eq!(session.count::<Person>(), 0);
}

#[test]
fn unowned_relation_only_removes_links() {
    let mut session = MemorySession::new();
    session.insert(Student {
        id: 1,
        name: "ann".to_string(),
    });

    for id in 1..=2 {
        session
            .insert(Course {
                id,
                title: format!("course {id}"),
            })
            .insert(StudentCourse {
                student_id: 1,
                course_id: id,
                grade: Some(id as i16),
            });
    }

    let student = session.rows::<Student>().remove(0);
    let deleted = delete_student(&mut session, &mut DeleteScope::new(), &student)
        .unwrap()
        .unwrap();

    assert_eq!(deleted.relations, vec![("course", None)]);
    assert_eq!(session.count::<Student>(), 0);
    assert_eq!(session.count::<StudentCourse>(), 0);
    assert_eq!(session.count::<Course>(), 2);
}

#[test]
fn scope_prevents_double_delete() {
    let mut session = user_items();
    let mut scope = DeleteScope::new();
    let ann = user(1, "ann");

    assert!(delete_user(&mut session, &mut scope, &ann).unwrap().is_some());
    let deletes = session.deletes().len();

    assert_eq!(delete_user(&mut session, &mut scope, &ann).unwrap(), None);
    assert_eq!(session.deletes().len(), deletes);

    // A fresh scope tries again, and the store reports the missing row
    assert_eq!(
        delete_user(&mut session, &mut DeleteScope::new(), &ann),
        Err(MemoryError::Missing {
            table: "user",
            key: vec![1],
        })
    );
}

#[test]
fn table_without_relations() {
    let mut session = MemorySession::new();
    let entry = Entry {
        day: "2024-05-01".to_string(),
        slot: 3,
        note: None,
    };
    session.insert(entry.clone());

    let mut scope = DeleteScope::new();
    assert_eq!(delete_entry(&mut session, &mut scope, &entry).unwrap(), None);
    assert_eq!(session.count::<Entry>(), 0);

    // Rows keyed on non-integer columns are not tracked
    assert!(scope.is_empty());
}

#[test]
fn link_rows_delete_directly() {
    let mut session = user_items();
    let link = session.rows::<UserItem>().remove(0);

    assert_eq!(
        delete_user_item(&mut session, &mut DeleteScope::new(), &link).unwrap(),
        None
    );
    assert_eq!(session.count::<UserItem>(), 3);
    assert_eq!(session.count::<Item>(), 3);
}

#[test]
fn single_letter_tables() {
    let mut session = MemorySession::new();
    session
        .insert(S {
            id: 1,
            name: "s".to_string(),
        })
        .insert(T {
            id: 2,
            name: "t".to_string(),
        })
        .insert(ST { s_id: 1, t_id: 2 });

    let s = session.rows::<S>().remove(0);
    assert_eq!(s.ref_ts(&mut session).unwrap(), [ST { s_id: 1, t_id: 2 }]);

    delete_s(&mut session, &mut DeleteScope::new(), &s).unwrap();

    assert_eq!(
        session.deletes(),
        [("st", vec![1, 2]), ("t", vec![2]), ("s", vec![1])]
    );
}
