//! Core scenarios driven end to end through the facade

use tempfile::TempDir;

use rolodex::{Column, ContactId, ContactValues, Error, Filter, Gender, Projection, Row};

use crate::common::{open_directory, terminous};

#[test]
fn insert_query_delete_lifecycle() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let id = directory.insert(&collection, &terminous()).unwrap();
    assert_eq!(id, ContactId::new(1));

    let item = directory.resolver().item_address(id);
    let rows: Vec<Row> = directory
        .query(&item, &Projection::All, &Filter::All, None)
        .unwrap()
        .collect();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.get(Column::Name).unwrap().as_text(), Some("Terminous"));
    assert_eq!(row.get(Column::Email).unwrap().as_text(), Some("abc@ijk.xyz"));
    assert_eq!(
        row.get(Column::Gender).unwrap().as_int(),
        Some(Gender::Male.ordinal())
    );
    assert_eq!(row.get(Column::Mobile).unwrap().as_text(), Some("9718666289"));

    assert_eq!(directory.delete(&item, &Filter::All).unwrap(), 1);
    let remaining = directory
        .query(&item, &Projection::All, &Filter::All, None)
        .unwrap()
        .count();
    assert_eq!(remaining, 0);
}

#[test]
fn short_number_is_rejected_without_persisting() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let bad = ContactValues::new()
        .name("A")
        .gender(Gender::Unknown)
        .mobile("123");
    let err = directory.insert(&collection, &bad).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));

    let count = directory
        .query(&collection, &Projection::All, &Filter::All, None)
        .unwrap()
        .count();
    assert_eq!(count, 0);
}

#[test]
fn identifiers_are_never_reissued() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    let mut issued = Vec::new();
    for i in 0..5 {
        let values = ContactValues::new()
            .name(format!("Contact {i}"))
            .gender(Gender::Unknown);
        issued.push(directory.insert(&collection, &values).unwrap());
    }
    directory.delete(&collection, &Filter::All).unwrap();

    let values = ContactValues::new().name("Late").gender(Gender::Unknown);
    let fresh = directory.insert(&collection, &values).unwrap();
    assert!(issued.iter().all(|id| *id != fresh));
}

#[test]
fn catalog_listing_uses_projection() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    directory.insert(&collection, &terminous()).unwrap();
    directory
        .insert(
            &collection,
            &ContactValues::new().name("Ada").gender(Gender::Female),
        )
        .unwrap();

    // The list view only asks for id, name, email.
    let projection = Projection::Columns(vec![Column::Id, Column::Name, Column::Email]);
    let rows: Vec<Row> = directory
        .query(&collection, &projection, &Filter::All, None)
        .unwrap()
        .collect();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.len(), 3);
        assert!(row.id().is_some());
        assert_eq!(row.get(Column::Gender), None);
    }
    // Absent email surfaces as Null for the view's placeholder rendering.
    assert!(rows[1].get(Column::Email).unwrap().is_null());
}

#[test]
fn delete_all_entries() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    for i in 0..3 {
        let values = ContactValues::new()
            .name(format!("Contact {i}"))
            .gender(Gender::Unknown);
        directory.insert(&collection, &values).unwrap();
    }

    assert_eq!(directory.delete(&collection, &Filter::All).unwrap(), 3);
    assert_eq!(directory.delete(&collection, &Filter::All).unwrap(), 0);
}

#[test]
fn update_scoped_by_collection_filter() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    directory.insert(&collection, &terminous()).unwrap();
    directory
        .insert(
            &collection,
            &ContactValues::new().name("Ada").gender(Gender::Female),
        )
        .unwrap();

    let affected = directory
        .update(
            &collection,
            &ContactValues::new().email("updated@example.com"),
            &Filter::GenderEq(Gender::Female),
        )
        .unwrap();
    assert_eq!(affected, 1);

    let rows: Vec<Row> = directory
        .query(&collection, &Projection::All, &Filter::NameEq("Ada".into()), None)
        .unwrap()
        .collect();
    assert_eq!(
        rows[0].get(Column::Email).unwrap().as_text(),
        Some("updated@example.com")
    );
}

#[test]
fn unknown_addresses_are_rejected_everywhere() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);

    for address in ["rolodex/staff", "elsewhere/contacts", "rolodex/contacts/x"] {
        assert!(matches!(
            directory
                .query(address, &Projection::All, &Filter::All, None)
                .unwrap_err(),
            Error::UnsupportedAddress(_)
        ));
        assert!(directory.update(address, &terminous(), &Filter::All).is_err());
        assert!(directory.delete(address, &Filter::All).is_err());
        assert!(directory.resource_type(address).is_err());
    }
}
