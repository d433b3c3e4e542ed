//! Editor save policy end to end

use tempfile::TempDir;

use rolodex::editor::{ContactDraft, SaveOutcome, UNPROVIDED_MOBILE};
use rolodex::{Column, Filter, Gender, Projection};

use crate::common::open_directory;

#[test]
fn create_edit_delete_through_editor() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);

    let draft = ContactDraft {
        name: "Terminous".to_string(),
        email: "abc@ijk.xyz".to_string(),
        gender: Gender::Male,
        mobile: "9718666289".to_string(),
    };
    let id = match draft.save(&directory, None).unwrap() {
        SaveOutcome::Created(id) => id,
        other => panic!("unexpected outcome: {:?}", other),
    };

    let edited = ContactDraft {
        email: "terminous@ijk.xyz".to_string(),
        ..draft
    };
    assert_eq!(
        edited.save(&directory, Some(id)).unwrap(),
        SaveOutcome::Updated(1)
    );

    let item = directory.resolver().item_address(id);
    let row = directory
        .query(&item, &Projection::All, &Filter::All, None)
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(
        row.get(Column::Email).unwrap().as_text(),
        Some("terminous@ijk.xyz")
    );

    assert_eq!(directory.delete(&item, &Filter::All).unwrap(), 1);
}

#[test]
fn blank_mobile_is_stored_as_sentinel_only_via_editor() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    // Editor path: sentinel substituted.
    let draft = ContactDraft {
        name: "Ada".to_string(),
        gender: Gender::Female,
        ..ContactDraft::default()
    };
    let id = match draft.save(&directory, None).unwrap() {
        SaveOutcome::Created(id) => id,
        other => panic!("unexpected outcome: {:?}", other),
    };
    let item = directory.resolver().item_address(id);
    let row = directory
        .query(&item, &Projection::All, &Filter::All, None)
        .unwrap()
        .next()
        .unwrap();
    assert_eq!(
        row.get(Column::Mobile).unwrap().as_text(),
        Some(UNPROVIDED_MOBILE)
    );

    // Direct provider path: stored as given, i.e. absent.
    let direct = rolodex::ContactValues::new()
        .name("Grace")
        .gender(Gender::Female);
    let id = directory.insert(&collection, &direct).unwrap();
    let item = directory.resolver().item_address(id);
    let row = directory
        .query(&item, &Projection::All, &Filter::All, None)
        .unwrap()
        .next()
        .unwrap();
    assert!(row.get(Column::Mobile).unwrap().is_null());
}

#[test]
fn blank_draft_short_circuits() {
    let dir = TempDir::new().unwrap();
    let directory = open_directory(&dir);
    let collection = directory.resolver().collection_address();

    assert_eq!(
        ContactDraft::new().save(&directory, None).unwrap(),
        SaveOutcome::Nothing
    );
    let count = directory
        .query(&collection, &Projection::All, &Filter::All, None)
        .unwrap()
        .count();
    assert_eq!(count, 0);
}
