//! End-to-end tests of the note service over the real file store.

use sticky_notes::{Color, FileStore, NoteError, NoteService};
use tempfile::tempdir;

fn service_in(dir: &std::path::Path) -> NoteService<FileStore> {
    NoteService::new(FileStore::new(dir).unwrap())
}

#[test]
fn full_note_lifecycle() {
    let dir = tempdir().unwrap();
    let service = service_in(dir.path());

    // Create
    let created = service.create_note("apple pie recipe", "yellow").unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    // Read back
    let fetched = service.get_note(&created.id).unwrap();
    assert_eq!(fetched, created);

    // Update
    let updated = service
        .update_note(&created.id, "apple crumble recipe", "pink")
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, "apple crumble recipe");
    assert_eq!(updated.color, Color::Pink);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // List
    assert_eq!(service.get_all_notes().unwrap().len(), 1);

    // Delete
    service.delete_note(&created.id).unwrap();
    let err = service.get_note(&created.id).unwrap_err();
    assert!(matches!(err, NoteError::NoteNotFound { .. }));
    assert!(service.get_all_notes().unwrap().is_empty());
}

#[test]
fn failed_create_leaves_record_count_unchanged() {
    let dir = tempdir().unwrap();
    let service = service_in(dir.path());

    service.create_note("kept", "blue").unwrap();

    let err = service.create_note("", "blue").unwrap_err();
    assert!(matches!(
        err,
        NoteError::Validation {
            field: "content",
            ..
        }
    ));

    let err = service.create_note("some content", "purple").unwrap_err();
    assert!(matches!(err, NoteError::Validation { field: "color", .. }));

    assert_eq!(service.get_all_notes().unwrap().len(), 1);
}

#[test]
fn search_through_service_matches_store_semantics() {
    let dir = tempdir().unwrap();
    let service = service_in(dir.path());

    service.create_note("apple pie recipe", "yellow").unwrap();
    service.create_note("shopping list", "blue").unwrap();
    service.create_note("apple shopping", "green").unwrap();

    assert_eq!(service.search_notes("apple").unwrap().len(), 2);
    assert_eq!(service.search_notes("APPLE").unwrap().len(), 2);
    assert_eq!(service.search_notes("banana").unwrap().len(), 0);
}

#[test]
fn notes_survive_reopening_the_store() {
    let dir = tempdir().unwrap();

    let id = {
        let service = service_in(dir.path());
        service.create_note("persistent note", "orange").unwrap().id
    };

    // A fresh store over the same directory sees the same records
    let service = service_in(dir.path());
    let note = service.get_note(&id).unwrap();
    assert_eq!(note.content, "persistent note");
    assert_eq!(note.color, Color::Orange);
}

#[test]
fn update_of_unknown_id_is_not_found_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let service = service_in(dir.path());

    let err = service
        .update_note("ghost", "new content", "yellow")
        .unwrap_err();
    assert!(matches!(err, NoteError::NoteNotFound { .. }));
    assert!(service.get_all_notes().unwrap().is_empty());

    // The missing id is reported even when the new color would not validate
    let err = service
        .update_note("ghost", "new content", "magenta")
        .unwrap_err();
    assert!(matches!(err, NoteError::NoteNotFound { .. }));
}
