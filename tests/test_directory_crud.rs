//! Integration tests for directory CRUD operations.
//!
//! These tests validate the create/view/update/delete lifecycle and the
//! count bookkeeping of the in-memory contact directory.

use contact_book::{ContactDirectory, DirectoryError, NullLog};
use std::sync::Arc;

fn directory() -> ContactDirectory {
    ContactDirectory::new(Arc::new(NullLog))
}

#[test]
fn test_contact_crud_lifecycle() {
    let mut dir = directory();

    // CREATE
    dir.create("Alice", "30", "alice@gmail.com", "1234567890")
        .expect("create should succeed");

    // READ
    let contact = dir.view("Alice").expect("contact should be present");
    assert_eq!(contact.name.as_str(), "Alice");
    assert_eq!(contact.age.value(), 30);
    assert_eq!(contact.email.as_str(), "alice@gmail.com");
    assert_eq!(contact.mobile_no.as_str(), "1234567890");

    // UPDATE replaces the whole record
    dir.update("Alice", "31", "alice.new@gmail.com", "0987654321")
        .expect("update should succeed");
    let updated = dir.view("Alice").unwrap();
    assert_eq!(updated.age.value(), 31);
    assert_eq!(updated.email.as_str(), "alice.new@gmail.com");
    assert_eq!(updated.mobile_no.as_str(), "0987654321");

    // DELETE
    let removed = dir.delete("Alice").expect("delete should succeed");
    assert_eq!(removed.age.value(), 31);

    // Deleted contact is gone
    assert_eq!(
        dir.view("Alice").unwrap_err(),
        DirectoryError::NotFound("Alice".to_string())
    );
}

#[test]
fn test_create_duplicate_fails_and_keeps_existing_record() {
    let mut dir = directory();
    dir.create("Alice", "30", "alice@gmail.com", "1234567890")
        .unwrap();
    let before = dir.view("Alice").unwrap().clone();

    let err = dir
        .create("Alice", "99", "other@gmail.com", "1111111111")
        .unwrap_err();
    assert_eq!(err, DirectoryError::AlreadyExists("Alice".to_string()));

    // Existing record is unchanged, value for value
    assert_eq!(dir.view("Alice").unwrap(), &before);
    assert_eq!(dir.count(), 1);
}

#[test]
fn test_update_never_creates() {
    let mut dir = directory();

    let err = dir
        .update("Alice", "30", "alice@gmail.com", "1234567890")
        .unwrap_err();
    assert_eq!(err, DirectoryError::NotFound("Alice".to_string()));
    assert_eq!(dir.count(), 0);
}

#[test]
fn test_delete_absent_contact_fails() {
    let mut dir = directory();
    assert_eq!(
        dir.delete("Nobody").unwrap_err(),
        DirectoryError::NotFound("Nobody".to_string())
    );
}

#[test]
fn test_count_tracks_creates_and_deletes() {
    let mut dir = directory();
    assert_eq!(dir.count(), 0);
    assert!(dir.is_empty());

    dir.create("Alice", "30", "alice@gmail.com", "1234567890")
        .unwrap();
    dir.create("Bob", "41", "bob@gmail.com", "2222222222")
        .unwrap();
    assert_eq!(dir.count(), 2);

    // Failed create does not count
    let _ = dir.create("Alice", "30", "alice@gmail.com", "1234567890");
    assert_eq!(dir.count(), 2);

    // Update does not change the count
    dir.update("Bob", "42", "bob@gmail.com", "2222222222")
        .unwrap();
    assert_eq!(dir.count(), 2);

    dir.delete("Alice").unwrap();
    assert_eq!(dir.count(), 1);

    // Failed delete does not count
    let _ = dir.delete("Alice");
    assert_eq!(dir.count(), 1);
}
