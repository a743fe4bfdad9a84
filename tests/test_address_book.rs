//! Integration tests for address book operations.
//!
//! These tests exercise the create/lookup/update/delete surface of the book
//! and the invariants the record operations guarantee.

use rolo::{AddressBook, BookError, BookUpdate, Contact, ContactName, PhoneNumber};

fn book_with(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, phone) in entries {
        book.add_or_update(name, phone).unwrap();
    }
    book
}

#[test]
fn test_add_creates_then_updates() {
    let mut book = AddressBook::new();

    let first = book.add_or_update("John", "1234567890").unwrap();
    assert_eq!(first, BookUpdate::Created);

    let second = book.add_or_update("John", "5555555555").unwrap();
    assert_eq!(second, BookUpdate::Updated);

    // One record holding both phones, not two records
    assert_eq!(book.len(), 1);
    let contact = book.find("John").unwrap();
    assert_eq!(contact.phones().len(), 2);
    assert_eq!(contact.phones()[0].as_str(), "1234567890");
    assert_eq!(contact.phones()[1].as_str(), "5555555555");
}

#[test]
fn test_add_rejects_invalid_phone_without_creating_record() {
    let mut book = AddressBook::new();

    let err = book.add_or_update("John", "12345").unwrap_err();
    assert!(matches!(err, BookError::Validation(_)));
    assert!(book.is_empty());
}

#[test]
fn test_add_rejects_empty_name() {
    let mut book = AddressBook::new();

    let err = book.add_or_update("", "1234567890").unwrap_err();
    assert!(matches!(err, BookError::Validation(_)));
    assert!(book.is_empty());
}

#[test]
fn test_find_is_exact_match_only() {
    let book = book_with(&[("John", "1234567890")]);

    assert!(book.find("John").is_some());
    assert!(book.find("john").is_none());
    assert!(book.find("Joh").is_none());
    assert!(book.find("John ").is_none());
}

#[test]
fn test_delete_then_noop() {
    let mut book = book_with(&[("John", "1234567890"), ("Jane", "5555555555")]);

    assert!(book.delete("John"));
    assert_eq!(book.len(), 1);
    assert!(book.find("John").is_none());

    // Deleting a missing name is a no-op
    assert!(!book.delete("John"));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_edit_phone_through_book() {
    let mut book = book_with(&[("John", "1111111111")]);

    book.get_mut("John")
        .unwrap()
        .edit_phone("1111111111", "2222222222")
        .unwrap();

    let contact = book.find("John").unwrap();
    assert_eq!(contact.phones().len(), 1);
    assert_eq!(contact.phones()[0].as_str(), "2222222222");
}

#[test]
fn test_edit_phone_missing_contact() {
    let mut book = AddressBook::new();

    let err = book.get_mut("Nobody").unwrap_err();
    assert!(matches!(err, BookError::ContactNotFound(name) if name == "Nobody"));
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let book = book_with(&[
        ("Charlie", "1111111111"),
        ("Alice", "2222222222"),
        ("Bob", "3333333333"),
    ]);

    let names: Vec<&str> = book.iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, ["Charlie", "Alice", "Bob"]);
}

#[test]
fn test_add_record_replaces_in_place() {
    let mut book = book_with(&[("John", "1111111111"), ("Jane", "2222222222")]);

    let mut replacement = Contact::new(ContactName::new("John").unwrap());
    replacement.add_phone(PhoneNumber::new("9999999999").unwrap());
    book.add_record(replacement);

    // Last write wins, position preserved
    assert_eq!(book.len(), 2);
    let names: Vec<&str> = book.iter().map(|c| c.name().as_str()).collect();
    assert_eq!(names, ["John", "Jane"]);
    assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "9999999999");
}

#[test]
fn test_book_serde_round_trip() {
    let mut book = book_with(&[("John", "1234567890")]);
    book.get_mut("John").unwrap().set_birthday("15.06.1990").unwrap();

    let json = serde_json::to_string(&book).unwrap();
    let parsed: AddressBook = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, book);
}
