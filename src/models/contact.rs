//! Contact model representing one person in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one immutable name, an ordered list of phone numbers,
/// and at most one birthday.
///
/// All mutation goes through explicit operations so the value object
/// invariants (10-digit phones, real calendar birthdays) hold for every
/// stored field. Duplicate phone numbers are allowed; the list keeps them
/// in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// The contact's name, unique within the address book
    name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Optional birthday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Contact {
    /// Create a new contact with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Append a phone number. The same number may be added twice.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove every phone whose textual value equals `value`.
    ///
    /// Removing a number that is not present is a no-op, not an error.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|phone| phone.as_str() != value);
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// `new` is validated before the list is searched, so a failed edit
    /// leaves the contact untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `new` is not a valid phone number,
    /// and `BookError::PhoneNotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let new = PhoneNumber::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;

        *slot = new;
        Ok(())
    }

    /// Validate `raw` as a birthday and set it, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` or
    /// `ValidationError::InvalidDate` when `raw` does not parse.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Human-readable birthday line for the `show-birthday` command.
    pub fn describe_birthday(&self) -> String {
        match self.birthday {
            Some(birthday) => format!("Birthday: {}", birthday),
            None => "No birthday set.".to_string(),
        }
    }
}

// Display support - the `all` listing line
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str) -> Contact {
        Contact::new(ContactName::new(name).unwrap())
    }

    fn phone(value: &str) -> PhoneNumber {
        PhoneNumber::new(value).unwrap()
    }

    #[test]
    fn test_contact_new() {
        let contact = contact("John");
        assert_eq!(contact.name().as_str(), "John");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut contact = contact("John");
        contact.add_phone(phone("1234567890"));
        contact.add_phone(phone("1234567890"));
        assert_eq!(contact.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut contact = contact("John");
        contact.add_phone(phone("1234567890"));
        contact.add_phone(phone("5555555555"));
        contact.add_phone(phone("1234567890"));

        contact.remove_phone("1234567890");
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.phones()[0].as_str(), "5555555555");
    }

    #[test]
    fn test_remove_phone_missing_is_noop() {
        let mut contact = contact("John");
        contact.add_phone(phone("1234567890"));

        contact.remove_phone("0000000000");
        contact.remove_phone("0000000000");
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut contact = contact("John");
        contact.add_phone(phone("1111111111"));

        contact.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_edit_phone_first_match_only() {
        let mut contact = contact("John");
        contact.add_phone(phone("1111111111"));
        contact.add_phone(phone("1111111111"));

        contact.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(contact.phones()[0].as_str(), "2222222222");
        assert_eq!(contact.phones()[1].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_not_found_leaves_contact_unchanged() {
        let mut contact = contact("John");
        contact.add_phone(phone("1111111111"));

        let err = contact.edit_phone("9999999999", "2222222222").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_edit_phone_invalid_new_number_leaves_contact_unchanged() {
        let mut contact = contact("John");
        contact.add_phone(phone("1111111111"));

        let err = contact.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut contact = contact("John");
        contact.set_birthday("15.06.1990").unwrap();
        contact.set_birthday("16.06.1990").unwrap();
        assert_eq!(contact.birthday().unwrap().day(), 16);
    }

    #[test]
    fn test_set_birthday_invalid_keeps_previous() {
        let mut contact = contact("John");
        contact.set_birthday("15.06.1990").unwrap();

        assert!(contact.set_birthday("31.02.2020").is_err());
        assert_eq!(contact.birthday().unwrap().day(), 15);
    }

    #[test]
    fn test_describe_birthday() {
        let mut contact = contact("John");
        assert_eq!(contact.describe_birthday(), "No birthday set.");

        contact.set_birthday("15.06.1990").unwrap();
        assert_eq!(contact.describe_birthday(), "Birthday: 15.06.1990");
    }

    #[test]
    fn test_display_line() {
        let mut contact = contact("John");
        contact.add_phone(phone("1234567890"));
        contact.add_phone(phone("5555555555"));
        assert_eq!(
            contact.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );

        contact.set_birthday("01.01.1990").unwrap();
        assert_eq!(
            contact.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, Birthday: 01.01.1990"
        );
    }

    #[test]
    fn test_contact_serde_round_trip() {
        let mut contact = contact("John");
        contact.add_phone(phone("1234567890"));
        contact.set_birthday("15.06.1990").unwrap();

        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains("\"name\":\"John\""));
        assert!(json.contains("\"15.06.1990\""));

        let parsed: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, contact);
    }

    #[test]
    fn test_contact_deserialization_rejects_invalid_phone() {
        let json = r#"{"name":"John","phones":["555-123"]}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
