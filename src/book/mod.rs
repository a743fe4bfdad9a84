//! The in-memory address book and the upcoming-birthday computation.
//!
//! The book is an insertion-ordered collection of contacts keyed by their
//! name. Books are small enough that name lookup is a linear scan; keeping
//! the contacts in a plain `Vec` preserves the insertion order that the
//! `all` and `birthdays` listings rely on.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use crate::models::Contact;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of [`AddressBook::add_or_update`], for user messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookUpdate {
    /// A new contact record was created
    Created,
    /// The phone was appended to an existing record
    Updated,
}

/// One entry of the upcoming-birthday listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// The contact's name
    pub name: ContactName,

    /// The literal birthday as stored on the contact
    pub birthday: Birthday,

    /// The date the birthday is celebrated on, after the weekend shift
    pub celebration_date: NaiveDate,

    /// Whole days between today and the (unshifted) birthday occurrence
    pub days_until: i64,
}

/// The in-memory collection of all contacts, keyed by name.
///
/// Names are unique: adding a phone under an existing name appends to that
/// contact rather than creating a second record. Iteration yields contacts
/// in the order they were first added.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate over contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.name().as_str() == name)
    }

    /// Insert a contact record, replacing any existing record with the same
    /// name in place (last write wins, position preserved).
    pub fn add_record(&mut self, contact: Contact) {
        match self.position(contact.name().as_str()) {
            Some(index) => self.contacts[index] = contact,
            None => self.contacts.push(contact),
        }
    }

    /// Validate `phone` and append it to the contact named `name`, creating
    /// the record first if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `name` is empty or `phone` is not
    /// a valid 10-digit number; the book is left unchanged in that case.
    pub fn add_or_update(&mut self, name: &str, phone: &str) -> BookResult<BookUpdate> {
        let phone = PhoneNumber::new(phone)?;

        match self.position(name) {
            Some(index) => {
                self.contacts[index].add_phone(phone);
                Ok(BookUpdate::Updated)
            }
            None => {
                let mut contact = Contact::new(ContactName::new(name)?);
                contact.add_phone(phone);
                self.contacts.push(contact);
                Ok(BookUpdate::Created)
            }
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.name().as_str() == name)
    }

    /// Exact-name lookup, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|contact| contact.name().as_str() == name)
    }

    /// Like [`find_mut`](Self::find_mut), but missing contacts are an error.
    pub fn get_mut(&mut self, name: &str) -> BookResult<&mut Contact> {
        self.find_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove the contact named `name`. Returns whether a record existed;
    /// deleting a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.contacts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Contacts whose birthdays fall within the next `window_days` days.
    ///
    /// For every contact with a birthday, the birthday's (day, month) is
    /// projected onto `today`'s year; occurrences already past roll forward
    /// to next year. A contact is included when the projected occurrence is
    /// at most `window_days` days away, counting today itself
    /// (`days_until <= window_days`).
    ///
    /// Occurrences landing on a Saturday or Sunday are celebrated on the
    /// following Monday. The shift moves only the reported
    /// `celebration_date`; inclusion is decided on the unshifted distance.
    ///
    /// Results keep the book's insertion order. An empty result is an empty
    /// `Vec`; rendering a sentinel line is left to the caller.
    pub fn upcoming_birthdays(&self, window_days: u32, today: NaiveDate) -> Vec<BirthdayReminder> {
        let mut upcoming = Vec::new();

        for contact in &self.contacts {
            let Some(birthday) = contact.birthday() else {
                continue;
            };

            let occurrence = next_occurrence(birthday, today);
            let days_until = (occurrence - today).num_days();
            if days_until > i64::from(window_days) {
                continue;
            }

            debug!(
                name = %contact.name(),
                %occurrence,
                days_until,
                "birthday within window"
            );

            upcoming.push(BirthdayReminder {
                name: contact.name().clone(),
                birthday,
                celebration_date: shift_from_weekend(occurrence),
                days_until,
            });
        }

        upcoming
    }
}

/// The first occurrence of `birthday`'s (day, month) on or after `today`.
fn next_occurrence(birthday: Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in(today.year(), birthday);
    if this_year < today {
        occurrence_in(today.year() + 1, birthday)
    } else {
        this_year
    }
}

/// `birthday`'s (day, month) within `year`. A February 29 birthday maps to
/// March 1 in non-leap years.
fn occurrence_in(year: i32, birthday: Birthday) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("March 1 exists in every year")
}

/// Saturday and Sunday celebrations move to the following Monday.
fn shift_from_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
