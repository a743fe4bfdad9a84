//! Command handlers for the interactive shell.
//!
//! Each handler takes the address book plus the raw whitespace-split
//! arguments of one command, validates them, calls into the core, and
//! returns the reply text. Errors propagate typed; the shell is the layer
//! that turns them into an `Error: ...` line.

use crate::book::{AddressBook, BookUpdate};
use crate::error::{BookError, CommandResult};
use chrono::{Local, NaiveDate};

/// `add <name> <phone>` - create the contact if needed, append the phone.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(crate::error::CommandError::Usage("add <name> <phone>"));
    };

    let message = match book.add_or_update(name, phone)? {
        BookUpdate::Created => "Contact added.",
        BookUpdate::Updated => "Contact updated.",
    };
    Ok(message.to_string())
}

/// `change <name> <old_phone> <new_phone>` - replace one phone in place.
pub fn change_phone(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(crate::error::CommandError::Usage(
            "change <name> <old_phone> <new_phone>",
        ));
    };

    book.get_mut(name)?.edit_phone(old, new)?;
    Ok(format!("Phone number updated for {}.", name))
}

/// `phone <name>` - list the contact's phone numbers.
pub fn show_phone(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name] = args else {
        return Err(crate::error::CommandError::Usage("phone <name>"));
    };

    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(contact
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all` - one line per contact, in insertion order.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts in the address book.".to_string());
    }

    Ok(book
        .iter()
        .map(|contact| contact.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` - set or replace the birthday.
pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name, date] = args else {
        return Err(crate::error::CommandError::Usage(
            "add-birthday <name> <DD.MM.YYYY>",
        ));
    };

    book.get_mut(name)?.set_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday <name>` - show the contact's birthday line.
pub fn show_birthday(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    let [name] = args else {
        return Err(crate::error::CommandError::Usage("show-birthday <name>"));
    };

    let contact = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    Ok(contact.describe_birthday())
}

/// `birthdays` - contacts celebrating within the configured window,
/// evaluated against the local calendar date.
pub fn birthdays(book: &AddressBook, window_days: u32) -> CommandResult<String> {
    birthdays_on(book, window_days, Local::now().date_naive())
}

/// [`birthdays`] with an explicit `today`, for deterministic tests.
pub fn birthdays_on(
    book: &AddressBook,
    window_days: u32,
    today: NaiveDate,
) -> CommandResult<String> {
    let upcoming = book.upcoming_birthdays(window_days, today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|reminder| {
            format!(
                "{}: {}",
                reminder.name,
                reminder.celebration_date.format("%d.%m.%Y")
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
