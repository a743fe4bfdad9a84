//! The interactive read-eval-print shell.
//!
//! The shell owns no logic of its own: it tokenizes a line, dispatches to a
//! command handler, and prints the handler's reply or its error rendered as
//! a single `Error: ...` line. Every command is one atomic attempt; a failed
//! command never corrupts the book and never ends the session.

use crate::book::AddressBook;
use crate::commands;
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the dispatcher decided about one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and keep looping
    Reply(String),
    /// Blank input, nothing to do
    Ignored,
    /// `close` / `exit`: say goodbye and end the session
    Exit,
}

/// Tokenize one input line and execute it against the book.
///
/// The first token selects the command, case-insensitively; the rest are
/// passed to the handler untouched. Unknown commands produce the
/// `Invalid command.` reply rather than an error.
pub fn dispatch(book: &mut AddressBook, config: &Config, line: &str) -> Outcome {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Outcome::Ignored;
    };
    let command = command.to_lowercase();
    let args: Vec<&str> = tokens.collect();

    debug!(command = %command, argc = args.len(), "dispatching command");

    let result = match command.as_str() {
        "close" | "exit" => return Outcome::Exit,
        "hello" => Ok("How can I help you?".to_string()),
        "add" => commands::add_contact(book, &args),
        "change" => commands::change_phone(book, &args),
        "phone" => commands::show_phone(book, &args),
        "all" => commands::show_all(book),
        "add-birthday" => commands::add_birthday(book, &args),
        "show-birthday" => commands::show_birthday(book, &args),
        "birthdays" => commands::birthdays(book, config.birthday_window_days),
        _ => return Outcome::Reply("Invalid command.".to_string()),
    };

    match result {
        Ok(reply) => Outcome::Reply(reply),
        Err(err) => Outcome::Reply(format!("Error: {}", err)),
    }
}

/// Run the shell loop until `close`/`exit` or end of input.
pub fn run<R, W>(
    book: &mut AddressBook,
    config: &Config,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the assistant bot!")?;
    write!(output, "{}", config.prompt)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match dispatch(book, config, &line) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Ignored => {}
            Outcome::Exit => {
                writeln!(output, "Good bye!")?;
                return Ok(());
            }
        }
        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }

    // End of input without an explicit close/exit still ends the session.
    writeln!(output, "Good bye!")?;
    Ok(())
}
