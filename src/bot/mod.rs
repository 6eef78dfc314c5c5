//! Interactive assistant bot.
//!
//! This module provides the line-oriented command interpreter: it reads one
//! command per line, dispatches it to a handler, and writes the reply. Errors
//! from handlers are turned into their message text here and nowhere else.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};

use crate::book::AddressBook;
use crate::config::Config;
use crate::error::AssistantError;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// Source of the current date for birthday queries.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// What the bot does after handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep reading.
    Say(String),
    /// Show the text and stop.
    Quit(String),
    /// Blank line, nothing to show.
    Silent,
}

/// The assistant: one address book plus the settings and clock it runs with.
pub struct AssistantBot {
    book: AddressBook,
    config: Config,
    clock: Box<dyn Clock>,
}

impl AssistantBot {
    /// Create a bot with an empty book that reads dates from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }

    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock: Box::new(clock),
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Interpret one raw input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some((word, args)) = parse_input(line) else {
            return Reply::Silent;
        };

        let command = match word.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(command = %word, "Unknown command");
                return Reply::Say(err.to_string());
            }
        };

        debug!(%command, args = args.len(), "Dispatching command");

        let result = match command {
            Command::Exit => return Reply::Quit(FAREWELL.to_string()),
            Command::Hello => Ok(handlers::hello()),
            Command::Add => handlers::add_contact(&args, &mut self.book),
            Command::Change => handlers::change_contact(&args, &mut self.book),
            Command::Phone => handlers::show_phone(&args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(&args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(&args, &self.book),
            Command::Birthdays => handlers::birthdays(
                &args,
                &self.book,
                self.config.birthday_window_days,
                self.clock.today(),
            ),
        };

        match result {
            Ok(text) => Reply::Say(text),
            Err(AssistantError::Validation(invalid)) => {
                warn!(%command, rejected = invalid.rejected_value(), "Validation failed");
                Reply::Say(invalid.to_string())
            }
            Err(err) => {
                warn!(%command, error = ?err, "Command failed");
                Reply::Say(err.to_string())
            }
        }
    }
}

/// Run the read-eval-print loop until an exit command or end of input.
///
/// Replies go to `output`; end of input behaves like `exit`. Bytes that are
/// not valid UTF-8 are replaced rather than ending the session.
pub fn run<R, W>(bot: &mut AssistantBot, mut input: R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    info!("Assistant session started");
    writeln!(output, "{}", WELCOME)?;

    let mut buffer = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            info!("End of input, closing session");
            break;
        }

        let line = String::from_utf8_lossy(&buffer);
        match bot.handle_line(&line) {
            Reply::Say(text) => writeln!(output, "{}", text)?,
            Reply::Quit(text) => {
                writeln!(output, "{}", text)?;
                info!("Exit requested, closing session");
                break;
            }
            Reply::Silent => {}
        }
    }

    info!(contacts = bot.book().len(), "Assistant session finished");
    Ok(())
}
