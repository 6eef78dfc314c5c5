//! Command words and line tokenizing.

use crate::error::AssistantError;
use std::fmt;
use std::str::FromStr;

/// A command understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// The canonical command word.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Exit => "exit",
        }
    }
}

impl FromStr for Command {
    type Err = AssistantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(AssistantError::UnknownCommand(s.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a raw input line into its command word and arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    Some((word, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_str() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("add-birthday".parse::<Command>().unwrap(), Command::AddBirthday);
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
    }

    #[test]
    fn test_command_words_are_case_sensitive() {
        assert_eq!(
            "HELLO".parse::<Command>(),
            Err(AssistantError::UnknownCommand("HELLO".to_string()))
        );
        assert!("Show-Birthday".parse::<Command>().is_err());
        assert!("Exit".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            "fly".parse::<Command>(),
            Err(AssistantError::UnknownCommand("fly".to_string()))
        );
        assert!("addbirthday".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_input() {
        let (word, args) = parse_input("  add   John 1234567890 ").unwrap();
        assert_eq!(word, "add");
        assert_eq!(args, vec!["John", "1234567890"]);

        let (word, args) = parse_input("all").unwrap();
        assert_eq!(word, "all");
        assert!(args.is_empty());
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }
}
