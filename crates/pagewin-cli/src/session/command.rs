//! Commands accepted on the session's input stream.

use std::num::NonZeroUsize;
use std::str::FromStr;

use thiserror::Error;

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    First,
    Last,
    Next,
    Previous,
    /// Raw page-box text, validated by the window.
    Page(String),
    Size(NonZeroUsize),
    Reset,
    Reload,
    State,
    Options,
    Help,
    Quit,
}

/// Reasons a line is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' expects an argument")]
    MissingArgument(&'static str),
    #[error("invalid page size '{0}': expected a positive integer")]
    InvalidPageSize(String),
}

impl Command {
    /// Usage text printed by `help`.
    pub const USAGE: &'static str = "\
commands:
  first | f          go to the first page
  last | l           go to the last page
  next | n           go to the next page
  prev | p           go to the previous page
  page <number>      go to a page
  size <number>      change the page size
  reset              restore the initial page size and first page
  reload             read the records file again
  state              print the pagination state
  options            print the offered page sizes
  help               print this text
  quit | q           exit";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, argument) = match line.split_once(char::is_whitespace) {
            Some((keyword, argument)) => (keyword, Some(argument.trim())),
            None => (line, None),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "first" | "f" => Self::First,
            "last" | "l" => Self::Last,
            "next" | "n" => Self::Next,
            "prev" | "previous" | "p" => Self::Previous,
            "page" | "goto" => {
                let text = argument.ok_or(CommandError::MissingArgument("page"))?;
                Self::Page(text.to_owned())
            }
            "size" => {
                let text = argument.ok_or(CommandError::MissingArgument("size"))?;
                let size = text
                    .parse::<NonZeroUsize>()
                    .map_err(|_| CommandError::InvalidPageSize(text.to_owned()))?;
                Self::Size(size)
            }
            "reset" => Self::Reset,
            "reload" => Self::Reload,
            "state" => Self::State,
            "options" => Self::Options,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_owned())),
        };

        Ok(command)
    }
}
