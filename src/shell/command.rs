//! Parsing of interactive shell commands.
//!
//! Grammar (one command per line, surrounding whitespace ignored):
//!
//! ```text
//! exit | chars | asciiArt
//! add <sel> | remove <sel>      sel := <char> | all | space | <char>-<char>
//! res up | res down
//! image <path>
//! output html | output console
//! ```
//!
//! `all` selects printable ASCII (`' '..='~'`). Ranges accept either
//! endpoint order.
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Printable ASCII, selected by `add all` / `remove all`.
pub const PRINTABLE_ASCII: RangeInclusive<char> = ' '..='~';

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Chars,
    Add(CharSelection),
    Remove(CharSelection),
    Res(ResChange),
    Image(PathBuf),
    Output(OutputKind),
    AsciiArt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CharSelection {
    Single(char),
    All,
    Range(char, char),
}

impl CharSelection {
    /// Characters selected, in ascending order.
    pub fn chars(&self) -> Vec<char> {
        match *self {
            CharSelection::Single(c) => vec![c],
            CharSelection::All => PRINTABLE_ASCII.collect(),
            CharSelection::Range(lo, hi) => (lo..=hi).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResChange {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    Console,
    Html,
}

/// Command family used to pick the format-error message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Res,
    Add,
    Remove,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command or wrong argument count.
    Invalid,
    /// Known command with a malformed argument.
    IncorrectFormat(CommandKind),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            CommandError::Invalid => "Did not execute due to incorrect command.",
            CommandError::IncorrectFormat(CommandKind::Res) => {
                "Did not change resolution due to incorrect format."
            }
            CommandError::IncorrectFormat(CommandKind::Add) => {
                "Did not add due to incorrect format."
            }
            CommandError::IncorrectFormat(CommandKind::Remove) => {
                "Did not remove due to incorrect format."
            }
            CommandError::IncorrectFormat(CommandKind::Output) => {
                "Did not change output method due to incorrect format."
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for CommandError {}

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (head, arg) = match line.split_once(' ') {
            Some((head, arg)) => (head, Some(arg)),
            None => (line, None),
        };
        match (head, arg) {
            ("exit", None) => Ok(Command::Exit),
            ("chars", None) => Ok(Command::Chars),
            ("asciiArt", None) => Ok(Command::AsciiArt),
            ("add", Some(arg)) => parse_selection(arg)
                .map(Command::Add)
                .ok_or(CommandError::IncorrectFormat(CommandKind::Add)),
            ("remove", Some(arg)) => parse_selection(arg)
                .map(Command::Remove)
                .ok_or(CommandError::IncorrectFormat(CommandKind::Remove)),
            ("res", arg) => match arg {
                Some("up") => Ok(Command::Res(ResChange::Up)),
                Some("down") => Ok(Command::Res(ResChange::Down)),
                _ => Err(CommandError::IncorrectFormat(CommandKind::Res)),
            },
            ("image", Some(path)) if !path.is_empty() && !path.contains(' ') => {
                Ok(Command::Image(PathBuf::from(path)))
            }
            ("output", arg) => match arg {
                Some("html") => Ok(Command::Output(OutputKind::Html)),
                Some("console") => Ok(Command::Output(OutputKind::Console)),
                _ => Err(CommandError::IncorrectFormat(CommandKind::Output)),
            },
            _ => Err(CommandError::Invalid),
        }
    }
}

fn parse_selection(arg: &str) -> Option<CharSelection> {
    match arg {
        "all" => return Some(CharSelection::All),
        "space" => return Some(CharSelection::Single(' ')),
        _ => {}
    }
    let chars: Vec<char> = arg.chars().collect();
    match chars.as_slice() {
        [c] => Some(CharSelection::Single(*c)),
        [a, '-', b] => Some(CharSelection::Range(*a.min(b), *a.max(b))),
        _ => None,
    }
}
