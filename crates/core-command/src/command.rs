//! Structured command parsing.
//!
//! Converts a tokenized line into a [`Command`] enum so the dispatcher stays
//! free of string matching. Parsing is pure classification with no side
//! effects; trailing extra tokens are tolerated and ignored. Errors surface
//! as [`ParseError`] which higher layers log and skip.

use thiserror::Error;

use crate::token::tokenize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// (Re)initialize the session with a weight budget and starting text.
    Create { max_weight: i64, text: String },
    /// Append text to the buffer.
    Append(String),
    /// Replace every occurrence of one character with another.
    Replace { find: char, replace: char },
    /// Truncate the buffer from a character index onward.
    Delete(i64),
    Undo,
    Redo,
    Print,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command line")]
    Empty,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("{command} requires {expected} argument(s)")]
    MissingArgument {
        command: &'static str,
        expected: usize,
    },
    #[error("invalid integer `{0}`")]
    InvalidInteger(String),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(line);
        let Some((name, args)) = tokens.split_first() else {
            return Err(ParseError::Empty);
        };
        match name.as_str() {
            "CREATE" => {
                let (weight, text) = two_args("CREATE", args)?;
                Ok(Command::Create {
                    max_weight: parse_int(weight)?,
                    text: text.clone(),
                })
            }
            "APPEND" => Ok(Command::Append(one_arg("APPEND", args)?.clone())),
            "REPLACE" => {
                let (find, replace) = two_args("REPLACE", args)?;
                Ok(Command::Replace {
                    find: first_char(find),
                    replace: first_char(replace),
                })
            }
            "DELETE" => Ok(Command::Delete(parse_int(one_arg("DELETE", args)?)?)),
            "UNDO" => Ok(Command::Undo),
            "REDO" => Ok(Command::Redo),
            "PRINT" => Ok(Command::Print),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn one_arg<'a>(command: &'static str, args: &'a [String]) -> Result<&'a String, ParseError> {
    args.first().ok_or(ParseError::MissingArgument {
        command,
        expected: 1,
    })
}

fn two_args<'a>(
    command: &'static str,
    args: &'a [String],
) -> Result<(&'a String, &'a String), ParseError> {
    match args {
        [a, b, ..] => Ok((a, b)),
        _ => Err(ParseError::MissingArgument {
            command,
            expected: 2,
        }),
    }
}

fn parse_int(token: &str) -> Result<i64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()))
}

// The tokenizer never emits empty tokens, but the fallback keeps this total.
fn first_char(token: &str) -> char {
    token.chars().next().unwrap_or('\0')
}
