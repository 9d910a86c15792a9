//! A tiny line-oriented language for driving an [`UndoableBag`] of strings.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! add x         -> true / false
//! remove        -> the removed element, or (empty)
//! remove x      -> true / false
//! clear         -> always an error
//! undo, redo    -> true / false
//! size          -> number of entries
//! contains x    -> true / false
//! count x       -> occurrences of x
//! show          -> sorted contents, e.g. {a, b, b}
//! ```
use std::{io::Write, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Bag, BagError, Undo, UndoableBag};

pub const EMPTY: &str = "(empty)";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Add(String),
    Remove,
    RemoveEntry(String),
    Clear,
    Undo,
    Redo,
    Size,
    Contains(String),
    Count(String),
    Show,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseCommandError {
    #[error("Unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` takes {expected}")]
    Arity {
        command: String,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}")]
    Parse {
        line: usize,
        #[source]
        source: ParseCommandError,
    },
    #[error("line {line}")]
    Bag {
        line: usize,
        #[source]
        source: BagError,
    },
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().unwrap_or_default();
        let args = words.collect_vec();
        let arity = |expected| ParseCommandError::Arity {
            command: name.to_string(),
            expected,
        };
        Ok(match (name, args.as_slice()) {
            ("add", [x]) => Command::Add(x.to_string()),
            ("remove", []) => Command::Remove,
            ("remove", [x]) => Command::RemoveEntry(x.to_string()),
            ("clear", []) => Command::Clear,
            ("undo", []) => Command::Undo,
            ("redo", []) => Command::Redo,
            ("size", []) => Command::Size,
            ("contains", [x]) => Command::Contains(x.to_string()),
            ("count", [x]) => Command::Count(x.to_string()),
            ("show", []) => Command::Show,
            ("add" | "contains" | "count", _) => return Err(arity("exactly one element")),
            ("remove", _) => return Err(arity("at most one element")),
            ("clear" | "undo" | "redo" | "size" | "show", _) => return Err(arity("no arguments")),
            _ => return Err(ParseCommandError::Unknown(name.to_string())),
        })
    }
}

/// Parses every command of `script` along with its 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    script
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            text.parse()
                .map(|command| (line, command))
                .map_err(|source| ScriptError::Parse { line, source })
        })
        .collect()
}

/// Runs one command and renders its result.
pub fn execute<B: Bag<String>>(
    bag: &mut UndoableBag<String, B>,
    command: &Command,
) -> Result<String, BagError> {
    Ok(match command {
        Command::Add(x) => bag.add(x.clone()).to_string(),
        Command::Remove => bag.remove().unwrap_or_else(|| EMPTY.to_string()),
        Command::RemoveEntry(x) => bag.remove_entry(x).to_string(),
        Command::Clear => {
            bag.clear()?;
            true.to_string()
        }
        Command::Undo => bag.undo().to_string(),
        Command::Redo => bag.redo().to_string(),
        Command::Size => bag.len().to_string(),
        Command::Contains(x) => bag.contains(x).to_string(),
        Command::Count(x) => bag.frequency_of(x).to_string(),
        Command::Show => format!("{{{}}}", bag.to_vec().into_iter().sorted().join(", ")),
    })
}

/// Parses the whole of `script`, then runs it against `bag`, writing one line per command to `out`.
///
/// Nothing runs if any line fails to parse. The first failing command stops the run; lines
/// produced before it have already been written.
pub fn run_script<B: Bag<String>, W: Write>(
    bag: &mut UndoableBag<String, B>,
    script: &str,
    out: &mut W,
) -> Result<(), ScriptError> {
    let commands = parse_script(script)?;
    log::info!("Parsed {} commands", commands.len());
    for (line, command) in commands {
        let output = execute(bag, &command).map_err(|source| ScriptError::Bag { line, source })?;
        writeln!(out, "{}", output)?;
    }
    Ok(())
}
