//! Index set input
//!
//! Reads I either from free text (command-line arguments) or interactively:
//! first the cardinality |I|, then that many integers, possibly spread over
//! several lines. Elements may be given in any order; they are sorted before
//! validation.

use crate::domain::index_set::{IndexSet, InvalidIndexSet};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Prompt for the cardinality
pub const CARDINALITY_PROMPT: &str = "Please enter |I|: ";

/// Prompt for the elements
pub const ELEMENTS_PROMPT: &str = "Please enter the elements of I, space-separated: ";

/// Input errors
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading or prompting failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Token is not an integer
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
    /// Cardinality is not a positive integer
    #[error("invalid cardinality: '{0}' (expected a positive integer)")]
    InvalidCardinality(String),
    /// Input ended before all elements were read
    #[error("input ended early: expected {expected} values, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
    /// Elements do not form a valid index set
    #[error(transparent)]
    InvalidIndexSet(#[from] InvalidIndexSet),
}

fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn parse_value(token: &str) -> Result<i64, InputError> {
    token
        .parse()
        .map_err(|_| InputError::InvalidNumber(token.to_string()))
}

/// Parse I from text such as `"2 5 7"` or `"7,2,5"`
pub fn parse_elements(text: &str) -> Result<IndexSet, InputError> {
    let values = split_tokens(text)
        .map(parse_value)
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(IndexSet::from_signed(&values)?)
}

/// Whitespace token stream over a buffered reader
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(split_tokens(&line).map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Interactively read |I| and the elements of I
pub fn read_index_set<R: BufRead, W: Write>(
    tokens: &mut TokenReader<R>,
    prompt: &mut W,
) -> Result<IndexSet, InputError> {
    writeln!(prompt, "{}", CARDINALITY_PROMPT)?;
    prompt.flush()?;

    let token = tokens
        .next_token()?
        .ok_or(InputError::UnexpectedEof {
            expected: 1,
            found: 0,
        })?;
    let size = match token.parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => return Err(InputError::InvalidCardinality(token)),
    };

    writeln!(prompt, "{}", ELEMENTS_PROMPT)?;
    prompt.flush()?;

    let mut values = Vec::new();
    while values.len() < size {
        let Some(token) = tokens.next_token()? else {
            return Err(InputError::UnexpectedEof {
                expected: size,
                found: values.len(),
            });
        };
        values.push(parse_value(&token)?);
    }

    Ok(IndexSet::from_signed(&values)?)
}
