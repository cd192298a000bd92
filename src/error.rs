use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

/// The puzzle is structurally broken and cannot be solved or even searched
#[derive(Error, Debug)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParsePuzzleError),
}

#[derive(Debug, Error)]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

pub(crate) const UNEXPECTED_END: ParseError = ParseError::from_kind(ParseErrorKind::UnexpectedEnd);

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    kind: ParseErrorKind,
    token: Option<String>,
    position: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, token: impl Display, position: usize) -> Self {
        Self {
            kind,
            token: Some(token.to_string()),
            position: Some(position),
        }
    }

    pub(crate) const fn from_kind(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            token: None,
            position: None,
        }
    }
}

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParseErrorKind {
    InvalidCageId,
    InvalidCageTarget,
    InvalidOperator,
    InvalidSize,
    InvalidToken,
    SizeTooBig,
    UnexpectedEnd,
    UnexpectedToken,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorKind::InvalidCageId => "Invalid cage ID",
            ParseErrorKind::InvalidCageTarget => "Invalid cage target",
            ParseErrorKind::InvalidOperator => "Invalid operator",
            ParseErrorKind::InvalidSize => "Invalid puzzle size",
            ParseErrorKind::InvalidToken => "Invalid token",
            ParseErrorKind::SizeTooBig => "Puzzle size too big",
            ParseErrorKind::UnexpectedEnd => "Unexpected end",
            ParseErrorKind::UnexpectedToken => "Unexpected token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(position) = &self.position {
            write!(f, " at {}", position)?;
        }
        Ok(())
    }
}
