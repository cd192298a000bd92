//! Parse puzzles from text
//!
//! A puzzle is its width, then one letter per cell naming the cell's cage in
//! reading order, then one target number and operator per cage, in the
//! alphabetical order of the cage letters. Whitespace between tokens is
//! ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Display;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseError, ParseErrorKind, ParsePuzzleError, UNEXPECTED_END};
use crate::puzzle::{Cage, CellId, Operator, Puzzle, Value};

pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut tokens = TokenIterator::new(s);
    let (i, token) = tokens.next()?.ok_or(UNEXPECTED_END)?;
    let width = token
        .number()
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidSize, &token, i))? as usize;
    if width > usize::from(b'Z' - b'A' + 1) {
        return Err(ParseError::new(ParseErrorKind::SizeTooBig, width, i).into());
    }
    let cage_cells = read_cage_cells(&mut tokens, width)?;
    let cage_targets = read_cage_targets(&mut tokens, cage_cells.len())?;
    if let Some((i, token)) = tokens.next()? {
        return Err(ParseError::new(ParseErrorKind::UnexpectedToken, &token, i).into());
    }
    let cages = cage_cells
        .into_iter()
        .zip(cage_targets)
        .map(|((_, cells), (target, operator))| Cage::new(cells, operator, target))
        .collect::<Result<Vec<_>, _>>()?;
    let puzzle = Puzzle::new(width, cages)?;
    Ok(puzzle)
}

fn read_cage_cells(
    tokens: &mut TokenIterator<'_>,
    width: usize,
) -> Result<BTreeMap<char, Vec<CellId>>, ParseError> {
    let mut cages: BTreeMap<char, Vec<CellId>> = BTreeMap::new();
    for cell_id in 0..width.pow(2) {
        let (i, token) = tokens.next()?.ok_or(UNEXPECTED_END)?;
        let letter = token
            .letter()
            .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidCageId, &token, i))?;
        cages.entry(letter).or_insert_with(Vec::new).push(cell_id);
    }
    Ok(cages)
}

fn read_cage_targets(
    tokens: &mut TokenIterator<'_>,
    cage_count: usize,
) -> Result<Vec<(Value, Operator)>, ParseError> {
    (0..cage_count)
        .map(|_| {
            let (i, token) = tokens.next()?.ok_or(UNEXPECTED_END)?;
            let target = token
                .number()
                .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidCageTarget, &token, i))?;
            let (i, token) = tokens.next()?.ok_or(UNEXPECTED_END)?;
            let operator = match token {
                Token::Operator(operator) => operator,
                _ => return Err(ParseError::new(ParseErrorKind::InvalidOperator, &token, i)),
            };
            Ok((target as Value, operator))
        })
        .collect()
}

enum Token {
    Letter(char),
    Number(u32),
    Operator(Operator),
}

impl Token {
    fn letter(&self) -> Option<char> {
        match *self {
            Token::Letter(letter) => Some(letter),
            _ => None,
        }
    }

    fn number(&self) -> Option<u32> {
        match *self {
            Token::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Letter(letter) => write!(f, "{}", letter),
            Token::Number(number) => write!(f, "{}", number),
            Token::Operator(operator) => write!(f, "{}", operator.symbol()),
        }
    }
}

struct TokenIterator<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> TokenIterator<'a> {
    fn new(s: &str) -> TokenIterator<'_> {
        TokenIterator {
            chars: s.char_indices().peekable(),
        }
    }

    /// Returns the next token and its byte position, skipping any whitespace
    fn next(&mut self) -> Result<Option<(usize, Token)>, ParseError> {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.chars.next();
        }
        let &(i, c) = match self.chars.peek() {
            Some(v) => v,
            None => return Ok(None),
        };
        let token = if c.is_ascii_digit() {
            let mut s = String::new();
            while let Some(&(_, c)) = self.chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                s.push(c);
                self.chars.next();
            }
            let number = s
                .parse()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidToken, &s, i))?;
            Token::Number(number)
        } else if let Some(operator) = Operator::from_symbol(c) {
            self.chars.next();
            Token::Operator(operator)
        } else if c.is_ascii_uppercase() {
            self.chars.next();
            Token::Letter(c)
        } else {
            return Err(ParseError::new(ParseErrorKind::InvalidToken, c, i));
        };
        Ok(Some((i, token)))
    }
}
