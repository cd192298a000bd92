//! KenKen puzzles

pub use self::cage::{Cage, CageCheck};
pub use self::operator::Operator;

mod cage;
mod operator;
mod parse;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;

use crate::collections::square::{Coord, IsSquare, Square};
use crate::error::{InvalidPuzzle, ParsePuzzleError, PuzzleFromFileError};

pub type CageId = usize;
pub type CellId = usize;
pub type Value = i32;
pub type Solution = Square<Value>;

/// An unsolved KenKen puzzle
#[derive(Debug, PartialEq)]
pub struct Puzzle {
    /// the width and height of the puzzle
    width: usize,
    /// contains all cages in the puzzle
    cages: Vec<Cage>,
    /// the cage id of every cell
    cage_map: Square<CageId>,
}

impl Puzzle {
    /// Creates a puzzle with a specified width and set of cages. The cages
    /// must partition the grid: every cell in exactly one cage.
    pub fn new(width: usize, cages: Vec<Cage>) -> Result<Self, InvalidPuzzle> {
        if width == 0 {
            return Err(InvalidPuzzle::new("puzzle width must be at least 1".into()));
        }
        let cage_map = cage_map(width, &cages)?;
        Ok(Self {
            width,
            cages,
            cage_map,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PuzzleFromFileError> {
        let mut file = File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        let puzzle = Self::parse(&buf)?;
        Ok(puzzle)
    }

    pub fn parse(s: &str) -> Result<Self, ParsePuzzleError> {
        parse::parse_puzzle(s)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    pub fn cage(&self, id: CageId) -> &Cage {
        &self.cages[id]
    }

    /// Returns the cage containing the cell at `coord`
    pub fn cage_at(&self, coord: Coord) -> &Cage {
        &self.cages[self.cage_map[coord]]
    }

    /// Returns a square of values where each value is the id of the cage
    /// containing that cell
    pub fn cell_cage_indices(&self) -> &Square<CageId> {
        &self.cage_map
    }

    /// Returns true if `solution` solves this puzzle: every row and column
    /// holds the values `1..=width` and every cage is satisfied
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        solution.width() == self.width
            && self.rows_and_cols_valid(solution)
            && self.cages_satisfied(solution)
    }

    fn rows_and_cols_valid(&self, solution: &Solution) -> bool {
        let width = self.width as Value;
        solution
            .rows()
            .all(|row| row.iter().copied().sorted().eq(1..=width))
            && (0..self.width).all(|col| solution.col(col).copied().sorted().eq(1..=width))
    }

    fn cages_satisfied(&self, solution: &Solution) -> bool {
        self.cages.iter().all(|cage| {
            let values = cage.cell_ids().iter().map(|&id| Some(solution[id]));
            cage.check(values) == CageCheck::Satisfied
        })
    }
}

impl IsSquare for Puzzle {
    fn width(&self) -> usize {
        self.width
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.width)?;
        for row in self.cage_map.rows() {
            for &id in row {
                let byte = b'A' + id as u8;
                write!(f, "{}", byte as char)?;
            }
            writeln!(f)?;
        }
        for cage in &self.cages {
            writeln!(f, "{}{}", cage.target(), cage.operator().symbol())?;
        }
        Ok(())
    }
}

/// Builds a square of cage ids from the cages' cells. Fails if any cell is
/// out of bounds, in two cages, or in no cage.
fn cage_map(width: usize, cages: &[Cage]) -> Result<Square<CageId>, InvalidPuzzle> {
    let cell_count = width.pow(2);
    let mut cage_map: Vec<Option<CageId>> = vec![None; cell_count];
    for (id, cage) in cages.iter().enumerate() {
        for &cell_id in cage.cell_ids() {
            if cell_id >= cell_count {
                return Err(InvalidPuzzle::new(format!(
                    "cage {} cell {} is outside the grid",
                    id, cell_id
                )));
            }
            match cage_map[cell_id] {
                Some(other) => {
                    return Err(InvalidPuzzle::new(format!(
                        "cell {} belongs to cages {} and {}",
                        cell_id, other, id
                    )))
                }
                None => cage_map[cell_id] = Some(id),
            }
        }
    }
    let ids = cage_map
        .into_iter()
        .enumerate()
        .map(|(cell_id, id)| {
            id.ok_or_else(|| {
                InvalidPuzzle::new(format!("cell {} does not belong to a cage", cell_id))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Square::from_vec(width, ids))
}
