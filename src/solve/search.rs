use crate::collections::square::{Coord, IsSquare};
use crate::puzzle::{CageCheck, Puzzle, Value};
use crate::solve::grid::Grid;

/// Fills the grid by depth-first backtracking. Cells are tried in reading
/// order, values in ascending order. Returns true as soon as every cell has a
/// value, leaving the first solution in the grid; returns false with the grid
/// unchanged if no assignment works.
pub(crate) fn search(puzzle: &Puzzle, grid: &mut Grid) -> bool {
    let coord = match grid.find_first_empty() {
        Some(coord) => coord,
        None => return true,
    };
    for value in 1..=puzzle.width() as Value {
        if !is_safe(puzzle, grid, coord, value) {
            continue;
        }
        debug!("Guessing with {} at {:?}", value, coord);
        grid.set(coord, value);
        if search(puzzle, grid) {
            return true;
        }
        debug!("Removing {} from {:?}", value, coord);
        grid.unset(coord);
    }
    false
}

/// Returns true if placing `value` at `coord` breaks no row, column, or cage
/// constraint given the values placed so far
fn is_safe(puzzle: &Puzzle, grid: &Grid, coord: Coord, value: Value) -> bool {
    !grid.used_in_row(coord.row(), value)
        && !grid.used_in_col(coord.col(), value)
        && check_cage_with(puzzle, grid, coord, value) != CageCheck::Violated
}

/// Checks the cage containing `coord` as if `value` were placed there. The
/// grid itself is not touched. An `Unknown` result does not reject the value:
/// a cage with open cells may still be completed.
fn check_cage_with(puzzle: &Puzzle, grid: &Grid, coord: Coord, value: Value) -> CageCheck {
    let cage = puzzle.cage_at(coord);
    let cell_id = puzzle.index_at(coord);
    let values = cage.cell_ids().iter().map(|&id| {
        if id == cell_id {
            Some(value)
        } else {
            grid.value(id)
        }
    });
    cage.check(values)
}
