//! Solve KenKen puzzles

pub use self::grid::Grid;

mod grid;
mod search;

use crate::puzzle::{Puzzle, Solution};

/// Solves a puzzle by depth-first backtracking search.
///
/// The search always visits cells and candidate values in the same order, so
/// a puzzle with more than one solution still solves to the same one every
/// time.
pub struct Solver<'a> {
    puzzle: &'a Puzzle,
    grid: Grid,
}

impl<'a> Solver<'a> {
    pub fn new(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            grid: Grid::new(puzzle.width()),
        }
    }

    /// Runs the search to completion. Returns false if the puzzle has no
    /// solution, in which case the grid is left with every cell open rather
    /// than holding a partial answer.
    pub fn solve(&mut self) -> bool {
        info!("Begin backtracking search");
        let solved = search::search(self.puzzle, &mut self.grid);
        if solved {
            debug_assert!(self
                .grid
                .completed_values()
                .map_or(false, |solution| self.puzzle.verify_solution(&solution)));
            info!("Puzzle solved");
        } else {
            info!("Puzzle is not solvable");
        }
        solved
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The solved grid, or `None` if `solve` has not succeeded
    pub fn solution(&self) -> Option<Solution> {
        self.grid.completed_values()
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::Puzzle;
    use crate::solve::Solver;

    #[test]
    fn solve_verifies_its_own_answer() {
        let puzzle = Puzzle::parse("2\nAB\nBB\n2+\n4+\n").unwrap();
        let mut solver = Solver::new(&puzzle);
        assert!(solver.solve());
        let solution = solver.solution().unwrap();
        assert!(puzzle.verify_solution(&solution));
    }

    #[test]
    fn solution_is_none_before_solving() {
        let puzzle = Puzzle::parse("2\nAB\nBB\n2+\n4+\n").unwrap();
        let solver = Solver::new(&puzzle);
        assert_eq!(None, solver.solution());
    }
}
