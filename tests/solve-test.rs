use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use anyhow::Result;

use cagey::puzzle::{Puzzle, Solution};
use cagey::solve::Solver;

#[test]
fn solves_the_classic_puzzle() -> Result<()> {
    let puzzle = Puzzle::from_file(project_path("res/puzzles/classic-6x6.txt"))?;
    let mut solver = Solver::new(&puzzle);
    assert!(solver.solve());
    let solution = solver.solution().unwrap();
    assert!(puzzle.verify_solution(&solution));
    Ok(())
}

#[test]
fn two_solvers_find_the_same_solution() -> Result<()> {
    let puzzle = Puzzle::from_file(project_path("res/puzzles/classic-6x6.txt"))?;
    let mut first = Solver::new(&puzzle);
    let mut second = Solver::new(&puzzle);
    assert!(first.solve());
    assert!(second.solve());
    assert_eq!(first.solution(), second.solution());
    Ok(())
}

/// The 2x2 puzzle has two solutions. The solver tries low values first in
/// reading order, so it must settle on the one starting with 1.
#[test]
fn twin_sums_solves_to_the_low_corner() -> Result<()> {
    let puzzle = Puzzle::from_file(project_path("res/puzzles/twin-sums-2x2.txt"))?;
    let mut solver = Solver::new(&puzzle);
    assert!(solver.solve());
    let expected = Solution::try_from(vec![1, 2, 2, 1]).unwrap();
    assert_eq!(Some(expected), solver.solution());
    Ok(())
}

#[test]
fn three_by_three_solves_to_the_expected_grid() -> Result<()> {
    let puzzle = Puzzle::parse("3\nABB\nACC\nDEE\n3+\n6*\n2-\n3+\n2/\n")?;
    let mut solver = Solver::new(&puzzle);
    assert!(solver.solve());
    let expected = Solution::try_from(vec![1, 2, 3, 2, 3, 1, 3, 1, 2]).unwrap();
    assert_eq!(Some(expected), solver.solution());
    Ok(())
}

#[test]
fn conflicting_single_cell_cages_are_unsolvable() -> Result<()> {
    // both cells of row 0 are pinned to 1
    let puzzle = Puzzle::parse("2\nAB\nCC\n1+\n1+\n3+\n")?;
    let mut solver = Solver::new(&puzzle);
    assert!(!solver.solve());
    assert_eq!(None, solver.solution());
    assert!(solver.grid().cells().iter().all(|cell| cell.is_none()));
    Ok(())
}

#[test]
fn unreachable_cage_target_is_unsolvable() -> Result<()> {
    // no value 1..=2 multiplies to 5
    let puzzle = Puzzle::parse("2\nAB\nBB\n5*\n5+\n")?;
    let mut solver = Solver::new(&puzzle);
    assert!(!solver.solve());
    assert!(solver.grid().cells().iter().all(|cell| cell.is_none()));
    Ok(())
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
