#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::Result;
use cagey::puzzle::Puzzle;
use cagey::solve::Solver;
use itertools::Itertools;

use crate::options::Options;

mod options;

const CLASSIC_PUZZLE: &str = include_str!("../../../res/puzzles/classic-6x6.txt");

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args();
    let puzzle = read_puzzle(&options)?;
    print_puzzle(&puzzle);
    let mut solver = Solver::new(&puzzle);
    if solver.solve() {
        let solution = solver.solution().expect("solved grid is complete");
        println!("Puzzle solved");
        print!("{}", solution);
    } else {
        println!("Puzzle is not solvable");
    }
    Ok(())
}

fn read_puzzle(options: &Options) -> Result<Puzzle> {
    let puzzle = match options.input() {
        Some(path) => {
            println!("Reading puzzle from \"{}\"", path.display());
            Puzzle::from_file(path)?
        }
        None => {
            println!("Solving the built-in puzzle");
            Puzzle::parse(CLASSIC_PUZZLE)?
        }
    };
    Ok(puzzle)
}

fn print_puzzle(puzzle: &Puzzle) {
    let cages = puzzle
        .cages()
        .iter()
        .enumerate()
        .map(|(id, cage)| format!(" {:>2}: {}{}", id, cage.operator().symbol(), cage.target()))
        .join("\n");
    println!("{}{}", puzzle.cell_cage_indices(), cages);
}
