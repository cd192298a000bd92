use crate::collections::square::{Coord, IsSquare, Square};
use crate::puzzle::{CellId, Solution, Value};

/// The cells of a puzzle as they are filled in by the solver. A cell with no
/// value yet holds `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Square<Option<Value>>,
}

impl Grid {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            cells: Square::with_width(width),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn cells(&self) -> &Square<Option<Value>> {
        &self.cells
    }

    pub fn get(&self, coord: Coord) -> Option<Value> {
        self.cells[coord]
    }

    pub(crate) fn value(&self, id: CellId) -> Option<Value> {
        self.cells[id]
    }

    pub(crate) fn set(&mut self, coord: Coord, value: Value) {
        self.cells[coord] = Some(value);
    }

    pub(crate) fn unset(&mut self, coord: Coord) {
        self.cells[coord] = None;
    }

    /// Returns the first cell with no value, scanning rows top to bottom and
    /// each row left to right
    pub(crate) fn find_first_empty(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(|value| value.is_none())
            .map(|id| self.cells.coord_at(id))
    }

    pub(crate) fn used_in_row(&self, row: usize, value: Value) -> bool {
        self.cells.row(row).iter().any(|&cell| cell == Some(value))
    }

    pub(crate) fn used_in_col(&self, col: usize, value: Value) -> bool {
        self.cells.col(col).any(|&cell| cell == Some(value))
    }

    /// Returns the values of all cells, or `None` if any cell has no value
    pub fn completed_values(&self) -> Option<Solution> {
        let values = self.cells.iter().copied().collect::<Option<Vec<_>>>()?;
        Some(Square::from_vec(self.width(), values))
    }
}

#[cfg(test)]
mod tests {
    use crate::collections::square::Coord;
    use crate::solve::grid::Grid;

    #[test]
    fn find_first_empty_scans_in_reading_order() {
        let mut grid = Grid::new(3);
        assert_eq!(Some(Coord::new(0, 0)), grid.find_first_empty());
        grid.set(Coord::new(0, 0), 1);
        grid.set(Coord::new(0, 1), 2);
        assert_eq!(Some(Coord::new(0, 2)), grid.find_first_empty());
        grid.set(Coord::new(0, 2), 3);
        assert_eq!(Some(Coord::new(1, 0)), grid.find_first_empty());
    }

    #[test]
    fn unset_reopens_a_cell() {
        let mut grid = Grid::new(2);
        grid.set(Coord::new(0, 0), 1);
        grid.unset(Coord::new(0, 0));
        assert_eq!(None, grid.get(Coord::new(0, 0)));
        assert_eq!(Some(Coord::new(0, 0)), grid.find_first_empty());
    }

    #[test]
    fn used_in_row_and_col() {
        let mut grid = Grid::new(3);
        grid.set(Coord::new(1, 2), 3);
        assert!(grid.used_in_row(1, 3));
        assert!(!grid.used_in_row(0, 3));
        assert!(grid.used_in_col(2, 3));
        assert!(!grid.used_in_col(1, 3));
    }

    #[test]
    fn completed_values_requires_every_cell() {
        let mut grid = Grid::new(2);
        grid.set(Coord::new(0, 0), 1);
        grid.set(Coord::new(0, 1), 2);
        grid.set(Coord::new(1, 0), 2);
        assert_eq!(None, grid.completed_values());
        grid.set(Coord::new(1, 1), 1);
        let solution = grid.completed_values().unwrap();
        assert_eq!(vec![1, 2, 2, 1], *solution);
    }
}
