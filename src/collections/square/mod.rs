mod coord;

pub use self::coord::Coord;

use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

/// Row and column geometry shared by square grids
pub trait IsSquare {
    fn width(&self) -> usize;

    fn cell_count(&self) -> usize {
        self.width().pow(2)
    }

    fn row_at(&self, index: usize) -> usize {
        assert!(index < self.cell_count());
        index / self.width()
    }

    fn col_at(&self, index: usize) -> usize {
        assert!(index < self.cell_count());
        index % self.width()
    }

    /// Coordinates of the cell at `index`, counting cells in reading order
    fn coord_at(&self, index: usize) -> Coord {
        Coord::new(self.row_at(index), self.col_at(index))
    }

    fn index_at(&self, coord: Coord) -> usize {
        assert!(coord.row() < self.width());
        assert!(coord.col() < self.width());
        coord.row() * self.width() + coord.col()
    }
}

/// A container of elements represented in a square grid
#[derive(Clone, Debug, PartialEq)]
pub struct Square<T> {
    width: usize,
    elements: Vec<T>,
}

impl<T> Square<T> {
    /// Returns the width (and height) of the grid
    pub fn width(&self) -> usize {
        self.width
    }

    /// Creates a new square with a specified width, filled with the default value
    pub fn with_width(width: usize) -> Square<T>
    where
        T: Clone + Default,
    {
        Self {
            width,
            elements: vec![Default::default(); width.pow(2)],
        }
    }

    /// Creates a new square with a specified width, filled with a specified value
    pub fn with_width_and_value(width: usize, value: T) -> Square<T>
    where
        T: Clone,
    {
        Self {
            width,
            elements: vec![value; width.pow(2)],
        }
    }

    pub(crate) fn from_vec(width: usize, elements: Vec<T>) -> Square<T> {
        debug_assert_eq!(width.pow(2), elements.len());
        Self { width, elements }
    }

    /// Returns an iterator over the rows of the square
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns one row as a slice
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.width);
        &self.elements[row * self.width..(row + 1) * self.width]
    }

    /// Returns an iterator over one column, top to bottom
    pub fn col(&self, col: usize) -> impl Iterator<Item = &T> {
        assert!(col < self.width);
        self.elements[col..].iter().step_by(self.width)
    }
}

impl<T> IsSquare for Square<T> {
    fn width(&self) -> usize {
        self.width
    }

    fn cell_count(&self) -> usize {
        self.elements.len()
    }
}

impl<T> Deref for Square<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T> Index<usize> for Square<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T> IndexMut<usize> for Square<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.elements[index]
    }
}

impl<T> Index<Coord> for Square<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_at(coord)]
    }
}

impl<T> IndexMut<Coord> for Square<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_at(coord);
        &mut self.elements[index]
    }
}

impl<T> Display for Square<T>
where
    T: Display + Ord,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.elements.iter().max().unwrap().to_string().len();
        for row in self.rows() {
            for element in row {
                write!(f, "{:>1$} ", element, len)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(PartialEq)]
pub struct NonSquareLength(usize);

impl Debug for NonSquareLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The length of elements ({}) is not square", self.0)
    }
}

impl<T> TryFrom<Vec<T>> for Square<T> {
    type Error = NonSquareLength;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        let width = (elements.len() as f32).sqrt() as usize;
        if elements.len() != width.pow(2) {
            return Err(NonSquareLength(elements.len()));
        }
        Ok(Self { width, elements })
    }
}

#[cfg(test)]
mod tests {
    use std::convert::TryFrom;

    use crate::collections::square::{Coord, IsSquare, NonSquareLength, Square};

    #[test]
    fn try_from_vec() {
        assert!(Square::try_from(vec![1; 9]).is_ok())
    }

    #[test]
    fn try_from_non_square_vec() {
        assert_eq!(Err(NonSquareLength(8)), Square::try_from(vec![1; 8]))
    }

    #[test]
    fn coord_at_counts_in_reading_order() {
        let square = Square::with_width_and_value(3, 0);
        assert_eq!(Coord::new(0, 0), square.coord_at(0));
        assert_eq!(Coord::new(0, 2), square.coord_at(2));
        assert_eq!(Coord::new(1, 0), square.coord_at(3));
        assert_eq!(Coord::new(2, 1), square.coord_at(7));
    }

    #[test]
    fn index_at_inverts_coord_at() {
        let square = Square::with_width_and_value(4, 0);
        for index in 0..square.cell_count() {
            assert_eq!(index, square.index_at(square.coord_at(index)));
        }
    }

    #[test]
    fn row_and_col() {
        let square = Square::try_from((0..9).collect::<Vec<i32>>()).unwrap();
        assert_eq!(&[3, 4, 5][..], square.row(1));
        assert_eq!(vec![1, 4, 7], square.col(1).copied().collect::<Vec<_>>());
    }
}
