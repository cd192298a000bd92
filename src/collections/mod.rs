pub mod square;

pub use self::square::{Coord, Square};
