use itertools::Itertools;

use crate::error::InvalidPuzzle;
use crate::puzzle::{CellId, Operator, Value};

/// A cage in a KenKen puzzle
///
/// Every cell in a KenKen puzzle belongs to a cage.
/// Every cage has an operator and a target number.
#[derive(Debug, PartialEq)]
pub struct Cage {
    /// A list of the positions of the cells in this cage
    cell_ids: Box<[CellId]>,

    /// The math operator that must be used with the numbers in the cage
    /// to produce the target number
    operator: Operator,

    /// The target number that must be produced using the numbers in this cage
    target: Value,
}

impl Cage {
    pub fn new(
        cell_ids: impl Into<Box<[CellId]>>,
        operator: Operator,
        target: Value,
    ) -> Result<Self, InvalidPuzzle> {
        fn inner(
            mut cell_ids: Box<[CellId]>,
            operator: Operator,
            target: Value,
        ) -> Result<Cage, InvalidPuzzle> {
            cell_ids.sort_unstable();
            let cage = Cage {
                cell_ids,
                operator,
                target,
            };
            validate(&cage)?;
            Ok(cage)
        }
        inner(cell_ids.into(), operator, target)
    }

    /// The number on the cage
    pub fn target(&self) -> Value {
        self.target
    }

    /// The math operator on the cage
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The IDs of the cells in the cage
    pub fn cell_ids(&self) -> &[CellId] {
        &self.cell_ids
    }

    /// Checks the cage constraint against one value per cage cell, given in
    /// `cell_ids` order. A `None` value is a cell with no value yet; a cage
    /// with such a cell checks as `Unknown`, never `Violated`.
    ///
    /// Panics if a two-cell operator is given a number of values other than
    /// two.
    pub fn check<I>(&self, values: I) -> CageCheck
    where
        I: IntoIterator<Item = Option<Value>>,
    {
        match self.operator {
            Operator::Add => check_sum(self.target, values),
            Operator::Subtract => check_difference(self.target, values),
            Operator::Multiply => check_product(self.target, values),
            Operator::Divide => check_quotient(self.target, values),
        }
    }
}

/// The state of a cage constraint under a partial assignment of values
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CageCheck {
    Satisfied,
    Violated,
    Unknown,
}

fn validate(cage: &Cage) -> Result<(), InvalidPuzzle> {
    if cage.cell_ids.is_empty() {
        return Err(InvalidPuzzle::new("cage cell_ids must not be empty".into()));
    }
    match cage.operator {
        Operator::Subtract | Operator::Divide if cage.cell_ids.len() != 2 => {
            Err(InvalidPuzzle::new(format!(
                "cage operator ({}) requires exactly two cells, found {}",
                cage.operator.symbol(),
                cage.cell_ids.len()
            )))
        }
        _ => Ok(()),
    }
}

fn check_sum<I>(target: Value, values: I) -> CageCheck
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut sum = 0;
    for value in values {
        match value {
            Some(value) => sum += value,
            None => return CageCheck::Unknown,
        }
    }
    verdict(sum == target)
}

fn check_product<I>(target: Value, values: I) -> CageCheck
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut product = 1;
    for value in values {
        match value {
            Some(value) => product *= value,
            None => return CageCheck::Unknown,
        }
    }
    verdict(product == target)
}

fn check_difference<I>(target: Value, values: I) -> CageCheck
where
    I: IntoIterator<Item = Option<Value>>,
{
    match two_values(values) {
        Some((a, b)) => verdict((a - b).abs() == target),
        None => CageCheck::Unknown,
    }
}

/// The quotient may be taken in either direction, but it must be exact
fn check_quotient<I>(target: Value, values: I) -> CageCheck
where
    I: IntoIterator<Item = Option<Value>>,
{
    match two_values(values) {
        Some((a, b)) => verdict(quotient_matches(a, b, target) || quotient_matches(b, a, target)),
        None => CageCheck::Unknown,
    }
}

fn quotient_matches(a: Value, b: Value, target: Value) -> bool {
    b != 0 && a % b == 0 && a / b == target
}

fn two_values<I>(values: I) -> Option<(Value, Value)>
where
    I: IntoIterator<Item = Option<Value>>,
{
    let (a, b) = values
        .into_iter()
        .collect_tuple()
        .expect("cage must have exactly two cells");
    a.zip(b)
}

fn verdict(satisfied: bool) -> CageCheck {
    if satisfied {
        CageCheck::Satisfied
    } else {
        CageCheck::Violated
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::cage::CageCheck::{Satisfied, Unknown, Violated};
    use crate::puzzle::{Cage, CageCheck, CellId, Operator, Value};

    fn check(operator: Operator, target: Value, values: &[Option<Value>]) -> CageCheck {
        let cell_ids: Vec<CellId> = (0..values.len()).collect();
        Cage::new(cell_ids, operator, target)
            .unwrap()
            .check(values.iter().copied())
    }

    #[test]
    fn sum_against_all_values() {
        assert_eq!(Satisfied, check(Operator::Add, 6, &[Some(1), Some(2), Some(3)]));
        assert_eq!(Violated, check(Operator::Add, 7, &[Some(1), Some(2), Some(3)]));
    }

    #[test]
    fn sum_with_a_missing_value_is_unknown() {
        assert_eq!(Unknown, check(Operator::Add, 6, &[Some(1), None, Some(3)]));
    }

    #[test]
    fn product_against_all_values() {
        assert_eq!(Satisfied, check(Operator::Multiply, 12, &[Some(2), Some(6)]));
        assert_eq!(Violated, check(Operator::Multiply, 12, &[Some(2), Some(5)]));
    }

    #[test]
    fn product_with_a_missing_value_is_unknown() {
        assert_eq!(Unknown, check(Operator::Multiply, 12, &[None, Some(6)]));
    }

    #[test]
    fn single_cell_cage_must_hold_its_target() {
        assert_eq!(Satisfied, check(Operator::Add, 3, &[Some(3)]));
        assert_eq!(Violated, check(Operator::Multiply, 5, &[Some(1)]));
        assert_eq!(Violated, check(Operator::Multiply, 5, &[Some(2)]));
    }

    #[test]
    fn difference_is_taken_in_either_direction() {
        assert_eq!(Satisfied, check(Operator::Subtract, 3, &[Some(2), Some(5)]));
        assert_eq!(Satisfied, check(Operator::Subtract, 3, &[Some(5), Some(2)]));
        assert_eq!(Violated, check(Operator::Subtract, 3, &[Some(2), Some(4)]));
    }

    #[test]
    fn quotient_is_taken_in_either_direction() {
        assert_eq!(Satisfied, check(Operator::Divide, 3, &[Some(2), Some(6)]));
        assert_eq!(Satisfied, check(Operator::Divide, 3, &[Some(6), Some(2)]));
    }

    #[test]
    fn quotient_must_divide_exactly() {
        assert_eq!(Violated, check(Operator::Divide, 3, &[Some(7), Some(2)]));
    }

    #[test]
    fn two_cell_operator_with_a_missing_value_is_unknown() {
        assert_eq!(Unknown, check(Operator::Subtract, 1, &[Some(2), None]));
        assert_eq!(Unknown, check(Operator::Divide, 2, &[None, None]));
    }

    #[test]
    fn subtract_cage_requires_exactly_two_cells() {
        assert!(Cage::new(vec![0, 1, 2], Operator::Subtract, 1).is_err());
        assert!(Cage::new(vec![0], Operator::Divide, 2).is_err());
    }

    #[test]
    fn cage_requires_at_least_one_cell() {
        assert!(Cage::new(Vec::new(), Operator::Add, 1).is_err());
    }

    #[test]
    fn cell_ids_are_sorted() {
        let cage = Cage::new(vec![4, 1, 3], Operator::Add, 8).unwrap();
        assert_eq!(&[1, 3, 4][..], cage.cell_ids());
    }
}
