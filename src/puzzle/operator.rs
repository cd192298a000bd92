/// A math operator that can appear on a cage
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Returns the character representation of the operator
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Retrieves an `Operator` from its corresponding symbol
    pub fn from_symbol(c: char) -> Option<Operator> {
        let operator = match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            _ => return None,
        };
        Some(operator)
    }
}
