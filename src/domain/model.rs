use std::fmt;

/// Numeral system an expression is written in. The result is rendered in
/// the same system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Operators in the order they are searched for in the input.
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A split but not yet evaluated expression. Operands are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub left: String,
    pub operator: Operator,
    pub right: String,
    pub system: NumeralSystem,
}
