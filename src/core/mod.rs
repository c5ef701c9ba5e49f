pub mod calculator;
pub mod evaluator;
pub mod formatter;
pub mod numeral;
pub mod parser;

pub use crate::domain::model::{Expression, NumeralSystem, Operator};
pub use crate::domain::ports::ExpressionSource;
pub use crate::utils::error::Result;
