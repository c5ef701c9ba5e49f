use crate::domain::model::{Expression, NumeralSystem, Operator};
use crate::utils::error::{CalcError, Result};

/// Letters that switch the whole expression into Roman mode.
const ROMAN_LETTERS: &str = "IVXLCDM";

/// Any Roman letter anywhere in the input selects Roman mode, even if the
/// rest of the input is Arabic.
pub fn detect_numeral_system(input: &str) -> NumeralSystem {
    if input.chars().any(|c| ROMAN_LETTERS.contains(c)) {
        NumeralSystem::Roman
    } else {
        NumeralSystem::Arabic
    }
}

/// First operator of `+ - * /`, in that order, that occurs anywhere in the
/// input. Position in the string does not matter.
pub fn find_operator(input: &str) -> Result<Operator> {
    Operator::PRIORITY
        .into_iter()
        .find(|op| input.contains(op.symbol()))
        .ok_or(CalcError::OperatorNotFound)
}

pub fn parse_expression(input: &str) -> Result<Expression> {
    let system = detect_numeral_system(input);
    let operator = find_operator(input)?;

    let parts: Vec<&str> = input.split(operator.symbol()).collect();
    let [left, right] = parts.as_slice() else {
        tracing::debug!(
            "Expected two operands around '{}', found {} parts",
            operator,
            parts.len()
        );
        return Err(CalcError::InvalidExpressionFormat);
    };

    let expression = Expression {
        left: left.trim().to_string(),
        operator,
        right: right.trim().to_string(),
        system,
    };
    tracing::debug!("Parsed expression: {:?}", expression);
    Ok(expression)
}
