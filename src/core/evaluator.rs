use crate::core::numeral::roman_to_arabic;
use crate::domain::model::{Expression, NumeralSystem, Operator};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_operand_range;

pub fn parse_operand(operand: &str, system: NumeralSystem) -> Result<i64> {
    match system {
        NumeralSystem::Roman => roman_to_arabic(operand),
        NumeralSystem::Arabic => operand
            .parse::<i64>()
            .map_err(|_| CalcError::InvalidArabicFormat),
    }
}

/// Applies `operator` to two integers. `+ - *` are not range checked.
pub fn calculate(left: i64, right: i64, operator: Operator) -> Result<i64> {
    match operator {
        Operator::Add => Ok(left + right),
        Operator::Subtract => Ok(left - right),
        Operator::Multiply => Ok(left * right),
        Operator::Divide => {
            if right == 0 {
                return Err(CalcError::DivisionByZero);
            }
            Ok(left / right)
        }
    }
}

/// Converts both operands, validates them and computes the integer result.
pub fn evaluate(expression: &Expression) -> Result<i64> {
    let left = parse_operand(&expression.left, expression.system)?;
    let right = parse_operand(&expression.right, expression.system)?;

    // A zero divisor is reported as such even though 0 is out of range.
    if expression.operator == Operator::Divide && right == 0 {
        tracing::debug!("Rejected division of {} by zero", left);
        return Err(CalcError::DivisionByZero);
    }

    validate_operand_range(left)?;
    validate_operand_range(right)?;

    let result = calculate(left, right, expression.operator)?;
    tracing::debug!("{} {} {} = {}", left, expression.operator, right, result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expression(left: &str, operator: Operator, right: &str, system: NumeralSystem) -> Expression {
        Expression {
            left: left.to_string(),
            operator,
            right: right.to_string(),
            system,
        }
    }

    #[test]
    fn test_parse_operand() {
        assert_eq!(parse_operand("7", NumeralSystem::Arabic).unwrap(), 7);
        assert_eq!(parse_operand("+7", NumeralSystem::Arabic).unwrap(), 7);
        assert_eq!(parse_operand("-2", NumeralSystem::Arabic).unwrap(), -2);
        assert_eq!(parse_operand("VII", NumeralSystem::Roman).unwrap(), 7);
        assert!(matches!(
            parse_operand("seven", NumeralSystem::Arabic),
            Err(CalcError::InvalidArabicFormat)
        ));
        assert!(matches!(
            parse_operand("", NumeralSystem::Arabic),
            Err(CalcError::InvalidArabicFormat)
        ));
        assert!(matches!(
            parse_operand("7", NumeralSystem::Roman),
            Err(CalcError::InvalidRomanFormat)
        ));
    }

    #[test]
    fn test_calculate() {
        assert_eq!(calculate(3, 5, Operator::Add).unwrap(), 8);
        assert_eq!(calculate(3, 5, Operator::Subtract).unwrap(), -2);
        assert_eq!(calculate(3, 5, Operator::Multiply).unwrap(), 15);
        assert_eq!(calculate(7, 2, Operator::Divide).unwrap(), 3);
        assert!(matches!(calculate(7, 0, Operator::Divide), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_evaluate_range() {
        let too_big = expression("11", Operator::Add, "2", NumeralSystem::Arabic);
        assert!(matches!(evaluate(&too_big), Err(CalcError::OutOfRange)));

        let zero_left = expression("0", Operator::Add, "5", NumeralSystem::Arabic);
        assert!(matches!(evaluate(&zero_left), Err(CalcError::OutOfRange)));

        let zero_factor = expression("5", Operator::Multiply, "0", NumeralSystem::Arabic);
        assert!(matches!(evaluate(&zero_factor), Err(CalcError::OutOfRange)));
    }

    #[test]
    fn test_evaluate_zero_divisor() {
        let divide = expression("5", Operator::Divide, "0", NumeralSystem::Arabic);
        assert!(matches!(evaluate(&divide), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn test_evaluate_roman() {
        let divide = expression("X", Operator::Divide, "III", NumeralSystem::Roman);
        assert_eq!(evaluate(&divide).unwrap(), 3);
    }
}
