use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Smallest operand either numeral system accepts.
pub const MIN_OPERAND: i64 = 1;
/// Largest operand either numeral system accepts.
pub const MAX_OPERAND: i64 = 10;

pub fn validate_operand_range(value: i64) -> Result<()> {
    validate_range(value, MIN_OPERAND, MAX_OPERAND)
}

pub fn validate_range<T: PartialOrd + Copy>(value: T, min: T, max: T) -> Result<()> {
    if value < min || value > max {
        return Err(CalcError::OutOfRange);
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::ConfigError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_operand_range() {
        assert!(validate_operand_range(1).is_ok());
        assert!(validate_operand_range(10).is_ok());
        assert!(matches!(validate_operand_range(0), Err(CalcError::OutOfRange)));
        assert!(matches!(validate_operand_range(11), Err(CalcError::OutOfRange)));
        assert!(matches!(validate_operand_range(-3), Err(CalcError::OutOfRange)));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("expression", "1 + 1").is_ok());
        assert!(matches!(
            validate_non_empty_string("expression", "   "),
            Err(CalcError::ConfigError { .. })
        ));
    }
}
