use crate::core::numeral::arabic_to_roman;
use crate::domain::model::NumeralSystem;
use crate::utils::error::{CalcError, Result};

/// Renders `value` in the numeral system the expression was written in.
pub fn format_result(value: i64, system: NumeralSystem) -> Result<String> {
    match system {
        NumeralSystem::Arabic => Ok(value.to_string()),
        NumeralSystem::Roman => {
            if value < 1 {
                return Err(CalcError::InvalidResult);
            }
            arabic_to_roman(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arabic() {
        assert_eq!(format_result(4, NumeralSystem::Arabic).unwrap(), "4");
        assert_eq!(format_result(-9, NumeralSystem::Arabic).unwrap(), "-9");
        assert_eq!(format_result(0, NumeralSystem::Arabic).unwrap(), "0");
    }

    #[test]
    fn test_format_roman() {
        assert_eq!(format_result(5, NumeralSystem::Roman).unwrap(), "V");
        assert_eq!(format_result(20, NumeralSystem::Roman).unwrap(), "XX");
        assert!(matches!(format_result(0, NumeralSystem::Roman), Err(CalcError::InvalidResult)));
    }
}
