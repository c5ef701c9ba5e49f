use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("оператор не найден")]
    OperatorNotFound,

    #[error("неверный формат выражения")]
    InvalidExpressionFormat,

    #[error("неверный формат римского числа")]
    InvalidRomanFormat,

    #[error("неверный формат арабского числа")]
    InvalidArabicFormat,

    #[error("числа должны быть в диапазоне от 1 до 10")]
    OutOfRange,

    #[error("деление на ноль невозможно")]
    DivisionByZero,

    #[error("неверный оператор")]
    InvalidOperator,

    #[error("результат римского числа должен быть больше или равен 1")]
    InvalidResult,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Conversion,
    Arithmetic,
    Io,
    Config,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::OperatorNotFound
            | CalcError::InvalidExpressionFormat
            | CalcError::InvalidOperator => ErrorCategory::Parse,
            CalcError::InvalidRomanFormat
            | CalcError::InvalidArabicFormat
            | CalcError::OutOfRange
            | CalcError::InvalidResult => ErrorCategory::Conversion,
            CalcError::DivisionByZero => ErrorCategory::Arithmetic,
            CalcError::IoError(_) => ErrorCategory::Io,
            CalcError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// Errors caused by the expression itself. These are reported to the
    /// user as `Error: ...` and the process still exits normally.
    pub fn is_user_error(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Io | ErrorCategory::Config)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "деление на ноль невозможно");
    }

    #[test]
    fn test_user_errors() {
        assert!(CalcError::OutOfRange.is_user_error());
        assert!(CalcError::InvalidResult.is_user_error());

        let io = CalcError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert!(!io.is_user_error());

        let config = CalcError::ConfigError {
            message: "empty".to_string(),
        };
        assert!(!config.is_user_error());
    }
}
