use crate::utils::error::Result;

/// Where the raw expression line comes from.
pub trait ExpressionSource {
    /// Returns one line without its line terminator. End of input yields an
    /// empty string.
    fn read_expression(&mut self) -> Result<String>;
}
