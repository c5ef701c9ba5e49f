use crate::domain::ports::ExpressionSource;
use crate::utils::error::Result;
use std::io::{BufRead, IsTerminal};

/// Reads expressions line by line from any buffered reader.
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineSource<std::io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

/// Whether standard input is attached to a terminal, i.e. a person is typing.
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

impl<R: BufRead> ExpressionSource for LineSource<R> {
    fn read_expression(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        self.reader.read_until(b'\n', &mut buf)?;
        // Undecodable bytes are left for the parser to reject.
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// A fixed expression, used for `--expression`.
#[derive(Debug, Clone)]
pub struct StaticSource {
    expression: Option<String>,
}

impl StaticSource {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: Some(expression.into()),
        }
    }
}

impl ExpressionSource for StaticSource {
    fn read_expression(&mut self) -> Result<String> {
        Ok(self.expression.take().unwrap_or_default())
    }
}
