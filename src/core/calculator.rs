use crate::core::{evaluator, formatter, parser};
use crate::domain::ports::ExpressionSource;
use crate::utils::error::{CalcError, Result};
use std::fmt;
use std::io::Write;

pub const PROMPT: &str = "Введите выражение (например: 3 + 5 или IV * II):";
pub const PAUSE_NOTICE: &str = "Программа завершена. Нажмите Enter, чтобы выйти...";

/// Parses, evaluates and formats a single expression. The returned string is
/// the bare value, in the numeral system of the input.
pub fn process_input(input: &str) -> Result<String> {
    let expression = parser::parse_expression(input)?;
    let value = evaluator::evaluate(&expression)?;
    formatter::format_result(value, expression.system)
}

/// What a session printed for the user.
#[derive(Debug)]
pub enum Outcome {
    Computed(String),
    Rejected(CalcError),
}

impl Outcome {
    pub fn is_computed(&self) -> bool {
        matches!(self, Outcome::Computed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Computed(value) => write!(f, "Result: {}", value),
            Outcome::Rejected(err) => write!(f, "Error: {}", err),
        }
    }
}

/// Drives one read-evaluate-print pass.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    show_prompt: bool,
    pause: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Only a computed result waits for Enter; an error exits at once.
    pub fn should_pause(&self, outcome: &Outcome) -> bool {
        self.pause && outcome.is_computed()
    }

    /// Reads one expression from `source` and prints the outcome to `out`.
    ///
    /// Errors in the expression become [`Outcome::Rejected`]; only failures
    /// to read or write are returned as `Err`.
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<Outcome>
    where
        S: ExpressionSource,
        W: Write,
    {
        if self.show_prompt {
            writeln!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        let input = source.read_expression()?;
        tracing::debug!("Read expression: {:?}", input);

        let outcome = match process_input(&input) {
            Ok(value) => Outcome::Computed(value),
            Err(err) if err.is_user_error() => {
                tracing::debug!("Expression rejected: {} (Category: {:?})", err, err.category());
                Outcome::Rejected(err)
            }
            Err(err) => return Err(err),
        };

        writeln!(out, "{}", outcome)?;
        Ok(outcome)
    }

    /// Prints the exit notice and blocks until a line (or end of input) is read.
    pub fn pause<S, W>(&self, source: &mut S, out: &mut W) -> Result<()>
    where
        S: ExpressionSource,
        W: Write,
    {
        writeln!(out, "{}", PAUSE_NOTICE)?;
        out.flush()?;
        source.read_expression()?;
        Ok(())
    }
}
