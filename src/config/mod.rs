pub mod cli;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roman-calc")]
#[command(about = "Evaluates one expression over Arabic (1-10) or Roman (I-X) numerals")]
pub struct CliConfig {
    #[arg(short, long, help = "Evaluate this expression instead of reading standard input")]
    pub expression: Option<String>,

    #[arg(long, help = "Never print the input prompt")]
    pub no_prompt: bool,

    #[arg(long, help = "Wait for Enter before exiting")]
    pub pause: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The prompt is shown only when a person is typing the expression.
    pub fn show_prompt(&self, interactive: bool) -> bool {
        !self.no_prompt && self.expression.is_none() && interactive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(expression) = &self.expression {
            validate_non_empty_string("expression", expression)?;
        }
        Ok(())
    }
}
