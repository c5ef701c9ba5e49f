pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{LineSource, StaticSource};

pub use core::calculator::{process_input, Calculator, Outcome};
pub use core::numeral::{arabic_to_roman, roman_to_arabic};
pub use domain::model::{Expression, NumeralSystem, Operator};
pub use utils::error::{CalcError, Result};
