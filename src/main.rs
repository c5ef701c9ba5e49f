use anyhow::Context;
use clap::Parser;
use roman_calc::config::cli::stdin_is_interactive;
use roman_calc::utils::{logger, validation::Validate};
use roman_calc::{Calculator, CliConfig, LineSource, StaticSource};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roman-calc");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let calculator = Calculator::new()
        .with_prompt(config.show_prompt(stdin_is_interactive()))
        .with_pause(config.pause);
    let mut stdout = std::io::stdout().lock();

    let outcome = match &config.expression {
        Some(expression) => calculator.run(&mut StaticSource::new(expression.as_str()), &mut stdout),
        None => calculator.run(&mut LineSource::stdin(), &mut stdout),
    }
    .context("failed to evaluate expression")?;

    tracing::info!("Finished: {}", outcome);

    if calculator.should_pause(&outcome) {
        calculator
            .pause(&mut LineSource::stdin(), &mut stdout)
            .context("failed to wait for Enter")?;
    }

    Ok(())
}
