use anyhow::Result;
use clap::Parser;
use mealwise::cli::Cli;
use mealwise::{Catalog, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealwise::observability::init_observability(&config.observability.log_level)?;

    let catalog = Catalog::resolve(cli.catalog.as_deref(), config.catalog.path.as_deref())?;

    let output = cli.command.run(&config, &catalog)?;
    print!("{output}");

    Ok(())
}
