use anyhow::{Context, Result};
use cli::Cli;
use config::Configuration;
use std::process::ExitCode;

mod author;
mod cli;
mod config;
mod config_wizard;
mod cover;
mod fonts;
mod sinks;
mod theme;

fn main() -> ExitCode {
    if let Err(e) = try_main() {
        eprintln!("{}: {e:#}", console::style("Error").red());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main() -> Result<()> {
    use clap::Parser;
    let cli = Cli::parse();

    match &cli.command {
        cli::Commands::Config => config_wizard::run(),
        cli::Commands::Render => {
            let contents = std::fs::read_to_string("maquette.toml")
                .with_context(|| "Failed to load maquette.toml contents")?;
            let config: Configuration =
                toml::from_str(&contents).with_context(|| "Failed to parse TOML")?;

            let body = std::fs::read_to_string(&config.body)
                .with_context(|| format!("Failed to read body file {}", config.body.display()))?;

            let document = sinks::render(&config, &body);

            std::fs::write(&config.outfile, document).with_context(|| {
                format!("Failed to write output file {}", config.outfile.display())
            })?;

            println!("  Wrote {}", config.outfile.display());
            Ok(())
        }
    }
}
