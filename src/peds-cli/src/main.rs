mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn init_tracing(verbose: bool) {
    let default = if verbose { "peds=debug" } else { "peds=info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Configure {
            listing,
            catalog,
            game,
            show,
        } => {
            commands::configure::handle(listing, catalog, game, show)?;
        }

        Commands::Build {
            listing,
            output,
            with_curated,
        } => {
            let config = Config::load()?;
            commands::build::handle(&config, listing, output, with_curated)?;
        }

        Commands::Enhance { input, output } => {
            let config = Config::load()?;
            commands::enhance::handle(&config, input, output)?;
        }

        Commands::Classify { models, format } => {
            commands::classify::handle(&models, format)?;
        }

        Commands::Stats {
            catalog,
            entries,
            category,
            format,
        } => {
            let config = Config::load()?;
            commands::stats::handle(&config, catalog, entries, category, format)?;
        }
    }

    Ok(())
}
