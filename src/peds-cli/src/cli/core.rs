//! Core CLI definitions

use clap::{Parser, Subcommand};
use peds::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "peds")]
#[command(about = "Ped model catalog builder", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for query commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a fresh catalog from a model listing
    #[command(visible_alias = "b")]
    Build {
        /// Model listing to extract peds from (falls back to a built-in list)
        #[arg(short, long, env = "PEDS_LISTING")]
        listing: Option<PathBuf>,

        /// Catalog file to write
        #[arg(short, long, env = "PEDS_CATALOG")]
        output: Option<PathBuf>,

        /// Also add the curated legendary animals, fish and animals
        #[arg(long)]
        with_curated: bool,
    },

    /// Merge the curated reference sets into an existing catalog
    #[command(visible_alias = "e")]
    Enhance {
        /// Catalog to enhance (created if missing)
        #[arg(short, long, env = "PEDS_CATALOG")]
        input: Option<PathBuf>,

        /// Where to write the result (defaults to the input path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how model identifiers are classified and named
    #[command(visible_alias = "c")]
    Classify {
        /// Model identifiers
        #[arg(required = true)]
        models: Vec<String>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show category counts for a catalog
    #[command(visible_alias = "s")]
    Stats {
        /// Catalog to read
        #[arg(short, long, env = "PEDS_CATALOG")]
        catalog: Option<PathBuf>,

        /// List entries too (the full catalog with --format json)
        #[arg(long)]
        entries: bool,

        /// Only list entries in this category (implies --entries)
        #[arg(long)]
        category: Option<Category>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Configure default settings
    Configure {
        /// Set default model listing path
        #[arg(long)]
        listing: Option<PathBuf>,

        /// Set default catalog path
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Set game tag written to new catalogs
        #[arg(long)]
        game: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
