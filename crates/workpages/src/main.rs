//! workpages CLI - stamps out work detail pages for the Human Creative site.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "workpages")]
#[command(about = "Generate work detail pages and design tokens")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to workpages.toml config file
    #[arg(short, long, default_value = "workpages.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter config and create the output directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate one page per configured project
    Build {
        /// Output directory (defaults to config or "work")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Embed design tokens in each page
        #[arg(long)]
        inline_tokens: bool,
    },

    /// Write design_config.js
    Tokens {
        /// Site root to write the script into
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, Path::new("."), yes)?;
        }
        Commands::Build {
            output,
            inline_tokens,
        } => {
            commands::build::run(&cli.config, output, inline_tokens)?;
        }
        Commands::Tokens { root } => {
            commands::tokens::run(&cli.config, &root)?;
        }
    }

    Ok(())
}
