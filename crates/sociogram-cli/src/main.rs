//! Sociogram CLI - Interactive shell for the social graph engine

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod session;

use commands::{completions, shell};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "sociogram")]
#[command(author, version, about = "Explore a social network of people and friendships")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, env = "SOCIOGRAM_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::config_file_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell(shell::ShellArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting sociogram CLI");

    let config_path = cli.config_path();

    match &cli.command {
        Some(Commands::Config(args)) => commands::config::run(args, &config_path)?,
        Some(Commands::Completions(args)) => completions::run(args)?,
        Some(Commands::Shell(args)) => {
            let config = Config::load_from(&config_path)?;
            shell::run(args, &cli, config)?
        }
        None => {
            let config = Config::load_from(&config_path)?;
            shell::run(&shell::ShellArgs::default(), &cli, config)?
        }
    }

    Ok(())
}
