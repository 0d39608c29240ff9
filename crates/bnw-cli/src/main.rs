//! Terminal front end for the Beautiful New World narrative engine.

mod commands;
mod select;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "bnw",
    about = "Beautiful New World: a choose-your-path adventure in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively, reading choices from stdin
    Play {
        /// Story table JSON file (default: built-in demo story)
        #[arg(short, long)]
        story: Option<PathBuf>,

        /// Game config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Provider deadline in milliseconds (overrides the config file)
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Log engine decisions to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in item catalog
    Items,

    /// List the built-in status effect catalog
    Effects,

    /// List the choice ids a story table answers
    Story {
        /// Story table JSON file (default: built-in demo story)
        #[arg(short, long)]
        story: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = if verbose {
        EnvFilter::new(default)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Play { verbose: true, .. });
    init_tracing(verbose);

    let result = match cli.command {
        Commands::Play {
            story,
            config,
            timeout_ms,
            verbose: _,
        } => commands::play::run(story.as_deref(), config.as_deref(), timeout_ms),
        Commands::Items => commands::items::run(),
        Commands::Effects => commands::effects::run(),
        Commands::Story { story } => commands::story::run(story.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
