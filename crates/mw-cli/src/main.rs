//! CLI frontend for the Math Wiz quiz skill.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mathwiz",
    about = "Math Wiz: a spoken arithmetic quiz, played in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz interactively
    Play {
        /// RNG seed for reproducible problems
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file of prompt templates to use instead of English
        #[arg(long)]
        locale_file: Option<PathBuf>,
    },

    /// Print a batch of problems
    Generate {
        /// Difficulty level (1-3)
        #[arg(short, long)]
        level: i64,

        /// Number of problems
        #[arg(short, long, default_value = "10")]
        count: usize,

        /// RNG seed for reproducible problems
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run a single turn against a JSON event and session attributes
    Turn {
        /// The intent event, e.g. '{"intentName":"LaunchRequest"}'
        #[arg(short, long)]
        event: String,

        /// Session attributes from the previous turn
        #[arg(short, long, default_value = "{}")]
        attributes: String,

        /// RNG seed for reproducible problems
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, locale_file } => commands::play::run(seed, locale_file.as_deref()),
        Commands::Generate {
            level,
            count,
            seed,
            json,
        } => commands::generate::run(level, count, seed, json),
        Commands::Turn {
            event,
            attributes,
            seed,
        } => commands::turn::run(&event, &attributes, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
