//! CLI frontend for the three-card tarot draw.

mod clipboard;
mod commands;
mod config;
mod console;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(
    name = "tarot",
    about = "Draw three tarot cards and build a reading prompt",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (default: <config dir>/tarot/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the 78 cards of the deck
    Deck {
        /// Show a single card by id (e.g. MAJOR_13, WANDS_TWO)
        id: Option<String>,

        /// Only show one suit (wands, cups, swords, pentacles)
        #[arg(short, long, conflicts_with_all = ["major", "id"])]
        suit: Option<String>,

        /// Only show the major arcana
        #[arg(short, long, conflicts_with = "id")]
        major: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Shuffle, pick three cards, and print the reading prompt
    Draw {
        /// Grid positions to pick (1-78, comma separated); random if omitted
        #[arg(short, long, value_delimiter = ',')]
        pick: Vec<usize>,

        /// RNG seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,

        /// Copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: shuffle, pick from the grid, copy the prompt
    Play {
        /// RNG seed for reproducible shuffles
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();

    let result = AppConfig::load(cli.config.as_deref())
        .map_err(|e| e.to_string())
        .and_then(|config| match cli.command {
            Commands::Deck {
                id,
                suit,
                major,
                json,
            } => commands::deck::run(id.as_deref(), suit.as_deref(), major, json),
            Commands::Draw {
                pick,
                seed,
                copy,
                json,
            } => commands::draw::run(&config, &pick, seed, copy, json),
            Commands::Play { seed } => commands::play::run(&config, seed),
        });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
