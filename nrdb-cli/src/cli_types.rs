//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nrdb_core::Markup;

#[derive(Parser)]
#[command(name = "nrdb-bot")]
#[command(about = "Look up Netrunner cards by fuzzy name and render them for chat", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the cached NetrunnerDB datasets
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// NetrunnerDB API root (e.g. https://netrunnerdb.com/api/2.0)
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Find the best-matching card for each query and print it
    Lookup {
        /// Card names, fuzzy-matched
        #[arg(required = true)]
        queries: Vec<String>,

        /// Only accept exact (normalized) title matches
        #[arg(long)]
        exact: bool,

        /// Output markup: rich (HTML) or plain (Markdown)
        #[arg(short, long)]
        markup: Option<Markup>,
    },

    /// Print every card named as [[...]] in a message
    Scan {
        /// Message text (read from stdin if omitted)
        text: Option<String>,

        /// Scan line by line and skip quoted (>) lines
        #[arg(long)]
        per_line: bool,

        /// Output markup: rich (HTML) or plain (Markdown)
        #[arg(short, long)]
        markup: Option<Markup>,
    },

    /// Answer messages read from stdin, one per line ("room<TAB>body" or just body)
    Listen {
        /// Room used for lines without a room prefix
        #[arg(long, default_value = "stdin")]
        room: String,

        /// Scan line by line and skip quoted (>) lines
        #[arg(long)]
        per_line: bool,

        /// Output markup: rich (HTML) or plain (Markdown)
        #[arg(short, long)]
        markup: Option<Markup>,
    },

    /// Manage cached NetrunnerDB datasets
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CacheAction {
    /// List cached datasets
    List,

    /// Remove all cached datasets
    Clear,

    /// Download datasets again (all of them if none are named)
    Fetch {
        /// Datasets to fetch (cards, packs, cycles, mwl)
        #[arg(value_delimiter = ',')]
        datasets: Vec<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show resolved settings and where each came from
    Show,

    /// Print the settings file path
    Path,
}
