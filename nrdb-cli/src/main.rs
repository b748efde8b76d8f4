//! nrdb-bot CLI
//!
//! Looks up Netrunner cards named in chat messages and renders them.

mod cli_types;
mod commands;
mod error;
mod handler;
mod settings;
mod spinner;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cli_types::{CacheAction, Cli, Commands, ConfigAction};
use crate::error::CliError;
use crate::settings::{Config, Overrides, Settings, settings_path};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Info lines print bare; other levels (and everything in verbose mode)
/// get a timestamp and level tag. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format(move |buf, record| {
            if record.level() == log::Level::Info && !verbose {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(
                    buf,
                    "{} [{}] {}",
                    buf.timestamp(),
                    record.level(),
                    record.args()
                )
            }
        })
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut overrides = Overrides {
        cache_dir: cli.cache_dir,
        api_base: cli.api_base,
        ..Default::default()
    };
    match &cli.command {
        Commands::Lookup { markup, .. } => overrides.markup = *markup,
        Commands::Scan {
            markup, per_line, ..
        }
        | Commands::Listen {
            markup, per_line, ..
        } => {
            overrides.markup = *markup;
            overrides.per_line = *per_line;
        }
        Commands::Cache { .. } | Commands::Config { .. } => {}
    }

    let settings = Settings::load(&settings_path())?;
    let config = Config::resolve(settings, &overrides)?;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Lookup { queries, exact, .. } => {
            let catalog = commands::load_catalog(&config, quiet)?;
            commands::lookup::run_lookup(&catalog, &queries, exact, config.markup.value);
            Ok(())
        }
        Commands::Scan { text, .. } => {
            let catalog = commands::load_catalog(&config, quiet)?;
            commands::scan::run_scan(
                &catalog,
                text,
                config.scan_mode.value,
                config.markup.value,
            )
        }
        Commands::Listen { room, .. } => {
            // The catalog loads over blocking HTTP, so it must be built
            // before the async runtime starts.
            let catalog = commands::load_catalog(&config, quiet)?;
            commands::listen::run_listen(
                &catalog,
                &room,
                config.scan_mode.value,
                config.markup.value,
            )
        }
        Commands::Cache { action } => match action {
            CacheAction::List => commands::cache::run_cache_list(&config),
            CacheAction::Clear => commands::cache::run_cache_clear(&config),
            CacheAction::Fetch { datasets } => commands::cache::run_cache_fetch(&config, datasets),
        },
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(&config),
                ConfigAction::Path => commands::config::run_config_path(),
            }
            Ok(())
        }
    }
}
