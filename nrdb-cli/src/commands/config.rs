use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{Config, settings_path};

/// Show resolved settings and their sources.
pub(crate) fn run_config_show(config: &Config) {
    let path = settings_path();

    log::info!(
        "{}",
        "nrdb-bot configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let scan = match config.scan_mode.value {
        nrdb_core::ScanMode::Message => "whole message",
        nrdb_core::ScanMode::UnquotedLines => "per line, skipping quotes",
    };
    let rows = [
        (
            "cache_dir",
            config.cache_dir.value.display().to_string(),
            &config.cache_dir.source,
        ),
        ("api_base", config.api_base.value.clone(), &config.api_base.source),
        ("markup", config.markup.value.to_string(), &config.markup.source),
        ("scan", scan.to_string(), &config.scan_mode.source),
    ];
    for (name, value, source) in rows {
        log::info!(
            "  {:<10} {} {}",
            name,
            value,
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
