use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nrdb_data::DATASETS;

use super::format_bytes;
use crate::error::CliError;
use crate::settings::Config;

/// List cached datasets.
pub(crate) fn run_cache_list(config: &Config) -> Result<(), CliError> {
    let cache = config.open_cache()?;
    let entries = cache.list()?;

    if entries.is_empty() {
        log::info!(
            "{}",
            "No cached datasets.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("Run 'nrdb-bot cache fetch' to download them.");
        return Ok(());
    }

    log::info!(
        "{} {}",
        "Cached datasets in".if_supports_color(Stdout, |t| t.bold()),
        cache.dir().display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let mut total_size = 0u64;
    for entry in &entries {
        total_size += entry.file_size;
        log::info!(
            "  {} ({} records, {})",
            entry.dataset.if_supports_color(Stdout, |t| t.bold()),
            entry.records,
            format_bytes(entry.file_size),
        );
        log::info!("    Downloaded: {}, Source: {}", entry.downloaded, entry.source);
    }
    log::info!("");
    log::info!(
        "Total: {} datasets, {}",
        entries.len(),
        format_bytes(total_size)
    );
    Ok(())
}

/// Clear the dataset cache.
pub(crate) fn run_cache_clear(config: &Config) -> Result<(), CliError> {
    let freed = config.open_cache()?.clear()?;
    log::info!(
        "{} Cache cleared ({} freed)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        format_bytes(freed),
    );
    Ok(())
}

/// Re-download the named datasets, or all of them.
///
/// Each dataset is fetched independently; a failure is reported and the
/// rest still run. Returns an error if any of them failed.
pub(crate) fn run_cache_fetch(config: &Config, datasets: Vec<String>) -> Result<(), CliError> {
    let cache = config.open_cache()?;
    let to_fetch: Vec<String> = if datasets.is_empty()
        || (datasets.len() == 1 && datasets[0].eq_ignore_ascii_case("all"))
    {
        DATASETS.iter().map(|d| d.to_string()).collect()
    } else {
        datasets
    };

    let mut failed = 0usize;
    for dataset in &to_fetch {
        if !DATASETS.contains(&dataset.as_str()) {
            log::warn!(
                "  {} '{}' is not one of the catalog datasets ({})",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                dataset,
                DATASETS.join(", "),
            );
        }
        match cache.refresh(dataset) {
            Ok(set) => {
                log::info!(
                    "  {} {} ({} records)",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    dataset.if_supports_color(Stdout, |t| t.bold()),
                    set.data.len(),
                );
            }
            Err(e) => {
                failed += 1;
                log::warn!(
                    "  {} {}: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    dataset.if_supports_color(Stdout, |t| t.bold()),
                    e,
                );
            }
        }
    }

    if failed > 0 {
        return Err(CliError::runtime(format!(
            "{failed} of {} datasets failed to download",
            to_fetch.len()
        )));
    }
    Ok(())
}
