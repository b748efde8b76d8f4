pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod listen;
pub(crate) mod lookup;
pub(crate) mod scan;

use nrdb_core::Catalog;

use crate::error::CliError;
use crate::settings::Config;
use crate::spinner::Spinner;

/// Build the catalog from the configured cache, downloading what's missing.
pub(crate) fn load_catalog(config: &Config, quiet: bool) -> Result<Catalog, CliError> {
    let cache = config.open_cache()?;
    let spinner = Spinner::start("Loading card catalog...", quiet);
    let catalog = nrdb_data::load_catalog(&cache);
    spinner.finish();
    Ok(catalog?)
}

/// Format a byte size as a human-readable string.
pub(crate) fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} bytes")
    }
}
