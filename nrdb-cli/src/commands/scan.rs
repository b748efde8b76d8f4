use std::io::Read;

use nrdb_core::{Catalog, Markup, ScanMode, queries_in_message, render};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

/// Print every card queried in `text` (or stdin).
pub(crate) fn run_scan(
    catalog: &Catalog,
    text: Option<String>,
    mode: ScanMode,
    markup: Markup,
) -> Result<(), CliError> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let queries = queries_in_message(&text, mode);
    if queries.is_empty() {
        log::info!(
            "{}",
            "No [[card]] queries found.".if_supports_color(Stderr, |t| t.dimmed()),
        );
        return Ok(());
    }

    for query in queries {
        // Unmatched queries stay silent, as they would in chat.
        if let Some(entry) = catalog.best_match(query) {
            log::debug!("\"{query}\" -> {entry}");
            println!("{}\n", render(entry, markup));
        }
    }
    Ok(())
}
