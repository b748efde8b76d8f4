use nrdb_core::{Catalog, Markup, render};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

/// Print the best match for each query. Misses are reported, not fatal.
pub(crate) fn run_lookup(catalog: &Catalog, queries: &[String], exact: bool, markup: Markup) {
    for query in queries {
        let entry = if exact {
            catalog.lookup_title(query)
        } else {
            catalog.best_match(query)
        };

        match entry {
            Some(entry) => println!("{}\n", render(entry, markup)),
            None => log::warn!(
                "{} No card matches \"{}\"",
                "\u{2718}".if_supports_color(Stderr, |t| t.red()),
                query,
            ),
        }
    }
}
