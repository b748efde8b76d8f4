use nrdb_core::{Catalog, Markup, ScanMode};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::CliError;
use crate::handler::{StdoutSink, handle_message};

/// Split an input line into `(room, body)`. Lines without a tab go to
/// `default_room`. A literal `\n` in the body stands for a line break, so
/// multi-line messages fit on one input line.
pub(crate) fn parse_line<'a>(line: &'a str, default_room: &'a str) -> (&'a str, String) {
    let (room, body) = match line.split_once('\t') {
        Some((room, body)) if !room.trim().is_empty() => (room.trim(), body),
        _ => (default_room, line),
    };
    (room, body.replace("\\n", "\n"))
}

/// Answer messages from stdin until EOF.
pub(crate) fn run_listen(
    catalog: &Catalog,
    default_room: &str,
    mode: ScanMode,
    markup: Markup,
) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))?;

    rt.block_on(async {
        let sink = StdoutSink::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let (mut messages, mut sent, mut failed) = (0usize, 0usize, 0usize);

        log::info!("Listening on stdin ({} cards indexed)", catalog.len());

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let (room, body) = parse_line(&line, default_room);
            let report = handle_message(catalog, &sink, room, &body, mode, markup).await;
            messages += 1;
            sent += report.sent;
            failed += report.failures.len();
            log::debug!(
                "[{room}] {} queries, {} sent, {} unmatched, {} failed",
                report.queries,
                report.sent,
                report.misses,
                report.failures.len()
            );
        }

        log::info!("Handled {messages} messages ({sent} replies, {failed} failed)");
        Ok::<(), CliError>(())
    })
}

#[cfg(test)]
#[path = "../tests/listen_tests.rs"]
mod tests;
