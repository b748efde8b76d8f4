//! Turn incoming chat messages into card replies.
//!
//! The chat transport itself is out of scope; replies go to a
//! [`MessageSink`], which a transport implements. [`StdoutSink`] is the one
//! used by `nrdb-bot listen`.

use futures::future::join_all;
use nrdb_core::{Catalog, Markup, ScanMode, queries_in_message, render};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::CliError;

/// Destination for outgoing messages.
#[allow(async_fn_in_trait)]
pub(crate) trait MessageSink {
    async fn send(&self, room: &str, body: &str, markup: Markup) -> Result<(), CliError>;
}

/// Writes each message to stdout as `[room] body`.
pub(crate) struct StdoutSink {
    out: Mutex<tokio::io::Stdout>,
}

impl StdoutSink {
    pub(crate) fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl MessageSink for StdoutSink {
    async fn send(&self, room: &str, body: &str, _markup: Markup) -> Result<(), CliError> {
        let line = format!("[{room}] {body}\n");
        let mut out = self.out.lock().await;
        out.write_all(line.as_bytes())
            .await
            .map_err(|e| CliError::send(room, e.to_string()))?;
        out.flush()
            .await
            .map_err(|e| CliError::send(room, e.to_string()))
    }
}

/// Outcome of handling one message.
#[derive(Debug, Default)]
pub(crate) struct HandleReport {
    /// `[[...]]` queries found in the message.
    pub queries: usize,
    /// Replies delivered.
    pub sent: usize,
    /// Queries that matched no card.
    pub misses: usize,
    /// Replies that failed to send; one failure never hides the others.
    pub failures: Vec<CliError>,
}

/// Look up every card queried in `body` and send one reply per match to
/// `room`. Sends run concurrently; all of them are awaited before returning.
pub(crate) async fn handle_message<S: MessageSink>(
    catalog: &Catalog,
    sink: &S,
    room: &str,
    body: &str,
    mode: ScanMode,
    markup: Markup,
) -> HandleReport {
    let queries = queries_in_message(body, mode);
    let mut report = HandleReport {
        queries: queries.len(),
        ..Default::default()
    };

    let mut replies = Vec::with_capacity(queries.len());
    for query in queries {
        match catalog.best_match(query) {
            Some(entry) => {
                log::debug!("[{room}] \"{query}\" -> {entry}");
                replies.push(render(entry, markup));
            }
            None => {
                log::debug!("[{room}] no card for \"{query}\"");
                report.misses += 1;
            }
        }
    }

    let results = join_all(replies.iter().map(|body| sink.send(room, body, markup))).await;
    for result in results {
        match result {
            Ok(()) => report.sent += 1,
            Err(e) => {
                log::warn!("{e}");
                report.failures.push(e);
            }
        }
    }
    report
}

#[cfg(test)]
#[path = "tests/handler_tests.rs"]
mod tests;
