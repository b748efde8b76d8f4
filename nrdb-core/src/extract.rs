use std::sync::LazyLock;

use regex::Regex;

/// `[[query]]`, non-greedy, spanning newlines.
static QUERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\[(.*?)\]\]").expect("static pattern"));

/// How a caller splits a message before extracting queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Scan the whole body at once; queries may span lines.
    #[default]
    Message,
    /// Scan line by line, skipping quoted (`>`) lines.
    UnquotedLines,
}

/// All `[[...]]` queries in `text`, left to right.
pub fn extract_queries(text: &str) -> Vec<&str> {
    QUERY_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Extract queries from a chat message according to `mode`.
pub fn queries_in_message(text: &str, mode: ScanMode) -> Vec<&str> {
    match mode {
        ScanMode::Message => extract_queries(text),
        ScanMode::UnquotedLines => text
            .lines()
            .filter(|line| !line.trim_start().starts_with('>'))
            .flat_map(extract_queries)
            .collect(),
    }
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
