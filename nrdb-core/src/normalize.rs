use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize text for catalog keys and queries.
///
/// Lower-cases, decomposes to NFD, then drops combining marks and control
/// characters, so `"Déjà Vu"` and `"deja vu"` produce the same key.
/// Lower-casing happens before decomposition: some lower-case mappings
/// (e.g. `İ`) emit combining marks, and those must be stripped too for the
/// function to be idempotent.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !c.is_control())
        .collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
