//! Fuzzy card search over a [`Catalog`].

use crate::catalog::{CardEntry, Catalog};
use crate::normalize::normalize;

/// Score given to a query that equals a catalog key exactly. Higher than any
/// fuzzy score can reach (100 similarity + 70 bonus).
pub const EXACT_MATCH_SCORE: f64 = 200.0;

/// Bonus for a catalog key that contains the whole query literally.
pub const SUBSTRING_BONUS: f64 = 70.0;

/// Edit-distance similarity in `0.0..=100.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Score a normalized query against a catalog key.
pub fn score(query: &str, key: &str) -> f64 {
    if query == key {
        return EXACT_MATCH_SCORE;
    }
    let bonus = if key.contains(query) {
        SUBSTRING_BONUS
    } else {
        0.0
    };
    similarity(query, key) + bonus
}

/// The winning entry of a search, with the key it matched and its score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredMatch<'a> {
    pub entry: &'a CardEntry,
    pub key: &'a str,
    pub score: f64,
}

impl Catalog {
    /// Find the best-scoring card for a raw query.
    ///
    /// Ties go to the first key in catalog order. Returns `None` only when
    /// the catalog is empty.
    pub fn best_match_scored(&self, raw_query: &str) -> Option<ScoredMatch<'_>> {
        let query = normalize(raw_query);
        log::debug!("Searching for card \"{raw_query}\" -> \"{query}\"");

        let mut best: Option<ScoredMatch<'_>> = None;
        for (key, entry) in self.iter() {
            let s = score(&query, key);
            if best.is_none_or(|b| s > b.score) {
                best = Some(ScoredMatch {
                    entry,
                    key,
                    score: s,
                });
            }
        }

        if let Some(m) = &best {
            log::debug!("Best match for \"{query}\": \"{}\" ({:.1})", m.key, m.score);
        }
        best
    }

    /// Find the best-matching card for a raw query. See
    /// [`best_match_scored`](Self::best_match_scored).
    pub fn best_match(&self, raw_query: &str) -> Option<&CardEntry> {
        self.best_match_scored(raw_query).map(|m| m.entry)
    }
}

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod tests;
