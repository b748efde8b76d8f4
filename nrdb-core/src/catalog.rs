use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::normalize::normalize;
use crate::types::{Card, Cycle, Mwl, Pack};

/// Base URL for card permalinks; the card code is appended as a path segment.
pub const CARD_URL_BASE: &str = "https://netrunnerdb.com/en/card";

/// A card joined with its ban and rotation status.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub card: Card,
    /// Listed on the active ban list.
    pub is_banned: bool,
    /// Its pack belongs to a rotated cycle.
    pub has_rotated: bool,
}

impl CardEntry {
    pub fn permalink(&self) -> String {
        format!("{CARD_URL_BASE}/{}", self.card.code)
    }
}

impl fmt::Display for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .card
            .stripped_title
            .as_deref()
            .unwrap_or(&self.card.title);
        f.write_str(name)
    }
}

/// Name-indexed, immutable card catalog.
///
/// Entries are kept in a `Vec` in first-insertion order of their normalized
/// key, with a key → index map alongside it. When two titles normalize to the
/// same key the later card replaces the earlier one in place, so iteration
/// order stays stable and fuzzy-match ties resolve the same way every run.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<(String, CardEntry)>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Join cards with pack, cycle and ban-list data and index them by
    /// normalized title.
    ///
    /// Broken pack/cycle links leave `has_rotated` false. When no ban list is
    /// flagged active nothing is banned.
    pub fn build(cards: Vec<Card>, packs: &[Pack], cycles: &[Cycle], mwls: &[Mwl]) -> Self {
        let packs_by_code: HashMap<&str, &Pack> =
            packs.iter().map(|p| (p.code.as_str(), p)).collect();
        let cycles_by_code: HashMap<&str, &Cycle> =
            cycles.iter().map(|c| (c.code.as_str(), c)).collect();

        let banned: HashSet<&str> = match mwls.iter().find(|m| m.active) {
            Some(mwl) => {
                log::debug!(
                    "Active ban list: {} ({} cards)",
                    mwl.name.as_deref().unwrap_or(&mwl.code),
                    mwl.cards.len()
                );
                mwl.cards.keys().map(String::as_str).collect()
            }
            None => {
                log::warn!("No active ban list found; treating every card as legal");
                HashSet::new()
            }
        };

        let mut catalog = Self::default();
        let mut collisions = 0usize;

        for card in cards {
            let key = normalize(&card.title);
            if key.is_empty() {
                log::warn!("Skipping card {} with an empty title", card.code);
                continue;
            }

            let has_rotated = card
                .pack_code
                .as_deref()
                .and_then(|code| packs_by_code.get(code))
                .and_then(|pack| pack.cycle_code.as_deref())
                .and_then(|code| cycles_by_code.get(code))
                .is_some_and(|cycle| cycle.rotated);
            let is_banned = banned.contains(card.code.as_str());

            let entry = CardEntry {
                card,
                is_banned,
                has_rotated,
            };

            match catalog.by_key.get(&key) {
                Some(&index) => {
                    log::debug!(
                        "Title collision on \"{key}\": {} replaces {}",
                        entry.card.code,
                        catalog.entries[index].1.card.code
                    );
                    collisions += 1;
                    catalog.entries[index].1 = entry;
                }
                None => {
                    catalog.by_key.insert(key.clone(), catalog.entries.len());
                    catalog.entries.push((key, entry));
                }
            }
        }

        log::info!(
            "Indexed {} cards ({} title collisions, {} banned)",
            catalog.len(),
            collisions,
            catalog.entries.iter().filter(|(_, e)| e.is_banned).count()
        );
        catalog
    }

    /// Exact lookup by an already-normalized key.
    pub fn get(&self, normalized_key: &str) -> Option<&CardEntry> {
        self.by_key
            .get(normalized_key)
            .map(|&index| &self.entries[index].1)
    }

    /// Exact lookup by raw title; the title is normalized first.
    pub fn lookup_title(&self, title: &str) -> Option<&CardEntry> {
        log::debug!("Looking up card \"{title}\" by title");
        self.get(&normalize(title))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(normalized key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
