//! Typed records decoded from NetrunnerDB API datasets.
//!
//! Only the fields the catalog and renderer read are modelled; anything else
//! in the API payload is ignored during deserialization.

use std::collections::BTreeMap;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};

/// The `{"data": [...]}` envelope every NetrunnerDB dataset arrives in.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSet<T> {
    pub data: Vec<T>,
}

/// A numeric card stat that may be absent, declared `null`, or set.
///
/// `None` means the record never declared the field; `Some(None)` means it
/// was declared as `null` (a variable "X" value).
pub type Stat = Option<Option<i64>>;

/// Maps a present field to `Some(..)` so `null` survives as `Some(None)`.
/// Paired with `#[serde(default)]`, an absent field stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A single card record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Card {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub stripped_title: Option<String>,
    #[serde(default)]
    pub type_code: Option<String>,
    #[serde(default)]
    pub faction_code: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub uniqueness: Option<bool>,
    #[serde(default)]
    pub pack_code: Option<String>,
    /// Influence cost, drawn as pips next to the faction name.
    #[serde(default)]
    pub faction_cost: Option<i64>,

    #[serde(default, deserialize_with = "present")]
    pub cost: Stat,
    #[serde(default, deserialize_with = "present")]
    pub memory_cost: Stat,
    #[serde(default, deserialize_with = "present")]
    pub strength: Stat,
    #[serde(default, deserialize_with = "present")]
    pub trash_cost: Stat,
    #[serde(default, deserialize_with = "present")]
    pub base_link: Stat,
    #[serde(default, deserialize_with = "present")]
    pub minimum_deck_size: Stat,
    #[serde(default, deserialize_with = "present")]
    pub influence_limit: Stat,
    #[serde(default, deserialize_with = "present")]
    pub advancement_cost: Stat,
    #[serde(default, deserialize_with = "present")]
    pub agenda_points: Stat,
}

impl Card {
    pub fn is_unique(&self) -> bool {
        self.uniqueness.unwrap_or(false)
    }
}

/// A data pack; links cards to their cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Pack {
    pub code: String,
    #[serde(default)]
    pub cycle_code: Option<String>,
}

/// A cycle of packs. Rotated cycles are out of the standard card pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cycle {
    pub code: String,
    #[serde(default)]
    pub rotated: bool,
}

/// A ban list (MWL). Only the list flagged `active` matters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Mwl {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: bool,
    /// Restricted card codes. The per-card restriction details are not used:
    /// every listed card counts as banned.
    #[serde(default)]
    pub cards: BTreeMap<String, IgnoredAny>,
}

impl Mwl {
    pub fn contains(&self, code: &str) -> bool {
        self.cards.contains_key(code)
    }
}

/// Decode raw JSON records into `T`, skipping any that don't fit the schema.
///
/// One malformed record (say, a card without a title) should not take the
/// whole dataset down with it.
pub fn decode_records<T: DeserializeOwned>(dataset: &str, raw: Vec<serde_json::Value>) -> Vec<T> {
    let total = raw.len();
    let decoded: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping {dataset} record #{i}: {e}");
                None
            }
        })
        .collect();
    if decoded.len() != total {
        log::warn!(
            "Decoded {} of {} {dataset} records",
            decoded.len(),
            total
        );
    }
    decoded
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
