use nrdb_core::{Card, Catalog, Cycle, Mwl, Pack, decode_records};
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::source::DataSource;

fn load<T: DeserializeOwned>(source: &dyn DataSource, dataset: &str) -> Result<Vec<T>, DataError> {
    let set = source.fetch_or_load(dataset)?;
    Ok(decode_records(dataset, set.data))
}

/// Load every dataset from `source` and build the catalog.
///
/// Cards, packs and cycles are required. The ban list is optional: if it
/// can't be loaded the catalog is built with nothing banned.
pub fn load_catalog(source: &dyn DataSource) -> Result<Catalog, DataError> {
    let cards: Vec<Card> = load(source, "cards")?;
    if cards.is_empty() {
        return Err(DataError::dataset("cards dataset contains no usable cards"));
    }
    let packs: Vec<Pack> = load(source, "packs")?;
    let cycles: Vec<Cycle> = load(source, "cycles")?;
    let mwls = match load::<Mwl>(source, "mwl") {
        Ok(mwls) => mwls,
        Err(e) => {
            log::warn!("Ban list unavailable ({e}); no cards will be marked banned");
            Vec::new()
        }
    };

    log::info!(
        "Loaded {} cards, {} packs, {} cycles, {} ban lists",
        cards.len(),
        packs.len(),
        cycles.len(),
        mwls.len()
    );
    Ok(Catalog::build(cards, &packs, &cycles, &mwls))
}
