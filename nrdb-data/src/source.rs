use nrdb_core::RecordSet;

use crate::error::DataError;

/// Datasets the catalog is built from.
pub const DATASETS: &[&str] = &["cards", "packs", "cycles", "mwl"];

/// Supplies raw NetrunnerDB datasets by name.
///
/// Implementations decide where the data comes from (local cache, network,
/// fixtures). The loader only relies on the `{"data": [...]}` envelope.
pub trait DataSource {
    fn fetch_or_load(&self, dataset: &str) -> Result<RecordSet<serde_json::Value>, DataError>;
}
