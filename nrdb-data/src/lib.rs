//! NetrunnerDB dataset access: the fetch-or-cache data source and the
//! loader that turns its datasets into a [`nrdb_core::Catalog`].

pub mod cache;
pub mod error;
pub mod loader;
pub mod source;

pub use cache::{CacheEntry, CachedDataset, DEFAULT_API_BASE, NrdbCache, default_cache_dir};
pub use error::DataError;
pub use loader::load_catalog;
pub use source::{DATASETS, DataSource};
