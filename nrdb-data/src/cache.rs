//! Local cache of NetrunnerDB API datasets.
//!
//! Each dataset is stored verbatim as `<dataset>.json` in the cache directory,
//! next to a `meta.json` recording where and when it was downloaded. A cached
//! file that no longer parses is treated as missing and re-downloaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nrdb_core::RecordSet;
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::source::DataSource;

/// Cache format version. Bump when the on-disk layout changes so stale
/// caches are wiped automatically.
const CACHE_VERSION: u32 = 1;

/// Public NetrunnerDB API root.
pub const DEFAULT_API_BASE: &str = "https://netrunnerdb.com/api/2.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Metadata about one cached dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedDataset {
    pub source: String,
    pub downloaded: String,
    pub file_size: u64,
    #[serde(default)]
    pub records: usize,
}

/// Contents of `meta.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheMeta {
    #[serde(default)]
    pub version: u32,
    pub datasets: BTreeMap<String, CachedDataset>,
}

/// A cached dataset, for display.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub dataset: String,
    pub file_size: u64,
    pub records: usize,
    pub downloaded: String,
    pub source: String,
}

/// Default cache directory: `<user cache dir>/nrdb-bot/data`.
pub fn default_cache_dir() -> Result<PathBuf, DataError> {
    let base =
        dirs::cache_dir().ok_or_else(|| DataError::cache("Could not determine cache directory"))?;
    Ok(base.join("nrdb-bot").join("data"))
}

/// Fetch-or-cache access to the NetrunnerDB public API.
pub struct NrdbCache {
    dir: PathBuf,
    api_base: String,
    http: reqwest::blocking::Client,
}

impl NrdbCache {
    pub fn new(dir: impl Into<PathBuf>, api_base: impl Into<String>) -> Result<Self, DataError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("nrdb-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            dir: dir.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Cache in the default directory against the public API.
    pub fn with_defaults() -> Result<Self, DataError> {
        Self::new(default_cache_dir()?, DEFAULT_API_BASE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn dataset_path(&self, dataset: &str) -> Result<PathBuf, DataError> {
        let valid = !dataset.is_empty()
            && dataset
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(DataError::dataset(format!("Invalid dataset name '{dataset}'")));
        }
        Ok(self.dir.join(format!("{dataset}.json")))
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join("meta.json")
    }

    fn dataset_url(&self, dataset: &str) -> String {
        format!("{}/public/{dataset}", self.api_base)
    }

    /// Load cache metadata. A version mismatch wipes the cache.
    fn load_meta(&self) -> Result<CacheMeta, DataError> {
        let path = self.meta_path();
        let fresh = CacheMeta {
            version: CACHE_VERSION,
            ..Default::default()
        };
        if !path.exists() {
            return Ok(fresh);
        }
        let contents = fs::read_to_string(&path)?;
        let meta: CacheMeta = match serde_json::from_str(&contents) {
            Ok(meta) => meta,
            Err(e) => {
                log::warn!("Ignoring unreadable cache metadata {}: {e}", path.display());
                return Ok(fresh);
            }
        };
        if meta.version != CACHE_VERSION {
            log::info!(
                "Cache format changed (v{} -> v{CACHE_VERSION}), clearing {}",
                meta.version,
                self.dir.display()
            );
            self.clear()?;
            return Ok(fresh);
        }
        Ok(meta)
    }

    fn save_meta(&self, meta: &CacheMeta) -> Result<(), DataError> {
        fs::create_dir_all(&self.dir)?;
        let contents = serde_json::to_string_pretty(meta)?;
        fs::write(self.meta_path(), contents)?;
        Ok(())
    }

    /// Read a dataset from the cache. Missing or corrupt files yield `None`.
    fn read_cached(&self, dataset: &str) -> Result<Option<RecordSet<serde_json::Value>>, DataError> {
        // Loading the metadata first applies the version check.
        self.load_meta()?;

        let path = self.dataset_path(dataset)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_slice(&bytes) {
            Ok(set) => Ok(Some(set)),
            Err(e) => {
                log::warn!("Cached {dataset} at {} is corrupt: {e}", path.display());
                Ok(None)
            }
        }
    }

    /// Validate a downloaded payload, write it to the cache, and record it
    /// in the metadata.
    pub(crate) fn store(
        &self,
        dataset: &str,
        source: &str,
        bytes: &[u8],
    ) -> Result<RecordSet<serde_json::Value>, DataError> {
        let set: RecordSet<serde_json::Value> = serde_json::from_slice(bytes).map_err(|e| {
            DataError::download(format!("{dataset} response is not a dataset: {e}"))
        })?;

        let path = self.dataset_path(dataset)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;

        let mut meta = self.load_meta()?;
        meta.version = CACHE_VERSION;
        meta.datasets.insert(
            dataset.to_string(),
            CachedDataset {
                source: source.to_string(),
                downloaded: chrono::Utc::now().to_rfc3339(),
                file_size: bytes.len() as u64,
                records: set.data.len(),
            },
        );
        self.save_meta(&meta)?;
        Ok(set)
    }

    /// Download a dataset from the API and replace the cached copy.
    pub fn refresh(&self, dataset: &str) -> Result<RecordSet<serde_json::Value>, DataError> {
        self.dataset_path(dataset)?;
        let url = self.dataset_url(dataset);
        log::info!("Loading {dataset} from netrunnerdb...");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::download(format!("HTTP {status} for {dataset} ({url})")));
        }
        let bytes = response.bytes()?;
        let set = self.store(dataset, &url, &bytes)?;
        log::info!("Downloaded {dataset} ({} records)", set.data.len());
        Ok(set)
    }

    /// List cached datasets, sorted by name.
    pub fn list(&self) -> Result<Vec<CacheEntry>, DataError> {
        let meta = self.load_meta()?;
        Ok(meta
            .datasets
            .into_iter()
            .filter(|(name, _)| {
                self.dataset_path(name)
                    .map(|p| p.exists())
                    .unwrap_or(false)
            })
            .map(|(dataset, cached)| CacheEntry {
                dataset,
                file_size: cached.file_size,
                records: cached.records,
                downloaded: cached.downloaded,
                source: cached.source,
            })
            .collect())
    }

    /// Remove every cached file. Returns the number of bytes freed.
    pub fn clear(&self) -> Result<u64, DataError> {
        let mut total_size = 0u64;
        if !self.dir.exists() {
            return Ok(0);
        }

        for entry in fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
            if path.is_file() && is_json {
                if let Ok(m) = fs::metadata(&path) {
                    total_size += m.len();
                }
                fs::remove_file(&path)?;
            }
        }
        Ok(total_size)
    }

    /// Total size of the cached datasets, per the metadata.
    pub fn total_size(&self) -> Result<u64, DataError> {
        Ok(self.list()?.iter().map(|e| e.file_size).sum())
    }
}

impl DataSource for NrdbCache {
    fn fetch_or_load(&self, dataset: &str) -> Result<RecordSet<serde_json::Value>, DataError> {
        if let Some(set) = self.read_cached(dataset)? {
            log::debug!(
                "Loaded {dataset} from {} ({} records)",
                self.dir.display(),
                set.data.len()
            );
            return Ok(set);
        }
        self.refresh(dataset)
    }
}

#[cfg(test)]
#[path = "tests/cache_tests.rs"]
mod tests;
