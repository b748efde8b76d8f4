//! Settings file and value resolution.
//!
//! Values come from, in priority order: command-line flags, environment
//! variables, `~/.config/nrdb-bot/settings.toml`, then built-in defaults.

use std::fmt;
use std::path::{Path, PathBuf};

use nrdb_core::{Markup, ScanMode};
use serde::Deserialize;

use crate::error::CliError;

pub(crate) const ENV_CACHE_DIR: &str = "NRDB_CACHE_DIR";
pub(crate) const ENV_API_BASE: &str = "NRDB_API_BASE";

/// Canonical path to the settings file: `~/.config/nrdb-bot/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("nrdb-bot").join("settings.toml")
}

/// TOML settings file format.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub data: DataSettings,
    pub render: RenderSettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct DataSettings {
    pub cache_dir: Option<PathBuf>,
    pub api_base: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RenderSettings {
    pub markup: Option<Markup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ScanSettings {
    /// Ignore `[[...]]` on quoted (`>`) lines.
    pub skip_quoted: Option<bool>,
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub(crate) fn load(path: &Path) -> Result<Self, CliError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ValueSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${var}"),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Resolved<T> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Command-line overrides for settings.
#[derive(Debug, Default, Clone)]
pub(crate) struct Overrides {
    pub cache_dir: Option<PathBuf>,
    pub api_base: Option<String>,
    pub markup: Option<Markup>,
    pub per_line: bool,
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub cache_dir: Resolved<PathBuf>,
    pub api_base: Resolved<String>,
    pub markup: Resolved<Markup>,
    pub scan_mode: Resolved<ScanMode>,
}

impl Config {
    pub(crate) fn resolve(settings: Settings, overrides: &Overrides) -> Result<Self, CliError> {
        Self::resolve_with(settings, overrides, |var| std::env::var(var).ok())
    }

    /// Resolve with an injectable environment lookup.
    pub(crate) fn resolve_with(
        settings: Settings,
        overrides: &Overrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let cache_dir = match (&overrides.cache_dir, env(ENV_CACHE_DIR), settings.data.cache_dir) {
            (Some(p), _, _) => Resolved::new(p.clone(), ValueSource::Flag),
            (None, Some(p), _) => Resolved::new(PathBuf::from(p), ValueSource::EnvVar(ENV_CACHE_DIR)),
            (None, None, Some(p)) => Resolved::new(p, ValueSource::ConfigFile),
            (None, None, None) => Resolved::new(
                nrdb_data::default_cache_dir()?,
                ValueSource::Default,
            ),
        };

        let api_base = match (&overrides.api_base, env(ENV_API_BASE), settings.data.api_base) {
            (Some(u), _, _) => Resolved::new(u.clone(), ValueSource::Flag),
            (None, Some(u), _) => Resolved::new(u, ValueSource::EnvVar(ENV_API_BASE)),
            (None, None, Some(u)) => Resolved::new(u, ValueSource::ConfigFile),
            (None, None, None) => Resolved::new(
                nrdb_data::DEFAULT_API_BASE.to_string(),
                ValueSource::Default,
            ),
        };

        let markup = match (overrides.markup, settings.render.markup) {
            (Some(m), _) => Resolved::new(m, ValueSource::Flag),
            (None, Some(m)) => Resolved::new(m, ValueSource::ConfigFile),
            (None, None) => Resolved::new(Markup::default(), ValueSource::Default),
        };

        let scan_mode = if overrides.per_line {
            Resolved::new(ScanMode::UnquotedLines, ValueSource::Flag)
        } else {
            match settings.scan.skip_quoted {
                Some(true) => Resolved::new(ScanMode::UnquotedLines, ValueSource::ConfigFile),
                Some(false) => Resolved::new(ScanMode::Message, ValueSource::ConfigFile),
                None => Resolved::new(ScanMode::default(), ValueSource::Default),
            }
        };

        Ok(Self {
            cache_dir,
            api_base,
            markup,
            scan_mode,
        })
    }

    /// Open the dataset cache this configuration points at.
    pub(crate) fn open_cache(&self) -> Result<nrdb_data::NrdbCache, CliError> {
        Ok(nrdb_data::NrdbCache::new(
            self.cache_dir.value.clone(),
            self.api_base.value.clone(),
        )?)
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
