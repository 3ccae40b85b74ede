//! # Runtime Configuration
//!
//! Unified configuration for both subsystems and the storage locations
//! they read from. Everything is read from the environment; every value
//! has a default except the optional matrix and alignment locations.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use cv_01_protein_catalog::{CatalogConfig, CatalogError};
use cv_02_matrix_store::{LoaderConfig, MatrixError, MatrixStoreError};
use thiserror::Error;

/// Default catalogue location.
pub const DEFAULT_DB_PATH: &str = "~/docs/coevo.db";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("Matrix backend '{0}' is not available in this build")]
    UnsupportedBackend(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Loader(#[from] MatrixError),

    #[error("Cannot open matrix store: {0}")]
    MatrixStore(#[from] MatrixStoreError),
}

/// Which adapter serves `matrix_path`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixBackendKind {
    /// `<root>/<shard>/<digest>.bin` files
    #[default]
    Directory,
    /// Read-only RocksDB database
    RocksDb,
}

impl FromStr for MatrixBackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directory" | "dir" => Ok(MatrixBackendKind::Directory),
            "rocksdb" => Ok(MatrixBackendKind::RocksDb),
            other => Err(format!("expected 'directory' or 'rocksdb', got '{}'", other)),
        }
    }
}

/// Storage locations.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Relational catalogue (SQLite).
    pub db_path: PathBuf,
    /// Matrix store root. Matrix loading is unavailable when unset.
    pub matrix_path: Option<PathBuf>,
    /// Adapter used for `matrix_path`.
    pub matrix_backend: MatrixBackendKind,
    /// Directory of `<uniprot_id>.aln` files.
    pub alignment_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            matrix_path: None,
            matrix_backend: MatrixBackendKind::Directory,
            alignment_path: None,
        }
    }
}

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub loader: LoaderConfig,
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `COEVO_DB_PATH`: catalogue file (default: `~/docs/coevo.db`)
    /// - `COEVO_MAT_PATH`: matrix store root (optional)
    /// - `COEVO_MAT_BACKEND`: `directory` or `rocksdb` (default: directory)
    /// - `COEVO_ALN_PATH`: alignment directory (optional)
    /// - `COEVO_QUERY_TIMEOUT_MS`: store timeout (default: 30000)
    /// - `COEVO_CACHE_CAPACITY`: cached queries (default: 256)
    /// - `COEVO_CACHE_TTL_SECS`: cache entry lifetime (default: 360)
    /// - `COEVO_MAX_LOAD`: matrices per request ceiling (default: 1000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = lookup("HOME");
        let path = |var: &str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .map(|v| expand_home(&v, home.as_deref()))
        };

        let storage = StorageConfig {
            db_path: path("COEVO_DB_PATH")
                .unwrap_or_else(|| expand_home(DEFAULT_DB_PATH, home.as_deref())),
            matrix_path: path("COEVO_MAT_PATH"),
            matrix_backend: parse_var(&lookup, "COEVO_MAT_BACKEND")?.unwrap_or_default(),
            alignment_path: path("COEVO_ALN_PATH"),
        };

        let mut catalog = CatalogConfig::default();
        let mut loader = LoaderConfig::default();

        if let Some(millis) = parse_var::<u64, _>(&lookup, "COEVO_QUERY_TIMEOUT_MS")? {
            let timeout = Duration::from_millis(millis);
            catalog = catalog.with_query_timeout(timeout);
            loader = loader.with_read_timeout(timeout);
        }
        if let Some(capacity) = parse_var(&lookup, "COEVO_CACHE_CAPACITY")? {
            catalog = catalog.with_cache_capacity(capacity);
        }
        if let Some(secs) = parse_var(&lookup, "COEVO_CACHE_TTL_SECS")? {
            catalog = catalog.with_cache_ttl(Duration::from_secs(secs));
        }
        if let Some(max_load) = parse_var(&lookup, "COEVO_MAX_LOAD")? {
            loader = loader.with_max_load(max_load);
        }

        let config = Self {
            storage,
            catalog,
            loader,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate both subsystem configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.loader.validate()?;
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(e) => Err(ConfigError::InvalidValue {
                var,
                reason: e.to_string(),
                value,
            }),
        },
    }
}

/// Expand a leading `~` to `home`. Paths without one are returned as-is.
pub fn expand_home(path: &str, home: Option<&str>) -> PathBuf {
    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => PathBuf::from(home),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            Path::new(home).join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}
