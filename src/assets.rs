//! Asset loading with embedded fallbacks
//!
//! Two assets ship inside the binary: the default `config.yaml` and the demo
//! product `catalog.json`.
//!
//! - If an env var is NOT set: use the embedded asset only (no filesystem access)
//! - If an env var IS set and the file exists: use the file
//! - If an env var IS set and the file is missing: fall back to the embedded asset

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default assets
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "config.yaml"]
#[include = "catalog.json"]
struct EmbeddedAssets;

const CONFIG_NAME: &str = "config.yaml";
const CATALOG_NAME: &str = "catalog.json";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Catalog,
}

impl AssetCategory {
    fn embedded_name(self) -> &'static str {
        match self {
            AssetCategory::Config => CONFIG_NAME,
            AssetCategory::Catalog => CATALOG_NAME,
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External catalog file path (from CATALOG_FILE env var)
    catalog_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    pub fn new(config_file: Option<PathBuf>, catalog_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            catalog_file,
        }
    }

    /// Create a loader from `CONFIG_FILE` and `CATALOG_FILE`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
            std::env::var("CATALOG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn catalog_file(&self) -> Option<&Path> {
        self.catalog_file.as_deref()
    }

    /// Read the config file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        self.read(AssetCategory::Config)
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        into_string(self.read_config()?)
    }

    /// Read the product catalog
    pub fn read_catalog(&self) -> io::Result<Cow<'static, [u8]>> {
        self.read(AssetCategory::Catalog)
    }

    fn external_path(&self, category: AssetCategory) -> Option<&Path> {
        match category {
            AssetCategory::Config => self.config_file(),
            AssetCategory::Catalog => self.catalog_file(),
        }
    }

    fn read(&self, category: AssetCategory) -> io::Result<Cow<'static, [u8]>> {
        // Try external first
        if let Some(path) = self.external_path(category) {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading asset from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        // Fall back to embedded
        let name = category.embedded_name();
        EmbeddedAssets::get(name)
            .map(|f| {
                tracing::trace!(asset = name, "Loading asset from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded {name} not found"),
                )
            })
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// Uses the configured paths, or `./config.yaml` and `./catalog.json`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let name = category.embedded_name();
            let path = self
                .external_path(category)
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".").join(name));

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = EmbeddedAssets::get(name) {
                fs::write(&path, &*data.data)?;
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets (for display)
    pub fn list_embedded() -> Vec<String> {
        EmbeddedAssets::iter().map(|s| s.to_string()).collect()
    }
}

fn into_string(bytes: Cow<'static, [u8]>) -> io::Result<String> {
    String::from_utf8(bytes.into_owned()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
