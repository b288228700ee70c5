use crate::assets::AssetLoader;
use color_harmony::MatchMode;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Scheme response cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Color-match filter behavior
    #[serde(default)]
    pub filter: FilterConfig,

    /// Product candidate source
    #[serde(default)]
    pub products: ProductsConfig,
}

/// Configuration for the scheme response cache
#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached responses (0 disables caching)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_max_entries() -> usize {
    512
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

/// Configuration for the color-match filter
#[derive(Debug, Deserialize, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
}

/// Which product source backs `/api/product-search`
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Bundled demo catalog
    #[default]
    Catalog,
    /// Remote search API
    Http,
}

/// Configuration for the product source
#[derive(Debug, Deserialize, Clone)]
pub struct ProductsConfig {
    #[serde(default)]
    pub source: SourceKind,

    /// Number of candidates requested from the source
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Search endpoint (http source)
    #[serde(default)]
    pub search_url: Option<String>,

    /// OAuth2 client-credentials token endpoint (http source)
    #[serde(default)]
    pub token_url: Option<String>,

    /// OAuth2 scope requested with the token
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_limit() -> u32 {
    20
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            limit: default_limit(),
            search_url: None,
            token_url: None,
            scope: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        cache_entries = config.cache.max_entries,
                        match_mode = ?config.filter.match_mode,
                        source = ?config.products.source,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
