//! Cache of serialized scheme responses, keyed by input hex color.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A serialized scheme mapping ready to be served verbatim
#[derive(Clone, Debug)]
pub struct CachedSchemes {
    /// JSON body exactly as first served
    pub json: Arc<str>,
    /// When this entry was generated
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl CachedSchemes {
    pub fn new(json: impl Into<Arc<str>>) -> Self {
        Self {
            json: json.into(),
            generated_at: chrono::Utc::now(),
        }
    }
}

/// Trait for scheme response storage
#[async_trait]
pub trait SchemeCache: Send + Sync {
    /// Look up a cached response by key (`#rrggbb`)
    async fn get(&self, key: &str) -> Option<CachedSchemes>;

    /// Store a response under a key
    async fn store(&self, key: &str, entry: CachedSchemes);
}

struct CacheInner {
    entries: HashMap<String, CachedSchemes>,
    /// Keys by insertion time (oldest first)
    insertion_order: VecDeque<String>,
}

/// In-memory scheme cache with oldest-first eviction
pub struct InMemorySchemeCache {
    inner: Arc<RwLock<CacheInner>>,
    max_entries: usize,
}

impl InMemorySchemeCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(CacheInner {
                entries: HashMap::new(),
                insertion_order: VecDeque::new(),
            })),
            max_entries,
        }
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SchemeCache for InMemorySchemeCache {
    async fn get(&self, key: &str) -> Option<CachedSchemes> {
        let inner = self.inner.read().await;
        inner.entries.get(key).cloned()
    }

    async fn store(&self, key: &str, entry: CachedSchemes) {
        if self.max_entries == 0 {
            return;
        }

        let mut inner = self.inner.write().await;

        if inner.entries.insert(key.to_string(), entry).is_some() {
            // output is deterministic, so a replaced entry keeps its slot
            return;
        }
        inner.insertion_order.push_back(key.to_string());

        while inner.entries.len() > self.max_entries {
            let Some(oldest) = inner.insertion_order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
            tracing::debug!(
                key = %oldest,
                cache_size = inner.entries.len(),
                "Scheme cache: evicted oldest entry"
            );
        }
    }
}
