//! In-memory catalog cache keyed by document content.
//!
//! Keys are the SHA-256 of the document text, so an edited document never
//! hits a stale entry. [`CatalogCache::invalidate`] and [`CatalogCache::clear`]
//! only reclaim memory. Inserting past capacity evicts the entry inserted
//! first. Hits do not reorder entries.
//!
//! # Example
//!
//! ```
//! use boikot_engine::cache::CatalogCache;
//!
//! let cache = CatalogCache::new(4);
//! let text = "Nestle boikot Makanan\n";
//!
//! let first = cache.get_or_build(text);
//! let second = cache.get_or_build(text);
//! assert!(std::sync::Arc::ptr_eq(&first, &second));
//! ```

use crate::catalog::Catalog;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Entries {
    catalogs: HashMap<String, Arc<Catalog>>,
    order: VecDeque<String>,
}

/// Bounded cache of built catalogs.
#[derive(Debug)]
pub struct CatalogCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl CatalogCache {
    /// Create a cache holding at most `capacity` documents (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    /// Maximum number of cached documents.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.catalogs.len()).unwrap_or(0)
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a catalog for this exact text is cached.
    pub fn contains(&self, raw_text: &str) -> bool {
        let key = hash_key(raw_text);
        self.entries
            .read()
            .map(|e| e.catalogs.contains_key(&key))
            .unwrap_or(false)
    }

    /// Cached catalog for `raw_text`, building and storing it on a miss.
    ///
    /// A poisoned lock bypasses the cache.
    pub fn get_or_build(&self, raw_text: &str) -> Arc<Catalog> {
        let key = hash_key(raw_text);

        if let Ok(guard) = self.entries.read() {
            if let Some(catalog) = guard.catalogs.get(&key) {
                tracing::debug!(key = %&key[..12], "Catalog cache hit");
                return Arc::clone(catalog);
            }
        }

        tracing::debug!(key = %&key[..12], "Catalog cache miss");
        let catalog = Arc::new(Catalog::from_text(raw_text));

        if let Ok(mut guard) = self.entries.write() {
            if let Some(existing) = guard.catalogs.get(&key) {
                return Arc::clone(existing);
            }
            while guard.catalogs.len() >= self.capacity {
                let Some(oldest) = guard.order.pop_front() else { break };
                guard.catalogs.remove(&oldest);
            }
            guard.order.push_back(key.clone());
            guard.catalogs.insert(key, Arc::clone(&catalog));
        }

        catalog
    }

    /// Drop the entry for `raw_text`. Returns whether one existed.
    pub fn invalidate(&self, raw_text: &str) -> bool {
        let key = hash_key(raw_text);
        match self.entries.write() {
            Ok(mut guard) => {
                guard.order.retain(|k| k != &key);
                guard.catalogs.remove(&key).is_some()
            }
            Err(_) => false,
        }
    }

    /// Drop every entry.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.write() {
            guard.catalogs.clear();
            guard.order.clear();
        }
    }
}

fn hash_key(raw_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_text.as_bytes());
    hex::encode(hasher.finalize())
}
