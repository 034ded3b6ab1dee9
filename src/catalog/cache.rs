//! Facet option cache.
//!
//! Memoizes, per attribute, the distinct values observed in the current
//! filtered set. The catalog clears it every time the filtered set is
//! replaced; nothing else invalidates it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use crate::record::Attribute;

/// Cache statistics, useful for checking that repeated reads are served
/// from memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Number of times the cache was cleared.
    pub invalidations: u64,
}

impl CacheStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Attribute -> ordered distinct option values.
///
/// Interior mutability lets read-only catalog views fill the cache lazily.
#[derive(Debug, Default)]
pub struct FacetOptionCache {
    entries: RefCell<HashMap<Attribute, Arc<[String]>>>,
    stats: RefCell<CacheStats>,
}

impl FacetOptionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached options for `attribute`, computing and storing them on a miss.
    pub fn get_or_compute<F>(&self, attribute: Attribute, compute: F) -> Arc<[String]>
    where
        F: FnOnce() -> Vec<String>,
    {
        if let Some(options) = self.entries.borrow().get(&attribute) {
            self.stats.borrow_mut().hits += 1;
            return Arc::clone(options);
        }

        self.stats.borrow_mut().misses += 1;
        let options: Arc<[String]> = compute().into();
        self.entries
            .borrow_mut()
            .insert(attribute, Arc::clone(&options));
        options
    }

    #[must_use]
    pub fn contains(&self, attribute: Attribute) -> bool {
        self.entries.borrow().contains_key(&attribute)
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
        self.stats.borrow_mut().invalidations += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        *self.stats.borrow()
    }
}
