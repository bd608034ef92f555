//! Read-through memo of analysis results
//!
//! Entries are keyed by the analysis kind and a hash of the text, and
//! evicted oldest-first once the capacity is reached. Each entry keeps the
//! text it was computed from, so a hash collision is treated as a miss. The
//! cache never changes a result, it only avoids recomputing one.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::metrics::MetricResult;

/// Which analysis produced a cached result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    Basic,
    Composite,
}

type CacheKey = (AnalysisKind, u64);

#[derive(Debug)]
struct Entry {
    text: Box<str>,
    value: Arc<MetricResult>,
}

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<CacheKey, Entry>,
    order: VecDeque<CacheKey>,
}

/// Bounded, thread-safe result cache
#[derive(Debug)]
pub struct AnalysisCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl AnalysisCache {
    /// Cache holding at most `capacity` results; 0 stores nothing
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: RwLock::new(Entries::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored results
    pub fn len(&self) -> usize {
        self.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every stored result
    pub fn clear(&self) {
        let mut entries = self.write();
        entries.values.clear();
        entries.order.clear();
    }

    /// Stored result for `text`, computing and storing it on a miss
    pub fn get_or_compute<F>(&self, kind: AnalysisKind, text: &str, compute: F) -> Arc<MetricResult>
    where
        F: FnOnce() -> MetricResult,
    {
        if self.capacity == 0 {
            return Arc::new(compute());
        }
        self.lookup((kind, hash_text(text)), text, compute)
    }

    fn lookup<F>(&self, key: CacheKey, text: &str, compute: F) -> Arc<MetricResult>
    where
        F: FnOnce() -> MetricResult,
    {
        if let Some(hit) = self.read().values.get(&key) {
            if &*hit.text == text {
                log::trace!("Cache hit for {:?} analysis", key.0);
                return Arc::clone(&hit.value);
            }
            log::debug!("Cache hash collision for {:?} analysis", key.0);
        }

        // computed outside the lock; a concurrent miss may compute the same value
        let value = Arc::new(compute());

        let mut entries = self.write();
        if let Some(existing) = entries.values.get_mut(&key) {
            if &*existing.text != text {
                // newest text takes the slot, keeping its place in the eviction order
                existing.text = text.into();
                existing.value = Arc::clone(&value);
                return value;
            }
            return Arc::clone(&existing.value);
        }
        while entries.values.len() >= self.capacity {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.values.remove(&oldest);
                }
                None => break,
            }
        }
        entries.values.insert(
            key,
            Entry {
                text: text.into(),
                value: Arc::clone(&value),
            },
        );
        entries.order.push_back(key);
        value
    }

    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        // entries are plain memo data, still usable after a panic elsewhere
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn hash_text(text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::analyze_basic;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_read_through() {
        let cache = AnalysisCache::new(4);
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            analyze_basic("The cat sat.")
        };

        let first = cache.get_or_compute(AnalysisKind::Basic, "The cat sat.", compute);
        let second = cache.get_or_compute(AnalysisKind::Basic, "The cat sat.", compute);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_kinds_are_separate() {
        let cache = AnalysisCache::new(4);
        cache.get_or_compute(AnalysisKind::Basic, "text", || analyze_basic("text"));
        cache.get_or_compute(AnalysisKind::Composite, "text", || analyze_basic("text"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_fifo_eviction() {
        let cache = AnalysisCache::new(2);
        for text in ["one", "two", "three"] {
            cache.get_or_compute(AnalysisKind::Basic, text, || analyze_basic(text));
        }
        assert_eq!(cache.len(), 2);

        // "one" was evicted, so it is computed again
        let calls = AtomicUsize::new(0);
        cache.get_or_compute(AnalysisKind::Basic, "one", || {
            calls.fetch_add(1, Ordering::SeqCst);
            analyze_basic("one")
        });
        cache.get_or_compute(AnalysisKind::Basic, "three", || {
            calls.fetch_add(1, Ordering::SeqCst);
            analyze_basic("three")
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zero_capacity_stores_nothing() {
        let cache = AnalysisCache::new(0);
        cache.get_or_compute(AnalysisKind::Basic, "text", || analyze_basic("text"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = AnalysisCache::new(2);
        cache.get_or_compute(AnalysisKind::Basic, "text", || analyze_basic("text"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hash_collision_is_a_miss() {
        let cache = AnalysisCache::new(4);
        let key = (AnalysisKind::Basic, 42);

        let first = cache.lookup(key, "The cat sat.", || analyze_basic("The cat sat."));
        let second = cache.lookup(key, "Dogs run far away.", || {
            analyze_basic("Dogs run far away.")
        });

        assert_ne!(first, second);
        assert_eq!(*second, analyze_basic("Dogs run far away."));
        assert_eq!(cache.len(), 1);

        // the slot now belongs to the second text
        let calls = AtomicUsize::new(0);
        let again = cache.lookup(key, "Dogs run far away.", || {
            calls.fetch_add(1, Ordering::SeqCst);
            analyze_basic("Dogs run far away.")
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(Arc::ptr_eq(&second, &again));
    }

    #[test]
    fn test_concurrent_lookups() {
        let cache = Arc::new(AnalysisCache::new(8));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.get_or_compute(AnalysisKind::Basic, "shared text.", || {
                        analyze_basic("shared text.")
                    })
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(cache.len(), 1);
    }
}
