//! An explicit, invalidatable cache for the base catalog snapshot.
//!
//! Entries live for the process lifetime by default, an optional TTL makes
//! them expire, and `invalidate` drops them on demand.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug)]
pub struct SnapshotCache<T> {
    ttl: Option<Duration>,
    slot: Mutex<Option<Entry<T>>>,
}

#[derive(Debug)]
struct Entry<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

impl<T> SnapshotCache<T> {
    pub fn new(ttl: Option<Duration>) -> Self {
        SnapshotCache {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Get the cached value. Entries older than the TTL read as absent.
    pub fn get(&self) -> Option<Arc<T>> {
        let slot = self.slot.lock();
        let entry = slot.as_ref()?;
        if let Some(ttl) = self.ttl {
            if entry.loaded_at.elapsed() >= ttl {
                return None;
            }
        }
        Some(entry.value.clone())
    }

    /// Replace the cached value, returning a shared handle to it.
    pub fn store(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        *self.slot.lock() = Some(Entry {
            value: value.clone(),
            loaded_at: Instant::now(),
        });
        value
    }

    pub fn invalidate(&self) {
        self.slot.lock().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_serves_stored_values() {
        let cache: SnapshotCache<Vec<u32>> = SnapshotCache::new(None);
        assert!(cache.get().is_none());

        cache.store(vec![1, 2, 3]);
        assert_eq!(*cache.get().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn invalidate_drops_the_entry() {
        let cache = SnapshotCache::new(None);
        cache.store("snapshot");
        cache.invalidate();
        assert!(cache.get().is_none());
    }

    #[test]
    fn zero_ttl_entries_read_as_absent() {
        let cache = SnapshotCache::new(Some(Duration::ZERO));
        cache.store("snapshot");
        assert!(cache.get().is_none());
    }

    #[test]
    fn entries_within_ttl_are_served() {
        let cache = SnapshotCache::new(Some(Duration::from_secs(3600)));
        cache.store("snapshot");
        assert!(cache.get().is_some());
    }

    #[test]
    fn store_replaces_the_previous_entry() {
        let cache = SnapshotCache::new(None);
        cache.store(1);
        cache.store(2);
        assert_eq!(*cache.get().unwrap(), 2);
    }
}
