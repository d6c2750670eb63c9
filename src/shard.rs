use crate::stats::ShardStats;
use hashbrown::HashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::hash::Hash;

/// A single shard: a HashMap protected by its own read-write lock.
///
/// `read` and `write` are the only paths to the lock, so every acquisition is
/// counted and no guard outlives the method that took it.
pub(crate) struct Shard<K, V> {
    map: RwLock<HashMap<K, V>>,
    stats: ShardStats,
}

impl<K, V> Shard<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty shard pre-sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity)),
            stats: ShardStats::new(),
        }
    }

    /// Acquire the lock in shared mode.
    #[inline]
    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, V>> {
        #[cfg(feature = "lock-timing")]
        let start = std::time::Instant::now();
        let guard = self.map.read();
        #[cfg(feature = "lock-timing")]
        self.stats.record_lock_wait(start.elapsed().as_nanos() as u64);
        self.stats.record_lock_acquisition();
        guard
    }

    /// Acquire the lock in exclusive mode.
    #[inline]
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, V>> {
        #[cfg(feature = "lock-timing")]
        let start = std::time::Instant::now();
        let guard = self.map.write();
        #[cfg(feature = "lock-timing")]
        self.stats.record_lock_wait(start.elapsed().as_nanos() as u64);
        self.stats.record_lock_acquisition();
        guard
    }

    /// Run `f` against the value for `key` while holding the shared lock.
    pub fn get_with<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        let map = self.read();
        let result = map.get(key).map(f);
        self.stats.record_read(result.is_some());
        result
    }

    /// Check if a key exists without touching the value.
    pub fn contains_key(&self, key: &K) -> bool {
        let found = self.read().contains_key(key);
        self.stats.record_read(found);
        found
    }

    /// Insert or overwrite a key-value pair.
    pub fn set(&self, key: K, value: V) {
        self.write().insert(key, value);
        self.stats.record_write();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.map.read().capacity()
    }
}

impl<K, V> Shard<K, V> {
    /// Get a snapshot of statistics for this shard.
    pub fn stats(&self) -> crate::stats::ShardOps {
        self.stats.snapshot()
    }
}
