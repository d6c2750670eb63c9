use crate::config::Config;
use crate::error::Error;
use crate::partition::{HashPartitioner, Partitioner};
use crate::shard::Shard;
use crate::stats::Stats;
use std::fmt;
use std::hash::Hash;

/// Concurrent map split into independently locked partitions.
///
/// Every key is routed to exactly one partition by the caller's
/// [`Partitioner`]. Each partition is a `HashMap` behind its own read-write
/// lock, so operations on different partitions never wait on each other, and
/// every operation takes exactly one lock.
///
/// # Example
///
/// ```rust
/// use partmap::PartitionedMap;
///
/// let map = PartitionedMap::new(2, 7, |key: &&str| key.len() as i64)?;
///
/// map.set("ab", "hello");   // 2 mod 2 -> partition 0
/// map.set("abc", "world");  // 3 mod 2 -> partition 1
///
/// assert_eq!(map.get(&"ab"), Some("hello"));
/// assert_eq!(map.get(&"abc"), Some("world"));
/// assert_eq!(map.get(&"xyz"), None);
/// # Ok::<(), partmap::Error>(())
/// ```
pub struct PartitionedMap<K, V, P = HashPartitioner> {
    shards: Box<[Shard<K, V>]>,
    partitioner: P,
}

impl<K, V, P> PartitionedMap<K, V, P>
where
    K: Hash + Eq,
    P: Partitioner<K>,
{
    /// Create a map with `partition_count` partitions, each pre-sized for
    /// `capacity_per_partition` entries, routing keys with `partitioner`.
    ///
    /// Returns [`Error::InvalidPartitionCount`] if `partition_count` is 0.
    pub fn new(
        partition_count: usize,
        capacity_per_partition: usize,
        partitioner: P,
    ) -> Result<Self, Error> {
        if partition_count == 0 {
            tracing::debug!(target: "partmap", "rejected partition count of 0");
            return Err(Error::InvalidPartitionCount);
        }

        let shards = (0..partition_count)
            .map(|_| Shard::with_capacity(capacity_per_partition))
            .collect();

        tracing::debug!(
            target: "partmap",
            partition_count,
            capacity_per_partition,
            "created partitioned map"
        );

        Ok(Self {
            shards,
            partitioner,
        })
    }

    /// Create a map from a config, routing keys with `partitioner`.
    ///
    /// The config's hash function is ignored; it only applies to
    /// [`with_hasher`](PartitionedMap::with_hasher).
    pub fn with_config(config: Config, partitioner: P) -> Result<Self, Error> {
        Self::new(
            config.partition_count,
            config.capacity_per_partition,
            partitioner,
        )
    }

    /// Which partition this key belongs to, in `[0, partition_count)`.
    ///
    /// The raw partitioner output is reduced with a Euclidean modulo, so
    /// negative values wrap around instead of escaping the range: with 4
    /// partitions, `-1` lands in partition 3.
    #[inline]
    pub fn partition_of(&self, key: &K) -> usize {
        let raw = self.partitioner.partition(key);
        raw.rem_euclid(self.shards.len() as i64) as usize
    }

    #[inline]
    fn shard(&self, key: &K) -> &Shard<K, V> {
        &self.shards[self.partition_of(key)]
    }

    /// Get a clone of the value for `key`, or `None` if it was never set.
    ///
    /// Holds the partition's shared lock only for the lookup.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.shard(key).get_with(key, V::clone)
    }

    /// Get the value for `key` together with whether it was found.
    ///
    /// An absent key yields `(V::default(), false)`.
    ///
    /// ```rust
    /// use partmap::PartitionedMap;
    ///
    /// let map = PartitionedMap::new(4, 0, |key: &u32| *key as i64)?;
    /// map.set(1, 10u64);
    /// assert_eq!(map.get_or_default(&1), (10, true));
    /// assert_eq!(map.get_or_default(&2), (0, false));
    /// # Ok::<(), partmap::Error>(())
    /// ```
    pub fn get_or_default(&self, key: &K) -> (V, bool)
    where
        V: Clone + Default,
    {
        match self.get(key) {
            Some(value) => (value, true),
            None => (V::default(), false),
        }
    }

    /// Run `f` against the value for `key` under the partition's shared lock.
    ///
    /// Useful when `V` is expensive or impossible to clone. `f` must not touch
    /// this map: re-entering a partition it already holds can deadlock.
    pub fn get_with<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.shard(key).get_with(key, f)
    }

    /// Check whether `key` has been set.
    pub fn contains_key(&self, key: &K) -> bool {
        self.shard(key).contains_key(key)
    }

    /// Insert `value` for `key`, overwriting any previous value.
    ///
    /// Holds the partition's exclusive lock for the write. Concurrent `set`s on
    /// the same key are applied in lock order; the last one wins.
    pub fn set(&self, key: K, value: V) {
        self.shard(&key).set(key, value)
    }
}

impl<K, V> PartitionedMap<K, V, HashPartitioner>
where
    K: Hash + Eq,
{
    /// Create a map from a config, routing keys by hashing them with the
    /// config's hash function.
    pub fn with_hasher(config: Config) -> Result<Self, Error> {
        let partitioner = HashPartitioner::new(config.hash_function);
        Self::with_config(config, partitioner)
    }
}

impl<K, V, P> PartitionedMap<K, V, P> {
    /// Number of partitions, fixed at construction.
    pub fn partition_count(&self) -> usize {
        self.shards.len()
    }

    /// The partition function this map routes with.
    pub fn partitioner(&self) -> &P {
        &self.partitioner
    }

    /// Per-partition operation counters. All zeros unless the `metrics`
    /// feature is enabled.
    pub fn stats(&self) -> Stats {
        Stats {
            operations: self.shards.iter().map(|s| s.stats()).collect(),
        }
    }
}

impl<K, V, P: fmt::Debug> fmt::Debug for PartitionedMap<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionedMap")
            .field("partition_count", &self.shards.len())
            .field("partitioner", &self.partitioner)
            .finish_non_exhaustive()
    }
}
