use crate::error::Error;
use crate::hash::HashFunction;
use crate::map::PartitionedMap;
use crate::partition::{HashPartitioner, Partitioner};
use std::hash::Hash;

/// Configuration for a PartitionedMap instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) partition_count: usize,
    pub(crate) capacity_per_partition: usize,
    pub(crate) hash_function: HashFunction,
}

impl Config {
    /// Create a new config with defaults (16 partitions, no capacity hint, ahash).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of partitions. Must be greater than 0.
    pub fn partition_count(mut self, count: usize) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidPartitionCount);
        }
        self.partition_count = count;
        Ok(self)
    }

    /// Set the initial capacity of every partition. A hint only: partitions
    /// grow past it as needed.
    pub fn capacity_per_partition(mut self, capacity: usize) -> Self {
        self.capacity_per_partition = capacity;
        self
    }

    /// Set the hash function used when the map routes with a [`HashPartitioner`].
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.hash_function = hash_fn;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            partition_count: 16,
            capacity_per_partition: 0,
            hash_function: HashFunction::AHash,
        }
    }
}

/// Builder for creating a PartitionedMap with custom configuration.
///
/// ```rust
/// use partmap::PartitionedMapBuilder;
///
/// let map = PartitionedMapBuilder::new()
///     .partition_count(3)?
///     .capacity_per_partition(128)
///     .build_with::<u64, String, _>(|key: &u64| *key as i64)?;
///
/// map.set(7, "seven".to_string());
/// assert_eq!(map.partition_of(&7), 1);
/// # Ok::<(), partmap::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct PartitionedMapBuilder {
    config: Config,
}

impl PartitionedMapBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the number of partitions. Must be greater than 0.
    pub fn partition_count(mut self, count: usize) -> Result<Self, Error> {
        self.config = self.config.partition_count(count)?;
        Ok(self)
    }

    /// Set the initial capacity of every partition.
    pub fn capacity_per_partition(mut self, capacity: usize) -> Self {
        self.config = self.config.capacity_per_partition(capacity);
        self
    }

    /// Set the hash function used by [`build`](Self::build).
    pub fn hash_function(mut self, hash_fn: HashFunction) -> Self {
        self.config = self.config.hash_function(hash_fn);
        self
    }

    /// Build a map that routes keys with a [`HashPartitioner`].
    pub fn build<K, V>(self) -> Result<PartitionedMap<K, V>, Error>
    where
        K: Hash + Eq,
    {
        PartitionedMap::with_hasher(self.config)
    }

    /// Build a map that routes keys with the given partition function.
    pub fn build_with<K, V, P>(self, partitioner: P) -> Result<PartitionedMap<K, V, P>, Error>
    where
        K: Hash + Eq,
        P: Partitioner<K>,
    {
        PartitionedMap::with_config(self.config, partitioner)
    }
}
