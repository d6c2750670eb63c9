//! # partmap
//!
//! A concurrent map split into independently locked partitions.
//!
//! `PartitionedMap` routes every key to one of `N` partitions using a
//! partition function you supply. Each partition is a `HashMap` behind its own
//! read-write lock. Operations on different partitions never block each other,
//! and no operation ever holds more than one lock.
//!
//! ## Features
//!
//! - **Caller-controlled routing**: any `Fn(&K) -> i64` decides the partition
//! - **Sign-safe**: negative partition numbers are wrapped into range
//! - **Deterministic**: the same key always lands in the same partition
//! - **Shared reads**: lookups on one partition run side by side
//! - **Statistics**: per-partition operation counters (`metrics` feature)
//!
//! ## Example
//!
//! ```rust
//! use partmap::PartitionedMap;
//!
//! let map = PartitionedMap::new(2, 7, |key: &String| key.len() as i64)?;
//!
//! map.set("ab".to_string(), "hello".to_string());
//! map.set("abc".to_string(), "world".to_string());
//!
//! assert_eq!(map.get(&"ab".to_string()).as_deref(), Some("hello"));
//! assert_eq!(map.get(&"xyz".to_string()), None);
//!
//! // Literal (value, found) form
//! let (value, found) = map.get_or_default(&"xyz".to_string());
//! assert!(value.is_empty() && !found);
//! # Ok::<(), partmap::Error>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use partmap::{HashFunction, PartitionedMapBuilder};
//!
//! let map = PartitionedMapBuilder::new()
//!     .partition_count(12)?
//!     .capacity_per_partition(256)
//!     .hash_function(HashFunction::AHash)
//!     .build::<String, i32>()?;
//! # Ok::<(), partmap::Error>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Configuration and builder types.
pub mod config;
/// Error types.
pub mod error;
/// Hash function implementations.
pub mod hash;
/// Main PartitionedMap implementation.
pub mod map;
pub mod partition;
/// Internal shard implementation.
pub(crate) mod shard;
pub mod stats;

// Re-export main types
pub use config::{Config, PartitionedMapBuilder};
pub use error::Error;
pub use hash::HashFunction;
pub use map::PartitionedMap;
pub use partition::{HashPartitioner, Partitioner};
pub use stats::{ShardOps, Stats};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let map = PartitionedMap::new(4, 0, |key: &&str| key.len() as i64).unwrap();

        map.set("key1", "value1");
        assert_eq!(map.get(&"key1"), Some("value1"));

        map.set("key1", "value2");
        assert_eq!(map.get(&"key1"), Some("value2"));

        assert_eq!(map.get(&"nonexistent"), None);
        assert!(map.contains_key(&"key1"));
        assert!(!map.contains_key(&"nonexistent"));
    }

    #[test]
    fn test_get_with() {
        let map = PartitionedMap::new(4, 0, |key: &u32| *key as i64).unwrap();
        map.set(1, vec![1, 2, 3]);

        assert_eq!(map.get_with(&1, |v| v.len()), Some(3));
        assert_eq!(map.get_with(&2, |v| v.len()), None);
    }

    #[test]
    fn test_stats_shape() {
        let map = PartitionedMapBuilder::new()
            .partition_count(3)
            .unwrap()
            .build::<String, i32>()
            .unwrap();
        map.set("a".to_string(), 1);

        assert_eq!(map.stats().operations.len(), 3);
    }

    #[test]
    fn test_builder() {
        let map = PartitionedMapBuilder::new()
            .partition_count(8)
            .unwrap()
            .build::<String, i32>()
            .unwrap();

        map.set("test".to_string(), 42);
        assert_eq!(map.get(&"test".to_string()), Some(42));
    }
}
