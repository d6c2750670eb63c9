//! Partition functions: how a key is routed to a shard.

use crate::hash::HashFunction;
use std::hash::Hash;

/// Caller-supplied routing from a key to a raw partition number.
///
/// The map reduces the raw number into `[0, partition_count)` with a
/// Euclidean modulo, so any `i64` (negative included) is a valid return value.
///
/// Implementations must be:
///
/// - **Deterministic**: the same key always yields the same number. A key that
///   moved between shards would become unreachable.
/// - **Pure**: the map calls `partition` from many threads at once without any
///   synchronization, hence the `Send + Sync` bound.
/// - **Total**: every key gets a number; there is no failure path.
///
/// How evenly keys spread across shards is up to the implementation. A constant
/// function is correct but serializes every operation on one lock.
///
/// Any `Fn(&K) -> i64 + Send + Sync` closure is a partitioner:
///
/// ```rust
/// use partmap::PartitionedMap;
///
/// let map: PartitionedMap<String, u32, _> =
///     PartitionedMap::new(2, 0, |key: &String| key.len() as i64)?;
/// assert_eq!(map.partition_of(&"ab".to_string()), 0);
/// assert_eq!(map.partition_of(&"abc".to_string()), 1);
/// # Ok::<(), partmap::Error>(())
/// ```
pub trait Partitioner<K: ?Sized>: Send + Sync {
    /// Raw partition number for `key`, before reduction by the partition count.
    fn partition(&self, key: &K) -> i64;
}

impl<K: ?Sized, F> Partitioner<K> for F
where
    F: Fn(&K) -> i64 + Send + Sync,
{
    #[inline]
    fn partition(&self, key: &K) -> i64 {
        self(key)
    }
}

/// Ready-made partitioner that hashes the key.
///
/// This is an explicit choice the caller makes; the map never substitutes it
/// for a supplied partition function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashPartitioner {
    function: HashFunction,
}

impl HashPartitioner {
    /// Create a partitioner backed by `function`.
    pub fn new(function: HashFunction) -> Self {
        Self { function }
    }

    /// The hash function in use.
    pub fn hash_function(&self) -> HashFunction {
        self.function
    }
}

impl<K: Hash + ?Sized> Partitioner<K> for HashPartitioner {
    #[inline]
    fn partition(&self, key: &K) -> i64 {
        // Bit-for-bit reinterpretation; the map normalizes the sign.
        self.function.hash_key(key) as i64
    }
}
