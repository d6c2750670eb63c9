use partmap::{PartitionedMap, PartitionedMapBuilder};
use std::sync::{Arc, Barrier};
use std::thread;

fn key_sum(key: &String) -> i64 {
    key.bytes()
        .enumerate()
        .map(|(i, b)| b as i64 * (i as i64 + 1))
        .sum()
}

#[test]
fn test_concurrent_sets_distinct_keys() {
    let map = Arc::new(PartitionedMap::new(4, 0, key_sum).unwrap());
    let mut handles = vec![];

    // Spawn 10 threads, each setting 100 distinct keys
    for thread_id in 0..10 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("thread_{}_key_{}", thread_id, i);
                map.set(key, thread_id * 100 + i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // No lost updates
    for thread_id in 0..10 {
        for i in 0..100 {
            let key = format!("thread_{}_key_{}", thread_id, i);
            assert_eq!(map.get(&key), Some(thread_id * 100 + i));
        }
    }
}

#[test]
fn test_concurrent_sets_same_partition() {
    // Every key collides on one partition, so all writers contend on one lock
    let map = Arc::new(PartitionedMap::new(4, 0, |_: &u64| 2i64).unwrap());
    let barrier = Arc::new(Barrier::new(8));
    let mut handles = vec![];

    for t in 0..8u64 {
        let map = Arc::clone(&map);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..500u64 {
                map.set(t * 1_000 + i, i);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for t in 0..8u64 {
        for i in 0..500u64 {
            assert_eq!(map.get(&(t * 1_000 + i)), Some(i));
        }
    }
}

#[test]
fn test_concurrent_reads() {
    let map = Arc::new(
        PartitionedMapBuilder::new()
            .partition_count(8)
            .unwrap()
            .build::<String, i32>()
            .unwrap(),
    );

    for i in 0..100 {
        map.set(format!("key_{}", i), i);
    }

    let mut handles = vec![];

    // Spawn 20 threads, each reading all items
    for _ in 0..20 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("key_{}", i);
                assert_eq!(map.get(&key), Some(i));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_mixed_operations() {
    let map = Arc::new(PartitionedMap::new(3, 16, key_sum).unwrap());
    let mut handles = vec![];

    // Writers
    for thread_id in 0..5 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                map.set(format!("key_{}_{}", thread_id, i), i);
            }
        }));
    }

    // Readers
    for _ in 0..5 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for _ in 0..200 {
                for i in 0..10 {
                    let key = format!("key_{}_{}", i % 5, i);
                    // May or may not exist yet, but never a torn value
                    if let Some(value) = map.get(&key) {
                        assert_eq!(value, i);
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for thread_id in 0..5 {
        for i in 0..100 {
            assert_eq!(map.get(&format!("key_{}_{}", thread_id, i)), Some(i));
        }
    }
}

#[test]
fn test_concurrent_overwrites_last_writer_wins() {
    let map = Arc::new(PartitionedMap::new(2, 0, |key: &u8| *key as i64).unwrap());
    let mut handles = vec![];

    for t in 1..=8u32 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for _ in 0..1_000 {
                map.set(0, t);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Whichever writer acquired the lock last, the value is one that was written
    let value = map.get(&0).unwrap();
    assert!((1..=8).contains(&value));
}

#[test]
fn test_map_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PartitionedMap<String, Vec<u8>>>();
    assert_send_sync::<PartitionedMap<u64, String, fn(&u64) -> i64>>();
}
