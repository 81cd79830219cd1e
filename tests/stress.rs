// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Concurrent convergence: no lost updates, exactly one latch winner.

use std::thread;

use memord::{AtomicBool, AtomicI128, AtomicI64, AtomicU128, AtomicU64, AtomicUsize};

const WORKERS: usize = 100;
const INCREMENTS: usize = 1000;

#[test]
fn test_concurrent_u64_counter_converges() {
    let counter = AtomicU64::new(0);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..INCREMENTS {
                    counter.add(1);
                }
            });
        }
    });
    assert_eq!(counter.load(), (WORKERS * INCREMENTS) as u64);
}

#[test]
fn test_concurrent_i64_counter_converges() {
    let counter = AtomicI64::new(0);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..INCREMENTS {
                    counter.add_relaxed(1);
                }
            });
        }
    });
    assert_eq!(counter.load(), (WORKERS * INCREMENTS) as i64);
}

#[test]
fn test_concurrent_usize_mixed_orderings() {
    let counter = AtomicUsize::new(0);
    thread::scope(|s| {
        for i in 0..WORKERS {
            let counter = &counter;
            s.spawn(move || {
                for _ in 0..INCREMENTS {
                    if i % 2 == 0 {
                        counter.add(1);
                    } else {
                        counter.add_relaxed(1);
                    }
                }
            });
        }
    });
    assert_eq!(counter.load(), WORKERS * INCREMENTS);
}

#[test]
fn test_concurrent_u128_counter_converges() {
    let counter = AtomicU128::new(0, 0);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..INCREMENTS {
                    counter.inc();
                }
            });
        }
    });
    assert_eq!(counter.load(), ((WORKERS * INCREMENTS) as u64, 0));
}

#[test]
fn test_concurrent_i128_counter_converges() {
    // Start negative so the racing increments also cross the sign
    // boundary in the high word.
    let total = (WORKERS * INCREMENTS) as u64;
    let counter = AtomicI128::new(u64::MAX - total / 2 + 1, -1);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..INCREMENTS {
                    counter.inc();
                }
            });
        }
    });
    assert_eq!(counter.load(), (total / 2, 0));
}

#[test]
fn test_concurrent_u128_carry_under_contention() {
    // Start just below the word boundary so increments race across the
    // carry.
    let total = (WORKERS * INCREMENTS) as u64;
    let counter = AtomicU128::new(u64::MAX - total / 2, 0);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..INCREMENTS {
                    counter.inc();
                }
            });
        }
    });
    assert_eq!(counter.load(), (total / 2 - 1, 1));
}

#[test]
fn test_exactly_one_cas_winner() {
    let latch = AtomicBool::new(false);
    let winners = AtomicUsize::new(0);
    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                if latch.compare_and_swap(false, true) {
                    winners.add(1);
                }
            });
        }
    });
    assert_eq!(winners.load(), 1);
    assert!(latch.load());
}

#[test]
fn test_concurrent_max_converges() {
    let max = AtomicI64::new(i64::MIN);
    thread::scope(|s| {
        for i in 0..WORKERS {
            let max = &max;
            s.spawn(move || {
                for j in 0..INCREMENTS {
                    max.max((i * INCREMENTS + j) as i64);
                }
            });
        }
    });
    assert_eq!(max.load(), (WORKERS * INCREMENTS - 1) as i64);
}

#[test]
fn test_release_acquire_publication() {
    // The acquire load that sees the flag also sees the data written
    // before the release store.
    let data = AtomicU64::new(0);
    let ready = AtomicBool::new(false);
    thread::scope(|s| {
        s.spawn(|| {
            data.store(42);
            ready.store_release(true);
        });
        s.spawn(|| {
            while !ready.load_acquire() {
                std::hint::spin_loop();
            }
            assert_eq!(data.load(), 42);
        });
    });
}
