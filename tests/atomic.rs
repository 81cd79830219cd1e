// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Typed cell semantics: round trips, CAS/CAX contracts, return-value
//! conventions, wraparound.

use memord::{AtomicBool, AtomicI32, AtomicI64, AtomicPtr, AtomicU32, AtomicU64, AtomicUsize};

#[test]
fn test_round_trip_all_store_load_variants() {
    let a = AtomicU64::new(0);
    for &val in &[0u64, 1, 42, u64::MAX, u64::MAX - 1, 1 << 63] {
        a.store(val);
        assert_eq!(a.load(), val);
        a.store_relaxed(val ^ 1);
        assert_eq!(a.load_relaxed(), val ^ 1);
        a.store_release(val);
        assert_eq!(a.load_acquire(), val);
    }
}

#[test]
fn test_round_trip_signed_extremes() {
    let a = AtomicI32::new(0);
    for &val in &[i32::MIN, -1, 0, 1, i32::MAX] {
        a.store_release(val);
        assert_eq!(a.load_acquire(), val);
    }
    let b = AtomicI64::new(0);
    for &val in &[i64::MIN, -1, 0, 1, i64::MAX] {
        b.store_release(val);
        assert_eq!(b.load_acquire(), val);
    }
}

#[test]
fn test_swap_returns_old() {
    let a = AtomicU32::new(7);
    assert_eq!(a.swap(9), 7);
    assert_eq!(a.swap_relaxed(11), 9);
    assert_eq!(a.swap_acquire(13), 11);
    assert_eq!(a.swap_release(15), 13);
    assert_eq!(a.swap_acqrel(17), 15);
    assert_eq!(a.load(), 17);
}

#[test]
fn test_compare_and_swap_success_and_failure() {
    let a = AtomicI64::new(10);
    // Matching expectation: swap happens.
    assert!(a.compare_and_swap(10, 20));
    assert_eq!(a.load(), 20);
    // Stale expectation: no change.
    assert!(!a.compare_and_swap(10, 30));
    assert_eq!(a.load(), 20);

    assert!(a.compare_and_swap_relaxed(20, 21));
    assert!(a.compare_and_swap_acquire(21, 22));
    assert!(a.compare_and_swap_release(22, 23));
    assert!(a.compare_and_swap_acqrel(23, 24));
    assert_eq!(a.load(), 24);
}

#[test]
fn test_compare_exchange_returns_observed() {
    let a = AtomicU64::new(5);
    // Success returns the expected old value.
    assert_eq!(a.compare_exchange(5, 6), 5);
    assert_eq!(a.load(), 6);
    // Replaying the same stale exchange returns the current value.
    assert_eq!(a.compare_exchange(5, 7), 6);
    assert_eq!(a.load(), 6);
}

#[test]
fn test_compare_exchange_retry_loop() {
    // The returned value feeds the next attempt without a separate load.
    let a = AtomicU64::new(0);
    let mut cur = a.load_relaxed();
    loop {
        let observed = a.compare_exchange(cur, cur + 100);
        if observed == cur {
            break;
        }
        cur = observed;
    }
    assert_eq!(a.load(), 100);
}

#[test]
fn test_add_sub_return_new() {
    let a = AtomicU32::new(10);
    assert_eq!(a.add(5), 15);
    assert_eq!(a.sub(3), 12);
    assert_eq!(a.add_relaxed(1), 13);
    assert_eq!(a.sub_relaxed(1), 12);
    assert_eq!(a.add_acquire(1), 13);
    assert_eq!(a.add_release(1), 14);
    assert_eq!(a.add_acqrel(1), 15);
    assert_eq!(a.load(), 15);
}

#[test]
fn test_unsigned_sub_is_twos_complement_add() {
    let a = AtomicU64::new(0);
    assert_eq!(a.sub(1), u64::MAX);
    assert_eq!(a.add(1), 0);
    let b = AtomicUsize::new(2);
    assert_eq!(b.sub(3), usize::MAX);
}

#[test]
fn test_signed_add_wraps() {
    let a = AtomicI32::new(0);
    a.store(i32::MAX);
    assert_eq!(a.add(1), i32::MIN);
    let b = AtomicI64::new(i64::MIN);
    assert_eq!(b.sub(1), i64::MAX);
}

#[test]
fn test_bitwise_return_old() {
    let a = AtomicU32::new(0b1100);
    assert_eq!(a.and(0b1010), 0b1100);
    assert_eq!(a.load(), 0b1000);
    assert_eq!(a.or(0b0011), 0b1000);
    assert_eq!(a.load(), 0b1011);
    assert_eq!(a.xor(0b1111), 0b1011);
    assert_eq!(a.load(), 0b0100);
}

#[test]
fn test_bitwise_ordering_variants() {
    let a = AtomicU64::new(u64::MAX);
    assert_eq!(a.and_relaxed(0xFF), u64::MAX);
    assert_eq!(a.or_acquire(0x100), 0xFF);
    assert_eq!(a.xor_release(0x1FF), 0x1FF);
    assert_eq!(a.and_acqrel(!0), 0);
}

#[test]
fn test_max_returns_observed_before_cas() {
    let a = AtomicI64::new(5);
    // Already satisfied: CAS elided, value untouched.
    assert_eq!(a.max(3), 5);
    assert_eq!(a.load(), 5);
    // Raises: still returns the pre-CAS observation.
    assert_eq!(a.max(9), 5);
    assert_eq!(a.load(), 9);
    assert_eq!(a.max_relaxed(9), 9);
}

#[test]
fn test_min_returns_observed_before_cas() {
    let a = AtomicU32::new(5);
    assert_eq!(a.min(8), 5);
    assert_eq!(a.load(), 5);
    assert_eq!(a.min(2), 5);
    assert_eq!(a.load(), 2);
    assert_eq!(a.min_relaxed(2), 2);
}

#[test]
fn test_signed_max_with_negatives() {
    let a = AtomicI32::new(-10);
    assert_eq!(a.max(-20), -10);
    assert_eq!(a.load(), -10);
    assert_eq!(a.max(-5), -10);
    assert_eq!(a.load(), -5);
}

#[test]
fn test_bool_basics() {
    let b = AtomicBool::new(false);
    assert!(!b.load());
    b.store(true);
    assert!(b.load_acquire());
    assert!(b.swap(false));
    assert!(!b.load());
}

#[test]
fn test_bool_one_shot_latch() {
    let b = AtomicBool::new(false);
    assert!(b.compare_and_swap(false, true));
    // The latch is spent.
    assert!(!b.compare_and_swap(false, true));
    assert!(b.load());
}

#[test]
fn test_bool_compare_exchange_observes() {
    let b = AtomicBool::new(false);
    assert!(!b.compare_exchange(false, true));
    assert!(b.compare_exchange(false, true));
    assert!(b.load());
}

#[test]
fn test_pointer_cell() {
    let mut x = 1u32;
    let mut y = 2u32;
    let p = AtomicPtr::<u32>::null();
    assert!(p.load().is_null());

    p.store_release(&mut x);
    assert_eq!(p.load_acquire(), &mut x as *mut u32);

    assert_eq!(p.swap(&mut y), &mut x as *mut u32);
    assert!(p.compare_and_swap(&mut y, core::ptr::null_mut()));
    assert!(p.load().is_null());

    let observed = p.compare_exchange(core::ptr::null_mut(), &mut x);
    assert!(observed.is_null());
    assert_eq!(p.load(), &mut x as *mut u32);
}

#[test]
fn test_default_and_from() {
    assert_eq!(AtomicU64::default().load(), 0);
    assert_eq!(AtomicI32::from(-3).load(), -3);
    assert!(!AtomicBool::default().load());
}

#[test]
fn test_static_cells() {
    static COUNTER: AtomicU64 = AtomicU64::new(3);
    static FLAG: AtomicBool = AtomicBool::new(true);
    assert_eq!(COUNTER.add(1), 4);
    assert!(FLAG.load());
}
