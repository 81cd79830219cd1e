// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Double-width cells: carry/borrow arithmetic, comparisons, layout,
//! buffer placement.

use memord::{place_aligned_u128, AtomicI128, AtomicU128};

#[test]
fn test_layout() {
    assert_eq!(core::mem::size_of::<AtomicU128>(), 16);
    assert_eq!(core::mem::align_of::<AtomicU128>(), 16);
    assert_eq!(core::mem::size_of::<AtomicI128>(), 16);
    assert_eq!(core::mem::align_of::<AtomicI128>(), 16);
}

#[test]
fn test_round_trip() {
    let a = AtomicU128::new(0, 0);
    for &(lo, hi) in &[(0u64, 0u64), (1, 0), (0, 1), (u64::MAX, u64::MAX), (0xDEAD, 0xBEEF)] {
        a.store(lo, hi);
        assert_eq!(a.load(), (lo, hi));
        a.store_release(lo ^ 1, hi);
        assert_eq!(a.load_acquire(), (lo ^ 1, hi));
    }
}

#[test]
fn test_add_carry() {
    // Low word wraps; the carry lands in the high word.
    let a = AtomicU128::new(u64::MAX, 0);
    assert_eq!(a.add(1, 0), (0, 1));
    assert_eq!(a.load(), (0, 1));
}

#[test]
fn test_sub_borrow() {
    let a = AtomicU128::new(0, 1);
    assert_eq!(a.sub(1, 0), (u64::MAX, 0));
    assert_eq!(a.load(), (u64::MAX, 0));
}

#[test]
fn test_add_returns_new_pair() {
    let a = AtomicU128::new(10, 20);
    assert_eq!(a.add(5, 7), (15, 27));
    assert_eq!(a.add_relaxed(1, 0), (16, 27));
    assert_eq!(a.add_acquire(0, 1), (16, 28));
    assert_eq!(a.sub(6, 8), (10, 20));
}

#[test]
fn test_inc_dec() {
    let a = AtomicU128::new(u64::MAX - 1, 0);
    assert_eq!(a.inc(), (u64::MAX, 0));
    assert_eq!(a.inc(), (0, 1));
    assert_eq!(a.dec(), (u64::MAX, 0));
    assert_eq!(a.dec_relaxed(), (u64::MAX - 1, 0));
}

#[test]
fn test_signed_carry() {
    let a = AtomicI128::new(u64::MAX, -1);
    // -1 + 1 == 0 across the word boundary.
    assert_eq!(a.add(1, 0), (0, 0));
    // 0 - 1 == -1.
    assert_eq!(a.sub(1, 0), (u64::MAX, -1));
}

#[test]
fn test_swap_returns_old_pair() {
    let a = AtomicU128::new(1, 2);
    assert_eq!(a.swap(3, 4), (1, 2));
    assert_eq!(a.swap_relaxed(5, 6), (3, 4));
    assert_eq!(a.load(), (5, 6));
}

#[test]
fn test_compare_and_swap_pairs() {
    let a = AtomicU128::new(1, 2);
    // Both words must match.
    assert!(!a.compare_and_swap(1, 3, 9, 9));
    assert!(!a.compare_and_swap(3, 2, 9, 9));
    assert_eq!(a.load(), (1, 2));
    assert!(a.compare_and_swap(1, 2, 9, 9));
    assert_eq!(a.load(), (9, 9));
}

#[test]
fn test_compare_exchange_returns_observed_pair() {
    let a = AtomicU128::new(7, 8);
    assert_eq!(a.compare_exchange(7, 8, 10, 11), (7, 8));
    // Stale replay observes the current pair.
    assert_eq!(a.compare_exchange(7, 8, 12, 13), (10, 11));
    assert_eq!(a.load(), (10, 11));
}

#[test]
fn test_unsigned_comparisons() {
    let a = AtomicU128::new(5, 10);
    assert!(a.equal(5, 10));
    assert!(!a.equal(5, 11));
    assert!(a.less(6, 10));
    assert!(a.less(0, 11));
    assert!(!a.less(5, 10));
    assert!(a.less_or_equal(5, 10));
    assert!(a.greater(4, 10));
    assert!(a.greater(u64::MAX, 9));
    assert!(a.greater_or_equal(5, 10));
    assert!(a.less_relaxed(6, 10));
    assert!(a.greater_relaxed(4, 10));
}

#[test]
fn test_signed_comparisons() {
    let a = AtomicI128::new(0, -1);
    // -2^64 < 0.
    assert!(a.less(0, 0));
    assert!(a.greater(0, -2));
    assert!(a.equal(0, -1));

    // High words equal: low word ties break as unsigned magnitudes,
    // signed type included.
    let b = AtomicI128::new(u64::MAX, -5);
    assert!(b.greater(0, -5));
    assert!(b.greater_or_equal(u64::MAX, -5));
    assert!(!b.less(1, -5));
}

#[test]
fn test_hi_word_dominates_lo() {
    let a = AtomicU128::new(u64::MAX, 5);
    assert!(a.less(0, 6));
    assert!(a.greater(u64::MAX, 4));
}

#[test]
fn test_placement_scenario() {
    // A 128-bit cell placed in a raw 64-byte buffer round-trips.
    let mut buf = [0u8; 64];
    let (consumed, cell) = place_aligned_u128(&mut buf, 0);
    assert!(consumed >= 16 && consumed < 32);
    cell.store(0xDEADBEEF, 0xCAFEBABE);
    assert_eq!(cell.load(), (0xDEADBEEF, 0xCAFEBABE));
}

#[test]
fn test_default_is_zero() {
    assert_eq!(AtomicU128::default().load(), (0, 0));
    assert_eq!(AtomicI128::default().load(), (0, 0));
}
