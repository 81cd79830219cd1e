// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! MemoryOrder dispatch layer: operations on raw memory with a runtime
//! ordering value.

use memord::MemoryOrder;

const ORDERS: [MemoryOrder; 4] = [
    MemoryOrder::Relaxed,
    MemoryOrder::Acquire,
    MemoryOrder::Release,
    MemoryOrder::AcqRel,
];

#[test]
fn test_round_trip_all_order_combinations() {
    // 4 store orderings x 4 load orderings.
    let mut x: u64 = 0;
    for &st in &ORDERS {
        for &ld in &ORDERS {
            let val = 0x0123_4567_89AB_CDEF ^ (st as u64) << 8 ^ ld as u64;
            unsafe {
                st.store_u64(&mut x, val);
                assert_eq!(ld.load_u64(&x), val);
            }
        }
    }
}

#[test]
fn test_round_trip_i32() {
    let mut x: i32 = 0;
    for &ord in &ORDERS {
        for &val in &[i32::MIN, -1, 0, i32::MAX] {
            unsafe {
                ord.store_i32(&mut x, val);
                assert_eq!(ord.load_i32(&x), val);
            }
        }
    }
}

#[test]
fn test_swap_every_ordering() {
    let mut x: u32 = 0;
    let mut prev = 0;
    for (i, &ord) in ORDERS.iter().enumerate() {
        let next = (i + 1) as u32 * 10;
        unsafe {
            assert_eq!(ord.swap_u32(&mut x, next), prev);
        }
        prev = next;
    }
    assert_eq!(x, 40);
}

#[test]
fn test_compare_and_swap_dispatch() {
    let mut x: i64 = 1;
    for &ord in &ORDERS {
        let cur = x;
        unsafe {
            assert!(!ord.compare_and_swap_i64(&mut x, 99, 0));
            assert!(ord.compare_and_swap_i64(&mut x, cur, cur + 1));
        }
    }
    assert_eq!(x, 5);
}

#[test]
fn test_compare_exchange_dispatch() {
    let mut x: u64 = 10;
    unsafe {
        // Success observes the expected value.
        assert_eq!(MemoryOrder::AcqRel.compare_exchange_u64(&mut x, 10, 11), 10);
        // Stale replay observes the current value.
        assert_eq!(MemoryOrder::AcqRel.compare_exchange_u64(&mut x, 10, 12), 11);
    }
    assert_eq!(x, 11);
}

#[test]
fn test_add_returns_new_value() {
    let mut x: u64 = 100;
    unsafe {
        assert_eq!(MemoryOrder::Relaxed.add_u64(&mut x, 5), 105);
        assert_eq!(MemoryOrder::AcqRel.add_u64(&mut x, 5), 110);
        assert_eq!(MemoryOrder::Release.sub_u64(&mut x, 10), 100);
    }
}

#[test]
fn test_sub_wraps_unsigned() {
    let mut x: u32 = 0;
    unsafe {
        assert_eq!(MemoryOrder::Relaxed.sub_u32(&mut x, 1), u32::MAX);
    }
}

#[test]
fn test_bitwise_return_old() {
    let mut x: u32 = 0b1100;
    unsafe {
        assert_eq!(MemoryOrder::AcqRel.and_u32(&mut x, 0b1010), 0b1100);
        assert_eq!(x, 0b1000);
        assert_eq!(MemoryOrder::AcqRel.or_u32(&mut x, 0b0011), 0b1000);
        assert_eq!(MemoryOrder::AcqRel.xor_u32(&mut x, 0b1111), 0b1011);
        assert_eq!(x, 0b0100);
    }
}

#[test]
fn test_max_min_dispatch() {
    let mut x: i32 = 5;
    unsafe {
        assert_eq!(MemoryOrder::AcqRel.max_i32(&mut x, 3), 5);
        assert_eq!(x, 5);
        assert_eq!(MemoryOrder::Relaxed.max_i32(&mut x, 9), 5);
        assert_eq!(x, 9);
        assert_eq!(MemoryOrder::AcqRel.min_i32(&mut x, -2), 9);
        assert_eq!(x, -2);
    }
}

#[test]
fn test_usize_dispatch() {
    let mut x: usize = 0;
    unsafe {
        MemoryOrder::Release.store_usize(&mut x, 77);
        assert_eq!(MemoryOrder::Acquire.load_usize(&x), 77);
        assert_eq!(MemoryOrder::AcqRel.add_usize(&mut x, 3), 80);
    }
}

#[test]
fn test_bool_dispatch() {
    let mut word: u32 = 0;
    unsafe {
        assert!(!MemoryOrder::Acquire.load_bool(&word));
        MemoryOrder::Release.store_bool(&mut word, true);
        assert!(MemoryOrder::Relaxed.load_bool(&word));
        assert!(MemoryOrder::AcqRel.swap_bool(&mut word, false));
        assert!(MemoryOrder::AcqRel.compare_and_swap_bool(&mut word, false, true));
        assert!(!MemoryOrder::AcqRel.compare_and_swap_bool(&mut word, false, true));
        // CAX observes the current boolean.
        assert!(MemoryOrder::AcqRel.compare_exchange_bool(&mut word, true, false));
        assert!(!MemoryOrder::Relaxed.load_bool(&word));
    }
}

#[test]
fn test_ptr_dispatch() {
    let mut a = 1u32;
    let mut b = 2u32;
    let mut slot: *mut u32 = core::ptr::null_mut();
    unsafe {
        MemoryOrder::Release.store_ptr(&mut slot, &mut a);
        assert_eq!(MemoryOrder::Acquire.load_ptr(&slot), &mut a as *mut u32);
        assert_eq!(MemoryOrder::AcqRel.swap_ptr(&mut slot, &mut b), &mut a as *mut u32);
        assert!(MemoryOrder::AcqRel.compare_and_swap_ptr(&mut slot, &mut b, core::ptr::null_mut()));
        assert!(slot.is_null());
        let observed = MemoryOrder::AcqRel.compare_exchange_ptr(&mut slot, core::ptr::null_mut(), &mut a);
        assert!(observed.is_null());
        assert_eq!(slot, &mut a as *mut u32);
    }
}

#[test]
fn test_u128_dispatch_round_trip() {
    #[repr(align(16))]
    struct Slot([u64; 2]);
    let mut slot = Slot([0, 0]);
    unsafe {
        MemoryOrder::Release.store_u128(&mut slot.0, 0xDEADBEEF, 0xCAFEBABE);
        assert_eq!(MemoryOrder::Acquire.load_u128(&mut slot.0), (0xDEADBEEF, 0xCAFEBABE));
        assert_eq!(
            MemoryOrder::AcqRel.swap_u128(&mut slot.0, 1, 2),
            (0xDEADBEEF, 0xCAFEBABE)
        );
        assert!(MemoryOrder::AcqRel.compare_and_swap_u128(&mut slot.0, 1, 2, 3, 4));
        assert_eq!(MemoryOrder::AcqRel.compare_exchange_u128(&mut slot.0, 3, 4, 5, 6), (3, 4));
    }
}

#[test]
fn test_u128_dispatch_add_returns_old() {
    // The raw layer returns the pair before the addition; the typed
    // layer returns the pair after it.
    #[repr(align(16))]
    struct Slot([u64; 2]);
    let mut slot = Slot([u64::MAX, 0]);
    unsafe {
        assert_eq!(MemoryOrder::AcqRel.add_u128(&mut slot.0, 1, 0), (u64::MAX, 0));
    }
    assert_eq!(slot.0, [0, 1]);
    unsafe {
        assert_eq!(MemoryOrder::Relaxed.sub_u128(&mut slot.0, 1, 0), (0, 1));
    }
    assert_eq!(slot.0, [u64::MAX, 0]);
}

#[test]
fn test_i128_dispatch_signed_hi() {
    #[repr(align(16))]
    struct Slot([u64; 2]);
    let mut slot = Slot([0, 0]);
    unsafe {
        MemoryOrder::Relaxed.store_i128(&mut slot.0, 5, -1);
        assert_eq!(MemoryOrder::Relaxed.load_i128(&mut slot.0), (5, -1));
        // (5, -1) - 6 borrows from the high word.
        assert_eq!(MemoryOrder::AcqRel.sub_i128(&mut slot.0, 6, 0), (5, -1));
        assert_eq!(MemoryOrder::Relaxed.load_i128(&mut slot.0), (u64::MAX, -2));
    }
}
