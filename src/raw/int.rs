// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Ordering-dispatched integer operations
//!
//! One method family per width, stamped from a single macro. Return
//! conventions match the typed layer: `add` returns the new value,
//! `swap`/`and`/`or`/`xor`/`max`/`min` return the old.

use crate::arch::AtomicOps;
use crate::order::MemoryOrder;

macro_rules! raw_int_ops {
    ($v:ty, $b:ty, $doc_name:literal,
     $load:ident, $store:ident, $swap:ident, $cas:ident, $cax:ident,
     $add:ident, $sub:ident, $and:ident, $or:ident, $xor:ident,
     $max:ident, $min:ident) => {
        impl MemoryOrder {
            #[doc = concat!("Atomically loads a `", $doc_name, "`.")]
            ///
            /// Non-Relaxed orderings run as Acquire.
            ///
            /// # Safety
            ///
            /// `addr` must be valid for reads and naturally aligned, and
            /// stay valid for the duration of the operation.
            #[inline]
            pub unsafe fn $load(self, addr: *const $v) -> $v {
                match self {
                    MemoryOrder::Relaxed => <$b>::load_relaxed(addr as *const $b) as $v,
                    _ => <$b>::load_acquire(addr as *const $b) as $v,
                }
            }

            #[doc = concat!("Atomically stores a `", $doc_name, "`.")]
            ///
            /// Non-Relaxed orderings run as Release.
            ///
            /// # Safety
            ///
            /// `addr` must be valid for writes and naturally aligned, and
            /// stay valid for the duration of the operation.
            #[inline]
            pub unsafe fn $store(self, addr: *mut $v, val: $v) {
                match self {
                    MemoryOrder::Relaxed => <$b>::store_relaxed(addr as *mut $b, val as $b),
                    _ => <$b>::store_release(addr as *mut $b, val as $b),
                }
            }

            /// Stores `new` and returns the previous value.
            ///
            /// # Safety
            ///
            /// `addr` must be valid for reads and writes and naturally
            /// aligned, and stay valid for the duration of the operation.
            #[inline]
            pub unsafe fn $swap(self, addr: *mut $v, new: $v) -> $v {
                let addr = addr as *mut $b;
                let new = new as $b;
                (match self {
                    MemoryOrder::Relaxed => <$b>::swap_relaxed(addr, new),
                    MemoryOrder::Acquire => <$b>::swap_acquire(addr, new),
                    MemoryOrder::Release => <$b>::swap_release(addr, new),
                    MemoryOrder::AcqRel => <$b>::swap_acqrel(addr, new),
                }) as $v
            }

            /// Stores `new` if the current value equals `old`; returns
            /// `true` if the store happened.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $cas(self, addr: *mut $v, old: $v, new: $v) -> bool {
                let addr = addr as *mut $b;
                let (old, new) = (old as $b, new as $b);
                match self {
                    MemoryOrder::Relaxed => <$b>::cas_relaxed(addr, old, new),
                    MemoryOrder::Acquire => <$b>::cas_acquire(addr, old, new),
                    MemoryOrder::Release => <$b>::cas_release(addr, old, new),
                    MemoryOrder::AcqRel => <$b>::cas_acqrel(addr, old, new),
                }
            }

            /// Stores `new` if the current value equals `old`; returns
            /// the value observed at the location.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $cax(self, addr: *mut $v, old: $v, new: $v) -> $v {
                let addr = addr as *mut $b;
                let (old, new) = (old as $b, new as $b);
                (match self {
                    MemoryOrder::Relaxed => <$b>::cax_relaxed(addr, old, new),
                    MemoryOrder::Acquire => <$b>::cax_acquire(addr, old, new),
                    MemoryOrder::Release => <$b>::cax_release(addr, old, new),
                    MemoryOrder::AcqRel => <$b>::cax_acqrel(addr, old, new),
                }) as $v
            }

            /// Adds `delta` and returns the NEW value. Wraps on
            /// overflow.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $add(self, addr: *mut $v, delta: $v) -> $v {
                let addr = addr as *mut $b;
                let delta = delta as $b;
                (match self {
                    MemoryOrder::Relaxed => <$b>::add_relaxed(addr, delta),
                    MemoryOrder::Acquire => <$b>::add_acquire(addr, delta),
                    MemoryOrder::Release => <$b>::add_release(addr, delta),
                    MemoryOrder::AcqRel => <$b>::add_acqrel(addr, delta),
                }) as $v
            }

            /// Subtracts `delta` and returns the NEW value; addition of
            /// the two's-complement negation.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $sub(self, addr: *mut $v, delta: $v) -> $v {
                self.$add(addr, delta.wrapping_neg())
            }

            /// Bitwise AND with `mask`; returns the OLD value.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $and(self, addr: *mut $v, mask: $v) -> $v {
                let addr = addr as *mut $b;
                let mask = mask as $b;
                (match self {
                    MemoryOrder::Relaxed => <$b>::and_relaxed(addr, mask),
                    MemoryOrder::Acquire => <$b>::and_acquire(addr, mask),
                    MemoryOrder::Release => <$b>::and_release(addr, mask),
                    MemoryOrder::AcqRel => <$b>::and_acqrel(addr, mask),
                }) as $v
            }

            /// Bitwise OR with `mask`; returns the OLD value.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $or(self, addr: *mut $v, mask: $v) -> $v {
                let addr = addr as *mut $b;
                let mask = mask as $b;
                (match self {
                    MemoryOrder::Relaxed => <$b>::or_relaxed(addr, mask),
                    MemoryOrder::Acquire => <$b>::or_acquire(addr, mask),
                    MemoryOrder::Release => <$b>::or_release(addr, mask),
                    MemoryOrder::AcqRel => <$b>::or_acqrel(addr, mask),
                }) as $v
            }

            /// Bitwise XOR with `mask`; returns the OLD value.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $xor(self, addr: *mut $v, mask: $v) -> $v {
                let addr = addr as *mut $b;
                let mask = mask as $b;
                (match self {
                    MemoryOrder::Relaxed => <$b>::xor_relaxed(addr, mask),
                    MemoryOrder::Acquire => <$b>::xor_acquire(addr, mask),
                    MemoryOrder::Release => <$b>::xor_release(addr, mask),
                    MemoryOrder::AcqRel => <$b>::xor_acqrel(addr, mask),
                }) as $v
            }

            /// Raises the value to at least `val`; returns the value
            /// observed before the (possibly elided) CAS. Non-Relaxed
            /// requests CAS with AcqRel.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $max(self, addr: *mut $v, val: $v) -> $v {
                let relaxed = matches!(self, MemoryOrder::Relaxed);
                loop {
                    let cur = <$b>::load_relaxed(addr as *const $b) as $v;
                    if cur >= val {
                        return cur;
                    }
                    let done = if relaxed {
                        <$b>::cas_relaxed(addr as *mut $b, cur as $b, val as $b)
                    } else {
                        <$b>::cas_acqrel(addr as *mut $b, cur as $b, val as $b)
                    };
                    if done {
                        return cur;
                    }
                }
            }

            /// Lowers the value to at most `val`; returns the value
            /// observed before the (possibly elided) CAS. Non-Relaxed
            /// requests CAS with AcqRel.
            ///
            /// # Safety
            ///
            /// Same contract as the swap entry point.
            #[inline]
            pub unsafe fn $min(self, addr: *mut $v, val: $v) -> $v {
                let relaxed = matches!(self, MemoryOrder::Relaxed);
                loop {
                    let cur = <$b>::load_relaxed(addr as *const $b) as $v;
                    if cur <= val {
                        return cur;
                    }
                    let done = if relaxed {
                        <$b>::cas_relaxed(addr as *mut $b, cur as $b, val as $b)
                    } else {
                        <$b>::cas_acqrel(addr as *mut $b, cur as $b, val as $b)
                    };
                    if done {
                        return cur;
                    }
                }
            }
        }
    };
}

raw_int_ops!(
    i32, u32, "i32", load_i32, store_i32, swap_i32, compare_and_swap_i32, compare_exchange_i32,
    add_i32, sub_i32, and_i32, or_i32, xor_i32, max_i32, min_i32
);
raw_int_ops!(
    u32, u32, "u32", load_u32, store_u32, swap_u32, compare_and_swap_u32, compare_exchange_u32,
    add_u32, sub_u32, and_u32, or_u32, xor_u32, max_u32, min_u32
);
raw_int_ops!(
    i64, u64, "i64", load_i64, store_i64, swap_i64, compare_and_swap_i64, compare_exchange_i64,
    add_i64, sub_i64, and_i64, or_i64, xor_i64, max_i64, min_i64
);
raw_int_ops!(
    u64, u64, "u64", load_u64, store_u64, swap_u64, compare_and_swap_u64, compare_exchange_u64,
    add_u64, sub_u64, and_u64, or_u64, xor_u64, max_u64, min_u64
);
raw_int_ops!(
    usize, usize, "usize", load_usize, store_usize, swap_usize, compare_and_swap_usize,
    compare_exchange_usize, add_usize, sub_usize, and_usize, or_usize, xor_usize, max_usize,
    min_usize
);
