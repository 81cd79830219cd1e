// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Ordering-dispatched 128-bit operations
//!
//! Raw 128-bit locations are `[u64; 2]` word pairs, `[lo, hi]`, and
//! must be 16-byte aligned.
//!
//! One deliberate asymmetry against the typed layer: `add_i128` and
//! `add_u128` return the OLD pair, where
//! [`AtomicU128::add`](crate::AtomicU128::add) returns the new one.
//! Callers of the raw layer pair it with their own arithmetic; keep the
//! convention in mind when porting code between the two layers.

use crate::arch;
use crate::order::MemoryOrder;

macro_rules! raw_128_ops {
    ($hi:ty, $doc_name:literal,
     $load:ident, $store:ident, $swap:ident, $cas:ident, $cax:ident, $add:ident, $sub:ident) => {
        impl MemoryOrder {
            #[doc = concat!("Atomically loads a ", $doc_name, " 128-bit pair.")]
            ///
            /// Non-Relaxed orderings run as Acquire.
            ///
            /// # Safety
            ///
            /// `addr` must be valid for reads and writes, 16-byte
            /// aligned, and stay valid for the duration of the
            /// operation. (Loads write on ISAs where the only atomic
            /// 128-bit read is a compare-and-swap.)
            #[inline]
            pub unsafe fn $load(self, addr: *mut [u64; 2]) -> (u64, $hi) {
                let (lo, hi) = match self {
                    MemoryOrder::Relaxed => arch::load128_relaxed(addr as *mut u8),
                    _ => arch::load128_acquire(addr as *mut u8),
                };
                (lo, hi as $hi)
            }

            #[doc = concat!("Atomically stores a ", $doc_name, " 128-bit pair.")]
            ///
            /// Non-Relaxed orderings run as Release.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $store(self, addr: *mut [u64; 2], lo: u64, hi: $hi) {
                match self {
                    MemoryOrder::Relaxed => arch::store128_relaxed(addr as *mut u8, lo, hi as u64),
                    _ => arch::store128_release(addr as *mut u8, lo, hi as u64),
                }
            }

            /// Stores a new pair and returns the previous one.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $swap(self, addr: *mut [u64; 2], lo: u64, hi: $hi) -> (u64, $hi) {
                let addr = addr as *mut u8;
                let hi = hi as u64;
                let (olo, ohi) = match self {
                    MemoryOrder::Relaxed => arch::swap128_relaxed(addr, lo, hi),
                    MemoryOrder::Acquire => arch::swap128_acquire(addr, lo, hi),
                    MemoryOrder::Release => arch::swap128_release(addr, lo, hi),
                    MemoryOrder::AcqRel => arch::swap128_acqrel(addr, lo, hi),
                };
                (olo, ohi as $hi)
            }

            /// Stores the new pair if the current pair equals the old
            /// one; returns `true` if the store happened.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $cas(
                self,
                addr: *mut [u64; 2],
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                let addr = addr as *mut u8;
                let (old_hi, new_hi) = (old_hi as u64, new_hi as u64);
                match self {
                    MemoryOrder::Relaxed => {
                        arch::cas128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::Acquire => {
                        arch::cas128_acquire(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::Release => {
                        arch::cas128_release(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::AcqRel => {
                        arch::cas128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                }
            }

            /// Stores the new pair if the current pair equals the old
            /// one; returns the pair observed at the location.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $cax(
                self,
                addr: *mut [u64; 2],
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                let addr = addr as *mut u8;
                let (old_hi, new_hi) = (old_hi as u64, new_hi as u64);
                let (lo, hi) = match self {
                    MemoryOrder::Relaxed => {
                        arch::cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::Acquire => {
                        arch::cax128_acquire(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::Release => {
                        arch::cax128_release(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                    MemoryOrder::AcqRel => {
                        arch::cax128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
                    }
                };
                (lo, hi as $hi)
            }

            /// Adds a `(lo, hi)` delta with carry propagation and
            /// returns the OLD pair. CAS retry loop; non-Relaxed
            /// requests CAS with AcqRel.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $add(self, addr: *mut [u64; 2], delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let addr = addr as *mut u8;
                let delta_hi = delta_hi as u64;
                let relaxed = matches!(self, MemoryOrder::Relaxed);
                loop {
                    let (lo, hi) = arch::load128_relaxed(addr);
                    let new_lo = lo.wrapping_add(delta_lo);
                    let mut new_hi = hi.wrapping_add(delta_hi);
                    if new_lo < lo {
                        new_hi = new_hi.wrapping_add(1);
                    }
                    let done = if relaxed {
                        arch::cas128_relaxed(addr, lo, hi, new_lo, new_hi)
                    } else {
                        arch::cas128_acqrel(addr, lo, hi, new_lo, new_hi)
                    };
                    if done {
                        return (lo, hi as $hi);
                    }
                }
            }

            /// Subtracts a `(lo, hi)` delta with borrow propagation and
            /// returns the OLD pair. CAS retry loop; non-Relaxed
            /// requests CAS with AcqRel.
            ///
            /// # Safety
            ///
            /// Same contract as the load entry point.
            #[inline]
            pub unsafe fn $sub(self, addr: *mut [u64; 2], delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let addr = addr as *mut u8;
                let delta_hi = delta_hi as u64;
                let relaxed = matches!(self, MemoryOrder::Relaxed);
                loop {
                    let (lo, hi) = arch::load128_relaxed(addr);
                    let new_lo = lo.wrapping_sub(delta_lo);
                    let mut new_hi = hi.wrapping_sub(delta_hi);
                    if new_lo > lo {
                        new_hi = new_hi.wrapping_sub(1);
                    }
                    let done = if relaxed {
                        arch::cas128_relaxed(addr, lo, hi, new_lo, new_hi)
                    } else {
                        arch::cas128_acqrel(addr, lo, hi, new_lo, new_hi)
                    };
                    if done {
                        return (lo, hi as $hi);
                    }
                }
            }
        }
    };
}

raw_128_ops!(
    u64, "an unsigned", load_u128, store_u128, swap_u128, compare_and_swap_u128,
    compare_exchange_u128, add_u128, sub_u128
);
raw_128_ops!(
    i64, "a signed", load_i128, store_i128, swap_i128, compare_and_swap_i128,
    compare_exchange_i128, add_i128, sub_i128
);
