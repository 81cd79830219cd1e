// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! 128-bit atomics
//!
//! [`AtomicU128`] and [`AtomicI128`] hold their value as an ordered
//! `(lo, hi)` pair of 64-bit words, logical value `hi * 2^64 + lo`
//! (two's-complement when `hi` is signed). Load, store, swap and
//! compare-and-swap are single double-width hardware operations where
//! the ISA has them; arithmetic is a CAS retry loop with carry and
//! borrow propagation between the words.
//!
//! Cells must be 16-byte aligned or double-width atomicity is lost;
//! the types carry `align(16)` so ordinary placement gets this right,
//! and the [`place`](crate::place) helpers compute the padding when a
//! cell is embedded in a raw buffer. On targets without a double-width
//! primitive (RV64 and the generic fallback) these operations are NOT
//! atomic; see the arch module docs.

use core::cell::UnsafeCell;
use core::cmp::Ordering;
use core::fmt;

use crate::arch;

macro_rules! atomic_128 {
    ($atomic:ident, $hi:ty, $doc_name:literal) => {
        #[doc = concat!("An atomic ", $doc_name, " 128-bit integer.")]
        ///
        /// Values are `(lo, hi)` word pairs. Method ordering defaults
        /// match the narrower cells: `load`/`store` are Relaxed,
        /// read-modify-write operations are AcqRel. The `add`/`sub`
        /// retry loops collapse Acquire and Release requests to AcqRel
        /// on the CAS; only the `_relaxed` variants CAS with Relaxed.
        ///
        /// Not `Clone`/`Copy`.
        #[repr(C, align(16))]
        pub struct $atomic {
            v: UnsafeCell<[u64; 2]>,
        }

        unsafe impl Send for $atomic {}
        unsafe impl Sync for $atomic {}

        impl $atomic {
            /// Creates a new 128-bit atomic from a `(lo, hi)` pair.
            #[inline]
            pub const fn new(lo: u64, hi: $hi) -> Self {
                Self {
                    v: UnsafeCell::new([lo, hi as u64]),
                }
            }

            #[inline(always)]
            fn addr(&self) -> *mut u8 {
                self.v.get() as *mut u8
            }

            /// Loads the `(lo, hi)` pair with Relaxed ordering.
            #[inline]
            pub fn load(&self) -> (u64, $hi) {
                self.load_relaxed()
            }

            #[inline]
            pub fn load_relaxed(&self) -> (u64, $hi) {
                let (lo, hi) = unsafe { arch::load128_relaxed(self.addr()) };
                (lo, hi as $hi)
            }

            #[inline]
            pub fn load_acquire(&self) -> (u64, $hi) {
                let (lo, hi) = unsafe { arch::load128_acquire(self.addr()) };
                (lo, hi as $hi)
            }

            /// Stores a `(lo, hi)` pair with Relaxed ordering.
            #[inline]
            pub fn store(&self, lo: u64, hi: $hi) {
                self.store_relaxed(lo, hi);
            }

            #[inline]
            pub fn store_relaxed(&self, lo: u64, hi: $hi) {
                unsafe { arch::store128_relaxed(self.addr(), lo, hi as u64) }
            }

            #[inline]
            pub fn store_release(&self, lo: u64, hi: $hi) {
                unsafe { arch::store128_release(self.addr(), lo, hi as u64) }
            }

            /// Stores a new pair and returns the previous one, with
            /// AcqRel ordering.
            #[inline]
            pub fn swap(&self, lo: u64, hi: $hi) -> (u64, $hi) {
                self.swap_acqrel(lo, hi)
            }

            #[inline]
            pub fn swap_relaxed(&self, lo: u64, hi: $hi) -> (u64, $hi) {
                let (olo, ohi) = unsafe { arch::swap128_relaxed(self.addr(), lo, hi as u64) };
                (olo, ohi as $hi)
            }

            #[inline]
            pub fn swap_acquire(&self, lo: u64, hi: $hi) -> (u64, $hi) {
                let (olo, ohi) = unsafe { arch::swap128_acquire(self.addr(), lo, hi as u64) };
                (olo, ohi as $hi)
            }

            #[inline]
            pub fn swap_release(&self, lo: u64, hi: $hi) -> (u64, $hi) {
                let (olo, ohi) = unsafe { arch::swap128_release(self.addr(), lo, hi as u64) };
                (olo, ohi as $hi)
            }

            #[inline]
            pub fn swap_acqrel(&self, lo: u64, hi: $hi) -> (u64, $hi) {
                let (olo, ohi) = unsafe { arch::swap128_acqrel(self.addr(), lo, hi as u64) };
                (olo, ohi as $hi)
            }

            /// Stores the new pair if the current pair equals the old
            /// one. Returns `true` if the store happened. AcqRel
            /// ordering.
            #[inline]
            pub fn compare_and_swap(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                self.compare_and_swap_acqrel(old_lo, old_hi, new_lo, new_hi)
            }

            #[inline]
            pub fn compare_and_swap_relaxed(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                unsafe {
                    arch::cas128_relaxed(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                }
            }

            #[inline]
            pub fn compare_and_swap_acquire(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                unsafe {
                    arch::cas128_acquire(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                }
            }

            #[inline]
            pub fn compare_and_swap_release(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                unsafe {
                    arch::cas128_release(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                }
            }

            #[inline]
            pub fn compare_and_swap_acqrel(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> bool {
                unsafe {
                    arch::cas128_acqrel(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                }
            }

            /// Stores the new pair if the current pair equals the old
            /// one. Returns the pair observed at the cell. AcqRel
            /// ordering.
            #[inline]
            pub fn compare_exchange(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                self.compare_exchange_acqrel(old_lo, old_hi, new_lo, new_hi)
            }

            #[inline]
            pub fn compare_exchange_relaxed(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                let (lo, hi) = unsafe {
                    arch::cax128_relaxed(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                };
                (lo, hi as $hi)
            }

            #[inline]
            pub fn compare_exchange_acquire(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                let (lo, hi) = unsafe {
                    arch::cax128_acquire(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                };
                (lo, hi as $hi)
            }

            #[inline]
            pub fn compare_exchange_release(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                let (lo, hi) = unsafe {
                    arch::cax128_release(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                };
                (lo, hi as $hi)
            }

            #[inline]
            pub fn compare_exchange_acqrel(
                &self,
                old_lo: u64,
                old_hi: $hi,
                new_lo: u64,
                new_hi: $hi,
            ) -> (u64, $hi) {
                let (lo, hi) = unsafe {
                    arch::cax128_acqrel(self.addr(), old_lo, old_hi as u64, new_lo, new_hi as u64)
                };
                (lo, hi as $hi)
            }

            // Carry propagates when the low word wraps, borrow when it
            // "un-wraps". Loads in the loops are always Relaxed; the
            // requested ordering applies to the CAS.
            #[inline]
            fn add_loop(&self, delta_lo: u64, delta_hi: u64, relaxed: bool) -> (u64, u64) {
                loop {
                    let (lo, hi) = unsafe { arch::load128_relaxed(self.addr()) };
                    let new_lo = lo.wrapping_add(delta_lo);
                    let mut new_hi = hi.wrapping_add(delta_hi);
                    if new_lo < lo {
                        new_hi = new_hi.wrapping_add(1);
                    }
                    let done = unsafe {
                        if relaxed {
                            arch::cas128_relaxed(self.addr(), lo, hi, new_lo, new_hi)
                        } else {
                            arch::cas128_acqrel(self.addr(), lo, hi, new_lo, new_hi)
                        }
                    };
                    if done {
                        return (new_lo, new_hi);
                    }
                }
            }

            #[inline]
            fn sub_loop(&self, delta_lo: u64, delta_hi: u64, relaxed: bool) -> (u64, u64) {
                loop {
                    let (lo, hi) = unsafe { arch::load128_relaxed(self.addr()) };
                    let new_lo = lo.wrapping_sub(delta_lo);
                    let mut new_hi = hi.wrapping_sub(delta_hi);
                    if new_lo > lo {
                        new_hi = new_hi.wrapping_sub(1);
                    }
                    let done = unsafe {
                        if relaxed {
                            arch::cas128_relaxed(self.addr(), lo, hi, new_lo, new_hi)
                        } else {
                            arch::cas128_acqrel(self.addr(), lo, hi, new_lo, new_hi)
                        }
                    };
                    if done {
                        return (new_lo, new_hi);
                    }
                }
            }

            /// Adds a `(lo, hi)` delta and returns the NEW pair, with
            /// AcqRel ordering on the CAS. Wraps on overflow.
            #[inline]
            pub fn add(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let (lo, hi) = self.add_loop(delta_lo, delta_hi as u64, false);
                (lo, hi as $hi)
            }

            #[inline]
            pub fn add_relaxed(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let (lo, hi) = self.add_loop(delta_lo, delta_hi as u64, true);
                (lo, hi as $hi)
            }

            /// Acquire request; the retry CAS still runs at AcqRel.
            #[inline]
            pub fn add_acquire(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.add(delta_lo, delta_hi)
            }

            /// Release request; the retry CAS still runs at AcqRel.
            #[inline]
            pub fn add_release(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.add(delta_lo, delta_hi)
            }

            #[inline]
            pub fn add_acqrel(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.add(delta_lo, delta_hi)
            }

            /// Subtracts a `(lo, hi)` delta and returns the NEW pair,
            /// with AcqRel ordering on the CAS. Wraps on underflow.
            #[inline]
            pub fn sub(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let (lo, hi) = self.sub_loop(delta_lo, delta_hi as u64, false);
                (lo, hi as $hi)
            }

            #[inline]
            pub fn sub_relaxed(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                let (lo, hi) = self.sub_loop(delta_lo, delta_hi as u64, true);
                (lo, hi as $hi)
            }

            /// Acquire request; the retry CAS still runs at AcqRel.
            #[inline]
            pub fn sub_acquire(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.sub(delta_lo, delta_hi)
            }

            /// Release request; the retry CAS still runs at AcqRel.
            #[inline]
            pub fn sub_release(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.sub(delta_lo, delta_hi)
            }

            #[inline]
            pub fn sub_acqrel(&self, delta_lo: u64, delta_hi: $hi) -> (u64, $hi) {
                self.sub(delta_lo, delta_hi)
            }

            /// Adds one and returns the NEW pair.
            #[inline]
            pub fn inc(&self) -> (u64, $hi) {
                self.add(1, 0)
            }

            #[inline]
            pub fn inc_relaxed(&self) -> (u64, $hi) {
                self.add_relaxed(1, 0)
            }

            /// Subtracts one and returns the NEW pair.
            #[inline]
            pub fn dec(&self) -> (u64, $hi) {
                self.sub(1, 0)
            }

            #[inline]
            pub fn dec_relaxed(&self) -> (u64, $hi) {
                self.sub_relaxed(1, 0)
            }

            // High words first; a low-word tie-break is always an
            // unsigned magnitude compare, signed type included. After
            // the high word is fixed the remaining 64 bits carry no
            // sign of their own.
            #[inline]
            fn cmp_to(&self, lo: u64, hi: $hi, relaxed: bool) -> Ordering {
                let (cur_lo, cur_hi) = if relaxed {
                    self.load_relaxed()
                } else {
                    self.load_acquire()
                };
                match cur_hi.cmp(&hi) {
                    Ordering::Equal => cur_lo.cmp(&lo),
                    ord => ord,
                }
            }

            /// Whether the current value equals `(lo, hi)`. Acquire load.
            #[inline]
            pub fn equal(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, false) == Ordering::Equal
            }

            #[inline]
            pub fn equal_relaxed(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, true) == Ordering::Equal
            }

            /// Whether the current value is less than `(lo, hi)`.
            /// Acquire load.
            #[inline]
            pub fn less(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, false) == Ordering::Less
            }

            #[inline]
            pub fn less_relaxed(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, true) == Ordering::Less
            }

            /// Whether the current value is at most `(lo, hi)`. Acquire
            /// load.
            #[inline]
            pub fn less_or_equal(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, false) != Ordering::Greater
            }

            #[inline]
            pub fn less_or_equal_relaxed(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, true) != Ordering::Greater
            }

            /// Whether the current value is greater than `(lo, hi)`.
            /// Acquire load.
            #[inline]
            pub fn greater(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, false) == Ordering::Greater
            }

            #[inline]
            pub fn greater_relaxed(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, true) == Ordering::Greater
            }

            /// Whether the current value is at least `(lo, hi)`. Acquire
            /// load.
            #[inline]
            pub fn greater_or_equal(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, false) != Ordering::Less
            }

            #[inline]
            pub fn greater_or_equal_relaxed(&self, lo: u64, hi: $hi) -> bool {
                self.cmp_to(lo, hi, true) != Ordering::Less
            }

            /// Raw pointer to the backing word pair, for the
            /// [`raw`](crate::raw) dispatch layer.
            #[inline]
            pub fn as_ptr(&self) -> *mut [u64; 2] {
                self.v.get()
            }
        }

        impl Default for $atomic {
            fn default() -> Self {
                Self::new(0, 0)
            }
        }

        impl fmt::Debug for $atomic {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let (lo, hi) = self.load_relaxed();
                f.debug_struct(stringify!($atomic))
                    .field("lo", &lo)
                    .field("hi", &hi)
                    .finish()
            }
        }
    };
}

atomic_128!(AtomicU128, u64, "unsigned");
atomic_128!(AtomicI128, i64, "signed");
