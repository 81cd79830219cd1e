// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Fixed-width integer atomics
//!
//! [`AtomicI32`], [`AtomicU32`], [`AtomicI64`], [`AtomicU64`] and
//! [`AtomicUsize`], all generated from one macro. Signed flavors ride on
//! the unsigned backing width through lossless casts; two's-complement
//! arithmetic makes the RMW operations width-correct either way.

use core::cell::UnsafeCell;
use core::fmt;

use crate::arch::AtomicOps;

macro_rules! atomic_int {
    ($atomic:ident, $v:ty, $b:ty, $doc_name:literal) => {
        #[doc = concat!("An atomic `", $doc_name, "`.")]
        ///
        /// Same in-memory representation as the underlying integer; safe
        /// to place at any naturally aligned offset in a shared buffer
        /// (see [`place`](crate::place) and [`Allocator`](crate::Allocator)).
        ///
        /// Method ordering defaults: `load`/`store` are Relaxed, all
        /// read-modify-write operations are AcqRel. Every operation also
        /// has explicitly suffixed variants.
        ///
        /// Not `Clone`/`Copy`: a cell that is shared across threads must
        /// never be duplicated, only referenced.
        #[repr(transparent)]
        pub struct $atomic {
            v: UnsafeCell<$v>,
        }

        unsafe impl Send for $atomic {}
        unsafe impl Sync for $atomic {}

        impl $atomic {
            /// Creates a new atomic integer with the given initial value.
            #[inline]
            pub const fn new(v: $v) -> Self {
                Self {
                    v: UnsafeCell::new(v),
                }
            }

            #[inline(always)]
            fn as_base(&self) -> *mut $b {
                self.v.get() as *mut $b
            }

            /// Loads the value with Relaxed ordering.
            #[inline]
            pub fn load(&self) -> $v {
                self.load_relaxed()
            }

            #[inline]
            pub fn load_relaxed(&self) -> $v {
                unsafe { <$b>::load_relaxed(self.as_base()) as $v }
            }

            #[inline]
            pub fn load_acquire(&self) -> $v {
                unsafe { <$b>::load_acquire(self.as_base()) as $v }
            }

            /// Stores a value with Relaxed ordering.
            #[inline]
            pub fn store(&self, val: $v) {
                self.store_relaxed(val);
            }

            #[inline]
            pub fn store_relaxed(&self, val: $v) {
                unsafe { <$b>::store_relaxed(self.as_base(), val as $b) }
            }

            #[inline]
            pub fn store_release(&self, val: $v) {
                unsafe { <$b>::store_release(self.as_base(), val as $b) }
            }

            /// Stores `new` and returns the previous value, with AcqRel
            /// ordering.
            #[inline]
            pub fn swap(&self, new: $v) -> $v {
                self.swap_acqrel(new)
            }

            #[inline]
            pub fn swap_relaxed(&self, new: $v) -> $v {
                unsafe { <$b>::swap_relaxed(self.as_base(), new as $b) as $v }
            }

            #[inline]
            pub fn swap_acquire(&self, new: $v) -> $v {
                unsafe { <$b>::swap_acquire(self.as_base(), new as $b) as $v }
            }

            #[inline]
            pub fn swap_release(&self, new: $v) -> $v {
                unsafe { <$b>::swap_release(self.as_base(), new as $b) as $v }
            }

            #[inline]
            pub fn swap_acqrel(&self, new: $v) -> $v {
                unsafe { <$b>::swap_acqrel(self.as_base(), new as $b) as $v }
            }

            /// Stores `new` if the current value equals `old`. Returns
            /// `true` if the store happened. AcqRel ordering.
            #[inline]
            pub fn compare_and_swap(&self, old: $v, new: $v) -> bool {
                self.compare_and_swap_acqrel(old, new)
            }

            #[inline]
            pub fn compare_and_swap_relaxed(&self, old: $v, new: $v) -> bool {
                unsafe { <$b>::cas_relaxed(self.as_base(), old as $b, new as $b) }
            }

            #[inline]
            pub fn compare_and_swap_acquire(&self, old: $v, new: $v) -> bool {
                unsafe { <$b>::cas_acquire(self.as_base(), old as $b, new as $b) }
            }

            #[inline]
            pub fn compare_and_swap_release(&self, old: $v, new: $v) -> bool {
                unsafe { <$b>::cas_release(self.as_base(), old as $b, new as $b) }
            }

            #[inline]
            pub fn compare_and_swap_acqrel(&self, old: $v, new: $v) -> bool {
                unsafe { <$b>::cas_acqrel(self.as_base(), old as $b, new as $b) }
            }

            /// Stores `new` if the current value equals `old`. Returns the
            /// value observed at the cell: `old` on success, the current
            /// value on failure. A retry loop can feed the returned value
            /// straight back in without a separate load. AcqRel ordering.
            #[inline]
            pub fn compare_exchange(&self, old: $v, new: $v) -> $v {
                self.compare_exchange_acqrel(old, new)
            }

            #[inline]
            pub fn compare_exchange_relaxed(&self, old: $v, new: $v) -> $v {
                unsafe { <$b>::cax_relaxed(self.as_base(), old as $b, new as $b) as $v }
            }

            #[inline]
            pub fn compare_exchange_acquire(&self, old: $v, new: $v) -> $v {
                unsafe { <$b>::cax_acquire(self.as_base(), old as $b, new as $b) as $v }
            }

            #[inline]
            pub fn compare_exchange_release(&self, old: $v, new: $v) -> $v {
                unsafe { <$b>::cax_release(self.as_base(), old as $b, new as $b) as $v }
            }

            #[inline]
            pub fn compare_exchange_acqrel(&self, old: $v, new: $v) -> $v {
                unsafe { <$b>::cax_acqrel(self.as_base(), old as $b, new as $b) as $v }
            }

            /// Adds `delta` and returns the NEW value, with AcqRel
            /// ordering. Wraps on overflow.
            #[inline]
            pub fn add(&self, delta: $v) -> $v {
                self.add_acqrel(delta)
            }

            #[inline]
            pub fn add_relaxed(&self, delta: $v) -> $v {
                unsafe { <$b>::add_relaxed(self.as_base(), delta as $b) as $v }
            }

            #[inline]
            pub fn add_acquire(&self, delta: $v) -> $v {
                unsafe { <$b>::add_acquire(self.as_base(), delta as $b) as $v }
            }

            #[inline]
            pub fn add_release(&self, delta: $v) -> $v {
                unsafe { <$b>::add_release(self.as_base(), delta as $b) as $v }
            }

            #[inline]
            pub fn add_acqrel(&self, delta: $v) -> $v {
                unsafe { <$b>::add_acqrel(self.as_base(), delta as $b) as $v }
            }

            /// Subtracts `delta` and returns the NEW value, with AcqRel
            /// ordering. Subtraction is addition of the two's-complement
            /// negation at every width, unsigned included.
            #[inline]
            pub fn sub(&self, delta: $v) -> $v {
                self.add_acqrel(delta.wrapping_neg())
            }

            #[inline]
            pub fn sub_relaxed(&self, delta: $v) -> $v {
                self.add_relaxed(delta.wrapping_neg())
            }

            #[inline]
            pub fn sub_acquire(&self, delta: $v) -> $v {
                self.add_acquire(delta.wrapping_neg())
            }

            #[inline]
            pub fn sub_release(&self, delta: $v) -> $v {
                self.add_release(delta.wrapping_neg())
            }

            #[inline]
            pub fn sub_acqrel(&self, delta: $v) -> $v {
                self.add_acqrel(delta.wrapping_neg())
            }

            /// Bitwise AND with `mask`; returns the OLD value. AcqRel
            /// ordering.
            #[inline]
            pub fn and(&self, mask: $v) -> $v {
                self.and_acqrel(mask)
            }

            #[inline]
            pub fn and_relaxed(&self, mask: $v) -> $v {
                unsafe { <$b>::and_relaxed(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn and_acquire(&self, mask: $v) -> $v {
                unsafe { <$b>::and_acquire(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn and_release(&self, mask: $v) -> $v {
                unsafe { <$b>::and_release(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn and_acqrel(&self, mask: $v) -> $v {
                unsafe { <$b>::and_acqrel(self.as_base(), mask as $b) as $v }
            }

            /// Bitwise OR with `mask`; returns the OLD value. AcqRel
            /// ordering.
            #[inline]
            pub fn or(&self, mask: $v) -> $v {
                self.or_acqrel(mask)
            }

            #[inline]
            pub fn or_relaxed(&self, mask: $v) -> $v {
                unsafe { <$b>::or_relaxed(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn or_acquire(&self, mask: $v) -> $v {
                unsafe { <$b>::or_acquire(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn or_release(&self, mask: $v) -> $v {
                unsafe { <$b>::or_release(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn or_acqrel(&self, mask: $v) -> $v {
                unsafe { <$b>::or_acqrel(self.as_base(), mask as $b) as $v }
            }

            /// Bitwise XOR with `mask`; returns the OLD value. AcqRel
            /// ordering.
            #[inline]
            pub fn xor(&self, mask: $v) -> $v {
                self.xor_acqrel(mask)
            }

            #[inline]
            pub fn xor_relaxed(&self, mask: $v) -> $v {
                unsafe { <$b>::xor_relaxed(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn xor_acquire(&self, mask: $v) -> $v {
                unsafe { <$b>::xor_acquire(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn xor_release(&self, mask: $v) -> $v {
                unsafe { <$b>::xor_release(self.as_base(), mask as $b) as $v }
            }

            #[inline]
            pub fn xor_acqrel(&self, mask: $v) -> $v {
                unsafe { <$b>::xor_acqrel(self.as_base(), mask as $b) as $v }
            }

            /// Raises the value to at least `val`; returns the value
            /// observed immediately before the (possibly elided) CAS.
            ///
            /// Retry loop: load Relaxed, return early when the current
            /// value already satisfies the relation, otherwise CAS with
            /// AcqRel and start over on contention. No backoff; may spin
            /// unboundedly under contention.
            #[inline]
            pub fn max(&self, val: $v) -> $v {
                loop {
                    let cur = self.load_relaxed();
                    if cur >= val {
                        return cur;
                    }
                    if self.compare_and_swap_acqrel(cur, val) {
                        return cur;
                    }
                }
            }

            #[inline]
            pub fn max_relaxed(&self, val: $v) -> $v {
                loop {
                    let cur = self.load_relaxed();
                    if cur >= val {
                        return cur;
                    }
                    if self.compare_and_swap_relaxed(cur, val) {
                        return cur;
                    }
                }
            }

            /// Lowers the value to at most `val`; returns the value
            /// observed immediately before the (possibly elided) CAS.
            #[inline]
            pub fn min(&self, val: $v) -> $v {
                loop {
                    let cur = self.load_relaxed();
                    if cur <= val {
                        return cur;
                    }
                    if self.compare_and_swap_acqrel(cur, val) {
                        return cur;
                    }
                }
            }

            #[inline]
            pub fn min_relaxed(&self, val: $v) -> $v {
                loop {
                    let cur = self.load_relaxed();
                    if cur <= val {
                        return cur;
                    }
                    if self.compare_and_swap_relaxed(cur, val) {
                        return cur;
                    }
                }
            }

            /// Raw pointer to the underlying integer, for the
            /// [`raw`](crate::raw) dispatch layer.
            #[inline]
            pub fn as_ptr(&self) -> *mut $v {
                self.v.get()
            }
        }

        impl Default for $atomic {
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$v> for $atomic {
            fn from(v: $v) -> Self {
                Self::new(v)
            }
        }

        impl fmt::Debug for $atomic {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($atomic))
                    .field(&self.load_relaxed())
                    .finish()
            }
        }
    };
}

atomic_int!(AtomicI32, i32, u32, "i32");
atomic_int!(AtomicU32, u32, u32, "u32");
atomic_int!(AtomicI64, i64, u64, "i64");
atomic_int!(AtomicU64, u64, u64, "u64");
atomic_int!(AtomicUsize, usize, usize, "usize");
