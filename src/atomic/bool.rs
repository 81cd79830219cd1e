// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Atomic boolean
//!
//! Backed by a `u32` cell holding 0 or 1; booleans have no dedicated
//! hardware atomic width and the 32-bit primitives are universally
//! available.

use core::cell::UnsafeCell;
use core::fmt;

use crate::arch::AtomicOps;

#[inline(always)]
fn b2u(b: bool) -> u32 {
    b as u32
}

/// An atomic `bool`, stored as a `u32`.
///
/// Method ordering defaults match the integer cells: `load`/`store` are
/// Relaxed, read-modify-write operations are AcqRel.
///
/// `compare_and_swap(false, true)` makes a one-shot latch: among any
/// number of concurrent callers exactly one observes `true`.
///
/// Not `Clone`/`Copy`.
#[repr(transparent)]
pub struct AtomicBool {
    v: UnsafeCell<u32>,
}

unsafe impl Send for AtomicBool {}
unsafe impl Sync for AtomicBool {}

impl AtomicBool {
    /// Creates a new atomic boolean with the given initial value.
    #[inline]
    pub const fn new(v: bool) -> Self {
        Self {
            v: UnsafeCell::new(v as u32),
        }
    }

    /// Loads the value with Relaxed ordering.
    #[inline]
    pub fn load(&self) -> bool {
        self.load_relaxed()
    }

    #[inline]
    pub fn load_relaxed(&self) -> bool {
        unsafe { u32::load_relaxed(self.v.get()) != 0 }
    }

    #[inline]
    pub fn load_acquire(&self) -> bool {
        unsafe { u32::load_acquire(self.v.get()) != 0 }
    }

    /// Stores a value with Relaxed ordering.
    #[inline]
    pub fn store(&self, val: bool) {
        self.store_relaxed(val);
    }

    #[inline]
    pub fn store_relaxed(&self, val: bool) {
        unsafe { u32::store_relaxed(self.v.get(), b2u(val)) }
    }

    #[inline]
    pub fn store_release(&self, val: bool) {
        unsafe { u32::store_release(self.v.get(), b2u(val)) }
    }

    /// Stores `new` and returns the previous value, with AcqRel ordering.
    #[inline]
    pub fn swap(&self, new: bool) -> bool {
        self.swap_acqrel(new)
    }

    #[inline]
    pub fn swap_relaxed(&self, new: bool) -> bool {
        unsafe { u32::swap_relaxed(self.v.get(), b2u(new)) != 0 }
    }

    #[inline]
    pub fn swap_acquire(&self, new: bool) -> bool {
        unsafe { u32::swap_acquire(self.v.get(), b2u(new)) != 0 }
    }

    #[inline]
    pub fn swap_release(&self, new: bool) -> bool {
        unsafe { u32::swap_release(self.v.get(), b2u(new)) != 0 }
    }

    #[inline]
    pub fn swap_acqrel(&self, new: bool) -> bool {
        unsafe { u32::swap_acqrel(self.v.get(), b2u(new)) != 0 }
    }

    /// Stores `new` if the current value equals `old`. Returns `true` if
    /// the store happened. AcqRel ordering.
    #[inline]
    pub fn compare_and_swap(&self, old: bool, new: bool) -> bool {
        self.compare_and_swap_acqrel(old, new)
    }

    #[inline]
    pub fn compare_and_swap_relaxed(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cas_relaxed(self.v.get(), b2u(old), b2u(new)) }
    }

    #[inline]
    pub fn compare_and_swap_acquire(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cas_acquire(self.v.get(), b2u(old), b2u(new)) }
    }

    #[inline]
    pub fn compare_and_swap_release(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cas_release(self.v.get(), b2u(old), b2u(new)) }
    }

    #[inline]
    pub fn compare_and_swap_acqrel(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cas_acqrel(self.v.get(), b2u(old), b2u(new)) }
    }

    /// Stores `new` if the current value equals `old`. Returns the value
    /// observed at the cell. AcqRel ordering.
    #[inline]
    pub fn compare_exchange(&self, old: bool, new: bool) -> bool {
        self.compare_exchange_acqrel(old, new)
    }

    #[inline]
    pub fn compare_exchange_relaxed(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cax_relaxed(self.v.get(), b2u(old), b2u(new)) != 0 }
    }

    #[inline]
    pub fn compare_exchange_acquire(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cax_acquire(self.v.get(), b2u(old), b2u(new)) != 0 }
    }

    #[inline]
    pub fn compare_exchange_release(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cax_release(self.v.get(), b2u(old), b2u(new)) != 0 }
    }

    #[inline]
    pub fn compare_exchange_acqrel(&self, old: bool, new: bool) -> bool {
        unsafe { u32::cax_acqrel(self.v.get(), b2u(old), b2u(new)) != 0 }
    }

    /// Raw pointer to the backing word, for the [`raw`](crate::raw)
    /// dispatch layer.
    #[inline]
    pub fn as_ptr(&self) -> *mut u32 {
        self.v.get()
    }
}

impl Default for AtomicBool {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool {
    fn from(v: bool) -> Self {
        Self::new(v)
    }
}

impl fmt::Debug for AtomicBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicBool").field(&self.load_relaxed()).finish()
    }
}
