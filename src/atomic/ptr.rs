// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Atomic pointer
//!
//! A raw `*mut T` cell backed by the pointer-width integer primitives.
//! The usual pattern pairs a Release store by the publishing thread with
//! an Acquire load by the consumer before dereferencing.

use core::cell::UnsafeCell;
use core::fmt;

use crate::arch::AtomicOps;

/// An atomic `*mut T`.
///
/// Method ordering defaults match the integer cells: `load`/`store` are
/// Relaxed, read-modify-write operations are AcqRel. The cell stores the
/// address only; it never dereferences, drops, or otherwise manages the
/// pointee.
///
/// Not `Clone`/`Copy`.
#[repr(transparent)]
pub struct AtomicPtr<T> {
    v: UnsafeCell<*mut T>,
}

unsafe impl<T> Send for AtomicPtr<T> {}
unsafe impl<T> Sync for AtomicPtr<T> {}

impl<T> AtomicPtr<T> {
    /// Creates a new atomic pointer with the given initial value.
    #[inline]
    pub const fn new(p: *mut T) -> Self {
        Self {
            v: UnsafeCell::new(p),
        }
    }

    /// Creates a null atomic pointer.
    #[inline]
    pub const fn null() -> Self {
        Self::new(core::ptr::null_mut())
    }

    #[inline(always)]
    fn as_word(&self) -> *mut usize {
        self.v.get() as *mut usize
    }

    /// Loads the pointer with Relaxed ordering.
    #[inline]
    pub fn load(&self) -> *mut T {
        self.load_relaxed()
    }

    #[inline]
    pub fn load_relaxed(&self) -> *mut T {
        unsafe { usize::load_relaxed(self.as_word()) as *mut T }
    }

    #[inline]
    pub fn load_acquire(&self) -> *mut T {
        unsafe { usize::load_acquire(self.as_word()) as *mut T }
    }

    /// Stores a pointer with Relaxed ordering.
    #[inline]
    pub fn store(&self, p: *mut T) {
        self.store_relaxed(p);
    }

    #[inline]
    pub fn store_relaxed(&self, p: *mut T) {
        unsafe { usize::store_relaxed(self.as_word(), p as usize) }
    }

    #[inline]
    pub fn store_release(&self, p: *mut T) {
        unsafe { usize::store_release(self.as_word(), p as usize) }
    }

    /// Stores `new` and returns the previous pointer, with AcqRel
    /// ordering.
    #[inline]
    pub fn swap(&self, new: *mut T) -> *mut T {
        self.swap_acqrel(new)
    }

    #[inline]
    pub fn swap_relaxed(&self, new: *mut T) -> *mut T {
        unsafe { usize::swap_relaxed(self.as_word(), new as usize) as *mut T }
    }

    #[inline]
    pub fn swap_acquire(&self, new: *mut T) -> *mut T {
        unsafe { usize::swap_acquire(self.as_word(), new as usize) as *mut T }
    }

    #[inline]
    pub fn swap_release(&self, new: *mut T) -> *mut T {
        unsafe { usize::swap_release(self.as_word(), new as usize) as *mut T }
    }

    #[inline]
    pub fn swap_acqrel(&self, new: *mut T) -> *mut T {
        unsafe { usize::swap_acqrel(self.as_word(), new as usize) as *mut T }
    }

    /// Stores `new` if the current pointer equals `old`. Returns `true`
    /// if the store happened. AcqRel ordering.
    #[inline]
    pub fn compare_and_swap(&self, old: *mut T, new: *mut T) -> bool {
        self.compare_and_swap_acqrel(old, new)
    }

    #[inline]
    pub fn compare_and_swap_relaxed(&self, old: *mut T, new: *mut T) -> bool {
        unsafe { usize::cas_relaxed(self.as_word(), old as usize, new as usize) }
    }

    #[inline]
    pub fn compare_and_swap_acquire(&self, old: *mut T, new: *mut T) -> bool {
        unsafe { usize::cas_acquire(self.as_word(), old as usize, new as usize) }
    }

    #[inline]
    pub fn compare_and_swap_release(&self, old: *mut T, new: *mut T) -> bool {
        unsafe { usize::cas_release(self.as_word(), old as usize, new as usize) }
    }

    #[inline]
    pub fn compare_and_swap_acqrel(&self, old: *mut T, new: *mut T) -> bool {
        unsafe { usize::cas_acqrel(self.as_word(), old as usize, new as usize) }
    }

    /// Stores `new` if the current pointer equals `old`. Returns the
    /// pointer observed at the cell. AcqRel ordering.
    #[inline]
    pub fn compare_exchange(&self, old: *mut T, new: *mut T) -> *mut T {
        self.compare_exchange_acqrel(old, new)
    }

    #[inline]
    pub fn compare_exchange_relaxed(&self, old: *mut T, new: *mut T) -> *mut T {
        unsafe { usize::cax_relaxed(self.as_word(), old as usize, new as usize) as *mut T }
    }

    #[inline]
    pub fn compare_exchange_acquire(&self, old: *mut T, new: *mut T) -> *mut T {
        unsafe { usize::cax_acquire(self.as_word(), old as usize, new as usize) as *mut T }
    }

    #[inline]
    pub fn compare_exchange_release(&self, old: *mut T, new: *mut T) -> *mut T {
        unsafe { usize::cax_release(self.as_word(), old as usize, new as usize) as *mut T }
    }

    #[inline]
    pub fn compare_exchange_acqrel(&self, old: *mut T, new: *mut T) -> *mut T {
        unsafe { usize::cax_acqrel(self.as_word(), old as usize, new as usize) as *mut T }
    }

    /// Raw pointer to the cell, for the [`raw`](crate::raw) dispatch
    /// layer.
    #[inline]
    pub fn as_ptr(&self) -> *mut *mut T {
        self.v.get()
    }
}

impl<T> Default for AtomicPtr<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<*mut T> for AtomicPtr<T> {
    fn from(p: *mut T) -> Self {
        Self::new(p)
    }
}

impl<T> fmt::Debug for AtomicPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicPtr").field(&self.load_relaxed()).finish()
    }
}
