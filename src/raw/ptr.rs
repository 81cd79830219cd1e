// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Ordering-dispatched pointer operations

use crate::arch::AtomicOps;
use crate::order::MemoryOrder;

impl MemoryOrder {
    /// Atomically loads a pointer. Non-Relaxed orderings run as Acquire.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for reads, pointer-aligned, and stay valid
    /// for the duration of the operation.
    #[inline]
    pub unsafe fn load_ptr<T>(self, addr: *const *mut T) -> *mut T {
        let addr = addr as *const usize;
        (match self {
            MemoryOrder::Relaxed => usize::load_relaxed(addr),
            _ => usize::load_acquire(addr),
        }) as *mut T
    }

    /// Atomically stores a pointer. Non-Relaxed orderings run as
    /// Release.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for writes, pointer-aligned, and stay valid
    /// for the duration of the operation.
    #[inline]
    pub unsafe fn store_ptr<T>(self, addr: *mut *mut T, val: *mut T) {
        let addr = addr as *mut usize;
        match self {
            MemoryOrder::Relaxed => usize::store_relaxed(addr, val as usize),
            _ => usize::store_release(addr, val as usize),
        }
    }

    /// Stores `new` and returns the previous pointer.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for reads and writes, pointer-aligned, and
    /// stay valid for the duration of the operation.
    #[inline]
    pub unsafe fn swap_ptr<T>(self, addr: *mut *mut T, new: *mut T) -> *mut T {
        let addr = addr as *mut usize;
        let new = new as usize;
        (match self {
            MemoryOrder::Relaxed => usize::swap_relaxed(addr, new),
            MemoryOrder::Acquire => usize::swap_acquire(addr, new),
            MemoryOrder::Release => usize::swap_release(addr, new),
            MemoryOrder::AcqRel => usize::swap_acqrel(addr, new),
        }) as *mut T
    }

    /// Stores `new` if the current pointer equals `old`; returns `true`
    /// if the store happened.
    ///
    /// # Safety
    ///
    /// Same contract as [`swap_ptr`](MemoryOrder::swap_ptr).
    #[inline]
    pub unsafe fn compare_and_swap_ptr<T>(
        self,
        addr: *mut *mut T,
        old: *mut T,
        new: *mut T,
    ) -> bool {
        let addr = addr as *mut usize;
        let (old, new) = (old as usize, new as usize);
        match self {
            MemoryOrder::Relaxed => usize::cas_relaxed(addr, old, new),
            MemoryOrder::Acquire => usize::cas_acquire(addr, old, new),
            MemoryOrder::Release => usize::cas_release(addr, old, new),
            MemoryOrder::AcqRel => usize::cas_acqrel(addr, old, new),
        }
    }

    /// Stores `new` if the current pointer equals `old`; returns the
    /// pointer observed at the location.
    ///
    /// # Safety
    ///
    /// Same contract as [`swap_ptr`](MemoryOrder::swap_ptr).
    #[inline]
    pub unsafe fn compare_exchange_ptr<T>(
        self,
        addr: *mut *mut T,
        old: *mut T,
        new: *mut T,
    ) -> *mut T {
        let addr = addr as *mut usize;
        let (old, new) = (old as usize, new as usize);
        (match self {
            MemoryOrder::Relaxed => usize::cax_relaxed(addr, old, new),
            MemoryOrder::Acquire => usize::cax_acquire(addr, old, new),
            MemoryOrder::Release => usize::cax_release(addr, old, new),
            MemoryOrder::AcqRel => usize::cax_acqrel(addr, old, new),
        }) as *mut T
    }
}
