// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Ordering-dispatched boolean operations
//!
//! Booleans on raw memory are a `u32` word holding 0 or 1, matching the
//! backing layout of [`AtomicBool`](crate::AtomicBool).

use crate::arch::AtomicOps;
use crate::order::MemoryOrder;

#[inline(always)]
fn b2u(b: bool) -> u32 {
    b as u32
}

impl MemoryOrder {
    /// Atomically loads a boolean word. Non-Relaxed orderings run as
    /// Acquire.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for reads, 4-byte aligned, and stay valid
    /// for the duration of the operation.
    #[inline]
    pub unsafe fn load_bool(self, addr: *const u32) -> bool {
        match self {
            MemoryOrder::Relaxed => u32::load_relaxed(addr) != 0,
            _ => u32::load_acquire(addr) != 0,
        }
    }

    /// Atomically stores a boolean word. Non-Relaxed orderings run as
    /// Release.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for writes, 4-byte aligned, and stay valid
    /// for the duration of the operation.
    #[inline]
    pub unsafe fn store_bool(self, addr: *mut u32, val: bool) {
        match self {
            MemoryOrder::Relaxed => u32::store_relaxed(addr, b2u(val)),
            _ => u32::store_release(addr, b2u(val)),
        }
    }

    /// Stores `new` and returns the previous boolean.
    ///
    /// # Safety
    ///
    /// `addr` must be valid for reads and writes, 4-byte aligned, and
    /// stay valid for the duration of the operation.
    #[inline]
    pub unsafe fn swap_bool(self, addr: *mut u32, new: bool) -> bool {
        let new = b2u(new);
        (match self {
            MemoryOrder::Relaxed => u32::swap_relaxed(addr, new),
            MemoryOrder::Acquire => u32::swap_acquire(addr, new),
            MemoryOrder::Release => u32::swap_release(addr, new),
            MemoryOrder::AcqRel => u32::swap_acqrel(addr, new),
        }) != 0
    }

    /// Stores `new` if the current boolean equals `old`; returns `true`
    /// if the store happened.
    ///
    /// # Safety
    ///
    /// Same contract as [`swap_bool`](MemoryOrder::swap_bool).
    #[inline]
    pub unsafe fn compare_and_swap_bool(self, addr: *mut u32, old: bool, new: bool) -> bool {
        let (old, new) = (b2u(old), b2u(new));
        match self {
            MemoryOrder::Relaxed => u32::cas_relaxed(addr, old, new),
            MemoryOrder::Acquire => u32::cas_acquire(addr, old, new),
            MemoryOrder::Release => u32::cas_release(addr, old, new),
            MemoryOrder::AcqRel => u32::cas_acqrel(addr, old, new),
        }
    }

    /// Stores `new` if the current boolean equals `old`; returns the
    /// boolean observed at the location.
    ///
    /// # Safety
    ///
    /// Same contract as [`swap_bool`](MemoryOrder::swap_bool).
    #[inline]
    pub unsafe fn compare_exchange_bool(self, addr: *mut u32, old: bool, new: bool) -> bool {
        let (old, new) = (b2u(old), b2u(new));
        (match self {
            MemoryOrder::Relaxed => u32::cax_relaxed(addr, old, new),
            MemoryOrder::Acquire => u32::cax_acquire(addr, old, new),
            MemoryOrder::Release => u32::cax_release(addr, old, new),
            MemoryOrder::AcqRel => u32::cax_acqrel(addr, old, new),
        }) != 0
    }
}
