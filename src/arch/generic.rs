// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Portable fallback atomic operations
//!
//! Targets without a dedicated ISA module go through `core::sync::atomic`
//! with sequentially consistent ordering for every variant. SeqCst is
//! strictly stronger than any ordering a caller can request, so the only
//! cost is performance.
//!
//! There is no portable 128-bit atomic in `core`, so the 128-bit
//! operations here are fenced volatile pairs and NOT single-copy atomic.
//! Concurrent 128-bit writers on fallback targets can be observed torn.

use core::ptr::{read_volatile, write_volatile};
use core::sync::atomic::{fence, AtomicU32, AtomicU64, AtomicUsize, Ordering};

use super::AtomicOps;

macro_rules! generic_atomic_ops {
    ($ty:ty, $atomic:ty) => {
        unsafe impl AtomicOps for $ty {
            #[inline]
            unsafe fn load_relaxed(addr: *const Self) -> Self {
                <$atomic>::from_ptr(addr as *mut Self).load(Ordering::SeqCst)
            }

            #[inline]
            unsafe fn load_acquire(addr: *const Self) -> Self {
                <$atomic>::from_ptr(addr as *mut Self).load(Ordering::SeqCst)
            }

            #[inline]
            unsafe fn store_relaxed(addr: *mut Self, val: Self) {
                <$atomic>::from_ptr(addr).store(val, Ordering::SeqCst);
            }

            #[inline]
            unsafe fn store_release(addr: *mut Self, val: Self) {
                <$atomic>::from_ptr(addr).store(val, Ordering::SeqCst);
            }

            #[inline]
            unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self {
                <$atomic>::from_ptr(addr).swap(new, Ordering::SeqCst)
            }

            #[inline]
            unsafe fn swap_acquire(addr: *mut Self, new: Self) -> Self {
                Self::swap_relaxed(addr, new)
            }

            #[inline]
            unsafe fn swap_release(addr: *mut Self, new: Self) -> Self {
                Self::swap_relaxed(addr, new)
            }

            #[inline]
            unsafe fn swap_acqrel(addr: *mut Self, new: Self) -> Self {
                Self::swap_relaxed(addr, new)
            }

            #[inline]
            unsafe fn cas_relaxed(addr: *mut Self, old: Self, new: Self) -> bool {
                <$atomic>::from_ptr(addr)
                    .compare_exchange(old, new, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
            }

            #[inline]
            unsafe fn cas_acquire(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cas_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn cas_release(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cas_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn cas_acqrel(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cas_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self {
                match <$atomic>::from_ptr(addr).compare_exchange(
                    old,
                    new,
                    Ordering::SeqCst,
                    Ordering::SeqCst,
                ) {
                    Ok(observed) | Err(observed) => observed,
                }
            }

            #[inline]
            unsafe fn cax_acquire(addr: *mut Self, old: Self, new: Self) -> Self {
                Self::cax_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn cax_release(addr: *mut Self, old: Self, new: Self) -> Self {
                Self::cax_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn cax_acqrel(addr: *mut Self, old: Self, new: Self) -> Self {
                Self::cax_relaxed(addr, old, new)
            }

            #[inline]
            unsafe fn add_relaxed(addr: *mut Self, delta: Self) -> Self {
                <$atomic>::from_ptr(addr)
                    .fetch_add(delta, Ordering::SeqCst)
                    .wrapping_add(delta)
            }

            #[inline]
            unsafe fn add_acquire(addr: *mut Self, delta: Self) -> Self {
                Self::add_relaxed(addr, delta)
            }

            #[inline]
            unsafe fn add_release(addr: *mut Self, delta: Self) -> Self {
                Self::add_relaxed(addr, delta)
            }

            #[inline]
            unsafe fn add_acqrel(addr: *mut Self, delta: Self) -> Self {
                Self::add_relaxed(addr, delta)
            }

            #[inline]
            unsafe fn and_relaxed(addr: *mut Self, mask: Self) -> Self {
                <$atomic>::from_ptr(addr).fetch_and(mask, Ordering::SeqCst)
            }

            #[inline]
            unsafe fn and_acquire(addr: *mut Self, mask: Self) -> Self {
                Self::and_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn and_release(addr: *mut Self, mask: Self) -> Self {
                Self::and_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn and_acqrel(addr: *mut Self, mask: Self) -> Self {
                Self::and_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn or_relaxed(addr: *mut Self, mask: Self) -> Self {
                <$atomic>::from_ptr(addr).fetch_or(mask, Ordering::SeqCst)
            }

            #[inline]
            unsafe fn or_acquire(addr: *mut Self, mask: Self) -> Self {
                Self::or_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn or_release(addr: *mut Self, mask: Self) -> Self {
                Self::or_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn or_acqrel(addr: *mut Self, mask: Self) -> Self {
                Self::or_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn xor_relaxed(addr: *mut Self, mask: Self) -> Self {
                <$atomic>::from_ptr(addr).fetch_xor(mask, Ordering::SeqCst)
            }

            #[inline]
            unsafe fn xor_acquire(addr: *mut Self, mask: Self) -> Self {
                Self::xor_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn xor_release(addr: *mut Self, mask: Self) -> Self {
                Self::xor_relaxed(addr, mask)
            }

            #[inline]
            unsafe fn xor_acqrel(addr: *mut Self, mask: Self) -> Self {
                Self::xor_relaxed(addr, mask)
            }
        }
    };
}

generic_atomic_ops!(u32, AtomicU32);
generic_atomic_ops!(u64, AtomicU64);
generic_atomic_ops!(usize, AtomicUsize);

// =============================================================================
// 128-bit operations (fenced, NOT single-copy atomic on fallback targets)
// =============================================================================

#[inline]
unsafe fn read_pair(addr: *mut u8) -> (u64, u64) {
    let p = addr as *mut u64;
    (read_volatile(p), read_volatile(p.add(1)))
}

#[inline]
unsafe fn write_pair(addr: *mut u8, lo: u64, hi: u64) {
    let p = addr as *mut u64;
    write_volatile(p, lo);
    write_volatile(p.add(1), hi);
}

#[inline]
pub(crate) unsafe fn load128_relaxed(addr: *mut u8) -> (u64, u64) {
    let pair = read_pair(addr);
    fence(Ordering::SeqCst);
    pair
}

#[inline]
pub(crate) unsafe fn load128_acquire(addr: *mut u8) -> (u64, u64) {
    load128_relaxed(addr)
}

#[inline]
pub(crate) unsafe fn store128_relaxed(addr: *mut u8, lo: u64, hi: u64) {
    fence(Ordering::SeqCst);
    write_pair(addr, lo, hi);
}

#[inline]
pub(crate) unsafe fn store128_release(addr: *mut u8, lo: u64, hi: u64) {
    store128_relaxed(addr, lo, hi);
}

#[inline]
pub(crate) unsafe fn swap128_relaxed(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let old = read_pair(addr);
    fence(Ordering::SeqCst);
    write_pair(addr, new_lo, new_hi);
    old
}

#[inline]
pub(crate) unsafe fn swap128_acquire(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_relaxed(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn swap128_release(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_relaxed(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn swap128_acqrel(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_relaxed(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cax128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    let (cur_lo, cur_hi) = read_pair(addr);
    fence(Ordering::SeqCst);
    if cur_lo == old_lo && cur_hi == old_hi {
        write_pair(addr, new_lo, new_hi);
    }
    (cur_lo, cur_hi)
}

#[inline]
pub(crate) unsafe fn cax128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cax128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cax128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    let (lo, hi) = cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi);
    lo == old_lo && hi == old_hi
}

#[inline]
pub(crate) unsafe fn cas128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_relaxed(addr, old_lo, old_hi, new_lo, new_hi)
}

// =============================================================================
// Memory barriers
// =============================================================================

#[inline]
pub(crate) fn barrier_acquire() {
    fence(Ordering::SeqCst);
}

#[inline]
pub(crate) fn barrier_release() {
    fence(Ordering::SeqCst);
}

#[inline]
pub(crate) fn barrier_acqrel() {
    fence(Ordering::SeqCst);
}
