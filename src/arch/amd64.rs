// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! x86-64 atomic operations
//!
//! x86-64 has Total Store Ordering (TSO): aligned loads and stores are
//! atomic, loads are never reordered with other loads, and stores are
//! never reordered with other stores. Consequently:
//!
//! - Relaxed/Acquire loads and Relaxed/Release stores are all plain
//!   memory accesses (volatile, so the compiler cannot elide or split
//!   them), which lets the compiler inline them.
//! - Read-modify-write operations need a hardware-locked instruction
//!   (`LOCK` prefix or `XCHG`); TSO already provides the strongest
//!   ordering, so all four RMW orderings share one instruction sequence.
//! - 128-bit operations use `LOCK CMPXCHG16B` and require 16-byte
//!   alignment.
//!
//! `and`/`or`/`xor` must return the old value, which the x86 `LOCK AND`
//! family does not produce, so they are CAS retry loops over `CMPXCHG`.

use core::arch::asm;
use core::ptr::{read_volatile, write_volatile};
use core::sync::atomic::{compiler_fence, Ordering};

use super::AtomicOps;

macro_rules! amd64_atomic_ops {
    ($ty:ty, $size:literal, $reg:literal, $acc:tt) => {
        unsafe impl AtomicOps for $ty {
            #[inline(always)]
            unsafe fn load_relaxed(addr: *const Self) -> Self {
                read_volatile(addr)
            }

            #[inline(always)]
            unsafe fn load_acquire(addr: *const Self) -> Self {
                let val = read_volatile(addr);
                compiler_fence(Ordering::Acquire);
                val
            }

            #[inline(always)]
            unsafe fn store_relaxed(addr: *mut Self, val: Self) {
                write_volatile(addr, val);
            }

            #[inline(always)]
            unsafe fn store_release(addr: *mut Self, val: Self) {
                compiler_fence(Ordering::Release);
                write_volatile(addr, val);
            }

            #[inline]
            unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self {
                let old;
                // XCHG with a memory operand is implicitly locked.
                asm!(
                    concat!("xchg ", $size, " ptr [{addr}], {val", $reg, "}"),
                    addr = in(reg) addr,
                    val = inout(reg) new => old,
                    options(nostack),
                );
                old
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
                Self::cax_relaxed(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_acquire(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_relaxed(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_release(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_relaxed(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_acqrel(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_relaxed(addr, old, new) == old
            }

            #[inline]
            unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self {
                let prev;
                // CMPXCHG leaves the accumulator untouched on success and
                // loads the current value on failure, which is exactly the
                // compare-exchange return convention.
                asm!(
                    concat!("lock cmpxchg ", $size, " ptr [{addr}], {new", $reg, "}"),
                    addr = in(reg) addr,
                    new = in(reg) new,
                    inout($acc) old => prev,
                    options(nostack),
                );
                prev
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
                let old: Self;
                asm!(
                    concat!("lock xadd ", $size, " ptr [{addr}], {val", $reg, "}"),
                    addr = in(reg) addr,
                    val = inout(reg) delta => old,
                    options(nostack),
                );
                old.wrapping_add(delta)
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
                loop {
                    let old = Self::load_relaxed(addr);
                    if Self::cas_relaxed(addr, old, old & mask) {
                        return old;
                    }
                }
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
                loop {
                    let old = Self::load_relaxed(addr);
                    if Self::cas_relaxed(addr, old, old | mask) {
                        return old;
                    }
                }
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
                loop {
                    let old = Self::load_relaxed(addr);
                    if Self::cas_relaxed(addr, old, old ^ mask) {
                        return old;
                    }
                }
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

amd64_atomic_ops!(u32, "dword", ":e", "eax");
amd64_atomic_ops!(u64, "qword", ":r", "rax");
amd64_atomic_ops!(usize, "qword", ":r", "rax");

// =============================================================================
// 128-bit operations (LOCK CMPXCHG16B)
// =============================================================================

/// Compare-exchange on a 16-byte location; returns the observed value.
///
/// RBX is reserved by LLVM, so the new low word is staged through a
/// scratch register and swapped in around the instruction.
///
/// # Safety
///
/// `addr` must be valid for reads and writes and 16-byte aligned.
#[inline]
pub(crate) unsafe fn cax128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    let prev_lo: u64;
    let prev_hi: u64;
    asm!(
        "xchg {nlo}, rbx",
        "lock cmpxchg16b xmmword ptr [{addr}]",
        "mov rbx, {nlo}",
        addr = in(reg) addr,
        nlo = inout(reg) new_lo => _,
        in("rcx") new_hi,
        inout("rax") old_lo => prev_lo,
        inout("rdx") old_hi => prev_hi,
        options(nostack),
    );
    (prev_lo, prev_hi)
}

#[inline]
pub(crate) unsafe fn cax128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cax128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cax128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    cax128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    let (lo, hi) = cax128_acqrel(addr, old_lo, old_hi, new_lo, new_hi);
    lo == old_lo && hi == old_hi
}

#[inline]
pub(crate) unsafe fn cas128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn cas128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    cas128_acqrel(addr, old_lo, old_hi, new_lo, new_hi)
}

/// Atomic 16-byte load via CMPXCHG16B with a zero expected/new pair.
///
/// Note this issues a write when the location holds zero, so the target
/// page must be mapped writable even for loads.
#[inline]
pub(crate) unsafe fn load128_relaxed(addr: *mut u8) -> (u64, u64) {
    cax128_acqrel(addr, 0, 0, 0, 0)
}

#[inline]
pub(crate) unsafe fn load128_acquire(addr: *mut u8) -> (u64, u64) {
    cax128_acqrel(addr, 0, 0, 0, 0)
}

#[inline]
pub(crate) unsafe fn swap128_acqrel(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let (mut cur_lo, mut cur_hi) = load128_relaxed(addr);
    loop {
        let (lo, hi) = cax128_acqrel(addr, cur_lo, cur_hi, new_lo, new_hi);
        if lo == cur_lo && hi == cur_hi {
            return (lo, hi);
        }
        cur_lo = lo;
        cur_hi = hi;
    }
}

#[inline]
pub(crate) unsafe fn swap128_relaxed(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_acqrel(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn swap128_acquire(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_acqrel(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn swap128_release(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    swap128_acqrel(addr, new_lo, new_hi)
}

#[inline]
pub(crate) unsafe fn store128_relaxed(addr: *mut u8, lo: u64, hi: u64) {
    swap128_acqrel(addr, lo, hi);
}

#[inline]
pub(crate) unsafe fn store128_release(addr: *mut u8, lo: u64, hi: u64) {
    swap128_acqrel(addr, lo, hi);
}

// =============================================================================
// Memory barriers
// =============================================================================

#[inline]
pub(crate) fn barrier_acquire() {
    unsafe {
        asm!("mfence", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_release() {
    unsafe {
        asm!("sfence", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_acqrel() {
    unsafe {
        asm!("mfence", options(nostack));
    }
}
