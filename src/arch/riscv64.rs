// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! RV64 atomic operations
//!
//! RISC-V has a weak memory model (RVWMO). Relaxed loads and stores are
//! plain accesses; acquire loads are followed by `FENCE R, RW` and
//! release stores are preceded by `FENCE RW, W`. Read-modify-write
//! operations use the A-extension AMO instructions with `.aq`/`.rl`
//! ordering bits, and compare-and-swap uses `LR`/`SC` sequences.
//!
//! RV64 has no 128-bit atomic instruction, so the 128-bit operations in
//! this module are fenced but NOT single-copy atomic. Concurrent 128-bit
//! writers on this target can be observed torn; callers needing true
//! 128-bit atomicity must serialize externally.

use core::arch::asm;
use core::ptr::{read_volatile, write_volatile};

use super::AtomicOps;

// Word-width values travel through 64-bit registers. LR.W and AMO*.W
// sign-extend their result, so the expected-old operand of a compare
// must be sign-extended the same way before the 64-bit BNE.
macro_rules! riscv_amo {
    ($op:literal, $w:literal, $ord:literal, $addr:expr, $val:expr) => {{
        let old;
        asm!(
            concat!($op, ".", $w, $ord, " {old}, {val}, ({addr})"),
            addr = in(reg) $addr,
            val = in(reg) $val,
            old = out(reg) old,
            options(nostack),
        );
        old
    }};
}

macro_rules! riscv_cax {
    ($w:literal, $aq:literal, $rl:literal, $addr:expr, $old_sx:expr, $new:expr) => {{
        let prev;
        asm!(
            "2:",
            concat!("lr.", $w, $aq, " {prev}, ({addr})"),
            "bne {prev}, {old}, 3f",
            concat!("sc.", $w, $rl, " {st}, {new}, ({addr})"),
            "bnez {st}, 2b",
            "3:",
            addr = in(reg) $addr,
            old = in(reg) $old_sx,
            new = in(reg) $new,
            prev = out(reg) prev,
            st = out(reg) _,
            options(nostack),
        );
        prev
    }};
}

macro_rules! riscv64_atomic_ops {
    ($ty:ty, $sx:ty, $w:literal, $ld:literal, $st:literal) => {
        unsafe impl AtomicOps for $ty {
            #[inline(always)]
            unsafe fn load_relaxed(addr: *const Self) -> Self {
                read_volatile(addr)
            }

            #[inline]
            unsafe fn load_acquire(addr: *const Self) -> Self {
                let val;
                asm!(
                    concat!($ld, " {val}, ({addr})"),
                    "fence r, rw",
                    addr = in(reg) addr,
                    val = out(reg) val,
                    options(nostack),
                );
                val
            }

            #[inline(always)]
            unsafe fn store_relaxed(addr: *mut Self, val: Self) {
                write_volatile(addr, val);
            }

            #[inline]
            unsafe fn store_release(addr: *mut Self, val: Self) {
                asm!(
                    "fence rw, w",
                    concat!($st, " {val}, ({addr})"),
                    addr = in(reg) addr,
                    val = in(reg) val,
                    options(nostack),
                );
            }

            #[inline]
            unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self {
                riscv_amo!("amoswap", $w, "", addr, new)
            }

            #[inline]
            unsafe fn swap_acquire(addr: *mut Self, new: Self) -> Self {
                riscv_amo!("amoswap", $w, ".aq", addr, new)
            }

            #[inline]
            unsafe fn swap_release(addr: *mut Self, new: Self) -> Self {
                riscv_amo!("amoswap", $w, ".rl", addr, new)
            }

            #[inline]
            unsafe fn swap_acqrel(addr: *mut Self, new: Self) -> Self {
                riscv_amo!("amoswap", $w, ".aqrl", addr, new)
            }

            #[inline]
            unsafe fn cas_relaxed(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_relaxed(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_acquire(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_acquire(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_release(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_release(addr, old, new) == old
            }

            #[inline]
            unsafe fn cas_acqrel(addr: *mut Self, old: Self, new: Self) -> bool {
                Self::cax_acqrel(addr, old, new) == old
            }

            #[inline]
            unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self {
                riscv_cax!($w, "", "", addr, (old as $sx) as i64, new)
            }

            #[inline]
            unsafe fn cax_acquire(addr: *mut Self, old: Self, new: Self) -> Self {
                riscv_cax!($w, ".aq", "", addr, (old as $sx) as i64, new)
            }

            #[inline]
            unsafe fn cax_release(addr: *mut Self, old: Self, new: Self) -> Self {
                riscv_cax!($w, "", ".rl", addr, (old as $sx) as i64, new)
            }

            #[inline]
            unsafe fn cax_acqrel(addr: *mut Self, old: Self, new: Self) -> Self {
                riscv_cax!($w, ".aq", ".rl", addr, (old as $sx) as i64, new)
            }

            #[inline]
            unsafe fn add_relaxed(addr: *mut Self, delta: Self) -> Self {
                let old: Self = riscv_amo!("amoadd", $w, "", addr, delta);
                old.wrapping_add(delta)
            }

            #[inline]
            unsafe fn add_acquire(addr: *mut Self, delta: Self) -> Self {
                let old: Self = riscv_amo!("amoadd", $w, ".aq", addr, delta);
                old.wrapping_add(delta)
            }

            #[inline]
            unsafe fn add_release(addr: *mut Self, delta: Self) -> Self {
                let old: Self = riscv_amo!("amoadd", $w, ".rl", addr, delta);
                old.wrapping_add(delta)
            }

            #[inline]
            unsafe fn add_acqrel(addr: *mut Self, delta: Self) -> Self {
                let old: Self = riscv_amo!("amoadd", $w, ".aqrl", addr, delta);
                old.wrapping_add(delta)
            }

            #[inline]
            unsafe fn and_relaxed(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoand", $w, "", addr, mask)
            }

            #[inline]
            unsafe fn and_acquire(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoand", $w, ".aq", addr, mask)
            }

            #[inline]
            unsafe fn and_release(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoand", $w, ".rl", addr, mask)
            }

            #[inline]
            unsafe fn and_acqrel(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoand", $w, ".aqrl", addr, mask)
            }

            #[inline]
            unsafe fn or_relaxed(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoor", $w, "", addr, mask)
            }

            #[inline]
            unsafe fn or_acquire(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoor", $w, ".aq", addr, mask)
            }

            #[inline]
            unsafe fn or_release(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoor", $w, ".rl", addr, mask)
            }

            #[inline]
            unsafe fn or_acqrel(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoor", $w, ".aqrl", addr, mask)
            }

            #[inline]
            unsafe fn xor_relaxed(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoxor", $w, "", addr, mask)
            }

            #[inline]
            unsafe fn xor_acquire(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoxor", $w, ".aq", addr, mask)
            }

            #[inline]
            unsafe fn xor_release(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoxor", $w, ".rl", addr, mask)
            }

            #[inline]
            unsafe fn xor_acqrel(addr: *mut Self, mask: Self) -> Self {
                riscv_amo!("amoxor", $w, ".aqrl", addr, mask)
            }
        }
    };
}

riscv64_atomic_ops!(u32, i32, "w", "lw", "sw");
riscv64_atomic_ops!(u64, i64, "d", "ld", "sd");
riscv64_atomic_ops!(usize, i64, "d", "ld", "sd");

// =============================================================================
// 128-bit operations (fenced, NOT single-copy atomic on this target)
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
    read_pair(addr)
}

#[inline]
pub(crate) unsafe fn load128_acquire(addr: *mut u8) -> (u64, u64) {
    let pair = read_pair(addr);
    barrier_acquire();
    pair
}

#[inline]
pub(crate) unsafe fn store128_relaxed(addr: *mut u8, lo: u64, hi: u64) {
    write_pair(addr, lo, hi);
}

#[inline]
pub(crate) unsafe fn store128_release(addr: *mut u8, lo: u64, hi: u64) {
    barrier_release();
    write_pair(addr, lo, hi);
}

#[inline]
pub(crate) unsafe fn swap128_relaxed(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let old = read_pair(addr);
    write_pair(addr, new_lo, new_hi);
    old
}

#[inline]
pub(crate) unsafe fn swap128_acquire(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let old = read_pair(addr);
    barrier_acquire();
    write_pair(addr, new_lo, new_hi);
    old
}

#[inline]
pub(crate) unsafe fn swap128_release(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let old = read_pair(addr);
    barrier_release();
    write_pair(addr, new_lo, new_hi);
    old
}

#[inline]
pub(crate) unsafe fn swap128_acqrel(addr: *mut u8, new_lo: u64, new_hi: u64) -> (u64, u64) {
    let old = read_pair(addr);
    barrier_acqrel();
    write_pair(addr, new_lo, new_hi);
    old
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
    let pair = cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi);
    barrier_acquire();
    pair
}

#[inline]
pub(crate) unsafe fn cax128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    barrier_release();
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
    barrier_release();
    let pair = cax128_relaxed(addr, old_lo, old_hi, new_lo, new_hi);
    barrier_acquire();
    pair
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
    let (lo, hi) = cax128_acquire(addr, old_lo, old_hi, new_lo, new_hi);
    lo == old_lo && hi == old_hi
}

#[inline]
pub(crate) unsafe fn cas128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> bool {
    let (lo, hi) = cax128_release(addr, old_lo, old_hi, new_lo, new_hi);
    lo == old_lo && hi == old_hi
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

// =============================================================================
// Memory barriers
// =============================================================================

#[inline]
pub(crate) fn barrier_acquire() {
    unsafe {
        asm!("fence r, rw", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_release() {
    unsafe {
        asm!("fence rw, w", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_acqrel() {
    unsafe {
        asm!("fence rw, rw", options(nostack));
    }
}
