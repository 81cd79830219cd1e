// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! AArch64 atomic operations
//!
//! AArch64 has a weak memory model. Relaxed loads and stores are plain
//! accesses; acquire loads need `LDAR` and release stores need `STLR`.
//! Read-modify-write operations are `LDXR`/`STXR` exclusive sequences by
//! default, with the exclusive-load and conditional-store picking up the
//! acquire (`LDAXR`) and release (`STLXR`) halves of the requested
//! ordering.
//!
//! With the `lse` cargo feature (ARMv8.1 Large System Extensions), RMW
//! operations become single instructions: `SWP`, `CAS`, `LDADD`, `LDCLR`,
//! `LDSET`, `LDEOR`, each with `A`/`L`/`AL` ordering variants, and
//! 128-bit compare-and-swap becomes `CASP` instead of an `LDXP`/`STXP`
//! sequence.

use core::arch::asm;
use core::ptr::{read_volatile, write_volatile};

use super::AtomicOps;

macro_rules! llsc_swap {
    ($reg:literal, $ld:literal, $st:literal, $addr:expr, $new:expr) => {{
        let old;
        asm!(
            "2:",
            concat!($ld, " {old", $reg, "}, [{addr}]"),
            concat!($st, " {st:w}, {new", $reg, "}, [{addr}]"),
            "cbnz {st:w}, 2b",
            addr = in(reg) $addr,
            new = in(reg) $new,
            old = out(reg) old,
            st = out(reg) _,
            options(nostack),
        );
        old
    }};
}

macro_rules! llsc_cax {
    ($reg:literal, $ld:literal, $st:literal, $addr:expr, $old:expr, $new:expr) => {{
        let prev;
        asm!(
            "2:",
            concat!($ld, " {prev", $reg, "}, [{addr}]"),
            concat!("cmp {prev", $reg, "}, {old", $reg, "}"),
            "b.ne 3f",
            concat!($st, " {st:w}, {new", $reg, "}, [{addr}]"),
            "cbnz {st:w}, 2b",
            "3:",
            addr = in(reg) $addr,
            old = in(reg) $old,
            new = in(reg) $new,
            prev = out(reg) prev,
            st = out(reg) _,
            options(nostack),
        );
        prev
    }};
}

macro_rules! llsc_rmw {
    ($reg:literal, $ld:literal, $st:literal, $insn:literal, $addr:expr, $operand:expr) => {{
        let old;
        asm!(
            "2:",
            concat!($ld, " {old", $reg, "}, [{addr}]"),
            concat!($insn, " {new", $reg, "}, {old", $reg, "}, {val", $reg, "}"),
            concat!($st, " {st:w}, {new", $reg, "}, [{addr}]"),
            "cbnz {st:w}, 2b",
            addr = in(reg) $addr,
            val = in(reg) $operand,
            old = out(reg) old,
            new = out(reg) _,
            st = out(reg) _,
            options(nostack),
        );
        old
    }};
}

#[cfg(feature = "lse")]
macro_rules! lse_swap {
    ($reg:literal, $insn:literal, $addr:expr, $new:expr) => {{
        let old;
        asm!(
            concat!($insn, " {new", $reg, "}, {old", $reg, "}, [{addr}]"),
            addr = in(reg) $addr,
            new = in(reg) $new,
            old = out(reg) old,
            options(nostack),
        );
        old
    }};
}

#[cfg(feature = "lse")]
macro_rules! lse_cax {
    ($reg:literal, $insn:literal, $addr:expr, $old:expr, $new:expr) => {{
        let prev;
        asm!(
            concat!($insn, " {prev", $reg, "}, {new", $reg, "}, [{addr}]"),
            addr = in(reg) $addr,
            new = in(reg) $new,
            prev = inout(reg) $old => prev,
            options(nostack),
        );
        prev
    }};
}

#[cfg(feature = "lse")]
macro_rules! lse_rmw {
    ($reg:literal, $insn:literal, $addr:expr, $operand:expr) => {{
        let old;
        asm!(
            concat!($insn, " {val", $reg, "}, {old", $reg, "}, [{addr}]"),
            addr = in(reg) $addr,
            val = in(reg) $operand,
            old = out(reg) old,
            options(nostack),
        );
        old
    }};
}

macro_rules! arm64_atomic_ops {
    ($ty:ty, $reg:literal) => {
        unsafe impl AtomicOps for $ty {
            #[inline(always)]
            unsafe fn load_relaxed(addr: *const Self) -> Self {
                read_volatile(addr)
            }

            #[inline]
            unsafe fn load_acquire(addr: *const Self) -> Self {
                let val;
                asm!(
                    concat!("ldar {val", $reg, "}, [{addr}]"),
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
                    concat!("stlr {val", $reg, "}, [{addr}]"),
                    addr = in(reg) addr,
                    val = in(reg) val,
                    options(nostack),
                );
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self {
                llsc_swap!($reg, "ldxr", "stxr", addr, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn swap_acquire(addr: *mut Self, new: Self) -> Self {
                llsc_swap!($reg, "ldaxr", "stxr", addr, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn swap_release(addr: *mut Self, new: Self) -> Self {
                llsc_swap!($reg, "ldxr", "stlxr", addr, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn swap_acqrel(addr: *mut Self, new: Self) -> Self {
                llsc_swap!($reg, "ldaxr", "stlxr", addr, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self {
                lse_swap!($reg, "swp", addr, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn swap_acquire(addr: *mut Self, new: Self) -> Self {
                lse_swap!($reg, "swpa", addr, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn swap_release(addr: *mut Self, new: Self) -> Self {
                lse_swap!($reg, "swpl", addr, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn swap_acqrel(addr: *mut Self, new: Self) -> Self {
                lse_swap!($reg, "swpal", addr, new)
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

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self {
                llsc_cax!($reg, "ldxr", "stxr", addr, old, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn cax_acquire(addr: *mut Self, old: Self, new: Self) -> Self {
                llsc_cax!($reg, "ldaxr", "stxr", addr, old, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn cax_release(addr: *mut Self, old: Self, new: Self) -> Self {
                llsc_cax!($reg, "ldxr", "stlxr", addr, old, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn cax_acqrel(addr: *mut Self, old: Self, new: Self) -> Self {
                llsc_cax!($reg, "ldaxr", "stlxr", addr, old, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self {
                lse_cax!($reg, "cas", addr, old, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn cax_acquire(addr: *mut Self, old: Self, new: Self) -> Self {
                lse_cax!($reg, "casa", addr, old, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn cax_release(addr: *mut Self, old: Self, new: Self) -> Self {
                lse_cax!($reg, "casl", addr, old, new)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn cax_acqrel(addr: *mut Self, old: Self, new: Self) -> Self {
                lse_cax!($reg, "casal", addr, old, new)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn add_relaxed(addr: *mut Self, delta: Self) -> Self {
                let old: Self = llsc_rmw!($reg, "ldxr", "stxr", "add", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn add_acquire(addr: *mut Self, delta: Self) -> Self {
                let old: Self = llsc_rmw!($reg, "ldaxr", "stxr", "add", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn add_release(addr: *mut Self, delta: Self) -> Self {
                let old: Self = llsc_rmw!($reg, "ldxr", "stlxr", "add", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn add_acqrel(addr: *mut Self, delta: Self) -> Self {
                let old: Self = llsc_rmw!($reg, "ldaxr", "stlxr", "add", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn add_relaxed(addr: *mut Self, delta: Self) -> Self {
                let old: Self = lse_rmw!($reg, "ldadd", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn add_acquire(addr: *mut Self, delta: Self) -> Self {
                let old: Self = lse_rmw!($reg, "ldadda", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn add_release(addr: *mut Self, delta: Self) -> Self {
                let old: Self = lse_rmw!($reg, "ldaddl", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn add_acqrel(addr: *mut Self, delta: Self) -> Self {
                let old: Self = lse_rmw!($reg, "ldaddal", addr, delta);
                old.wrapping_add(delta)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn and_relaxed(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stxr", "and", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn and_acquire(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stxr", "and", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn and_release(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stlxr", "and", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn and_acqrel(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stlxr", "and", addr, mask)
            }

            // LDCLR clears the bits set in the operand, so AND takes the
            // complement of the mask.
            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn and_relaxed(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldclr", addr, !mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn and_acquire(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldclra", addr, !mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn and_release(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldclrl", addr, !mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn and_acqrel(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldclral", addr, !mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn or_relaxed(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stxr", "orr", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn or_acquire(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stxr", "orr", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn or_release(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stlxr", "orr", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn or_acqrel(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stlxr", "orr", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn or_relaxed(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldset", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn or_acquire(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldseta", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn or_release(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldsetl", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn or_acqrel(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldsetal", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn xor_relaxed(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stxr", "eor", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn xor_acquire(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stxr", "eor", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn xor_release(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldxr", "stlxr", "eor", addr, mask)
            }

            #[cfg(not(feature = "lse"))]
            #[inline]
            unsafe fn xor_acqrel(addr: *mut Self, mask: Self) -> Self {
                llsc_rmw!($reg, "ldaxr", "stlxr", "eor", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn xor_relaxed(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldeor", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn xor_acquire(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldeora", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn xor_release(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldeorl", addr, mask)
            }

            #[cfg(feature = "lse")]
            #[inline]
            unsafe fn xor_acqrel(addr: *mut Self, mask: Self) -> Self {
                lse_rmw!($reg, "ldeoral", addr, mask)
            }
        }
    };
}

arm64_atomic_ops!(u32, ":w");
arm64_atomic_ops!(u64, ":x");
arm64_atomic_ops!(usize, ":x");

// =============================================================================
// 128-bit operations
// =============================================================================

// Default strategy: LDXP/STXP exclusive pairs. A bare LDXP is not
// guaranteed single-copy atomic, so even pure loads run the exclusive
// sequence and store the observed value back.
//
// With the `lse` feature, compare-and-swap uses CASP and everything else
// is built from it. CASP requires even/odd consecutive register pairs,
// hence the fixed register operands.

#[cfg(not(feature = "lse"))]
macro_rules! llsc_cax128 {
    ($ld:literal, $st:literal, $addr:expr, $old_lo:expr, $old_hi:expr, $new_lo:expr, $new_hi:expr) => {{
        let prev_lo: u64;
        let prev_hi: u64;
        asm!(
            "2:",
            concat!($ld, " {plo}, {phi}, [{addr}]"),
            "cmp {plo}, {olo}",
            "ccmp {phi}, {ohi}, #0, eq",
            "b.ne 3f",
            concat!($st, " {st:w}, {nlo}, {nhi}, [{addr}]"),
            "cbnz {st:w}, 2b",
            "3:",
            addr = in(reg) $addr,
            olo = in(reg) $old_lo,
            ohi = in(reg) $old_hi,
            nlo = in(reg) $new_lo,
            nhi = in(reg) $new_hi,
            plo = out(reg) prev_lo,
            phi = out(reg) prev_hi,
            st = out(reg) _,
            options(nostack),
        );
        (prev_lo, prev_hi)
    }};
}

#[cfg(not(feature = "lse"))]
#[inline]
pub(crate) unsafe fn cax128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    llsc_cax128!("ldxp", "stxp", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(not(feature = "lse"))]
#[inline]
pub(crate) unsafe fn cax128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    llsc_cax128!("ldaxp", "stxp", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(not(feature = "lse"))]
#[inline]
pub(crate) unsafe fn cax128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    llsc_cax128!("ldxp", "stlxp", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(not(feature = "lse"))]
#[inline]
pub(crate) unsafe fn cax128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    llsc_cax128!("ldaxp", "stlxp", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(feature = "lse")]
macro_rules! lse_cax128 {
    ($insn:literal, $addr:expr, $old_lo:expr, $old_hi:expr, $new_lo:expr, $new_hi:expr) => {{
        let prev_lo: u64;
        let prev_hi: u64;
        asm!(
            concat!($insn, " x4, x5, x6, x7, [{addr}]"),
            addr = in(reg) $addr,
            inout("x4") $old_lo => prev_lo,
            inout("x5") $old_hi => prev_hi,
            in("x6") $new_lo,
            in("x7") $new_hi,
            options(nostack),
        );
        (prev_lo, prev_hi)
    }};
}

#[cfg(feature = "lse")]
#[inline]
pub(crate) unsafe fn cax128_relaxed(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    lse_cax128!("casp", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(feature = "lse")]
#[inline]
pub(crate) unsafe fn cax128_acquire(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    lse_cax128!("caspa", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(feature = "lse")]
#[inline]
pub(crate) unsafe fn cax128_release(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    lse_cax128!("caspl", addr, old_lo, old_hi, new_lo, new_hi)
}

#[cfg(feature = "lse")]
#[inline]
pub(crate) unsafe fn cax128_acqrel(
    addr: *mut u8,
    old_lo: u64,
    old_hi: u64,
    new_lo: u64,
    new_hi: u64,
) -> (u64, u64) {
    lse_cax128!("caspal", addr, old_lo, old_hi, new_lo, new_hi)
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

#[inline]
pub(crate) unsafe fn load128_relaxed(addr: *mut u8) -> (u64, u64) {
    cax128_relaxed(addr, 0, 0, 0, 0)
}

#[inline]
pub(crate) unsafe fn load128_acquire(addr: *mut u8) -> (u64, u64) {
    cax128_acquire(addr, 0, 0, 0, 0)
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
    let (mut cur_lo, mut cur_hi) = load128_relaxed(addr);
    loop {
        let (lo, hi) = cax128_relaxed(addr, cur_lo, cur_hi, new_lo, new_hi);
        if lo == cur_lo && hi == cur_hi {
            return (lo, hi);
        }
        cur_lo = lo;
        cur_hi = hi;
    }
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
    swap128_relaxed(addr, lo, hi);
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
        asm!("dmb ishld", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_release() {
    unsafe {
        asm!("dmb ish", options(nostack));
    }
}

#[inline]
pub(crate) fn barrier_acqrel() {
    unsafe {
        asm!("dmb ish", options(nostack));
    }
}
