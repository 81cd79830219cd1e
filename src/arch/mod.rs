// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Architecture abstraction layer
//!
//! One atomic-primitive implementation per target ISA, selected at
//! compile time:
//!
//! - `amd64`: x86-64 with TSO (Total Store Ordering). Aligned loads and
//!   stores are already atomic and already acquire/release with respect
//!   to the hardware, so all four orderings collapse to plain accesses;
//!   read-modify-write operations use `LOCK`-prefixed instructions or
//!   `XCHG`, and 128-bit operations use `CMPXCHG16B`.
//! - `arm64`: AArch64 with weak ordering. Relaxed loads/stores are plain
//!   accesses; acquire loads use `LDAR`, release stores use `STLR`.
//!   Read-modify-write operations use `LDXR`/`STXR` sequences by default,
//!   or LSE instructions (`SWP`/`CAS`/`LDADD` classes, `CASP` for 128-bit)
//!   with the `lse` cargo feature.
//! - `riscv64`: RV64 with weak ordering. Every operation goes through
//!   fence-annotated or `.aq`/`.rl`-suffixed instruction sequences;
//!   nothing is expressible as a plain access.
//! - `generic`: every other target. Built on `core::sync::atomic` with
//!   sequentially consistent ordering for all four variants (strictly
//!   stronger than requested, never weaker). 128-bit operations on this
//!   fallback are NOT atomic.
//!
//! Function naming convention: `<op><width>_<ordering>` for the 128-bit
//! free functions and barriers; word widths go through [`AtomicOps`].
//! `cas` returns bool (success), `cax` returns the observed value.
//! `add` returns the new value; `swap`/`and`/`or`/`xor` return the old.

pub(crate) mod traits;
pub(crate) use traits::AtomicOps;

#[cfg(target_arch = "x86_64")]
mod amd64;
#[cfg(target_arch = "x86_64")]
pub(crate) use amd64::*;

#[cfg(target_arch = "aarch64")]
mod arm64;
#[cfg(target_arch = "aarch64")]
pub(crate) use arm64::*;

#[cfg(target_arch = "riscv64")]
mod riscv64;
#[cfg(target_arch = "riscv64")]
pub(crate) use riscv64::*;

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64"
)))]
mod generic;
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64"
)))]
pub(crate) use generic::*;
