// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Atomic primitives with explicit per-operation memory ordering.
//!
//! `memord` is a foundation layer for lock-free data structures, ring
//! buffers and shared-memory synchronization. Every operation names its
//! ordering (Relaxed, Acquire, Release, AcqRel), so callers on weakly
//! ordered hardware can pick the weakest ordering that is still
//! correct instead of paying for sequential consistency everywhere.
//!
//! Three entry points share one per-ISA implementation layer:
//!
//! - **Typed cells** ([`atomic`]): [`AtomicI32`], [`AtomicU64`],
//!   [`AtomicBool`], [`AtomicPtr`], [`AtomicU128`] and friends. Own
//!   their storage, safe API.
//! - **Ordering-dispatched raw operations** ([`raw`]): a
//!   [`MemoryOrder`] value as method receiver operating on raw
//!   pointers, for externally mapped memory whose layout the typed
//!   cells cannot be imposed on.
//! - **Standalone barriers** ([`barrier`]): fences for manually
//!   synchronized plain accesses.
//!
//! The [`place`] module and [`Allocator`] embed cells at aligned
//! offsets inside caller-owned buffers; 128-bit atomicity requires
//! 16-byte alignment, so placement is part of the correctness story,
//! not a convenience. [`CachePadded`] keeps unrelated hot cells off a
//! shared cache line.
//!
//! ```
//! use memord::AtomicU64;
//!
//! static READY: AtomicU64 = AtomicU64::new(0);
//!
//! // Publisher:
//! READY.store_release(1);
//!
//! // Consumer: acquire pairs with the release above.
//! while READY.load_acquire() == 0 {}
//! ```
//!
//! The crate is `no_std`. The caller owns all backing memory and must
//! keep it valid and properly aligned for the duration of every
//! operation; the library never allocates, blocks, or detects misuse at
//! runtime.

#![no_std]

mod arch;
mod order;

pub mod alloc;
pub mod atomic;
pub mod barrier;
pub mod cache;
pub mod place;
pub mod raw;

pub use crate::alloc::Allocator;
pub use crate::atomic::{
    AtomicBool, AtomicI128, AtomicI32, AtomicI64, AtomicPtr, AtomicU128, AtomicU32, AtomicU64,
    AtomicUsize,
};
pub use crate::barrier::{barrier_acqrel, barrier_acquire, barrier_release};
pub use crate::cache::{CachePadded, CACHE_LINE_SIZE};
pub use crate::order::MemoryOrder;
pub use crate::place::{
    can_place_aligned_16, can_place_aligned_4, can_place_aligned_8, can_place_cache_aligned,
    place_aligned_bool, place_aligned_i128, place_aligned_i32, place_aligned_i64,
    place_aligned_u128, place_aligned_u32, place_aligned_u64, place_aligned_usize,
    place_cache_aligned_bool, place_cache_aligned_i128, place_cache_aligned_i32,
    place_cache_aligned_i64, place_cache_aligned_u128, place_cache_aligned_u32,
    place_cache_aligned_u64, place_cache_aligned_usize,
};
