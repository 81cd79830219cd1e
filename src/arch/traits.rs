// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Architecture abstraction contracts
//!
//! [`AtomicOps`] is the per-word-width contract every ISA module must
//! satisfy. Exactly one ISA module is compiled per target, so each module
//! implements the trait for `u32`, `u64` and `usize` without conflict.
//! Signed and pointer flavors are produced by the wrapper layer through
//! lossless casts; booleans ride on `u32`.
//!
//! 128-bit primitives have pair-shaped signatures that don't fit the
//! word-width contract and are exported as free functions from each ISA
//! module instead (`load128_*`, `store128_*`, `swap128_*`, `cas128_*`,
//! `cax128_*`), together with the standalone barriers.

/// Word-width atomic operations, one implementation per target ISA.
///
/// Conventions, identical at every layer above:
/// - `cas_*` returns `true` if the swap was performed.
/// - `cax_*` returns the value observed at the location: the expected old
///   value on success, the current value on failure. This lets CAS loops
///   retry without a separate load.
/// - `add_*` returns the new value after the addition.
/// - `and_*`/`or_*`/`xor_*` return the old value before the operation.
///
/// # Safety
///
/// Implementations require `addr` to be valid for reads and writes and
/// naturally aligned to `size_of::<Self>()`. Callers must guarantee the
/// memory stays valid for the duration of the operation.
pub(crate) unsafe trait AtomicOps: Copy {
    unsafe fn load_relaxed(addr: *const Self) -> Self;
    unsafe fn load_acquire(addr: *const Self) -> Self;

    unsafe fn store_relaxed(addr: *mut Self, val: Self);
    unsafe fn store_release(addr: *mut Self, val: Self);

    unsafe fn swap_relaxed(addr: *mut Self, new: Self) -> Self;
    unsafe fn swap_acquire(addr: *mut Self, new: Self) -> Self;
    unsafe fn swap_release(addr: *mut Self, new: Self) -> Self;
    unsafe fn swap_acqrel(addr: *mut Self, new: Self) -> Self;

    unsafe fn cas_relaxed(addr: *mut Self, old: Self, new: Self) -> bool;
    unsafe fn cas_acquire(addr: *mut Self, old: Self, new: Self) -> bool;
    unsafe fn cas_release(addr: *mut Self, old: Self, new: Self) -> bool;
    unsafe fn cas_acqrel(addr: *mut Self, old: Self, new: Self) -> bool;

    unsafe fn cax_relaxed(addr: *mut Self, old: Self, new: Self) -> Self;
    unsafe fn cax_acquire(addr: *mut Self, old: Self, new: Self) -> Self;
    unsafe fn cax_release(addr: *mut Self, old: Self, new: Self) -> Self;
    unsafe fn cax_acqrel(addr: *mut Self, old: Self, new: Self) -> Self;

    unsafe fn add_relaxed(addr: *mut Self, delta: Self) -> Self;
    unsafe fn add_acquire(addr: *mut Self, delta: Self) -> Self;
    unsafe fn add_release(addr: *mut Self, delta: Self) -> Self;
    unsafe fn add_acqrel(addr: *mut Self, delta: Self) -> Self;

    unsafe fn and_relaxed(addr: *mut Self, mask: Self) -> Self;
    unsafe fn and_acquire(addr: *mut Self, mask: Self) -> Self;
    unsafe fn and_release(addr: *mut Self, mask: Self) -> Self;
    unsafe fn and_acqrel(addr: *mut Self, mask: Self) -> Self;

    unsafe fn or_relaxed(addr: *mut Self, mask: Self) -> Self;
    unsafe fn or_acquire(addr: *mut Self, mask: Self) -> Self;
    unsafe fn or_release(addr: *mut Self, mask: Self) -> Self;
    unsafe fn or_acqrel(addr: *mut Self, mask: Self) -> Self;

    unsafe fn xor_relaxed(addr: *mut Self, mask: Self) -> Self;
    unsafe fn xor_acquire(addr: *mut Self, mask: Self) -> Self;
    unsafe fn xor_release(addr: *mut Self, mask: Self) -> Self;
    unsafe fn xor_acqrel(addr: *mut Self, mask: Self) -> Self;
}
