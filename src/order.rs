// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Memory ordering constraints
//!
//! [`MemoryOrder`] names the four ordering strengths this crate exposes
//! and doubles as a runtime dispatcher for atomic operations on raw
//! memory (see the [`raw`](crate::raw) module).

/// Memory ordering constraint for atomic operations.
///
/// `MemoryOrder` values can be used as method receivers to perform
/// atomic operations on raw pointers:
///
/// ```
/// use memord::MemoryOrder;
///
/// let mut x: i64 = 0;
/// unsafe {
///     MemoryOrder::Release.store_i64(&mut x, 42);
///     let v = MemoryOrder::Acquire.load_i64(&mut x);
///     assert_eq!(v, 42);
/// }
/// ```
///
/// This is useful for operating on externally mapped shared memory
/// (e.g. io_uring-style rings) where the wrapper types in
/// [`atomic`](crate::atomic) cannot be imposed on the layout.
///
/// Alignment: pointers must be naturally aligned (i32 → 4-byte,
/// i64 → 8-byte, 128-bit → 16-byte). Unaligned pointers cause undefined
/// behavior on some architectures.
///
/// Dispatch fallback rules (distinct from the wrapper types' method
/// defaults): loads that are not `Relaxed` resolve to acquire, stores
/// that are not `Relaxed` resolve to release, and read-modify-write
/// operations that match none of the weaker orderings resolve to
/// acquire-release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum MemoryOrder {
    /// No ordering constraints; only atomicity is guaranteed.
    /// Use for statistics counters and metrics that don't synchronize
    /// with other memory operations.
    Relaxed,

    /// Subsequent operations cannot be reordered before the atomic
    /// operation. Use when loading a pointer before dereferencing it.
    Acquire,

    /// Prior operations cannot be reordered after the atomic operation.
    /// Use when publishing data after initialization.
    Release,

    /// Combines acquire and release semantics. Use for read-modify-write
    /// operations in lock-free data structures.
    AcqRel,
}
