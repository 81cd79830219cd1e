// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Cache line geometry
//!
//! [`CACHE_LINE_SIZE`] is resolved per target at compile time, never by
//! runtime CPU detection. All currently supported ISAs use 64-byte
//! lines. (Some Apple AArch64 cores have 128-byte lines; padding to 64
//! on those costs a false-sharing opportunity, not correctness.)
//!
//! [`CachePadded`] rounds a value up to a full line so that two
//! unrelated atomics never share one. Use it for cells that are hammered
//! by different cores with no synchronization linking them, e.g. the
//! head and tail counters of a ring.

use core::ops::{Deref, DerefMut};

/// Cache line size of the target, in bytes.
#[cfg(target_arch = "x86_64")]
pub const CACHE_LINE_SIZE: usize = 64;

/// Cache line size of the target, in bytes.
#[cfg(target_arch = "aarch64")]
pub const CACHE_LINE_SIZE: usize = 64;

/// Cache line size of the target, in bytes.
#[cfg(target_arch = "riscv64")]
pub const CACHE_LINE_SIZE: usize = 64;

/// Cache line size of the target, in bytes.
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "riscv64"
)))]
pub const CACHE_LINE_SIZE: usize = 64;

/// Pads and aligns a value to a full cache line to prevent false
/// sharing.
///
/// ```
/// use memord::{AtomicU64, CachePadded, CACHE_LINE_SIZE};
///
/// struct Ring {
///     head: CachePadded<AtomicU64>,
///     tail: CachePadded<AtomicU64>,
/// }
///
/// assert!(core::mem::size_of::<CachePadded<AtomicU64>>() >= CACHE_LINE_SIZE);
/// ```
#[derive(Default)]
#[repr(C, align(64))]
pub struct CachePadded<T> {
    value: T,
}

impl<T> CachePadded<T> {
    /// Wraps a value in cache line padding.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Consumes the wrapper, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for CachePadded<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for CachePadded<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for CachePadded<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CachePadded").field(&self.value).finish()
    }
}
