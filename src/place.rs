// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Placement of atomic cells in externally owned buffers
//!
//! Atomicity depends on alignment (strictly so for 128-bit cells, which
//! need 16 bytes), so cells embedded in a raw shared buffer must land at
//! computed aligned offsets. The `can_place_*` functions answer whether
//! a placement starting at an offset fits after alignment padding; the
//! `place_*` functions perform it, returning the padded byte count
//! consumed and a reference to the cell.
//!
//! Placement does not initialize: the cell takes whatever bytes were in
//! the buffer. Store before the first shared load.
//!
//! Insufficient space is a fatal setup-time error and panics; these
//! functions are meant to run once, at startup, against buffers the
//! caller has already sized. The feasibility checks fail closed for
//! out-of-range offsets instead.
//!
//! For placing several cells back to back, [`Allocator`](crate::Allocator)
//! wraps these with a cursor.

use crate::atomic::{
    AtomicBool, AtomicI128, AtomicI32, AtomicI64, AtomicU128, AtomicU32, AtomicU64, AtomicUsize,
};
use crate::cache::{CachePadded, CACHE_LINE_SIZE};

// align is always a power of two here.
#[inline]
fn padding(addr: usize, align: usize) -> usize {
    addr.wrapping_neg() & (align - 1)
}

#[inline]
fn can_place(buf: &[u8], offset: usize, align: usize, size: usize) -> bool {
    if offset > buf.len() {
        return false;
    }
    let pad = padding(buf.as_ptr() as usize + offset, align);
    // Checked arithmetic so offsets near usize::MAX fail closed.
    match offset.checked_add(pad).and_then(|o| o.checked_add(size)) {
        Some(end) => end <= buf.len(),
        None => false,
    }
}

/// Whether a 4-byte cell fits at `offset` after alignment padding.
#[inline]
pub fn can_place_aligned_4(buf: &[u8], offset: usize) -> bool {
    can_place(buf, offset, 4, 4)
}

/// Whether an 8-byte cell fits at `offset` after alignment padding.
#[inline]
pub fn can_place_aligned_8(buf: &[u8], offset: usize) -> bool {
    can_place(buf, offset, 8, 8)
}

/// Whether a 16-byte cell fits at `offset` after alignment padding.
#[inline]
pub fn can_place_aligned_16(buf: &[u8], offset: usize) -> bool {
    can_place(buf, offset, 16, 16)
}

/// Whether `size` bytes fit at `offset` after cache line alignment
/// padding.
#[inline]
pub fn can_place_cache_aligned(buf: &[u8], offset: usize, size: usize) -> bool {
    can_place(buf, offset, CACHE_LINE_SIZE, size)
}

fn place<T>(buf: &mut [u8], offset: usize, align: usize, size: usize) -> (usize, &T) {
    if !can_place(buf, offset, align, size) {
        panic!(
            "cannot place {} bytes aligned to {} at offset {} in {}-byte buffer",
            size,
            align,
            offset,
            buf.len()
        );
    }
    let pad = padding(buf.as_ptr() as usize + offset, align);
    let cell = unsafe { &*(buf.as_ptr().add(offset + pad) as *const T) };
    (pad + size, cell)
}

macro_rules! place_fns {
    ($place:ident, $cache_place:ident, $atomic:ty) => {
        #[doc = concat!("Places an [`", stringify!($atomic), "`] at `offset`, after alignment padding.")]
        ///
        /// Returns the bytes consumed (padding plus cell size) and a
        /// reference to the cell.
        ///
        /// # Panics
        ///
        /// Panics when the corresponding `can_place_*` check fails.
        pub fn $place(buf: &mut [u8], offset: usize) -> (usize, &$atomic) {
            place::<$atomic>(
                buf,
                offset,
                core::mem::align_of::<$atomic>(),
                core::mem::size_of::<$atomic>(),
            )
        }

        #[doc = concat!("Places an [`", stringify!($atomic), "`] on its own cache line at `offset`.")]
        ///
        /// Returns the bytes consumed and a reference to the padded
        /// cell.
        ///
        /// # Panics
        ///
        /// Panics when the cache-aligned placement does not fit.
        pub fn $cache_place(buf: &mut [u8], offset: usize) -> (usize, &CachePadded<$atomic>) {
            place::<CachePadded<$atomic>>(
                buf,
                offset,
                CACHE_LINE_SIZE,
                core::mem::size_of::<CachePadded<$atomic>>(),
            )
        }
    };
}

place_fns!(place_aligned_i32, place_cache_aligned_i32, AtomicI32);
place_fns!(place_aligned_u32, place_cache_aligned_u32, AtomicU32);
place_fns!(place_aligned_bool, place_cache_aligned_bool, AtomicBool);
place_fns!(place_aligned_i64, place_cache_aligned_i64, AtomicI64);
place_fns!(place_aligned_u64, place_cache_aligned_u64, AtomicU64);
place_fns!(place_aligned_usize, place_cache_aligned_usize, AtomicUsize);
place_fns!(place_aligned_i128, place_cache_aligned_i128, AtomicI128);
place_fns!(place_aligned_u128, place_cache_aligned_u128, AtomicU128);
