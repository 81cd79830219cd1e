// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Sequential cell placement in a borrowed buffer
//!
//! [`Allocator`] is a bump cursor over an externally owned byte buffer.
//! Each typed call pads the cursor to the cell's alignment, hands out a
//! reference living as long as the buffer borrow, and advances past the
//! cell. Several cells can be carved out of one buffer this way, which
//! the one-shot [`place`](crate::place) functions cannot do (each holds
//! the whole buffer borrow).
//!
//! Cursor overruns and non-power-of-two alignments panic; the allocator
//! runs at setup time against buffers the caller has already sized.

use core::marker::PhantomData;
use core::mem::{align_of, size_of};

use crate::atomic::{
    AtomicBool, AtomicI128, AtomicI32, AtomicI64, AtomicU128, AtomicU32, AtomicU64, AtomicUsize,
};
use crate::cache::CachePadded;

/// Bump-allocates atomic cells from a borrowed byte buffer.
///
/// ```
/// use memord::Allocator;
///
/// let mut buf = [0u8; 256];
/// let mut alloc = Allocator::new(&mut buf);
/// let counter = alloc.u64();
/// let flag = alloc.bool();
/// counter.store(1);
/// flag.store(true);
/// ```
///
/// `reset` rewinds the cursor without zeroing memory; references handed
/// out earlier stay memory-valid but will alias whatever is allocated
/// next. Rewinding while earlier cells are still in use is a caller
/// bug the allocator cannot detect.
pub struct Allocator<'a> {
    base: *mut u8,
    len: usize,
    offset: usize,
    _buf: PhantomData<&'a mut [u8]>,
}

impl<'a> Allocator<'a> {
    /// Creates an allocator over `buf` with the cursor at zero.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self {
            base: buf.as_mut_ptr(),
            len: buf.len(),
            offset: 0,
            _buf: PhantomData,
        }
    }

    /// Current cursor position in bytes.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len - self.offset
    }

    /// Rewinds the cursor to zero. Memory is not zeroed.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Advances the cursor by `n` bytes.
    ///
    /// # Panics
    ///
    /// Panics when the cursor would pass the end of the buffer.
    pub fn skip(&mut self, n: usize) {
        let end = match self.offset.checked_add(n) {
            Some(end) if end <= self.len => end,
            _ => panic!(
                "skip of {} bytes at offset {} exceeds {}-byte buffer",
                n, self.offset, self.len
            ),
        };
        self.offset = end;
    }

    /// Advances the cursor to the next address aligned to `align`.
    ///
    /// # Panics
    ///
    /// Panics when `align` is not a power of two or the aligned cursor
    /// would pass the end of the buffer.
    pub fn align(&mut self, align: usize) {
        if !align.is_power_of_two() {
            panic!("alignment {} is not a power of two", align);
        }
        let pad = (self.base as usize + self.offset).wrapping_neg() & (align - 1);
        self.skip(pad);
    }

    // All typed allocation funnels through here.
    fn carve<T>(&mut self) -> &'a T {
        self.align(align_of::<T>());
        let addr = unsafe { self.base.add(self.offset) };
        self.skip(size_of::<T>());
        #[cfg(feature = "log")]
        log::trace!(
            "carved {} at {:p}, cursor now {}/{}",
            core::any::type_name::<T>(),
            addr,
            self.offset,
            self.len
        );
        unsafe { &*(addr as *const T) }
    }
}

macro_rules! alloc_fns {
    ($fn:ident, $cache_fn:ident, $atomic:ty) => {
        impl<'a> Allocator<'a> {
            #[doc = concat!("Allocates an [`", stringify!($atomic), "`] at the next aligned offset.")]
            ///
            /// The cell takes whatever bytes were in the buffer; store
            /// before the first shared load.
            ///
            /// # Panics
            ///
            /// Panics when the cell does not fit in the remaining space.
            pub fn $fn(&mut self) -> &'a $atomic {
                self.carve::<$atomic>()
            }

            #[doc = concat!("Allocates an [`", stringify!($atomic), "`] on its own cache line.")]
            ///
            /// # Panics
            ///
            /// Panics when the padded cell does not fit in the remaining
            /// space.
            pub fn $cache_fn(&mut self) -> &'a CachePadded<$atomic> {
                self.carve::<CachePadded<$atomic>>()
            }
        }
    };
}

alloc_fns!(i32, cache_aligned_i32, AtomicI32);
alloc_fns!(u32, cache_aligned_u32, AtomicU32);
alloc_fns!(bool, cache_aligned_bool, AtomicBool);
alloc_fns!(i64, cache_aligned_i64, AtomicI64);
alloc_fns!(u64, cache_aligned_u64, AtomicU64);
alloc_fns!(usize, cache_aligned_usize, AtomicUsize);
alloc_fns!(i128, cache_aligned_i128, AtomicI128);
alloc_fns!(u128, cache_aligned_u128, AtomicU128);
