// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Alignment feasibility, buffer placement, and the bump allocator.

use memoffset::offset_of;
use memord::{
    can_place_aligned_16, can_place_aligned_4, can_place_aligned_8, can_place_cache_aligned,
    place_aligned_bool, place_aligned_i32, place_aligned_u64, place_cache_aligned_u64, Allocator,
    AtomicU64, CachePadded, CACHE_LINE_SIZE,
};

// Aligned backing stores so the padding the functions compute is
// deterministic in the assertions below.
#[repr(align(16))]
struct Buf16<const N: usize>([u8; N]);

#[repr(align(64))]
struct Buf64<const N: usize>([u8; N]);

#[test]
fn test_can_place_aligned_4() {
    let buf = Buf16([0u8; 16]);
    assert!(can_place_aligned_4(&buf.0, 0));
    // Offset 1 pads to 4; 1 + 3 + 4 fits.
    assert!(can_place_aligned_4(&buf.0, 1));
    assert!(can_place_aligned_4(&buf.0, 12));
    // Offset 13 pads to 16; 16 + 4 does not fit.
    assert!(!can_place_aligned_4(&buf.0, 13));
    // Out-of-range offsets fail closed.
    assert!(!can_place_aligned_4(&buf.0, 17));
    assert!(!can_place_aligned_4(&buf.0, usize::MAX));
}

#[test]
fn test_can_place_aligned_8_and_16() {
    let buf = Buf16([0u8; 32]);
    assert!(can_place_aligned_8(&buf.0, 24));
    assert!(!can_place_aligned_8(&buf.0, 25));
    assert!(can_place_aligned_16(&buf.0, 16));
    assert!(can_place_aligned_16(&buf.0, 1));
    assert!(!can_place_aligned_16(&buf.0, 17));
}

#[test]
fn test_can_place_cache_aligned() {
    let buf = Buf64([0u8; 128]);
    assert!(can_place_cache_aligned(&buf.0, 0, 128));
    assert!(can_place_cache_aligned(&buf.0, 1, 64));
    assert!(!can_place_cache_aligned(&buf.0, 1, 65));
    assert!(!can_place_cache_aligned(&buf.0, 129, 0));
}

#[test]
fn test_place_consumes_padding_plus_size() {
    let mut buf = Buf16([0u8; 32]);
    let (consumed, cell) = place_aligned_i32(&mut buf.0, 0);
    assert_eq!(consumed, 4);
    cell.store(-7);
    assert_eq!(cell.load(), -7);

    let mut buf = Buf16([0u8; 32]);
    // Offset 1 needs 3 bytes of padding before a 4-byte cell.
    let (consumed, _) = place_aligned_i32(&mut buf.0, 1);
    assert_eq!(consumed, 7);

    let mut buf = Buf16([0u8; 32]);
    let (consumed, cell) = place_aligned_u64(&mut buf.0, 3);
    assert_eq!(consumed, 5 + 8);
    cell.store(u64::MAX);
    assert_eq!(cell.load(), u64::MAX);
}

#[test]
fn test_place_bool() {
    let mut buf = Buf16([0u8; 8]);
    let (consumed, flag) = place_aligned_bool(&mut buf.0, 0);
    assert_eq!(consumed, 4);
    flag.store(true);
    assert!(flag.load());
}

#[test]
fn test_place_cache_aligned() {
    let mut buf = Buf64([0u8; 128]);
    let (consumed, cell) = place_cache_aligned_u64(&mut buf.0, 0);
    assert_eq!(consumed, core::mem::size_of::<CachePadded<AtomicU64>>());
    cell.store(9);
    assert_eq!(cell.load(), 9);
}

#[test]
#[should_panic]
fn test_place_i32_in_2_byte_buffer_panics() {
    let mut buf = [0u8; 2];
    place_aligned_i32(&mut buf, 0);
}

#[test]
#[should_panic]
fn test_place_past_end_panics() {
    let mut buf = Buf16([0u8; 16]);
    place_aligned_u64(&mut buf.0, 9);
}

#[test]
fn test_cache_padded_layout() {
    #[repr(C)]
    struct Ring {
        head: CachePadded<AtomicU64>,
        tail: CachePadded<AtomicU64>,
    }
    assert_eq!(offset_of!(Ring, head), 0);
    assert_eq!(offset_of!(Ring, tail), CACHE_LINE_SIZE);
    assert!(core::mem::size_of::<CachePadded<AtomicU64>>() >= CACHE_LINE_SIZE);
}

#[test]
fn test_cache_padded_deref() {
    let padded = CachePadded::new(AtomicU64::new(3));
    assert_eq!(padded.load(), 3);
    padded.store(4);
    assert_eq!(padded.load(), 4);
    assert_eq!(CachePadded::new(AtomicU64::new(5)).into_inner().load(), 5);
}

#[test]
fn test_allocator_sequential() {
    let mut buf = Buf64([0u8; 256]);
    let mut alloc = Allocator::new(&mut buf.0);
    assert_eq!(alloc.offset(), 0);
    assert_eq!(alloc.remaining(), 256);

    let a = alloc.u64();
    assert_eq!(alloc.offset(), 8);
    let b = alloc.i32();
    assert_eq!(alloc.offset(), 12);
    // 128-bit cells force 16-byte alignment.
    let c = alloc.u128();
    assert_eq!(alloc.offset(), 32);
    assert_eq!(alloc.remaining(), 224);

    a.store(1);
    b.store(-2);
    c.store(3, 4);
    assert_eq!(a.load(), 1);
    assert_eq!(b.load(), -2);
    assert_eq!(c.load(), (3, 4));
}

#[test]
fn test_allocator_skip_and_align() {
    let mut buf = Buf64([0u8; 64]);
    let mut alloc = Allocator::new(&mut buf.0);
    alloc.skip(3);
    assert_eq!(alloc.offset(), 3);
    alloc.align(16);
    assert_eq!(alloc.offset(), 16);
    // Already aligned: no movement.
    alloc.align(16);
    assert_eq!(alloc.offset(), 16);
}

#[test]
fn test_allocator_reset() {
    let mut buf = Buf64([0u8; 64]);
    let mut alloc = Allocator::new(&mut buf.0);
    alloc.u64();
    alloc.u64();
    assert_eq!(alloc.offset(), 16);
    alloc.reset();
    assert_eq!(alloc.offset(), 0);
    assert_eq!(alloc.remaining(), 64);
    let again = alloc.u64();
    again.store(11);
    assert_eq!(again.load(), 11);
}

#[test]
fn test_allocator_cache_aligned() {
    let mut buf = Buf64([0u8; 192]);
    let mut alloc = Allocator::new(&mut buf.0);
    alloc.skip(1);
    let cell = alloc.cache_aligned_u64();
    // Padding to the next line, then a full line.
    assert_eq!(alloc.offset(), 2 * CACHE_LINE_SIZE);
    cell.store(42);
    assert_eq!(cell.load(), 42);
}

#[test]
#[should_panic]
fn test_allocator_skip_past_end_panics() {
    let mut buf = [0u8; 8];
    let mut alloc = Allocator::new(&mut buf);
    alloc.skip(9);
}

#[test]
#[should_panic]
fn test_allocator_align_non_power_of_two_panics() {
    let mut buf = [0u8; 64];
    let mut alloc = Allocator::new(&mut buf);
    alloc.align(24);
}

#[test]
#[should_panic]
fn test_allocator_exhaustion_panics() {
    let mut buf = [0u8; 8];
    let mut alloc = Allocator::new(&mut buf);
    alloc.u64();
    alloc.u32();
}
