// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Ordering-dispatched operations on raw memory
//!
//! A second entry point to the same primitives: a runtime
//! [`MemoryOrder`](crate::MemoryOrder) value is the method receiver and
//! the operation runs directly on a raw pointer, with no typed cell
//! constructed. This is the right interface for externally mapped
//! shared memory (ring buffers, device queues) where the layout is
//! fixed by somebody else.
//!
//! Fallback convention, distinct from the typed wrappers' method
//! defaults: a load that is not Relaxed runs as Acquire, a store that
//! is not Relaxed runs as Release, and a read-modify-write operation
//! runs at exactly the requested ordering (all four are meaningful
//! there). The `max`/`min` retry loops collapse every non-Relaxed
//! request to an AcqRel CAS, same as the typed layer.
//!
//! All functions require naturally aligned pointers; the 128-bit entry
//! points require 16-byte alignment.

mod bool;
mod int;
mod int128;
mod ptr;
