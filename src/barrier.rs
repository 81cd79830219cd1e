// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Standalone memory barriers
//!
//! For fencing plain loads and stores done manually on shared memory,
//! outside the wrapper types and the dispatch layer. Each barrier is a
//! hardware fence instruction; neither the compiler nor the CPU may
//! reorder the guarded accesses across it.

use crate::arch;

/// Acquire barrier: loads and stores after the barrier cannot be
/// reordered before any load preceding it.
#[inline]
pub fn barrier_acquire() {
    arch::barrier_acquire();
}

/// Release barrier: loads and stores before the barrier cannot be
/// reordered after any store following it.
#[inline]
pub fn barrier_release() {
    arch::barrier_release();
}

/// Full acquire-release barrier.
#[inline]
pub fn barrier_acqrel() {
    arch::barrier_acqrel();
}
