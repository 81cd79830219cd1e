// Copyright 2026 The Memord Authors
//
// Use of this source code is governed by a MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT

//! Typed atomic cells
//!
//! One wrapper type per value kind, each owning its storage through an
//! `UnsafeCell` and exposing a default-ordering method plus explicitly
//! suffixed variants for every operation. None of the types implement
//! `Clone` or `Copy`; duplicating a live shared cell is a programming
//! error these types make impossible to write by accident.
//!
//! Method ordering defaults: `load`/`store` are Relaxed, read-modify-write
//! operations are AcqRel. These are method defaults of this layer only;
//! the [`raw`](crate::raw) dispatch layer has its own fallback rules.

mod bool;
mod int;
mod int128;
mod ptr;

pub use self::bool::AtomicBool;
pub use self::int::{AtomicI32, AtomicI64, AtomicU32, AtomicU64, AtomicUsize};
pub use self::int128::{AtomicI128, AtomicU128};
pub use self::ptr::AtomicPtr;
