// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocation sizes. Most markup is short (a handful of segments, escape prefixes
//! of a few bytes), so these small buffers rarely spill on to the heap.

use smallstr::SmallString;
use smallvec::SmallVec;

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

pub const DEFAULT_VEC_STORAGE_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated vec. When this gets larger than [`DEFAULT_VEC_STORAGE_SIZE`], it will
/// be [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; DEFAULT_VEC_STORAGE_SIZE]>;
