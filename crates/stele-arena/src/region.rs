//! Region handles issued during a construction session.
//!
//! A region handle identifies one begun column inside the builder's
//! arena. Handles are cheap `Copy` tokens over a region id; they stay
//! valid across arena growth because the builder resolves them to
//! base-relative offsets on every write.

use std::fmt;
use std::marker::PhantomData;

/// Handle to a begun scalar column: `count` slots of `T`.
#[must_use]
pub struct ScalarRegion<T> {
    pub(crate) region: u32,
    _elem: PhantomData<fn() -> T>,
}

/// Handle to a begun array column: `count` descriptor slots, each
/// pointing at a variable-length run of `T`.
#[must_use]
pub struct ArrayRegion<T> {
    pub(crate) region: u32,
    _elem: PhantomData<fn() -> T>,
}

/// Handle to a begun string column: `count` descriptor slots, each
/// pointing at a UTF-8 byte run.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrRegion {
    pub(crate) region: u32,
}

impl<T> ScalarRegion<T> {
    pub(crate) fn new(region: u32) -> Self {
        Self {
            region,
            _elem: PhantomData,
        }
    }
}

impl<T> ArrayRegion<T> {
    pub(crate) fn new(region: u32) -> Self {
        Self {
            region,
            _elem: PhantomData,
        }
    }
}

impl StrRegion {
    pub(crate) fn new(region: u32) -> Self {
        Self { region }
    }
}

impl<T> Clone for ScalarRegion<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarRegion<T> {}

impl<T> fmt::Debug for ScalarRegion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarRegion({})", self.region)
    }
}

impl<T> Clone for ArrayRegion<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayRegion<T> {}

impl<T> fmt::Debug for ArrayRegion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayRegion({})", self.region)
    }
}
