//! Typed column descriptors and the blob root schema.
//!
//! A baked blob is columnar: the root table holds one descriptor per
//! logical field, and each field is an outer array with one slot per
//! type key. Integrators declare each column once as a `const`, then
//! use the same descriptor on both the build side and the read side,
//! so a column's element type is fixed at its declaration site and a
//! selector/destination type mismatch is a compile error.

use std::fmt;
use std::marker::PhantomData;

/// The integrator-declared root schema of a blob.
///
/// Each root field is a column; `FIELD_COUNT` fixes the size of the
/// root descriptor table and `field_name` labels columns in error
/// messages. Column descriptor consts must use indices `0..FIELD_COUNT`
/// with no two columns sharing an index.
pub trait BlobRoot {
    /// Number of columns in the root table.
    const FIELD_COUNT: usize;

    /// Human-readable name of the column at `index`, for diagnostics.
    fn field_name(index: usize) -> &'static str;
}

/// Descriptor of a column holding one fixed-size value per type key.
pub struct ScalarColumn<T> {
    index: u32,
    _elem: PhantomData<fn() -> T>,
}

/// Descriptor of a column holding one variable-length run of fixed-size
/// elements per type key.
pub struct ArrayColumn<T> {
    index: u32,
    _elem: PhantomData<fn() -> T>,
}

/// Descriptor of a column holding one UTF-8 string per type key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrColumn {
    index: u32,
}

impl<T> ScalarColumn<T> {
    /// Declare the scalar column at root field `index`.
    pub const fn new(index: u32) -> Self {
        Self {
            index,
            _elem: PhantomData,
        }
    }

    /// Root field index of this column.
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl<T> ArrayColumn<T> {
    /// Declare the array column at root field `index`.
    pub const fn new(index: u32) -> Self {
        Self {
            index,
            _elem: PhantomData,
        }
    }

    /// Root field index of this column.
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl StrColumn {
    /// Declare the string column at root field `index`.
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Root field index of this column.
    pub const fn index(self) -> u32 {
        self.index
    }
}

// Manual Copy/Clone/Debug: derives would needlessly bound T.
impl<T> Clone for ScalarColumn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarColumn<T> {}

impl<T> fmt::Debug for ScalarColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarColumn({})", self.index)
    }
}

impl<T> Clone for ArrayColumn<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayColumn<T> {}

impl<T> fmt::Debug for ArrayColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayColumn({})", self.index)
    }
}
