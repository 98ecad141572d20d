//! The immutable, shareable blob handle and its read views.
//!
//! [`Blob`] wraps the finalized arena in an `Arc<[u8]>` plus a typed
//! view of the root schema. Clones share the same arena; the arena is
//! freed when the last clone drops. There is no mutation entry point:
//! after finalize the bytes are read-only forever, so unsynchronized
//! concurrent reads from any number of threads are safe.

use std::marker::PhantomData;
use std::sync::Arc;

use stele_core::{ArrayColumn, BlobRoot, FixedElement, ScalarColumn, StrColumn};

use crate::layout::{read_descriptor, DESCRIPTOR_LEN};

/// An immutable handle to a finalized arena, typed by its root schema.
///
/// Reads resolve descriptors relative to the arena base on every
/// access — no absolute pointers are stored, so the arena bytes are
/// relocatable as-is.
pub struct Blob<R: BlobRoot> {
    bytes: Arc<[u8]>,
    _root: PhantomData<fn() -> R>,
}

impl<R: BlobRoot> Clone for Blob<R> {
    fn clone(&self) -> Self {
        Self {
            bytes: Arc::clone(&self.bytes),
            _root: PhantomData,
        }
    }
}

impl<R: BlobRoot> std::fmt::Debug for Blob<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Blob({} fields, {} bytes)",
            R::FIELD_COUNT,
            self.bytes.len()
        )
    }
}

impl<R: BlobRoot> Blob<R> {
    /// Wrap sealed arena bytes. Only the builder calls this.
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
            _root: PhantomData,
        }
    }

    /// The raw arena bytes, root table first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total arena size in bytes.
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Read view over a scalar column.
    pub fn scalars<T: FixedElement>(&self, column: ScalarColumn<T>) -> ScalarsView<'_, T> {
        let (count, offset) = self.root_descriptor(column.index());
        ScalarsView {
            bytes: &self.bytes[..],
            offset: offset as usize,
            count,
            _elem: PhantomData,
        }
    }

    /// Read view over an array column.
    pub fn arrays<T: FixedElement>(&self, column: ArrayColumn<T>) -> ArraysView<'_, T> {
        let (count, offset) = self.root_descriptor(column.index());
        ArraysView {
            bytes: &self.bytes[..],
            offset: offset as usize,
            count,
            _elem: PhantomData,
        }
    }

    /// Read view over a string column.
    pub fn strs(&self, column: StrColumn) -> StrsView<'_> {
        let (count, offset) = self.root_descriptor(column.index());
        StrsView {
            bytes: &self.bytes[..],
            offset: offset as usize,
            count,
        }
    }

    fn root_descriptor(&self, field: u32) -> (u32, u32) {
        assert!(
            (field as usize) < R::FIELD_COUNT,
            "column index {field} outside root schema ({} fields)",
            R::FIELD_COUNT,
        );
        read_descriptor(&self.bytes, field as usize * DESCRIPTOR_LEN)
    }
}

/// Read view over one scalar column: `count` packed values of `T`.
pub struct ScalarsView<'a, T> {
    bytes: &'a [u8],
    offset: usize,
    count: u32,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T: FixedElement> ScalarsView<'a, T> {
    /// Number of slots (one per type key).
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the column has no slots.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Decode the value in slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= len()`.
    pub fn get(&self, slot: usize) -> T {
        assert!(slot < self.len(), "slot {slot} out of range ({} slots)", self.count);
        T::decode(&self.bytes[self.offset + slot * T::BYTE_LEN..])
    }

    /// Iterate the column's values in key order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let bytes = self.bytes;
        let offset = self.offset;
        (0..self.count as usize).map(move |slot| T::decode(&bytes[offset + slot * T::BYTE_LEN..]))
    }
}

/// Read view over one array column: `count` slots, each a [`Run`].
pub struct ArraysView<'a, T> {
    bytes: &'a [u8],
    offset: usize,
    count: u32,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T: FixedElement> ArraysView<'a, T> {
    /// Number of outer slots (one per type key).
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the column has no slots.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The variable-length run stored in slot `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= len()`.
    pub fn get(&self, slot: usize) -> Run<'a, T> {
        assert!(slot < self.len(), "slot {slot} out of range ({} slots)", self.count);
        let (count, offset) =
            read_descriptor(self.bytes, self.offset + slot * DESCRIPTOR_LEN);
        Run {
            bytes: self.bytes,
            offset: offset as usize,
            count,
            _elem: PhantomData,
        }
    }
}

/// A lazily-decoding view of one variable-length element run.
///
/// Elements are decoded on access; iterating or indexing allocates
/// nothing.
pub struct Run<'a, T> {
    bytes: &'a [u8],
    offset: usize,
    count: u32,
    _elem: PhantomData<fn() -> T>,
}

impl<'a, T: FixedElement> Run<'a, T> {
    /// Number of elements in the run.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the run is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Decode the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> T {
        assert!(index < self.len(), "index {index} out of range ({} elements)", self.count);
        T::decode(&self.bytes[self.offset + index * T::BYTE_LEN..])
    }

    /// Iterate the run's elements in order.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let bytes = self.bytes;
        let offset = self.offset;
        (0..self.count as usize).map(move |i| T::decode(&bytes[offset + i * T::BYTE_LEN..]))
    }

    /// Decode the whole run into an owned `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

/// Read view over one string column.
pub struct StrsView<'a> {
    bytes: &'a [u8],
    offset: usize,
    count: u32,
}

impl<'a> StrsView<'a> {
    /// Number of slots (one per type key).
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Whether the column has no slots.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The string stored in slot `slot`, borrowed from the arena.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= len()`.
    pub fn get(&self, slot: usize) -> &'a str {
        assert!(slot < self.len(), "slot {slot} out of range ({} slots)", self.count);
        let (len, offset) = read_descriptor(self.bytes, self.offset + slot * DESCRIPTOR_LEN);
        let raw = &self.bytes[offset as usize..offset as usize + len as usize];
        // Slots are only ever written from &str, and the arena is
        // immutable after finalize.
        std::str::from_utf8(raw).expect("blob strings are written from valid UTF-8")
    }

    /// Iterate the column's strings in key order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        (0..self.len()).map(move |slot| self.get(slot))
    }
}
