//! The write-once blob construction session.
//!
//! [`BlobBuilder`] owns a single growable byte arena. Columns are begun
//! (reserving their outer slot area and filling in the root descriptor),
//! slots are written exactly once each, and [`BlobBuilder::finalize`]
//! seals the arena into an immutable [`Blob`]. Regions are never freed
//! or reused; the write cursor only grows.
//!
//! Slot misuse — an out-of-range index, a double write, beginning a
//! column twice — is a programming error in the integrator's transfer
//! composition and panics rather than returning an error. The one
//! recoverable failure is an unpopulated column at finalize time.

use indexmap::IndexMap;
use smallvec::{smallvec, SmallVec};
use stele_core::{ArrayColumn, BlobRoot, FixedElement, ScalarColumn, StrColumn};

use crate::blob::Blob;
use crate::config::BuilderConfig;
use crate::error::FinalizeError;
use crate::layout::{write_descriptor, DESCRIPTOR_LEN};
use crate::region::{ArrayRegion, ScalarRegion, StrRegion};
use crate::stats::BlobStats;

/// Tracks which slots of a region have been written.
///
/// Inline up to 64 slots; larger key spaces spill to the heap.
struct SlotBits {
    bits: SmallVec<[u64; 1]>,
}

impl SlotBits {
    fn new(count: u32) -> Self {
        let words = (count as usize).div_ceil(64).max(1);
        Self {
            bits: smallvec![0u64; words],
        }
    }

    /// Mark `slot` written. Returns whether it was already marked.
    fn set(&mut self, slot: u32) -> bool {
        let word = slot as usize / 64;
        let mask = 1u64 << (slot as usize % 64);
        let prev = self.bits[word] & mask != 0;
        self.bits[word] |= mask;
        prev
    }

    /// Number of slots in `0..count` not yet written.
    fn missing(&self, count: u32) -> u32 {
        let written: u32 = self.bits.iter().map(|w| w.count_ones()).sum();
        count - written
    }
}

/// Bookkeeping for one begun column.
struct RegionMeta {
    /// Root field index this region belongs to.
    field: u32,
    /// Arena offset of the outer slot area.
    offset: u32,
    /// Number of outer slots.
    count: u32,
    /// Bytes per outer slot (element size, or a descriptor pair).
    slot_len: u32,
    /// Per-slot completion bitmap.
    written: SlotBits,
}

/// A scoped construction session over a single arena.
///
/// Created for a root schema `R` via [`BlobBuilder::new`]; consumed by
/// [`BlobBuilder::finalize`]. The arena grows as columns are begun and
/// runs appended — growth never invalidates issued region handles,
/// because handles and descriptors hold base-relative offsets only.
pub struct BlobBuilder {
    /// The arena. Root descriptor table at offset 0, then regions in
    /// allocation order.
    bytes: Vec<u8>,
    /// Number of root columns, fixed by the root schema.
    field_count: u32,
    /// Column-name lookup from the root schema, for diagnostics.
    field_name: fn(usize) -> &'static str,
    /// All begun regions, indexed by region id.
    regions: Vec<RegionMeta>,
    /// Maps root field index to region id; rejects double begins.
    columns: IndexMap<u32, u32>,
}

impl BlobBuilder {
    /// Start a construction session for root schema `R` with default
    /// configuration.
    pub fn new<R: BlobRoot>() -> Self {
        Self::with_config::<R>(&BuilderConfig::default())
    }

    /// Start a construction session for root schema `R`.
    ///
    /// Reserves the zeroed root descriptor table at offset 0.
    pub fn with_config<R: BlobRoot>(config: &BuilderConfig) -> Self {
        let root_len = R::FIELD_COUNT * DESCRIPTOR_LEN;
        let mut bytes = Vec::with_capacity(config.initial_capacity.max(root_len));
        bytes.resize(root_len, 0);
        Self {
            bytes,
            field_count: R::FIELD_COUNT as u32,
            field_name: R::field_name,
            regions: Vec::new(),
            columns: IndexMap::with_capacity(R::FIELD_COUNT),
        }
    }

    /// Begin the scalar column `column` with `count` slots of `T`.
    ///
    /// Reserves `count * T::BYTE_LEN` zeroed bytes and writes the
    /// column's root descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the column index is outside the root schema or the
    /// column was already begun.
    pub fn begin_scalars<T: FixedElement>(
        &mut self,
        column: ScalarColumn<T>,
        count: u32,
    ) -> ScalarRegion<T> {
        ScalarRegion::new(self.begin_column(column.index(), count, T::BYTE_LEN as u32))
    }

    /// Begin the array column `column` with `count` outer slots.
    ///
    /// Each slot is a nested `(element_count, elements_offset)`
    /// descriptor; the inner element runs are appended when slots are
    /// written.
    ///
    /// # Panics
    ///
    /// Panics if the column index is outside the root schema or the
    /// column was already begun.
    pub fn begin_arrays<T: FixedElement>(
        &mut self,
        column: ArrayColumn<T>,
        count: u32,
    ) -> ArrayRegion<T> {
        ArrayRegion::new(self.begin_column(column.index(), count, DESCRIPTOR_LEN as u32))
    }

    /// Begin the string column `column` with `count` outer slots.
    ///
    /// # Panics
    ///
    /// Panics if the column index is outside the root schema or the
    /// column was already begun.
    pub fn begin_strs(&mut self, column: StrColumn, count: u32) -> StrRegion {
        StrRegion::new(self.begin_column(column.index(), count, DESCRIPTOR_LEN as u32))
    }

    /// Write one scalar into slot `slot` of a begun scalar column.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range or was already written.
    pub fn set_scalar<T: FixedElement>(&mut self, region: ScalarRegion<T>, slot: u32, value: T) {
        let at = self.claim_slot(region.region, slot);
        value.encode(&mut self.bytes[at..]);
    }

    /// Append `elems` as the variable-length run for slot `slot` of a
    /// begun array column.
    ///
    /// An empty run is stored as the `(0, 0)` descriptor with no
    /// payload bytes.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range or was already written.
    pub fn set_array<T: FixedElement>(&mut self, region: ArrayRegion<T>, slot: u32, elems: &[T]) {
        let at = self.claim_slot(region.region, slot);
        let (count, offset) = self.append_elems(elems);
        write_descriptor(&mut self.bytes, at, count, offset);
    }

    /// Append `text` as the UTF-8 run for slot `slot` of a begun
    /// string column.
    ///
    /// The empty string is stored as the `(0, 0)` descriptor.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range or was already written.
    pub fn set_str(&mut self, region: StrRegion, slot: u32, text: &str) {
        let at = self.claim_slot(region.region, slot);
        let (len, offset) = self.append_bytes(text.as_bytes());
        write_descriptor(&mut self.bytes, at, len, offset);
    }

    /// Seal the session into an immutable [`Blob`].
    ///
    /// Fails if any root column was never begun, or any begun column
    /// has an unwritten slot — a partially populated blob is never
    /// produced.
    ///
    /// # Panics
    ///
    /// Panics if `R` is not the root schema this session was created
    /// for.
    pub fn finalize<R: BlobRoot>(self) -> Result<Blob<R>, FinalizeError> {
        assert_eq!(
            self.field_count as usize,
            R::FIELD_COUNT,
            "finalize called with a different root schema than the session was created for",
        );
        for field in 0..self.field_count {
            if !self.columns.contains_key(&field) {
                return Err(FinalizeError::MissingColumn {
                    column: (self.field_name)(field as usize),
                });
            }
        }
        for meta in &self.regions {
            let missing = meta.written.missing(meta.count);
            if missing > 0 {
                return Err(FinalizeError::IncompleteColumn {
                    column: (self.field_name)(meta.field as usize),
                    missing_slots: missing,
                });
            }
        }
        Ok(Blob::from_bytes(self.bytes))
    }

    /// Current arena size in bytes.
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Number of begun regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Snapshot of the session's size and shape.
    pub fn stats(&self) -> BlobStats {
        BlobStats {
            len_bytes: self.bytes.len(),
            capacity_bytes: self.bytes.capacity(),
            region_count: self.regions.len(),
            root_fields: self.field_count,
        }
    }

    /// Reserve `len` zeroed bytes at the cursor; returns their offset.
    fn reserve(&mut self, len: usize) -> u32 {
        let offset = self.bytes.len();
        let end = offset + len;
        assert!(end <= u32::MAX as usize, "arena exceeds u32 offset space");
        self.bytes.resize(end, 0);
        offset as u32
    }

    /// Reserve a slot area plus root descriptor for one column.
    fn begin_column(&mut self, field: u32, count: u32, slot_len: u32) -> u32 {
        assert!(
            field < self.field_count,
            "column index {field} outside root schema ({} fields)",
            self.field_count,
        );
        assert!(
            !self.columns.contains_key(&field),
            "column '{}' begun twice",
            (self.field_name)(field as usize),
        );
        let offset = self.reserve(count as usize * slot_len as usize);
        write_descriptor(&mut self.bytes, field as usize * DESCRIPTOR_LEN, count, offset);
        let region = self.regions.len() as u32;
        self.regions.push(RegionMeta {
            field,
            offset,
            count,
            slot_len,
            written: SlotBits::new(count),
        });
        self.columns.insert(field, region);
        region
    }

    /// Mark a slot written and return its arena offset.
    fn claim_slot(&mut self, region: u32, slot: u32) -> usize {
        let name = self.field_name;
        let meta = &mut self.regions[region as usize];
        assert!(
            slot < meta.count,
            "slot {slot} out of range for column '{}' ({} slots)",
            name(meta.field as usize),
            meta.count,
        );
        assert!(
            !meta.written.set(slot),
            "slot {slot} of column '{}' written twice",
            name(meta.field as usize),
        );
        meta.offset as usize + slot as usize * meta.slot_len as usize
    }

    /// Append a packed element run; returns its `(count, offset)`.
    fn append_elems<T: FixedElement>(&mut self, elems: &[T]) -> (u32, u32) {
        if elems.is_empty() {
            return (0, 0);
        }
        let offset = self.reserve(elems.len() * T::BYTE_LEN);
        for (i, elem) in elems.iter().enumerate() {
            elem.encode(&mut self.bytes[offset as usize + i * T::BYTE_LEN..]);
        }
        (elems.len() as u32, offset)
    }

    /// Append a raw byte run; returns its `(len, offset)`.
    fn append_bytes(&mut self, raw: &[u8]) -> (u32, u32) {
        if raw.is_empty() {
            return (0, 0);
        }
        let offset = self.reserve(raw.len());
        self.bytes[offset as usize..offset as usize + raw.len()].copy_from_slice(raw);
        (raw.len() as u32, offset)
    }
}
