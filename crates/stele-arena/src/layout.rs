//! Binary layout of the arena.
//!
//! The blob is a header-less contiguous byte buffer. The root table
//! sits at offset 0 and holds one descriptor per root column. Every
//! descriptor is the 8-byte pair `(count: u32, offset: u32)`, both
//! little-endian, with `offset` relative to the arena base:
//!
//! - a scalar column's descriptor counts outer slots and points at a
//!   packed run of `count * BYTE_LEN` element bytes;
//! - an array column's descriptor points at `count` nested descriptors,
//!   one per slot, each `(element_count, elements_offset)`;
//! - a string column's nested descriptors are `(byte_len, bytes_offset)`
//!   pointing at raw UTF-8, no NUL terminator.
//!
//! Empty runs and empty strings are stored as `(0, 0)`.

/// Byte length of one `(count, offset)` descriptor.
pub const DESCRIPTOR_LEN: usize = 8;

/// Write a `(count, offset)` descriptor at `at`.
pub(crate) fn write_descriptor(bytes: &mut [u8], at: usize, count: u32, offset: u32) {
    bytes[at..at + 4].copy_from_slice(&count.to_le_bytes());
    bytes[at + 4..at + 8].copy_from_slice(&offset.to_le_bytes());
}

/// Read the `(count, offset)` descriptor at `at`.
pub(crate) fn read_descriptor(bytes: &[u8], at: usize) -> (u32, u32) {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[at..at + 4]);
    let count = u32::from_le_bytes(raw);
    raw.copy_from_slice(&bytes[at + 4..at + 8]);
    (count, u32::from_le_bytes(raw))
}
