//! Size and shape statistics for a construction session.

/// Snapshot of a [`crate::BlobBuilder`]'s current size and shape.
///
/// Hosts log or assert on these during initialization; the pipeline
/// itself carries no logging layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlobStats {
    /// Bytes written to the arena so far (root table included).
    pub len_bytes: usize,
    /// Bytes currently reserved by the backing storage.
    pub capacity_bytes: usize,
    /// Number of begun regions.
    pub region_count: usize,
    /// Number of columns in the root schema.
    pub root_fields: u32,
}

impl BlobStats {
    /// Bytes of reserved-but-unwritten capacity.
    pub fn slack_bytes(&self) -> usize {
        self.capacity_bytes - self.len_bytes
    }
}
