//! Host publication slot for baked blobs.

use std::sync::Mutex;

use stele_arena::Blob;
use stele_core::BlobRoot;

/// Process- or world-scoped singleton storage for one baked blob.
///
/// The host keeps one slot per root schema; the pipeline publishes
/// into it exactly once per build, and arbitrary downstream consumers
/// retrieve shared handles from it. Reads of the blob itself are
/// lock-free — the mutex guards only the handle swap.
///
/// Rebuild discipline (hot reload): bake a brand-new blob from a fresh
/// session, then [`publish`](BlobSlot::publish) it. The swap replaces
/// the whole handle atomically; consumers mid-traversal keep the old
/// arena alive through their own clones and never observe a partial
/// blob. Live arenas are never mutated in place.
///
/// `new` is `const`, so slots can live in `static`s.
pub struct BlobSlot<R: BlobRoot> {
    slot: Mutex<Option<Blob<R>>>,
}

impl<R: BlobRoot> BlobSlot<R> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Store `blob` as the current singleton, replacing any previous
    /// handle.
    pub fn publish(&self, blob: Blob<R>) {
        *self.lock() = Some(blob);
    }

    /// A shared handle to the current blob, if one has been published.
    pub fn get(&self) -> Option<Blob<R>> {
        self.lock().clone()
    }

    /// Whether a blob has been published.
    pub fn is_published(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Blob<R>>> {
        // The critical section is a handle clone or swap; a poisoned
        // lock means a panic mid-swap, which cannot leave a partial
        // handle behind.
        self.slot.lock().expect("blob slot lock poisoned")
    }
}

impl<R: BlobRoot> Default for BlobSlot<R> {
    fn default() -> Self {
        Self::new()
    }
}
