//! Record traits: key tagging and the injected record source.

use crate::key::TypeKey;

/// A raw configuration record tagged with its type key.
///
/// Records are author-supplied value objects and are read-only to the
/// pipeline: the build never mutates or retains them beyond the bake call.
pub trait Keyed<K: TypeKey> {
    /// The type key identifying which slot this record populates.
    fn key(&self) -> K;
}

/// Supplier of an unordered collection of raw records.
///
/// This is the seam to the host's asset/storage layer. The pipeline
/// treats it as an injected dependency so the core stays a pure
/// function of its inputs; tests pass plain closures.
///
/// `load_all` must be idempotent for a given locator — rebuilds call it
/// again and expect equivalent output.
pub trait RecordSource {
    /// The raw record type this source produces.
    type Record;

    /// Load every record addressed by the opaque locator
    /// (a path, namespace, or query understood by the host).
    fn load_all(&self, locator: &str) -> Vec<Self::Record>;
}

impl<R, F> RecordSource for F
where
    F: Fn(&str) -> Vec<R>,
{
    type Record = R;

    fn load_all(&self, locator: &str) -> Vec<R> {
        self(locator)
    }
}
