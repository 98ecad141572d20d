//! Aggregated pipeline error type.

use std::error::Error;
use std::fmt;

use stele_arena::FinalizeError;
use stele_core::ResolveError;

/// Errors from a bake run.
///
/// Any failure aborts the whole build before a handle exists; there is
/// no partial or degraded blob, and no automatic retry — record
/// sources are deterministic, so retrying without fixing the authoring
/// data would fail identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Key-ordering resolution rejected the raw record set.
    Resolve {
        /// The underlying resolver error.
        reason: ResolveError,
    },
    /// The construction session could not be sealed.
    Finalize {
        /// The underlying finalize error.
        reason: FinalizeError,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolve { reason } => write!(f, "record resolution failed: {reason}"),
            Self::Finalize { reason } => write!(f, "blob finalization failed: {reason}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolve { reason } => Some(reason),
            Self::Finalize { reason } => Some(reason),
        }
    }
}

impl From<ResolveError> for BuildError {
    fn from(reason: ResolveError) -> Self {
        Self::Resolve { reason }
    }
}

impl From<FinalizeError> for BuildError {
    fn from(reason: FinalizeError) -> Self {
        Self::Finalize { reason }
    }
}
