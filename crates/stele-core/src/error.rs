//! Resolver error types.

use std::error::Error;
use std::fmt;

/// Errors from key-ordering resolution.
///
/// Both variants are fatal to the build: a partially populated blob is
/// never produced, and nothing is published to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// Two raw records share the same type key.
    DuplicateKey {
        /// Dense index of the duplicated key.
        key_index: u32,
    },
    /// No raw record carries the key at this index.
    MissingKey {
        /// Dense index of the absent key.
        key_index: u32,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey { key_index } => {
                write!(f, "duplicate record for key index {key_index}")
            }
            Self::MissingKey { key_index } => {
                write!(f, "no record for key index {key_index}")
            }
        }
    }
}

impl Error for ResolveError {}
