//! Core types and traits for the Stele config-blob pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions shared by the builder and the pipeline:
//! the dense type-key space, record traits, the fixed-size element
//! codec, typed column descriptors, and the resolver error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column;
pub mod encode;
pub mod error;
pub mod key;
pub mod record;

pub use column::{ArrayColumn, BlobRoot, ScalarColumn, StrColumn};
pub use encode::FixedElement;
pub use error::ResolveError;
pub use key::TypeKey;
pub use record::{Keyed, RecordSource};
