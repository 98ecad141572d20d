//! Relocatable blob arena builder and read views for Stele.
//!
//! Provides the write-once arena into which every column of a config
//! blob is packed, and the immutable, `Arc`-shared [`Blob`] handle that
//! reads it back through base-relative offsets.
//!
//! # Architecture
//!
//! ```text
//! BlobBuilder (construction session)
//! ├── Vec<u8> arena (root table at offset 0, bump cursor)
//! ├── IndexMap<column, region> bookkeeping
//! └── per-region slot-completion bitmaps
//!       │ finalize()
//!       ▼
//! Blob<R> (Arc<[u8]> + typed root view, read-only forever)
//! ```
//!
//! All offsets inside the arena are relative to the arena base, so the
//! backing storage may grow (or the whole blob relocate) without
//! invalidating any handle or descriptor.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blob;
pub mod builder;
pub mod config;
pub mod error;
pub mod layout;
pub mod region;
pub mod stats;

pub use blob::{ArraysView, Blob, Run, ScalarsView, StrsView};
pub use builder::BlobBuilder;
pub use config::BuilderConfig;
pub use error::FinalizeError;
pub use region::{ArrayRegion, ScalarRegion, StrRegion};
pub use stats::BlobStats;
