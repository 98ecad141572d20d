//! Record resolution, field transfer, and the one-shot bake pipeline.
//!
//! The crate wires the pieces end to end: resolve raw records into key
//! order, let the integrator compose per-column transfers against the
//! arena builder, seal the arena, and hand the resulting [`stele_arena::Blob`]
//! to the host through a [`BlobSlot`].
//!
//! Construction is single-threaded, synchronous, and one-shot per
//! configuration set. Nothing is observable by other threads until a
//! fully built blob is published.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod publish;
pub mod resolve;
pub mod transfer;

pub use error::BuildError;
pub use pipeline::{bake, bake_from_source, bake_with_config};
pub use publish::BlobSlot;
pub use resolve::resolve;
pub use transfer::{transfer_arrays, transfer_scalars, transfer_strs};
