//! Bake human-edited config records into immutable, relocatable binary
//! blobs.
//!
//! Stele turns a set of typed configuration records — one per variant
//! of a closed key enum — into a single contiguous byte arena, indexed
//! by the enum and shared read-only with any number of consumers. All
//! internal references are offsets relative to the arena base, so the
//! blob can be copied or mapped anywhere and read without translation,
//! with no per-access allocation.
//!
//! The build runs once at initialization: resolve the records into key
//! order, compose one transfer per column, finalize, publish. For hot
//! reload, bake a fresh blob and swap the published handle; a live
//! arena is never mutated.
//!
//! # Example
//!
//! ```
//! use stele::{
//!     bake, transfer_arrays, transfer_scalars, transfer_strs, ArrayColumn, Blob, BlobRoot,
//!     BlobSlot, Keyed, ScalarColumn, StrColumn, TypeKey,
//! };
//!
//! // The closed key space: one record per variant.
//! #[derive(Clone, Copy, PartialEq, Eq, Debug)]
//! enum UnitKind {
//!     Worker,
//!     Soldier,
//! }
//!
//! impl TypeKey for UnitKind {
//!     const COUNT: usize = 2;
//!     fn index(self) -> usize {
//!         self as usize
//!     }
//! }
//!
//! // The authored record shape, as loaded from the asset layer.
//! struct UnitRecord {
//!     kind: UnitKind,
//!     hp: u32,
//!     upgrade_costs: Vec<u32>,
//!     name: String,
//! }
//!
//! impl Keyed<UnitKind> for UnitRecord {
//!     fn key(&self) -> UnitKind {
//!         self.kind
//!     }
//! }
//!
//! // The blob's root schema: three columns.
//! struct UnitBlob;
//!
//! impl BlobRoot for UnitBlob {
//!     const FIELD_COUNT: usize = 3;
//!     fn field_name(index: usize) -> &'static str {
//!         ["hp", "upgrade_costs", "name"][index]
//!     }
//! }
//!
//! const HP: ScalarColumn<u32> = ScalarColumn::new(0);
//! const UPGRADE_COSTS: ArrayColumn<u32> = ArrayColumn::new(1);
//! const NAME: StrColumn = StrColumn::new(2);
//!
//! let records = vec![
//!     UnitRecord {
//!         kind: UnitKind::Soldier,
//!         hp: 90,
//!         upgrade_costs: vec![50, 120],
//!         name: "soldier".into(),
//!     },
//!     UnitRecord {
//!         kind: UnitKind::Worker,
//!         hp: 35,
//!         upgrade_costs: vec![],
//!         name: "worker".into(),
//!     },
//! ];
//!
//! let blob: Blob<UnitBlob> = bake(records, |ordered, builder| {
//!     let count = ordered.len() as u32;
//!     let hp = builder.begin_scalars(HP, count);
//!     transfer_scalars(ordered, |r| r.hp, builder, hp);
//!     let costs = builder.begin_arrays(UPGRADE_COSTS, count);
//!     transfer_arrays(ordered, |r| r.upgrade_costs.as_slice(), builder, costs);
//!     let names = builder.begin_strs(NAME, count);
//!     transfer_strs(ordered, |r| r.name.as_str(), builder, names);
//! })
//! .expect("authored records are complete");
//!
//! // Publish to the host's singleton slot; consumers read lock-free.
//! let slot = BlobSlot::new();
//! slot.publish(blob);
//!
//! let blob = slot.get().unwrap();
//! assert_eq!(blob.scalars(HP).get(UnitKind::Soldier.index()), 90);
//! assert_eq!(
//!     blob.arrays(UPGRADE_COSTS)
//!         .get(UnitKind::Soldier.index())
//!         .to_vec(),
//!     vec![50, 120],
//! );
//! assert_eq!(blob.strs(NAME).get(UnitKind::Worker.index()), "worker");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use stele_arena::{
    ArrayRegion, ArraysView, Blob, BlobBuilder, BlobStats, BuilderConfig, FinalizeError, Run,
    ScalarRegion, ScalarsView, StrRegion, StrsView,
};
pub use stele_build::{
    bake, bake_from_source, bake_with_config, resolve, transfer_arrays, transfer_scalars,
    transfer_strs, BlobSlot, BuildError,
};
pub use stele_core::{
    ArrayColumn, BlobRoot, FixedElement, Keyed, RecordSource, ResolveError, ScalarColumn,
    StrColumn, TypeKey,
};
