//! The one-shot bake pipeline: resolve, transfer, finalize.

use stele_arena::{Blob, BlobBuilder, BuilderConfig};
use stele_core::{BlobRoot, Keyed, RecordSource, TypeKey};

use crate::error::BuildError;
use crate::resolve::resolve;

/// Bake a raw record set into an immutable blob.
///
/// Orders the records by type key, hands the ordered slice and a fresh
/// builder to `describe` — the integrator's composition of
/// `begin_*`/`transfer_*` calls, one per column — and seals the arena.
/// Runs synchronously on the calling thread with no partial results:
/// on error, no blob exists.
///
/// ```
/// use stele_build::{bake, transfer_scalars};
/// use stele_core::{BlobRoot, Keyed, ScalarColumn, TypeKey};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum Kind { Worker, Soldier }
///
/// impl TypeKey for Kind {
///     const COUNT: usize = 2;
///     fn index(self) -> usize { self as usize }
/// }
///
/// struct Rec { kind: Kind, hp: u32 }
///
/// impl Keyed<Kind> for Rec {
///     fn key(&self) -> Kind { self.kind }
/// }
///
/// struct Units;
///
/// impl BlobRoot for Units {
///     const FIELD_COUNT: usize = 1;
///     fn field_name(_: usize) -> &'static str { "hp" }
/// }
///
/// const HP: ScalarColumn<u32> = ScalarColumn::new(0);
///
/// let records = vec![
///     Rec { kind: Kind::Soldier, hp: 80 },
///     Rec { kind: Kind::Worker, hp: 30 },
/// ];
/// let blob = bake::<_, _, Units, _>(records, |ordered, builder| {
///     let hp = builder.begin_scalars(HP, ordered.len() as u32);
///     transfer_scalars(ordered, |r| r.hp, builder, hp);
/// })
/// .unwrap();
/// assert_eq!(blob.scalars(HP).get(Kind::Soldier.index()), 80);
/// ```
pub fn bake<K, R, Root, D>(records: Vec<R>, describe: D) -> Result<Blob<Root>, BuildError>
where
    K: TypeKey,
    R: Keyed<K>,
    Root: BlobRoot,
    D: FnOnce(&[R], &mut BlobBuilder),
{
    bake_with_config(records, &BuilderConfig::default(), describe)
}

/// [`bake`] with an explicit builder configuration.
pub fn bake_with_config<K, R, Root, D>(
    records: Vec<R>,
    config: &BuilderConfig,
    describe: D,
) -> Result<Blob<Root>, BuildError>
where
    K: TypeKey,
    R: Keyed<K>,
    Root: BlobRoot,
    D: FnOnce(&[R], &mut BlobBuilder),
{
    let ordered = resolve(records)?;
    let mut builder = BlobBuilder::with_config::<Root>(config);
    describe(&ordered, &mut builder);
    Ok(builder.finalize()?)
}

/// Load records from an injected [`RecordSource`] and bake them.
///
/// `load_all` is expected to be idempotent for the locator, so a
/// hot-reload rebuild can call this again and swap the published
/// handle.
pub fn bake_from_source<K, S, Root, D>(
    source: &S,
    locator: &str,
    describe: D,
) -> Result<Blob<Root>, BuildError>
where
    K: TypeKey,
    S: RecordSource,
    S::Record: Keyed<K>,
    Root: BlobRoot,
    D: FnOnce(&[S::Record], &mut BlobBuilder),
{
    bake(source.load_all(locator), describe)
}
