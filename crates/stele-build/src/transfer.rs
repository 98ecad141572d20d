//! Per-column field transfer from ordered records into the arena.
//!
//! A record type is described to the pipeline as a free composition of
//! transfer calls — one per column, in any order — instead of one
//! monolithic copy function. Each call applies a selector to every
//! ordered record and writes slot `i` from record `i`. Selector and
//! destination element types are tied together by the region handle's
//! type parameter, so a mismatch does not compile.
//!
//! The calls are independent; completeness across columns is checked
//! once, at [`BlobBuilder::finalize`] time.

use stele_arena::{ArrayRegion, BlobBuilder, ScalarRegion, StrRegion};
use stele_core::FixedElement;

/// Populate a scalar column: one fixed-size value per ordered record.
pub fn transfer_scalars<R, T, F>(
    ordered: &[R],
    select: F,
    builder: &mut BlobBuilder,
    region: ScalarRegion<T>,
) where
    T: FixedElement,
    F: Fn(&R) -> T,
{
    for (slot, record) in ordered.iter().enumerate() {
        builder.set_scalar(region, slot as u32, select(record));
    }
}

/// Populate an array column: one variable-length run per ordered record.
pub fn transfer_arrays<R, T, F>(
    ordered: &[R],
    select: F,
    builder: &mut BlobBuilder,
    region: ArrayRegion<T>,
) where
    T: FixedElement,
    F: Fn(&R) -> &[T],
{
    for (slot, record) in ordered.iter().enumerate() {
        builder.set_array(region, slot as u32, select(record));
    }
}

/// Populate a string column: one UTF-8 string per ordered record.
pub fn transfer_strs<R, F>(
    ordered: &[R],
    select: F,
    builder: &mut BlobBuilder,
    region: StrRegion,
) where
    F: Fn(&R) -> &str,
{
    for (slot, record) in ordered.iter().enumerate() {
        builder.set_str(region, slot as u32, select(record));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stele_arena::Blob;
    use stele_core::{ArrayColumn, BlobRoot, ScalarColumn, StrColumn};

    struct Rec {
        hp: u32,
        upgrades: Vec<u16>,
        name: String,
    }

    struct Root;

    impl BlobRoot for Root {
        const FIELD_COUNT: usize = 3;

        fn field_name(index: usize) -> &'static str {
            ["hp", "upgrades", "name"][index]
        }
    }

    const HP: ScalarColumn<u32> = ScalarColumn::new(0);
    const UPGRADES: ArrayColumn<u16> = ArrayColumn::new(1);
    const NAME: StrColumn = StrColumn::new(2);

    fn sample() -> Vec<Rec> {
        vec![
            Rec {
                hp: 40,
                upgrades: vec![1, 2],
                name: "miner".into(),
            },
            Rec {
                hp: 90,
                upgrades: vec![],
                name: "knight".into(),
            },
        ]
    }

    #[test]
    fn transfers_compose_in_any_order() {
        let ordered = sample();
        let mut builder = BlobBuilder::new::<Root>();
        let name = builder.begin_strs(NAME, 2);
        let hp = builder.begin_scalars(HP, 2);
        let upgrades = builder.begin_arrays(UPGRADES, 2);

        // Deliberately not in root-field order.
        transfer_strs(&ordered, |r| r.name.as_str(), &mut builder, name);
        transfer_arrays(&ordered, |r| r.upgrades.as_slice(), &mut builder, upgrades);
        transfer_scalars(&ordered, |r| r.hp, &mut builder, hp);

        let blob: Blob<Root> = builder.finalize().unwrap();
        assert_eq!(blob.scalars(HP).get(1), 90);
        assert_eq!(blob.arrays(UPGRADES).get(0).to_vec(), vec![1, 2]);
        assert_eq!(blob.strs(NAME).get(1), "knight");
    }

    #[test]
    fn each_slot_comes_from_its_own_record() {
        let ordered = sample();
        let mut builder = BlobBuilder::new::<Root>();
        let hp = builder.begin_scalars(HP, 2);
        transfer_scalars(&ordered, |r| r.hp, &mut builder, hp);
        let upgrades = builder.begin_arrays(UPGRADES, 2);
        transfer_arrays(&ordered, |r| r.upgrades.as_slice(), &mut builder, upgrades);
        let name = builder.begin_strs(NAME, 2);
        transfer_strs(&ordered, |r| r.name.as_str(), &mut builder, name);

        let blob: Blob<Root> = builder.finalize().unwrap();
        for (slot, record) in ordered.iter().enumerate() {
            assert_eq!(blob.scalars(HP).get(slot), record.hp);
            assert_eq!(blob.arrays(UPGRADES).get(slot).to_vec(), record.upgrades);
            assert_eq!(blob.strs(NAME).get(slot), record.name);
        }
    }
}
