//! Key-ordering resolution of raw record sets.

use stele_core::{Keyed, ResolveError, TypeKey};

/// Order an unordered record set densely by type key.
///
/// Pure function of its input: on success the result has length
/// exactly `K::COUNT` and `result[i].key().index() == i` for every
/// `i`. Duplicate or absent keys are reported, never coerced — a
/// partially populated set cannot reach the builder.
///
/// Keys outside `0..K::COUNT` indicate a broken [`TypeKey`] impl and
/// panic rather than erroring.
pub fn resolve<K, R>(records: Vec<R>) -> Result<Vec<R>, ResolveError>
where
    K: TypeKey,
    R: Keyed<K>,
{
    let mut slots: Vec<Option<R>> = Vec::with_capacity(K::COUNT);
    slots.resize_with(K::COUNT, || None);

    for record in records {
        let index = record.key().index();
        assert!(
            index < K::COUNT,
            "TypeKey::index returned {index}, outside the declared key space of {}",
            K::COUNT,
        );
        if slots[index].is_some() {
            return Err(ResolveError::DuplicateKey {
                key_index: index as u32,
            });
        }
        slots[index] = Some(record);
    }

    let mut ordered = Vec::with_capacity(K::COUNT);
    for (index, slot) in slots.into_iter().enumerate() {
        match slot {
            Some(record) => ordered.push(record),
            None => {
                return Err(ResolveError::MissingKey {
                    key_index: index as u32,
                })
            }
        }
    }
    Ok(ordered)
}
