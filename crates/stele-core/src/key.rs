//! The dense type-key space that orders records within a blob.

use std::fmt;

/// A key from a closed, dense, zero-based enumeration of record types.
///
/// The key space defines both the set of valid record identities and
/// their canonical order inside a baked blob: slot `i` of every column
/// holds the data of the record whose key has index `i`.
///
/// # Contract
///
/// Implementors must map their variants bijectively onto `0..COUNT`:
/// every variant has a distinct index, every index below [`TypeKey::COUNT`]
/// is some variant's index. Field-less `#[repr]`-free enums satisfy this
/// with `self as usize`.
///
/// ```
/// use stele_core::TypeKey;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum UnitKind {
///     Infantry,
///     Archer,
///     Cavalry,
/// }
///
/// impl TypeKey for UnitKind {
///     const COUNT: usize = 3;
///
///     fn index(self) -> usize {
///         self as usize
///     }
/// }
///
/// assert_eq!(UnitKind::Cavalry.index(), 2);
/// ```
pub trait TypeKey: Copy + Eq + fmt::Debug {
    /// Number of declared keys. Valid indices are `0..COUNT`.
    const COUNT: usize;

    /// Dense zero-based index of this key.
    fn index(self) -> usize;
}
