//! Entity trait: identity that stays stable across inventory snapshots.

/// Something the external inventory store tracks by identifier.
///
/// The same product may show up in many snapshots with different quantities;
/// the identifier is what ties those snapshots together.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
