//! Records with a lookup identity.

/// A record that keeps its identity while its other fields change.
///
/// Stores locate records through `id()`; for products that is the
/// case-folded name, so "Pen" and "PEN" are the same entity.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
