use crate::Replicant;

/// Anything that holds replicants: Roots, and replicants themselves.
///
/// Implementors list their slots in a fixed order. Both methods must list the
/// same slots in the same order; a slot that's `None` is listed anyway.
pub trait Subobjects {
    fn subobjects(&self) -> Vec<SubobjectRef<'_>> {
        Vec::new()
    }

    fn subobjects_mut(&mut self) -> Vec<SubobjectMut<'_>> {
        Vec::new()
    }
}

impl<T: Subobjects + ?Sized> Subobjects for Box<T> {
    fn subobjects(&self) -> Vec<SubobjectRef<'_>> {
        (**self).subobjects()
    }

    fn subobjects_mut(&mut self) -> Vec<SubobjectMut<'_>> {
        (**self).subobjects_mut()
    }
}

/// A borrowed view of one slot: either a single optional child, or an
/// ordered collection of optional children
pub enum SubobjectRef<'a> {
    Single(Option<&'a dyn Replicant>),
    Collection(Vec<Option<&'a dyn Replicant>>),
}

impl<'a> SubobjectRef<'a> {
    pub fn single<T: Replicant>(slot: &'a Option<T>) -> Self {
        Self::Single(slot.as_ref().map(|child| child as &'a dyn Replicant))
    }

    pub fn collection<T: Replicant>(slots: &'a [Option<T>]) -> Self {
        Self::Collection(
            slots
                .iter()
                .map(|slot| slot.as_ref().map(|child| child as &'a dyn Replicant))
                .collect(),
        )
    }

    /// A collection where every element is populated
    pub fn elements<T: Replicant>(children: &'a [T]) -> Self {
        Self::Collection(
            children
                .iter()
                .map(|child| Some(child as &'a dyn Replicant))
                .collect(),
        )
    }

    /// Flattens both shapes into the ordered list of entries
    pub fn into_entries(self) -> Vec<Option<&'a dyn Replicant>> {
        match self {
            Self::Single(entry) => vec![entry],
            Self::Collection(entries) => entries,
        }
    }
}

/// Mutable counterpart of `SubobjectRef`
pub enum SubobjectMut<'a> {
    Single(Option<&'a mut dyn Replicant>),
    Collection(Vec<Option<&'a mut dyn Replicant>>),
}

impl<'a> SubobjectMut<'a> {
    pub fn single<T: Replicant>(slot: &'a mut Option<T>) -> Self {
        Self::Single(slot.as_mut().map(|child| child as &'a mut dyn Replicant))
    }

    pub fn collection<T: Replicant>(slots: &'a mut [Option<T>]) -> Self {
        Self::Collection(
            slots
                .iter_mut()
                .map(|slot| slot.as_mut().map(|child| child as &'a mut dyn Replicant))
                .collect(),
        )
    }

    pub fn elements<T: Replicant>(children: &'a mut [T]) -> Self {
        Self::Collection(
            children
                .iter_mut()
                .map(|child| Some(child as &'a mut dyn Replicant))
                .collect(),
        )
    }

    pub fn into_entries(self) -> Vec<Option<&'a mut dyn Replicant>> {
        match self {
            Self::Single(entry) => vec![entry],
            Self::Collection(entries) => entries,
        }
    }
}
