//! Canonical incident directions.
//!
//! Each entry maps a small integer id to the propagation direction of the
//! illuminating wave. The electric-field (polarization) direction is kept
//! alongside for provenance only; interpolation never reads it.

use num_traits::Float;

use crate::{cast, Result};

/// One incident direction in the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction<T> {
    pub id: u8,
    /// Propagation direction. Not necessarily unit length.
    pub propagation: [T; 3],
    /// Electric field direction.
    pub polarization: [T; 3],
}

/// (id, propagation, polarization) for the eight canonical directions.
const CANONICAL: [(u8, [f64; 3], [f64; 3]); 8] = [
    (1, [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]),
    (2, [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    (3, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    (4, [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    (5, [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    (6, [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    (7, [0.707, 0.707, 0.0], [0.0, 0.0, 1.0]),
    (8, [0.707, 0.0, 0.707], [0.0, 1.0, 0.0]),
];

/// An immutable set of incident directions, sorted by id.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionCatalog<T> {
    entries: Vec<Direction<T>>,
}

impl<T: Float> DirectionCatalog<T> {
    /// Build a catalog from arbitrary entries.
    /// Entries are sorted by id; for duplicate ids the first one given wins.
    pub fn new(mut entries: Vec<Direction<T>>) -> Self {
        entries.sort_by_key(|d| d.id);
        entries.dedup_by_key(|d| d.id);
        Self { entries }
    }

    /// The eight hand-authored measurement directions.
    pub fn canonical() -> Result<Self> {
        let to_t = |v: [f64; 3]| -> Result<[T; 3]> { Ok([cast(v[0])?, cast(v[1])?, cast(v[2])?]) };

        let entries = CANONICAL
            .iter()
            .map(|&(id, propagation, polarization)| -> Result<Direction<T>> {
                Ok(Direction {
                    id,
                    propagation: to_t(propagation)?,
                    polarization: to_t(polarization)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(entries))
    }

    /// Propagation vector for a direction id, if present.
    pub fn vector_for(&self, id: u8) -> Option<[T; 3]> {
        self.get(id).map(|d| d.propagation)
    }

    pub fn get(&self, id: u8) -> Option<&Direction<T>> {
        self.entries
            .binary_search_by_key(&id, |d| d.id)
            .ok()
            .map(|i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Direction<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_canonical_lookup() {
        let catalog = DirectionCatalog::<f64>::canonical().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.vector_for(1), Some([0.0, -1.0, 0.0]));
        assert_eq!(catalog.vector_for(2), Some([0.0, 0.0, 1.0]));
        assert_eq!(catalog.vector_for(8), Some([0.707, 0.0, 0.707]));
        assert_eq!(catalog.get(4).unwrap().polarization, [1.0, 0.0, 0.0]);
        assert_eq!(catalog.vector_for(0), None);
        assert_eq!(catalog.vector_for(9), None);
    }

    #[test]
    fn test_ids_are_sorted() {
        let catalog = DirectionCatalog::<f32>::canonical().unwrap();
        let ids: Vec<u8> = catalog.iter().map(|d| d.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn test_custom_catalog_sorts_and_dedups() {
        let d = |id, x| Direction {
            id,
            propagation: [x, 0.0, 0.0],
            polarization: [0.0, 0.0, 1.0],
        };
        let catalog = DirectionCatalog::new(vec![d(5, 1.0), d(2, -1.0), d(5, 2.0)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.vector_for(2), Some([-1.0, 0.0, 0.0]));
        assert_eq!(catalog.vector_for(5), Some([1.0, 0.0, 0.0]));
    }
}
