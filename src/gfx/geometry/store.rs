//! Id-keyed ownership of generated geometry
//!
//! Objects hold a [`GeometryId`], never the data itself. Replacing an
//! object's geometry means inserting the new data and releasing the old id;
//! [`GeometryStore::live_count`] makes leaked entries visible.

use std::collections::HashMap;

use super::GeometryData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeometryId(u64);

#[derive(Debug, Default)]
pub struct GeometryStore {
    entries: HashMap<GeometryId, GeometryData>,
    next_id: u64,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `data` and returns a fresh id, never reused
    pub fn insert(&mut self, data: GeometryData) -> GeometryId {
        let id = GeometryId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, data);
        id
    }

    pub fn get(&self, id: GeometryId) -> Option<&GeometryData> {
        self.entries.get(&id)
    }

    pub fn contains(&self, id: GeometryId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Drops the geometry behind `id`, returning it if it was still alive
    pub fn release(&mut self, id: GeometryId) -> Option<GeometryData> {
        let released = self.entries.remove(&id);
        if released.is_some() {
            log::debug!("released geometry {:?}", id);
        }
        released
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GeometryId, &GeometryData)> {
        self.entries.iter().map(|(id, data)| (*id, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_box;

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = GeometryStore::new();
        let a = store.insert(GeometryData::new());
        store.release(a);
        let b = store.insert(GeometryData::new());
        assert_ne!(a, b);
        assert!(!store.contains(a));
        assert!(store.contains(b));
    }

    #[test]
    fn test_release_twice_is_noop() {
        let mut store = GeometryStore::new();
        let id = store.insert(generate_box(1.0, 1.0, 1.0, 1, 1, 1).unwrap());
        assert!(store.release(id).is_some());
        assert!(store.release(id).is_none());
        assert_eq!(store.live_count(), 0);
    }
}
