use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
    },
};

use models::Entity;

use crate::errors::StoreError;

/// Increment-only id source, seeded at 1. Ids are never handed out twice.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }

    /// Draw the next id. Independent of any map lock.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Keyed collection of one entity type plus its id sequence.
///
/// Reads and writes go through a single `RwLock`, so readers see whole entities only.
/// Every value crossing the API boundary is a clone; callers never alias stored state.
#[derive(Debug)]
pub struct EntityTable<T> {
    ids: IdSequence,
    rows: RwLock<HashMap<u64, T>>,
}

impl<T: Entity> EntityTable<T> {
    pub fn new() -> Self {
        Self { ids: IdSequence::new(), rows: RwLock::new(HashMap::new()) }
    }

    // Writes are single insert/remove calls, so a poisoned lock still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<u64, T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<u64, T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assign a fresh id (ignoring any id on `value`), store it and return the stored copy.
    pub fn insert(&self, mut value: T) -> T {
        let id = self.ids.next_id();
        value.set_id(id);
        self.write().insert(id, value.clone());
        value
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.read().get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.read().contains_key(&id)
    }

    /// Snapshot of all rows ordered by id.
    pub fn list(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    /// Snapshot of the rows matching `pred`, ordered by id.
    pub fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut out: Vec<T> = self.read().values().filter(|v| pred(*v)).cloned().collect();
        out.sort_by_key(|v| v.id());
        out
    }

    /// Wholesale replace of an existing row keyed by `value.id()`.
    pub fn replace(&self, value: T) -> Result<T, StoreError> {
        let mut rows = self.write();
        match rows.get_mut(&value.id()) {
            Some(slot) => {
                *slot = value.clone();
                Ok(value)
            }
            None => Err(StoreError::not_found(T::KIND, value.id())),
        }
    }

    /// Mutate an existing row in place under the write lock. The id cannot be changed by `f`.
    pub fn update_with<F>(&self, id: u64, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.write();
        let slot = rows.get_mut(&id).ok_or_else(|| StoreError::not_found(T::KIND, id))?;
        f(slot);
        slot.set_id(id);
        Ok(slot.clone())
    }

    /// Returns whether a row existed.
    pub fn remove(&self, id: u64) -> bool {
        self.write().remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }
}

impl<T: Entity> Default for EntityTable<T> {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Course;
    use std::collections::HashSet;

    #[test]
    fn ids_start_at_one_and_increase() {
        let seq = IdSequence::new();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.next_id(), 3);
    }

    #[test]
    fn insert_ignores_caller_id() {
        let table = EntityTable::<Course>::new();
        let mut c = Course::new("Algebra", "Dr. Noether");
        c.id = 42;
        let stored = table.insert(c);
        assert_eq!(stored.id, 1);
        assert!(table.get(42).is_none());
        assert_eq!(table.get(1), Some(stored));
    }

    #[test]
    fn update_with_keeps_id() {
        let table = EntityTable::<Course>::new();
        let stored = table.insert(Course::new("Algebra", "Dr. Noether"));
        let updated = table
            .update_with(stored.id, |c| {
                c.id = 500;
                c.name = "Linear Algebra".into();
            })
            .unwrap();
        assert_eq!(updated.id, stored.id);
        assert_eq!(table.get(stored.id).unwrap().name, "Linear Algebra");
        assert_eq!(table.update_with(9, |_| {}), Err(StoreError::not_found("Course", 9)));
    }

    #[test]
    fn concurrent_inserts_get_distinct_ids() {
        let table = EntityTable::<Course>::new();
        std::thread::scope(|s| {
            for t in 0..8 {
                let table = &table;
                s.spawn(move || {
                    for i in 0..250 {
                        table.insert(Course::new(format!("c{t}-{i}"), "staff"));
                    }
                });
            }
        });
        let ids: HashSet<u64> = table.list().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 2000);
        assert_eq!(table.len(), 2000);
        assert_eq!(ids.iter().max(), Some(&2000));
    }

    #[test]
    fn list_is_ordered_by_id() {
        let table = EntityTable::<Course>::new();
        for n in ["a", "b", "c", "d"] {
            table.insert(Course::new(n, "x"));
        }
        table.remove(2);
        let ids: Vec<u64> = table.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }
}
