//! Keyed record storage behind the catalog.

use std::sync::{Arc, RwLock};

use stockdesk_core::Entity;

/// Entity store abstraction. `list` returns records in insertion order.
pub trait Repository<V: Entity>: Send + Sync {
    fn get(&self, id: &V::Id) -> Option<V>;
    /// Insert, or replace in place when the id already exists.
    fn upsert(&self, value: V);
    fn remove(&self, id: &V::Id) -> Option<V>;
    fn list(&self) -> Vec<V>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V, S> Repository<V> for Arc<S>
where
    V: Entity,
    S: Repository<V> + ?Sized,
{
    fn get(&self, id: &V::Id) -> Option<V> {
        (**self).get(id)
    }

    fn upsert(&self, value: V) {
        (**self).upsert(value)
    }

    fn remove(&self, id: &V::Id) -> Option<V> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory, insertion-ordered store for tests/dev.
#[derive(Debug)]
pub struct InMemoryRepository<V> {
    inner: RwLock<Vec<V>>,
}

impl<V> InMemoryRepository<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
        }
    }

    pub fn with_records(records: Vec<V>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }
}

impl<V> Default for InMemoryRepository<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Repository<V> for InMemoryRepository<V>
where
    V: Entity + Clone + Send + Sync + 'static,
{
    fn get(&self, id: &V::Id) -> Option<V> {
        let records = self.inner.read().ok()?;
        records.iter().find(|r| r.id() == id).cloned()
    }

    fn upsert(&self, value: V) {
        if let Ok(mut records) = self.inner.write() {
            match records.iter_mut().find(|r| r.id() == value.id()) {
                Some(slot) => *slot = value,
                None => records.push(value),
            }
        }
    }

    fn remove(&self, id: &V::Id) -> Option<V> {
        let mut records = self.inner.write().ok()?;
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(records) => records.clone(),
            Err(_) => vec![],
        }
    }

    fn len(&self) -> usize {
        self.inner.read().map(|r| r.len()).unwrap_or(0)
    }
}
