//! In-memory storage implementation.
//!
//! Objects live in a `BTreeMap` behind an async `RwLock`, so scans run in
//! identifier order and each operation is atomic with respect to the others.
//! Nothing survives the process.
//!
//! # Performance Characteristics
//!
//! * INSERT/GET/EXISTS/MODIFY/REMOVE: O(log n)
//! * SCAN: O(k) for the k objects visited before the visitor stops
//! * COUNT: O(1)

use crate::object::{AttributeSet, Uid};
use crate::storage::{StorageError, StorageProvider};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    objects: Arc<RwLock<BTreeMap<Uid, AttributeSet>>>,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get storage statistics for debugging and monitoring.
    pub async fn stats(&self) -> InMemoryStorageStats {
        let objects = self.objects.read().await;
        InMemoryStorageStats {
            object_count: objects.len(),
            attribute_count: objects.values().map(AttributeSet::len).sum(),
        }
    }
}

impl StorageProvider for InMemoryStorage {
    type Error = StorageError;

    async fn insert(&self, uid: Uid, attributes: AttributeSet) -> Result<(), Self::Error> {
        let mut objects = self.objects.write().await;
        if objects.contains_key(&uid) {
            return Err(StorageError::already_exists(uid.value()));
        }
        objects.insert(uid, attributes);
        Ok(())
    }

    async fn get(&self, uid: &Uid) -> Result<Option<AttributeSet>, Self::Error> {
        let objects = self.objects.read().await;
        Ok(objects.get(uid).cloned())
    }

    async fn exists(&self, uid: &Uid) -> Result<bool, Self::Error> {
        Ok(self.objects.read().await.contains_key(uid))
    }

    async fn modify<F>(&self, uid: &Uid, f: F) -> Result<Option<AttributeSet>, Self::Error>
    where
        F: FnOnce(&AttributeSet) -> AttributeSet + Send,
    {
        let mut objects = self.objects.write().await;
        let Some(existing) = objects.get_mut(uid) else {
            return Ok(None);
        };
        *existing = f(existing);
        Ok(Some(existing.clone()))
    }

    async fn remove(&self, uid: &Uid) -> Result<bool, Self::Error> {
        let mut objects = self.objects.write().await;
        Ok(objects.remove(uid).is_some())
    }

    async fn scan<F>(&self, mut visitor: F) -> Result<usize, Self::Error>
    where
        F: FnMut(&Uid, &AttributeSet) -> bool + Send,
    {
        let objects = self.objects.read().await;
        let mut visited = 0;
        for (uid, attributes) in objects.iter() {
            visited += 1;
            if !visitor(uid, attributes) {
                break;
            }
        }
        Ok(visited)
    }

    async fn count(&self) -> Result<usize, Self::Error> {
        Ok(self.objects.read().await.len())
    }

    async fn clear(&self) -> Result<(), Self::Error> {
        self.objects.write().await.clear();
        Ok(())
    }
}

/// Statistics about the current state of in-memory storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStorageStats {
    /// Number of stored objects
    pub object_count: usize,
    /// Total attributes across all objects
    pub attribute_count: usize,
}
