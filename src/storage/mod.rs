//! Storage abstraction for connector objects.
//!
//! The `StorageProvider` trait holds attribute sets keyed by [`Uid`] and knows
//! nothing about schemas, validation or projection; those belong to the
//! connector. Each operation is atomic on its own: `modify` in particular
//! runs its read-modify-write under one write lock, so a concurrent `remove`
//! either happens entirely before it (and `modify` reports the object
//! missing) or entirely after it.
//!
//! # Example Usage
//!
//! ```rust
//! use nop_connector::object::{Attribute, AttributeSet, Uid};
//! use nop_connector::storage::{InMemoryStorage, StorageProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//! let uid = Uid::from_index(1);
//!
//! storage
//!     .insert(uid.clone(), AttributeSet::new().with(Attribute::name_of("jdoe")))
//!     .await?;
//! assert!(storage.get(&uid).await?.is_some());
//!
//! let was_removed = storage.remove(&uid).await?;
//! assert!(was_removed);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;


pub use errors::StorageError;
pub use in_memory::{InMemoryStorage, InMemoryStorageStats};

use crate::object::{AttributeSet, Uid};
use std::future::Future;

/// Core trait for object storage backends.
pub trait StorageProvider: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store a new object.
    ///
    /// Fails if an object with the same identifier already exists.
    fn insert(
        &self,
        uid: Uid,
        attributes: AttributeSet,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Retrieve a copy of an object's attributes.
    fn get(
        &self,
        uid: &Uid,
    ) -> impl Future<Output = Result<Option<AttributeSet>, Self::Error>> + Send;

    /// Check whether an object is stored.
    fn exists(&self, uid: &Uid) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Atomically replace an object's attributes with `f(existing)`.
    ///
    /// Returns the stored result, or `None` without calling `f` if the object
    /// does not exist.
    fn modify<F>(
        &self,
        uid: &Uid,
        f: F,
    ) -> impl Future<Output = Result<Option<AttributeSet>, Self::Error>> + Send
    where
        F: FnOnce(&AttributeSet) -> AttributeSet + Send;

    /// Delete an object, returning whether it existed.
    fn remove(&self, uid: &Uid) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Visit objects in identifier order until the visitor returns `false`.
    ///
    /// Returns the number of objects visited.
    fn scan<F>(&self, visitor: F) -> impl Future<Output = Result<usize, Self::Error>> + Send
    where
        F: FnMut(&Uid, &AttributeSet) -> bool + Send;

    /// Count stored objects.
    fn count(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send;

    /// Remove every object.
    fn clear(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
