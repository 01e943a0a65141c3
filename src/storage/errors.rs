//! Storage-specific error types.
//!
//! These errors describe failures of the backend itself and carry no
//! connector semantics. A missing object is not an error at this layer;
//! operations report it through `Option`/`bool` results instead.

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// An object with this identifier is already stored.
    #[error("Object already exists: {uid}")]
    AlreadyExists { uid: String },
}

impl StorageError {
    pub fn already_exists(uid: impl Into<String>) -> Self {
        Self::AlreadyExists { uid: uid.into() }
    }
}
