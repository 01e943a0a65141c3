//! Error types for connector operations.
//!
//! Every operation reports failures synchronously through [`ConnectorResult`].
//! Validation failures are grouped under [`ValidationError`] so callers can
//! tell a rejected payload apart from a missing object.

/// Main error type for connector operations.
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// The identifier is not present in the store
    #[error("Unknown uid: {uid}")]
    UnknownUid { uid: String },

    /// An update payload carried no `__UID__` attribute at all
    #[error("Update payload is missing the __UID__ attribute")]
    MissingUid,

    /// The `__UID__` attribute is present but holds no usable identifier
    #[error("Invalid __UID__ attribute: {message}")]
    InvalidUid { message: String },

    /// Strict-mode validation rejected the attributes of a write
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The schema could not be assembled; nothing was cached
    #[error("Schema synthesis failed: {message}")]
    SchemaSynthesis { message: String },

    /// The storage backend failed
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// The supplied configuration was rejected
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Validation errors raised by strict mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required attribute is missing
    #[error("Required attribute '{attribute}' is missing")]
    MissingRequiredAttribute { attribute: String },

    /// Attribute is neither creatable nor updateable
    #[error("Non-writeable attribute '{attribute}' is present")]
    NonWritableAttribute { attribute: String },

    /// Object class has no schema definition
    #[error("Object class '{object_class}' is not defined in the schema")]
    UnknownObjectClass { object_class: String },
}

/// Result type for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

impl ConnectorError {
    /// Create an unknown uid error.
    pub fn unknown_uid(uid: impl Into<String>) -> Self {
        Self::UnknownUid { uid: uid.into() }
    }

    /// Create an invalid uid error.
    pub fn invalid_uid(message: impl Into<String>) -> Self {
        Self::InvalidUid {
            message: message.into(),
        }
    }

    /// Create a schema synthesis error.
    pub fn schema_synthesis(message: impl Into<String>) -> Self {
        Self::SchemaSynthesis {
            message: message.into(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Whether this error reports a missing object.
    pub fn is_unknown_uid(&self) -> bool {
        matches!(self, Self::UnknownUid { .. })
    }
}

impl ValidationError {
    /// Create a missing required attribute error.
    pub fn missing_required(attribute: impl Into<String>) -> Self {
        Self::MissingRequiredAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create a non-writable attribute error.
    pub fn non_writable(attribute: impl Into<String>) -> Self {
        Self::NonWritableAttribute {
            attribute: attribute.into(),
        }
    }

    /// Create an unknown object class error.
    pub fn unknown_object_class(object_class: impl Into<String>) -> Self {
        Self::UnknownObjectClass {
            object_class: object_class.into(),
        }
    }
}
