//! No-op provisioning connector library for Rust.
//!
//! Provides an async-first connector that keeps provisioned objects in a
//! pluggable store, allocates sequential identifiers and exposes a
//! deterministic synthetic schema covering every combination of attribute
//! capability flags.
//!
//! # Core Components
//!
//! - [`NopConnector`] - Connector implementing the provisioning operations
//! - [`ConnectorOperations`] - Trait for create, update, delete, search and scripts
//! - [`StorageProvider`] - Trait for implementing object stores
//! - [`schema::account_schema`] - Synthetic account schema
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nop_connector::{ConnectorConfiguration, NopConnector};
//! use nop_connector::storage::InMemoryStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectorConfiguration::from_json(r#"{"strict": true}"#)?;
//! let connector = NopConnector::init(config, InMemoryStorage::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connector;
pub mod error;
pub mod object;
pub mod schema;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::ConnectorConfiguration;
pub use connector::{ConnectorOperations, Filter, FilterTranslator, NopConnector};
pub use error::{ConnectorError, ConnectorResult, ValidationError};
pub use object::{Attribute, AttributeSet, ConnectorObject, ObjectClass, OperationOptions, Uid};
pub use schema::{AttributeInfo, AttributeType, ObjectClassInfo, Schema};
pub use storage::{InMemoryStorage, StorageProvider};
