//! Schema definitions and the attribute-schema synthesizer.
//!
//! # Key Types
//!
//! - [`Schema`] - Object class definitions exposed by the connector
//! - [`AttributeInfo`] - One named, typed attribute and its flags
//! - [`AttributeType`] - The ordered catalogue of supported value types
//!
//! # Examples
//!
//! ```rust
//! use nop_connector::schema::{self, ACCOUNT, NAME};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = schema::account_schema()?;
//! let account = schema.find_object_class_info(ACCOUNT).unwrap();
//! assert!(account.find_attribute(NAME).unwrap().required);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod flags;
pub mod synthesizer;
pub mod types;


pub use builder::{AttributeInfoBuilder, AttributeInfoError, SchemaBuilder};
pub use flags::{FLAG_ORDER, Flag};
pub use synthesizer::{account_schema, is_excluded, synthesize};
pub use types::{
    ACCOUNT, AttributeInfo, AttributeType, CURRENT_PASSWORD, DISABLE_DATE, ENABLE, ENABLE_DATE,
    LOCK_OUT, NAME, ObjectClassInfo, PASSWORD, PASSWORD_EXPIRATION_DATE, Schema, UID,
};
