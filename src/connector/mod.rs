//! Connector operations over the object store.
//!
//! [`NopConnector`] wires the pieces together: it allocates identifiers with
//! [`UidGenerator`], validates writes in strict mode, merges updates with
//! [`merge_attributes`] and projects query results with
//! [`project_attributes`].

pub mod filter;
pub mod merge;
pub mod nop;
pub mod operations;
pub mod projection;
pub mod uid_generator;
pub mod validation;


pub use filter::{Filter, FilterTranslator, PassThroughFilterTranslator};
pub use merge::merge_attributes;
pub use nop::{NopConnector, SCRIPT_RESULT, SchemaSource};
pub use operations::ConnectorOperations;
pub use projection::project_attributes;
pub use uid_generator::UidGenerator;
pub use validation::validate_attributes;
