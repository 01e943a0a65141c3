//! Connector configuration.
//!
//! The configuration is handed to [`NopConnector::init`](crate::NopConnector::init)
//! once and never changes afterwards. The only setting the core consults is
//! [`strict`](ConnectorConfiguration::strict), which turns on write-time
//! validation against the synthesized schema.

use crate::error::{ConnectorError, ConnectorResult};
use serde::{Deserialize, Serialize};

/// Configuration for a [`NopConnector`](crate::NopConnector).
///
/// # Examples
///
/// ```rust
/// use nop_connector::ConnectorConfiguration;
///
/// let config = ConnectorConfiguration::default().with_strict(true);
/// assert!(config.strict);
///
/// let parsed = ConnectorConfiguration::from_json(r#"{"strict": false}"#).unwrap();
/// assert!(!parsed.strict);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorConfiguration {
    /// Validate writes against the schema. Off by default, which accepts
    /// every write unconditionally.
    #[serde(default)]
    pub strict: bool,

    /// Free-form string parameter carried for configuration round trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str_config_param: Option<String>,
}

impl ConnectorConfiguration {
    /// Create a non-strict configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable strict validation.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set the free-form string parameter.
    pub fn with_str_config_param(mut self, value: impl Into<String>) -> Self {
        self.str_config_param = Some(value.into());
        self
    }

    /// Parse a configuration from its JSON form.
    pub fn from_json(content: &str) -> ConnectorResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConnectorError::invalid_configuration(e.to_string()))
    }

    /// Validate the configuration.
    ///
    /// Every combination of settings is acceptable.
    pub fn validate(&self) -> ConnectorResult<()> {
        Ok(())
    }
}
