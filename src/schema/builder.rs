//! Builders for attribute definitions and schemas.
//!
//! [`AttributeInfoBuilder`] is reused across many definitions by the
//! synthesizer, so its flag setters mutate in place. [`SchemaBuilder`] guards
//! the one structural invariant of a schema: attribute names are unique
//! within an object class.

use super::types::{
    AttributeInfo, AttributeType, CURRENT_PASSWORD, DISABLE_DATE, ENABLE, ENABLE_DATE, LOCK_OUT,
    NAME, ObjectClassInfo, PASSWORD, PASSWORD_EXPIRATION_DATE, Schema,
};
use crate::error::{ConnectorError, ConnectorResult};
use std::collections::HashSet;

/// Rejected attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeInfoError {
    #[error("Attribute name must not be blank")]
    BlankName,
}

/// Mutable builder for [`AttributeInfo`].
///
/// Defaults: creatable, updateable, readable and returned by default; not
/// required and single-valued.
#[derive(Debug, Clone)]
pub struct AttributeInfoBuilder {
    name: String,
    value_type: AttributeType,
    creatable: bool,
    updateable: bool,
    required: bool,
    readable: bool,
    returned_by_default: bool,
    multi_valued: bool,
}

impl AttributeInfoBuilder {
    pub fn new(name: impl Into<String>, value_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            value_type,
            creatable: true,
            updateable: true,
            required: false,
            readable: true,
            returned_by_default: true,
            multi_valued: false,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_type(&mut self, value_type: AttributeType) {
        self.value_type = value_type;
    }

    pub fn set_creatable(&mut self, value: bool) {
        self.creatable = value;
    }

    pub fn set_updateable(&mut self, value: bool) {
        self.updateable = value;
    }

    pub fn set_required(&mut self, value: bool) {
        self.required = value;
    }

    pub fn set_readable(&mut self, value: bool) {
        self.readable = value;
    }

    pub fn set_returned_by_default(&mut self, value: bool) {
        self.returned_by_default = value;
    }

    pub fn set_multi_valued(&mut self, value: bool) {
        self.multi_valued = value;
    }

    /// Mark the attribute required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark the attribute as neither readable nor returned by default.
    pub fn hidden(mut self) -> Self {
        self.readable = false;
        self.returned_by_default = false;
        self
    }

    /// Build the definition from the current builder state.
    pub fn build(&self) -> Result<AttributeInfo, AttributeInfoError> {
        if self.name.trim().is_empty() {
            return Err(AttributeInfoError::BlankName);
        }

        Ok(AttributeInfo {
            name: self.name.clone(),
            value_type: self.value_type,
            creatable: self.creatable,
            updateable: self.updateable,
            required: self.required,
            readable: self.readable,
            returned_by_default: self.returned_by_default,
            multi_valued: self.multi_valued,
        })
    }
}

impl Default for AttributeInfoBuilder {
    fn default() -> Self {
        Self::new(String::new(), AttributeType::default())
    }
}

/// Assembles a [`Schema`] one object class at a time.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    object_classes: Vec<ObjectClassInfo>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define an object class with the given attributes.
    ///
    /// Fails if the class is already defined or two attributes share a name.
    pub fn define_object_class(
        mut self,
        type_name: impl Into<String>,
        attributes: Vec<AttributeInfo>,
    ) -> ConnectorResult<Self> {
        let type_name = type_name.into();
        if self
            .object_classes
            .iter()
            .any(|info| info.type_name == type_name)
        {
            return Err(ConnectorError::schema_synthesis(format!(
                "Object class '{}' is defined twice",
                type_name
            )));
        }

        let mut seen = HashSet::with_capacity(attributes.len());
        for attribute in &attributes {
            if !seen.insert(attribute.name.as_str()) {
                return Err(ConnectorError::schema_synthesis(format!(
                    "Duplicate attribute '{}' in object class '{}'",
                    attribute.name, type_name
                )));
            }
        }

        self.object_classes.push(ObjectClassInfo {
            type_name,
            attributes,
        });
        Ok(self)
    }

    pub fn build(self) -> Schema {
        Schema {
            object_classes: self.object_classes,
        }
    }
}

/// The naming attribute: required, creatable, readable, returned by default.
pub fn name_attribute() -> AttributeInfo {
    AttributeInfo {
        name: NAME.to_string(),
        value_type: AttributeType::String,
        creatable: true,
        updateable: true,
        required: true,
        readable: true,
        returned_by_default: true,
        multi_valued: false,
    }
}

/// Predefined operational attributes carried by every account.
pub fn operational_attributes() -> ConnectorResult<Vec<AttributeInfo>> {
    build_all(&[
        AttributeInfoBuilder::new(CURRENT_PASSWORD, AttributeType::GuardedString).hidden(),
        AttributeInfoBuilder::new(DISABLE_DATE, AttributeType::Long),
        AttributeInfoBuilder::new(ENABLE, AttributeType::Boolean),
        AttributeInfoBuilder::new(ENABLE_DATE, AttributeType::Long),
        AttributeInfoBuilder::new(LOCK_OUT, AttributeType::Boolean),
        AttributeInfoBuilder::new(PASSWORD, AttributeType::GuardedString).hidden(),
        AttributeInfoBuilder::new(PASSWORD_EXPIRATION_DATE, AttributeType::Long),
    ])
}

/// Build every definition, failing on the first rejected builder.
fn build_all(builders: &[AttributeInfoBuilder]) -> ConnectorResult<Vec<AttributeInfo>> {
    builders
        .iter()
        .map(|builder| {
            builder.build().map_err(|e| {
                ConnectorError::schema_synthesis(format!(
                    "Predefined attribute '{}' was rejected: {}",
                    builder.name, e
                ))
            })
        })
        .collect()
}
