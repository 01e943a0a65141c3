//! Core schema type definitions.
//!
//! These structures describe which attributes an object class exposes, the
//! value type each attribute holds, and which operations each attribute
//! permits.

use serde::{Deserialize, Serialize};

/// Name of the account object class.
pub const ACCOUNT: &str = "__ACCOUNT__";

/// Name of the naming attribute every object carries.
pub const NAME: &str = "__NAME__";
/// Name of the identifier-carrying pseudo-attribute.
pub const UID: &str = "__UID__";

pub const PASSWORD: &str = "__PASSWORD__";
pub const CURRENT_PASSWORD: &str = "__CURRENT_PASSWORD__";
pub const ENABLE: &str = "__ENABLE__";
pub const ENABLE_DATE: &str = "__ENABLE_DATE__";
pub const DISABLE_DATE: &str = "__DISABLE_DATE__";
pub const LOCK_OUT: &str = "__LOCK_OUT__";
pub const PASSWORD_EXPIRATION_DATE: &str = "__PASSWORD_EXPIRATION_DATE__";

/// Value types an attribute can hold.
///
/// The declaration order is significant: [`AttributeType::catalogue`] hands
/// the types to the synthesizer in this order and it assigns them
/// round-robin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    String,
    Long,
    Character,
    Double,
    Float,
    Integer,
    Boolean,
    /// Raw bytes
    ByteArray,
    BigDecimal,
    BigInteger,
    /// Epoch-based timestamp
    DateTime,
    /// Bytes that must never be logged or echoed
    GuardedByteArray,
    /// String that must never be logged or echoed
    GuardedString,
}

impl AttributeType {
    const CATALOGUE: [AttributeType; 13] = [
        AttributeType::String,
        AttributeType::Long,
        AttributeType::Character,
        AttributeType::Double,
        AttributeType::Float,
        AttributeType::Integer,
        AttributeType::Boolean,
        AttributeType::ByteArray,
        AttributeType::BigDecimal,
        AttributeType::BigInteger,
        AttributeType::DateTime,
        AttributeType::GuardedByteArray,
        AttributeType::GuardedString,
    ];

    /// Every supported type, in synthesis order.
    pub fn catalogue() -> &'static [AttributeType] {
        &Self::CATALOGUE
    }

    /// Simple name of the value type.
    ///
    /// Array forms are named after their component type with an `Array`
    /// suffix.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeType::String => "String",
            AttributeType::Long => "Long",
            AttributeType::Character => "Character",
            AttributeType::Double => "Double",
            AttributeType::Float => "Float",
            AttributeType::Integer => "Integer",
            AttributeType::Boolean => "Boolean",
            AttributeType::ByteArray => "byteArray",
            AttributeType::BigDecimal => "BigDecimal",
            AttributeType::BigInteger => "BigInteger",
            AttributeType::DateTime => "DateTime",
            AttributeType::GuardedByteArray => "GuardedByteArray",
            AttributeType::GuardedString => "GuardedString",
        }
    }
}

impl Default for AttributeType {
    fn default() -> Self {
        Self::String
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Definition of one named, typed attribute and its behavioral flags.
///
/// Built through [`AttributeInfoBuilder`](super::AttributeInfoBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: AttributeType,
    pub creatable: bool,
    pub updateable: bool,
    pub required: bool,
    pub readable: bool,
    pub returned_by_default: bool,
    pub multi_valued: bool,
}

impl AttributeInfo {
    /// Whether a write may carry this attribute at all.
    pub fn is_writable(&self) -> bool {
        self.creatable || self.updateable
    }
}

/// Attribute definitions of one object class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectClassInfo {
    pub type_name: String,
    pub attributes: Vec<AttributeInfo>,
}

impl ObjectClassInfo {
    /// Find an attribute definition by exact name.
    pub fn find_attribute(&self, name: &str) -> Option<&AttributeInfo> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Definitions that no write may carry.
    pub fn non_writable_attributes(&self) -> impl Iterator<Item = &AttributeInfo> {
        self.attributes.iter().filter(|attr| !attr.is_writable())
    }
}

/// The complete connector schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub object_classes: Vec<ObjectClassInfo>,
}

impl Schema {
    /// Find an object class by name.
    pub fn find_object_class_info(&self, type_name: &str) -> Option<&ObjectClassInfo> {
        self.object_classes
            .iter()
            .find(|info| info.type_name == type_name)
    }

    /// Names of all defined object classes.
    pub fn object_class_names(&self) -> Vec<&str> {
        self.object_classes
            .iter()
            .map(|info| info.type_name.as_str())
            .collect()
    }
}
