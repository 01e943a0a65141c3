//! Object model shared by the connector operations.
//!
//! An object is a set of named, multi-valued [`Attribute`]s identified by a
//! [`Uid`]. Values are raw JSON values; the store never interprets them.

use crate::error::{ConnectorError, ConnectorResult};
use crate::schema::{ACCOUNT, NAME, UID};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Opaque identifier assigned to a stored object.
///
/// Identifiers produced by the connector are decimal counters, so ordering
/// compares length before content to keep `"9" < "10"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uid(String);

impl Uid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Identifier for the given counter value.
    pub fn from_index(index: u64) -> Self {
        Self(index.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl Ord for Uid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Uid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Named category of objects, e.g. `__ACCOUNT__`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectClass(String);

impl ObjectClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn account() -> Self {
        Self(ACCOUNT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named attribute with an ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    values: Vec<Value>,
}

impl Attribute {
    pub fn new<V: Into<Value>>(name: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Single-valued attribute.
    pub fn single(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    /// The `__NAME__` attribute.
    pub fn name_of(value: impl Into<String>) -> Self {
        Self::single(NAME, value.into())
    }

    /// The `__UID__` pseudo-attribute carrying an identifier.
    pub fn uid(uid: &Uid) -> Self {
        Self::single(UID, uid.value())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The first value, if any.
    pub fn single_value(&self) -> Option<&Value> {
        self.values.first()
    }
}

/// Attributes of one object, unique by name.
///
/// Inserting an attribute replaces any attribute of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Attribute>", into = "Vec<Attribute>")]
pub struct AttributeSet {
    attributes: BTreeMap<String, Attribute>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the one it replaced.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        self.attributes.insert(attribute.name.clone(), attribute)
    }

    /// Builder-style insert.
    pub fn with(mut self, attribute: Attribute) -> Self {
        self.insert(attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }

    /// The `__NAME__` attribute.
    pub fn name(&self) -> Option<&Attribute> {
        self.get(NAME)
    }

    /// Remove the `__UID__` pseudo-attribute and return the identifier it
    /// carried.
    ///
    /// Fails with [`ConnectorError::MissingUid`] when the attribute is absent
    /// and with [`ConnectorError::InvalidUid`] when it is present but its
    /// first value is not a non-blank string.
    pub fn take_uid(&mut self) -> ConnectorResult<Uid> {
        let attribute = self.remove(UID).ok_or(ConnectorError::MissingUid)?;
        match attribute.single_value() {
            Some(Value::String(value)) if !value.trim().is_empty() => Ok(Uid::new(value.as_str())),
            Some(other) => Err(ConnectorError::invalid_uid(format!(
                "expected a non-blank string, found {}",
                other
            ))),
            None => Err(ConnectorError::invalid_uid("no value")),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Attribute> for AttributeSet {
    fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
        for attribute in iter {
            self.insert(attribute);
        }
    }
}

impl IntoIterator for AttributeSet {
    type Item = Attribute;
    type IntoIter = std::collections::btree_map::IntoValues<String, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_values()
    }
}

impl From<Vec<Attribute>> for AttributeSet {
    fn from(attributes: Vec<Attribute>) -> Self {
        attributes.into_iter().collect()
    }
}

impl From<AttributeSet> for Vec<Attribute> {
    fn from(set: AttributeSet) -> Self {
        set.into_iter().collect()
    }
}

/// An object as handed to a query result handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorObject {
    pub uid: Uid,
    pub object_class: ObjectClass,
    pub attributes: AttributeSet,
}

impl ConnectorObject {
    pub fn new(uid: Uid, object_class: ObjectClass, attributes: AttributeSet) -> Self {
        Self {
            uid,
            object_class,
            attributes,
        }
    }

    /// The object's `__NAME__` value, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.attributes
            .name()
            .and_then(Attribute::single_value)
            .and_then(Value::as_str)
    }
}

/// Per-call options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationOptions {
    /// Restrict query results to these attributes (plus `__NAME__`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes_to_get: Option<Vec<String>>,
}

impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attributes_to_get<S: Into<String>>(
        mut self,
        names: impl IntoIterator<Item = S>,
    ) -> Self {
        self.attributes_to_get = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// A script submitted to one of the script operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptContext {
    pub language: String,
    pub text: String,
    #[serde(default)]
    pub arguments: BTreeMap<String, Value>,
}

impl ScriptContext {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
            arguments: BTreeMap::new(),
        }
    }
}
