//! Combinatorial attribute catalogue.
//!
//! The synthesizer walks a binary decision tree with one level per flag. Each
//! leaf fixes every flag, receives the next value type from a single shared
//! round-robin cursor, and becomes a definition named `TYPE` + flag path,
//! uppercased (e.g. `STRING_T_T_F_T_T_ARRAY`).
//!
//! A leaf is dropped when:
//!
//! - it is required but not creatable,
//! - it is returned by default but not readable,
//! - it is required and holds raw bytes,
//! - or the definition builder rejects it.
//!
//! Dropped leaves do not advance the type cursor. The output depends only on
//! the flag order and the type list, so every run yields the same catalogue.

use super::builder::{
    AttributeInfoBuilder, SchemaBuilder, name_attribute, operational_attributes,
};
use super::flags::{FLAG_ORDER, Flag};
use super::types::{ACCOUNT, AttributeInfo, AttributeType, Schema};
use crate::error::ConnectorResult;
use log::{debug, trace};

/// Generate one definition per accepted flag combination.
pub fn synthesize(flags: &[Flag], types: &[AttributeType]) -> Vec<AttributeInfo> {
    if types.is_empty() {
        return Vec::new();
    }

    debug!(
        "Synthesizing attributes over flags [{}] and {} types",
        flags.iter().map(|f| f.name).collect::<Vec<_>>().join(", "),
        types.len()
    );

    let mut synthesizer = Synthesizer {
        flags,
        types,
        cursor: 0,
        accepted: Vec::new(),
        excluded: 0,
        rejected: 0,
    };
    let mut builder = AttributeInfoBuilder::default();
    synthesizer.descend(&mut builder, 0, String::new());

    debug!(
        "Synthesized {} attributes ({} excluded, {} rejected by the builder)",
        synthesizer.accepted.len(),
        synthesizer.excluded,
        synthesizer.rejected
    );
    synthesizer.accepted
}

/// Whether a built definition is a nonsensical combination.
pub fn is_excluded(info: &AttributeInfo) -> bool {
    let required_but_not_creatable = info.required && !info.creatable;
    let returned_but_not_readable = info.returned_by_default && !info.readable;
    let required_bytes = info.required && info.value_type == AttributeType::ByteArray;
    required_but_not_creatable || returned_but_not_readable || required_bytes
}

/// Build the connector schema: the account class with its operational
/// attributes, the naming attribute and the synthesized catalogue.
pub fn account_schema() -> ConnectorResult<Schema> {
    let mut attributes = operational_attributes()?;
    attributes.push(name_attribute());
    attributes.extend(synthesize(FLAG_ORDER, AttributeType::catalogue()));

    Ok(SchemaBuilder::new()
        .define_object_class(ACCOUNT, attributes)?
        .build())
}

struct Synthesizer<'a> {
    flags: &'a [Flag],
    types: &'a [AttributeType],
    cursor: usize,
    accepted: Vec<AttributeInfo>,
    excluded: usize,
    rejected: usize,
}

impl Synthesizer<'_> {
    fn descend(&mut self, builder: &mut AttributeInfoBuilder, depth: usize, path: String) {
        let Some(&flag) = self.flags.get(depth) else {
            self.visit_leaf(builder, &path);
            return;
        };

        (flag.apply)(builder, true);
        self.descend(builder, depth + 1, format!("{}{}", path, flag.suffix(true)));
        (flag.apply)(builder, false);
        self.descend(builder, depth + 1, format!("{}{}", path, flag.suffix(false)));
    }

    fn visit_leaf(&mut self, builder: &mut AttributeInfoBuilder, path: &str) {
        let value_type = self.types[self.cursor];
        builder.set_name(format!("{}{}", value_type.type_name(), path).to_uppercase());
        builder.set_type(value_type);

        match builder.build() {
            Ok(info) if is_excluded(&info) => {
                trace!("Excluded {}", info.name);
                self.excluded += 1;
            }
            Ok(info) => {
                self.accepted.push(info);
                self.cursor = (self.cursor + 1) % self.types.len();
            }
            Err(e) => {
                trace!("Builder rejected leaf {}: {}", path, e);
                self.rejected += 1;
            }
        }
    }
}
