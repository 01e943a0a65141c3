//! Attribute merging for updates.

use crate::object::AttributeSet;
use crate::schema::CURRENT_PASSWORD;

/// Compute the attributes stored after an update.
///
/// Incoming attributes replace existing ones of the same name wholesale;
/// existing attributes absent from `incoming` survive. `__CURRENT_PASSWORD__`
/// is dropped from `incoming` and never persisted.
pub fn merge_attributes(existing: &AttributeSet, mut incoming: AttributeSet) -> AttributeSet {
    incoming.remove(CURRENT_PASSWORD);
    let mut merged = existing.clone();
    merged.extend(incoming);
    merged
}
