//! Strict-mode write validation.

use crate::error::ValidationError;
use crate::object::AttributeSet;
use crate::schema::{NAME, ObjectClassInfo};

/// Check a write against an object class definition.
///
/// `__NAME__` must be present when `check_required` is set, and no attribute
/// the schema marks as neither creatable nor updateable may appear.
/// Attributes the schema does not define are accepted.
pub fn validate_attributes(
    info: &ObjectClassInfo,
    attributes: &AttributeSet,
    check_required: bool,
) -> Result<(), ValidationError> {
    if check_required && !attributes.contains(NAME) {
        return Err(ValidationError::missing_required(NAME));
    }

    if let Some(attribute) = info
        .non_writable_attributes()
        .find(|attribute| attributes.contains(&attribute.name))
    {
        return Err(ValidationError::non_writable(&attribute.name));
    }

    Ok(())
}
