//! Attribute projection for query results.

use crate::object::AttributeSet;
use crate::schema::NAME;

/// Reduce a stored object's attributes to the requested subset.
///
/// With no request every attribute is returned. Otherwise the result holds
/// the requested attributes that exist (exact, case-sensitive names) plus
/// `__NAME__`, whether or not it was asked for.
pub fn project_attributes(attributes: &AttributeSet, requested: Option<&[String]>) -> AttributeSet {
    let Some(requested) = requested else {
        return attributes.clone();
    };

    requested
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(NAME))
        .filter_map(|name| attributes.get(name).cloned())
        .collect()
}
