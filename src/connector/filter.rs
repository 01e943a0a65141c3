//! Filter translation.
//!
//! The connector has no query language of its own. Its translator produces no
//! native queries, which makes a search visit every stored object.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque filter expression supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(pub Value);

/// Translates caller filters into backend-native queries.
pub trait FilterTranslator {
    type Query;

    /// Translate a filter into zero or more native queries.
    ///
    /// An empty result means "no query": the search runs unfiltered.
    fn translate(&self, filter: Option<&Filter>) -> Vec<Self::Query>;
}

/// Translator that never produces a query.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughFilterTranslator;

impl FilterTranslator for PassThroughFilterTranslator {
    type Query = String;

    fn translate(&self, _filter: Option<&Filter>) -> Vec<String> {
        Vec::new()
    }
}
