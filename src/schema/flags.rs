//! Behavioral flags traversed by the synthesizer.
//!
//! The flags are plain static data: a name, the setter that applies the flag
//! to an [`AttributeInfoBuilder`], and whether a set flag denotes
//! multi-valuedness (which changes its name suffix).

use super::builder::AttributeInfoBuilder;

/// One behavioral flag of an attribute definition.
#[derive(Clone, Copy)]
pub struct Flag {
    pub name: &'static str,
    pub apply: fn(&mut AttributeInfoBuilder, bool),
    pub multi_value: bool,
}

impl Flag {
    /// Name-path suffix for the given branch.
    pub fn suffix(&self, value: bool) -> &'static str {
        match (value, self.multi_value) {
            (true, true) => "_Array",
            (true, false) => "_T",
            (false, _) => "_F",
        }
    }
}

impl std::fmt::Debug for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("name", &self.name)
            .field("multi_value", &self.multi_value)
            .finish()
    }
}

/// Flags in traversal order.
pub const FLAG_ORDER: &[Flag] = &[
    Flag {
        name: "creatable",
        apply: AttributeInfoBuilder::set_creatable,
        multi_value: false,
    },
    Flag {
        name: "updateable",
        apply: AttributeInfoBuilder::set_updateable,
        multi_value: false,
    },
    Flag {
        name: "required",
        apply: AttributeInfoBuilder::set_required,
        multi_value: false,
    },
    Flag {
        name: "readable",
        apply: AttributeInfoBuilder::set_readable,
        multi_value: false,
    },
    Flag {
        name: "returnedByDefault",
        apply: AttributeInfoBuilder::set_returned_by_default,
        multi_value: false,
    },
    Flag {
        name: "multiValued",
        apply: AttributeInfoBuilder::set_multi_valued,
        multi_value: true,
    },
];
