//! Account payloads used across the integration tests.

use nop_connector::{Attribute, AttributeSet};
use nop_connector::schema::{CURRENT_PASSWORD, ENABLE, PASSWORD};

/// Minimal account: only the name.
pub fn account_minimal(name: &str) -> AttributeSet {
    AttributeSet::new().with(Attribute::name_of(name))
}

/// Account with contact details.
pub fn account_with_contact(name: &str) -> AttributeSet {
    account_minimal(name)
        .with(Attribute::single("Email", format!("{}@example.com", name)))
        .with(Attribute::single("Phone", "+1-555-0100"))
}

/// Account carrying the operational password and enable attributes.
pub fn account_with_credentials(name: &str) -> AttributeSet {
    account_minimal(name)
        .with(Attribute::single(PASSWORD, "initial"))
        .with(Attribute::single(ENABLE, true))
}

/// Password change that also carries the current password.
pub fn password_change(new_password: &str) -> AttributeSet {
    AttributeSet::new()
        .with(Attribute::single(PASSWORD, new_password))
        .with(Attribute::single(CURRENT_PASSWORD, "initial"))
}
