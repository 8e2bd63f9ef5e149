//! Field validation predicates
//!
//! Pure, total predicates gating wizard navigation. Malformed input yields
//! `false`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

// Shape check only: local@domain.tld with no whitespace anywhere.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A name is valid when the trimmed value is non-empty and contains only
/// letters, spaces, and hyphens.
pub fn is_valid_name(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
}

/// An email is valid when the trimmed value matches the basic
/// `local@domain.tld` shape. Deliverability is not verified.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}
