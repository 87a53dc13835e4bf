//! Email address format rule
//!
//! An address must pass the HTML5 grammar checked by `validator` and carry a
//! dotted domain whose last label starts with a letter. Values are stored as
//! given; nothing is lowercased or trimmed.
//!
//! # Examples
//!
//! ```
//! use data_models::value_objects::is_email_address;
//!
//! assert!(is_email_address("user@example.com"));
//! assert!(!is_email_address("not-an-email"));
//! assert!(!is_email_address("user@localhost"));
//! ```

use validator::{ValidateEmail, ValidationError};

use super::format_error;

/// Check an address against the email rule
pub fn is_email_address(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    labels
        .last()
        .and_then(|tld| tld.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// `validator` hook for email-typed fields
pub fn validate_email_address(value: &str) -> Result<(), ValidationError> {
    if is_email_address(value) {
        Ok(())
    } else {
        Err(format_error("email", "value is not a valid email address", value))
    }
}
