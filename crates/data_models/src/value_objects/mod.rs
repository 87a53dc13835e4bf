//! Value Objects - field formats, enumerations, and loosely typed maps

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::ValidationError;

mod email_address;
mod http_url;
mod status;

pub use email_address::{is_email_address, validate_email_address};
pub use http_url::{MAX_URL_LENGTH, is_http_url, validate_http_url};
pub use status::Status;

/// Free-form key/value map, ordered by key
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Key/value map whose values are all strings
pub type TextMap = BTreeMap<String, String>;

/// Build a `validator` error that carries the rejected input
pub(crate) fn format_error(
    code: &'static str,
    message: &'static str,
    value: &str,
) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err.add_param(Cow::Borrowed("value"), &value);
    err
}
