//! Validation errors raised while constructing or decoding records

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The rule a field value broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// A required field was absent or null
    Required,
    /// The value had the wrong shape (string where a number was expected, ...)
    Type,
    /// The value did not match a format such as an email address or URL
    Format,
    /// A number fell outside its allowed bounds
    Range,
    /// A string or list was shorter than allowed
    MinLength,
}

impl Rule {
    /// Wire name of the rule
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Type => "type",
            Self::Format => "format",
            Self::Range => "range",
            Self::MinLength => "min_length",
        }
    }

    /// Map a `validator` error code onto a rule
    pub(crate) fn from_code(code: &str) -> Self {
        match code {
            "length" => Self::MinLength,
            "range" => Self::Range,
            "required" => Self::Required,
            _ => Self::Format,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path to the field, with list indices in brackets (`drafts[0].subject`)
    pub path: String,
    /// The rule that was broken
    pub rule: Rule,
    /// The offending input, `None` when the field was absent
    pub value: Option<Value>,
    /// Human-readable explanation
    pub message: String,
}

impl Violation {
    /// Create a violation
    pub fn new(
        path: impl Into<String>,
        rule: Rule,
        value: Option<Value>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule,
            value,
            message: message.into(),
        }
    }

    /// A required field that was missing or explicitly null
    pub fn required(path: impl Into<String>, value: Option<&Value>) -> Self {
        Self::new(path, Rule::Required, value.cloned(), "field required")
    }

    /// A value whose shape does not match the declared type
    pub fn type_mismatch(path: impl Into<String>, expected: &str, value: &Value) -> Self {
        Self::new(
            path,
            Rule::Type,
            Some(value.clone()),
            format!("expected {expected}"),
        )
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "<root>" } else { &self.path };
        write!(f, "{path}: {} ({})", self.message, self.rule)
    }
}

/// Construction or decoding of a record failed
///
/// Always carries at least one [`Violation`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{record} failed validation: {}", summary(.violations))]
pub struct ValidationError {
    record: &'static str,
    violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Create an error for `record`; violations are ordered by path
    pub fn new(record: &'static str, mut violations: Vec<Violation>) -> Self {
        violations.sort_by(|a, b| a.path.cmp(&b.path));
        Self { record, violations }
    }

    /// Error with a single violation
    pub fn single(record: &'static str, violation: Violation) -> Self {
        Self::new(record, vec![violation])
    }

    /// Name of the record type that failed
    pub const fn record(&self) -> &'static str {
        self.record
    }

    /// Every violation found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Paths of the offending fields
    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.path.as_str()).collect()
    }

    /// Look up the violation reported for `path`
    pub fn violation(&self, path: &str) -> Option<&Violation> {
        self.violations.iter().find(|v| v.path == path)
    }

    /// Whether `path` broke `rule`
    pub fn has(&self, path: &str, rule: Rule) -> bool {
        self.violations
            .iter()
            .any(|v| v.path == path && v.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn required_violation_has_no_value_when_absent() {
        let v = Violation::required("name", None);
        assert_eq!(v.rule, Rule::Required);
        assert!(v.value.is_none());
        assert_eq!(v.to_string(), "name: field required (required)");
    }

    #[test]
    fn required_violation_keeps_explicit_null() {
        let v = Violation::required("name", Some(&Value::Null));
        assert_eq!(v.value, Some(Value::Null));
    }

    #[test]
    fn violations_are_sorted_by_path() {
        let err = ValidationError::new(
            "Company",
            vec![
                Violation::required("name", None),
                Violation::type_mismatch("address", "an object", &json!(3)),
            ],
        );
        assert_eq!(err.fields(), vec!["address", "name"]);
    }

    #[test]
    fn error_message_lists_every_violation() {
        let err = ValidationError::new(
            "EmailDraft",
            vec![
                Violation::required("subject", None),
                Violation::new(
                    "recipient_email",
                    Rule::Format,
                    Some(json!("bad")),
                    "value is not a valid email address",
                ),
            ],
        );
        assert_eq!(
            err.to_string(),
            "EmailDraft failed validation: recipient_email: value is not a valid email address \
             (format); subject: field required (required)"
        );
    }

    #[test]
    fn has_matches_path_and_rule() {
        let err = ValidationError::single("Company", Violation::required("name", None));
        assert!(err.has("name", Rule::Required));
        assert!(!err.has("name", Rule::Format));
        assert!(!err.has("website", Rule::Required));
        assert_eq!(err.record(), "Company");
    }

    #[test]
    fn root_path_is_rendered() {
        let v = Violation::type_mismatch("", "an object", &json!([]));
        assert_eq!(v.to_string(), "<root>: expected an object (type)");
    }

    #[test]
    fn rule_codes_map_from_validator() {
        assert_eq!(Rule::from_code("length"), Rule::MinLength);
        assert_eq!(Rule::from_code("range"), Rule::Range);
        assert_eq!(Rule::from_code("email"), Rule::Format);
        assert_eq!(Rule::from_code("url"), Rule::Format);
    }

    #[test]
    fn rule_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Rule::MinLength).unwrap(),
            r#""min_length""#
        );
    }
}
