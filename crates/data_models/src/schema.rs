//! Decode, default, and validate pipeline shared by every record
//!
//! Decoding a raw [`Value`] into a record runs in three passes:
//!
//! 1. a structural pass that flags missing or null required fields, flags
//!    non-objects where a record is expected, and fills absent
//!    default-factory timestamps from the [`Clock`];
//! 2. typed deserialization through serde, tracking the path of a failing field;
//! 3. constraint checks (length, range, email, URL) through `validator`.
//!
//! Any failure aborts construction with a [`ValidationError`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::{Path, Segment};
use tracing::{debug, trace};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::clock::{Clock, SystemClock};
use crate::errors::{Rule, ValidationError, Violation};
use crate::value_objects::FieldMap;

/// A validated record that can be built from and turned into plain JSON values
pub trait Schema: Serialize + DeserializeOwned + Validate + Sized {
    /// Record name reported in errors
    const NAME: &'static str;

    /// Fields that must be present and non-null
    const REQUIRED: &'static [&'static str] = &[];

    /// Fill defaults and descend into nested records ahead of typed decoding
    fn prepare(_fields: &mut Fields<'_, '_>) {}

    /// Check every declared constraint on an instance built in Rust
    ///
    /// # Examples
    ///
    /// ```
    /// use data_models::{Company, Rule, Schema};
    ///
    /// let company = Company {
    ///     founded_year: Some(1700),
    ///     ..Company::new("Acme").unwrap()
    /// };
    /// let err = company.validated().unwrap_err();
    /// assert!(err.has("founded_year", Rule::Range));
    /// ```
    fn validated(self) -> Result<Self, ValidationError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(errors) => {
                let mut violations = Vec::new();
                collect(&errors, "", &mut violations);
                Err(reject(Self::NAME, violations))
            },
        }
    }

    /// Decode from a generic value, stamping defaults with the system clock
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        Self::from_value_with_clock(value, &SystemClock)
    }

    /// Decode from a generic value, stamping defaults with `clock`
    ///
    /// The clock is read at most once, however many timestamps are defaulted.
    fn from_value_with_clock(mut value: Value, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let mut preparer = Preparer::new(clock);
        preparer.object::<Self>(&mut value, "");
        if !preparer.violations.is_empty() {
            return Err(reject(Self::NAME, preparer.violations));
        }

        let record: Self = serde_path_to_error::deserialize(&value).map_err(|e| {
            let (path, found) = locate(e.path(), &value);
            let message = e.into_inner().to_string();
            reject(
                Self::NAME,
                vec![Violation::new(path, Rule::Type, found, message)],
            )
        })?;
        let record = record.validated()?;

        trace!(record = Self::NAME, "payload accepted");
        Ok(record)
    }

    /// Decode from JSON text, stamping defaults with the system clock
    fn from_json(text: &str) -> Result<Self, ValidationError> {
        Self::from_json_with_clock(text, &SystemClock)
    }

    /// Decode from JSON text, stamping defaults with `clock`
    fn from_json_with_clock(text: &str, clock: &dyn Clock) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            reject(
                Self::NAME,
                vec![Violation::new(
                    "",
                    Rule::Type,
                    None,
                    format!("malformed JSON: {e}"),
                )],
            )
        })?;
        Self::from_value_with_clock(value, clock)
    }

    /// Encode field-for-field; absent optional fields become `null`
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Encode as compact JSON text
    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn reject(record: &'static str, violations: Vec<Violation>) -> ValidationError {
    debug!(record, violations = violations.len(), "payload rejected");
    ValidationError::new(record, violations)
}

fn join(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_owned()
    } else {
        format!("{prefix}.{field}")
    }
}

/// Render a serde error path and find the input value it points at
fn locate(path: &Path, root: &Value) -> (String, Option<Value>) {
    let mut rendered = String::new();
    let mut current = Some(root);
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => {
                rendered.push_str(&format!("[{index}]"));
                current = current.and_then(|v| v.get(index));
            },
            Segment::Map { key } | Segment::Enum { variant: key } => {
                rendered = join(&rendered, key);
                current = current.and_then(|v| v.get(key));
            },
            Segment::Unknown => {
                current = None;
                break;
            },
        }
    }
    (rendered, current.cloned())
}

/// State of the structural pass over one top-level payload
struct Preparer<'c> {
    clock: &'c dyn Clock,
    now: Option<DateTime<Utc>>,
    violations: Vec<Violation>,
}

impl<'c> Preparer<'c> {
    fn new(clock: &'c dyn Clock) -> Self {
        Self {
            clock,
            now: None,
            violations: Vec::new(),
        }
    }

    fn now(&mut self) -> DateTime<Utc> {
        *self.now.get_or_insert_with(|| self.clock.now())
    }

    fn object<T: Schema>(&mut self, value: &mut Value, path: &str) {
        if !value.is_object() {
            self.violations
                .push(Violation::type_mismatch(path, "an object", value));
            return;
        }
        let Some(map) = value.as_object_mut() else {
            return;
        };

        for field in T::REQUIRED {
            let present = map.get(*field);
            if present.is_none_or(Value::is_null) {
                self.violations
                    .push(Violation::required(join(path, field), present));
            }
        }

        T::prepare(&mut Fields {
            map,
            path,
            preparer: self,
        });
    }
}

/// Raw fields of one record during the structural pass
pub struct Fields<'a, 'c> {
    map: &'a mut FieldMap,
    path: &'a str,
    preparer: &'a mut Preparer<'c>,
}

impl std::fmt::Debug for Fields<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fields")
            .field("path", &self.path)
            .field("keys", &self.map.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Fields<'_, '_> {
    /// Stamp `field` with the current time when the key is absent
    ///
    /// An explicit `null` is left alone.
    pub fn timestamp(&mut self, field: &str) {
        if self.map.contains_key(field) {
            return;
        }
        let now = self.preparer.now();
        self.map.insert(
            field.to_owned(),
            Value::String(now.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
    }

    /// Descend into an embedded record
    pub fn record<T: Schema>(&mut self, field: &str) {
        if let Some(value) = self.map.get_mut(field).filter(|v| !v.is_null()) {
            self.preparer.object::<T>(value, &join(self.path, field));
        }
    }

    /// Descend into every element of a list of records
    pub fn records<T: Schema>(&mut self, field: &str) {
        if let Some(Value::Array(items)) = self.map.get_mut(field) {
            let path = join(self.path, field);
            for (index, item) in items.iter_mut().enumerate() {
                self.preparer.object::<T>(item, &format!("{path}[{index}]"));
            }
        }
    }
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = join(prefix, field);
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|error| violation_from(&path, error)));
            },
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), out);
                }
            },
        }
    }
}

fn violation_from(path: &str, error: &validator::ValidationError) -> Violation {
    let rule = Rule::from_code(&error.code);
    let message = error
        .message
        .as_ref()
        .map_or_else(|| describe(rule, error), ToString::to_string);
    Violation::new(path, rule, error.params.get("value").cloned(), message)
}

fn describe(rule: Rule, error: &validator::ValidationError) -> String {
    let min = error.params.get("min");
    let max = error.params.get("max");
    match (rule, min, max) {
        (Rule::Range, Some(min), Some(max)) => format!("must be between {min} and {max}"),
        (Rule::Range, Some(min), None) => format!("must be at least {min}"),
        (Rule::Range, None, Some(max)) => format!("must be at most {max}"),
        (Rule::MinLength, Some(min), _) => format!("must have at least {min} characters"),
        _ => format!("failed `{}` check", error.code),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use validator::Validate;

    use super::*;
    use crate::clock::{FixedClock, MockClock};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
    struct Leaf {
        #[validate(length(min = 1))]
        label: String,
        #[validate(range(min = 0, max = 9))]
        rank: Option<i64>,
    }

    impl Schema for Leaf {
        const NAME: &'static str = "Leaf";
        const REQUIRED: &'static [&'static str] = &["label"];
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
    struct Tree {
        #[validate(nested)]
        root: Leaf,
        #[validate(nested)]
        leaves: Vec<Leaf>,
        planted_at: DateTime<Utc>,
        pruned_at: Option<DateTime<Utc>>,
    }

    impl Schema for Tree {
        const NAME: &'static str = "Tree";
        const REQUIRED: &'static [&'static str] = &["root", "leaves"];

        fn prepare(fields: &mut Fields<'_, '_>) {
            fields.record::<Leaf>("root");
            fields.records::<Leaf>("leaves");
            fields.timestamp("planted_at");
            fields.timestamp("pruned_at");
        }
    }

    fn fixed() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
    }

    #[test]
    fn missing_required_field_is_named() {
        let err = Leaf::from_value(json!({})).unwrap_err();
        assert_eq!(err.record(), "Leaf");
        assert!(err.has("label", Rule::Required));
        assert!(err.violation("label").unwrap().value.is_none());
    }

    #[test]
    fn null_required_field_is_named() {
        let err = Leaf::from_value(json!({ "label": null })).unwrap_err();
        assert!(err.has("label", Rule::Required));
        assert_eq!(err.violation("label").unwrap().value, Some(Value::Null));
    }

    #[test]
    fn nested_paths_use_dots_and_indices() {
        let err = Tree::from_value_with_clock(
            json!({ "root": {}, "leaves": [{ "label": "a" }, { "rank": 1 }] }),
            &fixed(),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["leaves[1].label", "root.label"]);
    }

    #[test]
    fn non_object_record_is_type_violation() {
        let err = Tree::from_value_with_clock(json!({ "root": "x", "leaves": [] }), &fixed())
            .unwrap_err();
        assert!(err.has("root", Rule::Type));

        let err = Leaf::from_value(json!([1, 2])).unwrap_err();
        assert!(err.has("", Rule::Type));
    }

    #[test]
    fn serde_type_errors_are_reported() {
        let err = Leaf::from_value(json!({ "label": "a", "rank": "high" })).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        let violation = err.violation("rank").unwrap();
        assert_eq!(violation.rule, Rule::Type);
        assert_eq!(violation.value, Some(json!("high")));
    }

    #[test]
    fn type_errors_in_nested_records_carry_their_path() {
        let err = Tree::from_value_with_clock(
            json!({ "root": { "label": "r" }, "leaves": [{ "label": "a" }, { "label": 7 }] }),
            &fixed(),
        )
        .unwrap_err();
        assert_eq!(err.fields(), vec!["leaves[1].label"]);
        let violation = err.violation("leaves[1].label").unwrap();
        assert_eq!(violation.rule, Rule::Type);
        assert_eq!(violation.value, Some(json!(7)));
        assert!(violation.message.contains("expected a string"));
    }

    #[test]
    fn malformed_timestamp_is_named() {
        let err = Tree::from_value_with_clock(
            json!({ "root": { "label": "r" }, "leaves": [], "planted_at": "yesterday" }),
            &fixed(),
        )
        .unwrap_err();
        assert!(err.has("planted_at", Rule::Type));
        assert_eq!(
            err.violation("planted_at").unwrap().value,
            Some(json!("yesterday"))
        );
    }

    #[test]
    fn constraint_violations_carry_value_and_message() {
        let err = Tree::from_value_with_clock(
            json!({ "root": { "label": "" }, "leaves": [{ "label": "a", "rank": 12 }] }),
            &fixed(),
        )
        .unwrap_err();

        let rank = err.violation("leaves[0].rank").unwrap();
        assert_eq!(rank.rule, Rule::Range);
        assert_eq!(rank.value, Some(json!(12)));
        assert!(rank.message.starts_with("must be between"));

        let label = err.violation("root.label").unwrap();
        assert_eq!(label.rule, Rule::MinLength);
        assert_eq!(label.value, Some(json!("")));
    }

    #[test]
    fn absent_timestamps_take_the_clock_time() {
        let clock = fixed();
        let tree = Tree::from_value_with_clock(
            json!({ "root": { "label": "r" }, "leaves": [] }),
            &clock,
        )
        .unwrap();
        assert_eq!(tree.planted_at, clock.now());
        assert_eq!(tree.pruned_at, Some(clock.now()));
    }

    #[test]
    fn explicit_null_timestamp_is_kept() {
        let tree = Tree::from_value_with_clock(
            json!({ "root": { "label": "r" }, "leaves": [], "pruned_at": null }),
            &fixed(),
        )
        .unwrap();
        assert!(tree.pruned_at.is_none());
    }

    #[test]
    fn clock_is_sampled_once_per_construction() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let mut clock = MockClock::new();
        clock.expect_now().times(1).return_const(at);

        let tree =
            Tree::from_value_with_clock(json!({ "root": { "label": "r" }, "leaves": [] }), &clock)
                .unwrap();
        assert_eq!(tree.planted_at, at);
        assert_eq!(tree.pruned_at, Some(at));
    }

    #[test]
    fn clock_is_not_read_without_timestamp_fields() {
        let mut clock = MockClock::new();
        clock.expect_now().times(0);
        Leaf::from_value_with_clock(json!({ "label": "a" }), &clock).unwrap();
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = Leaf::from_json("{ not json").unwrap_err();
        assert!(err.violations()[0].message.starts_with("malformed JSON"));
    }

    #[test]
    fn encoding_keeps_absent_optionals_as_null() {
        let leaf = Leaf {
            label: "a".into(),
            rank: None,
        };
        assert_eq!(leaf.to_value().unwrap(), json!({ "label": "a", "rank": null }));
        assert_eq!(Leaf::from_json(&leaf.to_json().unwrap()).unwrap(), leaf);
    }
}
