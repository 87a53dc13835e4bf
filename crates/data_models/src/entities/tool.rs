//! Tool catalogue, per-user settings, and execution records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::defaults;
use crate::schema::{Fields, Schema};
use crate::value_objects::FieldMap;

/// A tool offered on the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Tool {
    /// Tool ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// What the tool does
    pub description: String,
    /// Whether the tool is offered
    #[serde(default = "defaults::yes")]
    pub is_active: bool,
}

impl Tool {
    /// Create an active tool
    pub fn new(
        id: i64,
        name: impl Into<String>,
        slug: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            description: description.into(),
            is_active: true,
        }
    }
}

impl Schema for Tool {
    const NAME: &'static str = "Tool";
    const REQUIRED: &'static [&'static str] = &["id", "name", "slug", "description"];
}

/// Tool settings for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ToolSettings {
    pub tool_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub settings: FieldMap,
    #[serde(default = "defaults::yes")]
    pub is_enabled: bool,
}

impl ToolSettings {
    /// Enabled, with no settings
    pub fn new(tool_id: i64, user_id: i64) -> Self {
        Self {
            tool_id,
            user_id,
            settings: FieldMap::new(),
            is_enabled: true,
        }
    }
}

impl Schema for ToolSettings {
    const NAME: &'static str = "ToolSettings";
    const REQUIRED: &'static [&'static str] = &["tool_id", "user_id"];
}

/// Record of one tool run
///
/// `status` is free text; no set of values or transitions is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ToolExecution {
    /// Tool that ran
    pub tool_id: i64,
    /// User who ran it
    pub user_id: i64,
    /// Start time; stamped at construction when left out
    pub started_at: DateTime<Utc>,
    /// Finish time, if finished
    pub completed_at: Option<DateTime<Utc>>,
    /// Free-text progress, e.g. `running`
    pub status: String,
    /// Input the tool received
    pub input_data: Option<FieldMap>,
    /// Output the tool produced
    pub output_data: Option<FieldMap>,
    /// Failure reason, if it failed
    pub error_message: Option<String>,
}

impl ToolExecution {
    /// Execution started now by the system clock
    pub fn new(tool_id: i64, user_id: i64, status: impl Into<String>) -> Self {
        Self::new_with_clock(tool_id, user_id, status, &SystemClock)
    }

    /// Execution started at `clock`'s current time
    pub fn new_with_clock(
        tool_id: i64,
        user_id: i64,
        status: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            tool_id,
            user_id,
            started_at: clock.now(),
            completed_at: None,
            status: status.into(),
            input_data: None,
            output_data: None,
            error_message: None,
        }
    }
}

impl Schema for ToolExecution {
    const NAME: &'static str = "ToolExecution";
    const REQUIRED: &'static [&'static str] = &["tool_id", "user_id", "status"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.timestamp("started_at");
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::clock::FixedClock;
    use crate::errors::Rule;

    #[test]
    fn tool_is_active_by_default() {
        let tool = Tool::from_value(json!({
            "id": 1,
            "name": "Outreach",
            "slug": "outreach",
            "description": "Research and draft"
        }))
        .unwrap();
        assert!(tool.is_active);
        assert_eq!(tool, Tool::new(1, "Outreach", "outreach", "Research and draft"));
    }

    #[test]
    fn tool_requires_identity_fields() {
        let err = Tool::from_value(json!({ "id": 1 })).unwrap_err();
        assert_eq!(err.fields(), vec!["description", "name", "slug"]);
    }

    #[test]
    fn settings_default_to_empty_and_enabled() {
        let settings = ToolSettings::from_value(json!({ "tool_id": 1, "user_id": 2 })).unwrap();
        assert!(settings.settings.is_empty());
        assert!(settings.is_enabled);
        assert_eq!(settings, ToolSettings::new(1, 2));
    }

    #[test]
    fn execution_status_is_free_text() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let run = ToolExecution::from_value_with_clock(
            json!({ "tool_id": 1, "user_id": 2, "status": "waiting-on-scraper" }),
            &FixedClock::new(at),
        )
        .unwrap();
        assert_eq!(run.status, "waiting-on-scraper");
        assert_eq!(run.started_at, at);
        assert!(run.completed_at.is_none());
    }

    #[test]
    fn execution_requires_status() {
        let err = ToolExecution::from_value(json!({ "tool_id": 1, "user_id": 2 })).unwrap_err();
        assert!(err.has("status", Rule::Required));
    }
}
