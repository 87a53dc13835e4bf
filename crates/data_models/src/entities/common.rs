//! Metrics and error records shared by every service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::schema::{Fields, Schema};
use crate::value_objects::FieldMap;

/// Cost and performance figures for one service call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ServiceMetrics {
    /// Operation duration in seconds
    pub duration_seconds: f64,
    /// LLM tokens used
    pub tokens_used: Option<i64>,
    /// Estimated cost in USD
    pub estimated_cost: Option<f64>,
    /// API requests made
    pub requests_made: Option<i64>,
    pub cache_hits: Option<i64>,
    pub cache_misses: Option<i64>,
}

impl ServiceMetrics {
    /// Metrics with only a duration
    pub const fn new(duration_seconds: f64) -> Self {
        Self {
            duration_seconds,
            tokens_used: None,
            estimated_cost: None,
            requests_made: None,
            cache_hits: None,
            cache_misses: None,
        }
    }
}

impl Schema for ServiceMetrics {
    const NAME: &'static str = "ServiceMetrics";
    const REQUIRED: &'static [&'static str] = &["duration_seconds"];
}

/// Standard error payload returned by a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Machine-readable code, e.g. `LLM_CONNECTION_ERROR`
    pub error_code: Option<String>,
    pub details: Option<FieldMap>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Error stamped with the system clock
    pub fn new(error: impl Into<String>) -> Self {
        Self::new_with_clock(error, &SystemClock)
    }

    /// Error stamped with `clock`
    pub fn new_with_clock(error: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            error: error.into(),
            error_code: None,
            details: None,
            timestamp: clock.now(),
        }
    }
}

impl Schema for ErrorResponse {
    const NAME: &'static str = "ErrorResponse";
    const REQUIRED: &'static [&'static str] = &["error"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.timestamp("timestamp");
    }
}
