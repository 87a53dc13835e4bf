//! Responses returned by the pipeline services

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{Company, EmailDraft, ServiceMetrics};
use crate::errors::ValidationError;
use crate::schema::{Fields, Schema};
use crate::value_objects::FieldMap;

/// Companies found by the research agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResearchResponse {
    #[validate(nested)]
    pub companies: Vec<Company>,
    pub total_found: i64,
    pub sources_used: Vec<String>,
    /// How long research took
    pub duration_seconds: f64,
    pub metrics: Option<ServiceMetrics>,
}

impl ResearchResponse {
    pub fn new(
        companies: Vec<Company>,
        total_found: i64,
        sources_used: Vec<String>,
        duration_seconds: f64,
    ) -> Result<Self, ValidationError> {
        Self {
            companies,
            total_found,
            sources_used,
            duration_seconds,
            metrics: None,
        }
        .validated()
    }
}

impl Schema for ResearchResponse {
    const NAME: &'static str = "ResearchResponse";
    const REQUIRED: &'static [&'static str] =
        &["companies", "total_found", "sources_used", "duration_seconds"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.records::<Company>("companies");
        fields.record::<ServiceMetrics>("metrics");
    }
}

/// Raw data collected by the scraper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ScrapeResponse {
    pub scraped_data: Vec<FieldMap>,
    pub successful_scrapes: i64,
    pub failed_scrapes: i64,
    /// How long scraping took
    pub duration_seconds: f64,
    pub metrics: Option<ServiceMetrics>,
}

impl ScrapeResponse {
    pub fn new(
        scraped_data: Vec<FieldMap>,
        successful_scrapes: i64,
        failed_scrapes: i64,
        duration_seconds: f64,
    ) -> Self {
        Self {
            scraped_data,
            successful_scrapes,
            failed_scrapes,
            duration_seconds,
            metrics: None,
        }
    }
}

impl Schema for ScrapeResponse {
    const NAME: &'static str = "ScrapeResponse";
    const REQUIRED: &'static [&'static str] = &[
        "scraped_data",
        "successful_scrapes",
        "failed_scrapes",
        "duration_seconds",
    ];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.record::<ServiceMetrics>("metrics");
    }
}

/// Drafts written by the draft agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DraftResponse {
    #[validate(nested)]
    pub drafts: Vec<EmailDraft>,
    pub total_generated: i64,
    pub template_used: Option<String>,
    /// How long drafting took
    pub duration_seconds: f64,
    pub metrics: Option<ServiceMetrics>,
}

impl DraftResponse {
    pub fn new(
        drafts: Vec<EmailDraft>,
        total_generated: i64,
        duration_seconds: f64,
    ) -> Result<Self, ValidationError> {
        Self {
            drafts,
            total_generated,
            template_used: None,
            duration_seconds,
            metrics: None,
        }
        .validated()
    }
}

impl Schema for DraftResponse {
    const NAME: &'static str = "DraftResponse";
    const REQUIRED: &'static [&'static str] = &["drafts", "total_generated", "duration_seconds"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.records::<EmailDraft>("drafts");
        fields.record::<ServiceMetrics>("metrics");
    }
}

/// Outcome of a whole orchestrated task
///
/// `status` is the orchestrator's own free-text value and is not limited to
/// [`Status`](crate::Status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrchestrationResponse {
    /// Unique task ID
    pub task_id: String,
    pub status: String,
    #[validate(nested)]
    pub research_results: Option<Vec<Company>>,
    pub scraped_data: Option<Vec<FieldMap>>,
    #[validate(nested)]
    pub drafts: Option<Vec<EmailDraft>>,
    /// Total workflow duration in seconds
    pub total_duration_seconds: f64,
    /// Seconds spent per step
    pub step_durations: Option<BTreeMap<String, f64>>,
    pub errors: Option<Vec<String>>,
}

impl OrchestrationResponse {
    /// Response with no results attached yet
    pub fn new(
        task_id: impl Into<String>,
        status: impl Into<String>,
        total_duration_seconds: f64,
    ) -> Self {
        Self {
            task_id: task_id.into(),
            status: status.into(),
            research_results: None,
            scraped_data: None,
            drafts: None,
            total_duration_seconds,
            step_durations: None,
            errors: None,
        }
    }
}

impl Schema for OrchestrationResponse {
    const NAME: &'static str = "OrchestrationResponse";
    const REQUIRED: &'static [&'static str] = &["task_id", "status", "total_duration_seconds"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.records::<Company>("research_results");
        fields.records::<EmailDraft>("drafts");
    }
}
