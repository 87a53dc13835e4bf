//! Requests sent to the pipeline services

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::defaults;
use crate::errors::ValidationError;
use crate::schema::Schema;
use crate::value_objects::{FieldMap, TextMap};

/// Ask the research agent for companies matching `criteria`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResearchRequest {
    /// Search criteria
    #[validate(length(min = 1))]
    pub criteria: String,
    /// Maximum number of companies, 1 to 100
    #[serde(default = "defaults::max_results")]
    #[validate(range(min = 1, max = 100))]
    pub max_results: i64,
    /// Sources to use
    pub sources: Option<Vec<String>>,
    /// Additional filters
    pub filters: Option<FieldMap>,
}

impl ResearchRequest {
    /// Request with the default result cap
    ///
    /// # Examples
    ///
    /// ```
    /// use data_models::ResearchRequest;
    ///
    /// let request = ResearchRequest::new("web design agencies in Toronto").unwrap();
    /// assert_eq!(request.max_results, 10);
    /// ```
    pub fn new(criteria: impl Into<String>) -> Result<Self, ValidationError> {
        Self {
            criteria: criteria.into(),
            max_results: defaults::DEFAULT_MAX_RESULTS,
            sources: None,
            filters: None,
        }
        .validated()
    }
}

impl Schema for ResearchRequest {
    const NAME: &'static str = "ResearchRequest";
    const REQUIRED: &'static [&'static str] = &["criteria"];
}

/// Ask the scraper to collect data on `companies` from `sources`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ScrapeRequest {
    /// Companies to scrape, e.g. `{"name": ..., "website": ...}`
    pub companies: Vec<TextMap>,
    /// Sources to scrape (website, linkedin, ...)
    pub sources: Vec<String>,
    /// Timeout per company, in seconds
    #[serde(default = "defaults::timeout_seconds")]
    pub timeout_seconds: Option<i64>,
}

impl ScrapeRequest {
    pub fn new(companies: Vec<TextMap>, sources: Vec<String>) -> Self {
        Self {
            companies,
            sources,
            timeout_seconds: defaults::timeout_seconds(),
        }
    }
}

impl Schema for ScrapeRequest {
    const NAME: &'static str = "ScrapeRequest";
    const REQUIRED: &'static [&'static str] = &["companies", "sources"];
}

/// Ask the draft agent to write emails to `companies` from `sender_company`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct DraftRequest {
    /// Target companies with whatever data is known about them
    pub companies: Vec<FieldMap>,
    /// Sender company profile
    pub sender_company: FieldMap,
    pub template_name: Option<String>,
    #[serde(default = "defaults::tone")]
    pub tone: Option<String>,
    #[serde(default = "defaults::personalization_level")]
    pub personalization_level: Option<String>,
}

impl DraftRequest {
    pub fn new(companies: Vec<FieldMap>, sender_company: FieldMap) -> Self {
        Self {
            companies,
            sender_company,
            template_name: None,
            tone: defaults::tone(),
            personalization_level: defaults::personalization_level(),
        }
    }
}

impl Schema for DraftRequest {
    const NAME: &'static str = "DraftRequest";
    const REQUIRED: &'static [&'static str] = &["companies", "sender_company"];
}

/// Ask the orchestrator to run a whole task, e.g. `research_and_draft`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrchestrationRequest {
    pub task_type: String,
    /// Research criteria
    pub criteria: String,
    /// Company cap, 1 to 100
    #[serde(default = "defaults::max_results")]
    #[validate(range(min = 1, max = 100))]
    pub max_companies: i64,
    pub sender_company_id: i64,
    pub user_id: i64,
    pub options: Option<FieldMap>,
}

impl OrchestrationRequest {
    pub fn new(
        task_type: impl Into<String>,
        criteria: impl Into<String>,
        sender_company_id: i64,
        user_id: i64,
    ) -> Self {
        Self {
            task_type: task_type.into(),
            criteria: criteria.into(),
            max_companies: defaults::DEFAULT_MAX_RESULTS,
            sender_company_id,
            user_id,
            options: None,
        }
    }
}

impl Schema for OrchestrationRequest {
    const NAME: &'static str = "OrchestrationRequest";
    const REQUIRED: &'static [&'static str] =
        &["task_type", "criteria", "sender_company_id", "user_id"];
}
