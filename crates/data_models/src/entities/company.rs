//! Company records
//!
//! [`Company`] is the unit passed between services: research results, scraped
//! targets, and the sender's own company all use it. [`CompanyProfile`] wraps a
//! company with the brand and offering details the draft agent personalizes from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ValidationError;
use crate::schema::{Fields, Schema};
use crate::value_objects::{FieldMap, TextMap, validate_email_address, validate_http_url};

/// Physical address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Address {
    /// Street address
    pub street: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or province
    pub state: Option<String>,
    /// Country
    pub country: Option<String>,
    /// Postal or ZIP code
    pub postal_code: Option<String>,
}

impl Schema for Address {
    const NAME: &'static str = "Address";
}

/// Contact details for a company or person; every field may be unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactInfo {
    /// Contact email
    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,
    /// Phone number, free text
    pub phone: Option<String>,
    /// Website URL
    #[validate(custom(function = "validate_http_url"))]
    pub website: Option<String>,
    /// LinkedIn URL
    #[validate(custom(function = "validate_http_url"))]
    pub linkedin: Option<String>,
    /// Instagram URL
    #[validate(custom(function = "validate_http_url"))]
    pub instagram: Option<String>,
    /// Twitter/X URL
    #[validate(custom(function = "validate_http_url"))]
    pub twitter: Option<String>,
}

impl Schema for ContactInfo {
    const NAME: &'static str = "ContactInfo";
}

/// A company as found, scraped, or described
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Company {
    /// Company name
    #[validate(length(min = 1))]
    pub name: String,

    /// Company website
    #[validate(custom(function = "validate_http_url"))]
    pub website: Option<String>,
    /// Industry or sector
    pub industry: Option<String>,
    /// Free-text description
    pub description: Option<String>,

    /// Number of employees
    #[validate(range(min = 0))]
    pub employee_count: Option<i64>,
    /// Annual revenue as text, e.g. `"$1M-$5M"`
    pub revenue: Option<String>,
    /// Year founded
    #[validate(range(min = 1800, max = 2100))]
    pub founded_year: Option<i64>,

    /// Contact details
    #[validate(nested)]
    pub contact_info: Option<ContactInfo>,
    /// Physical address
    #[validate(nested)]
    pub address: Option<Address>,

    /// Services offered
    pub services: Option<Vec<String>>,
    /// Technologies used
    pub technologies: Option<Vec<String>>,
    /// Identified pain points
    pub pain_points: Option<Vec<String>>,

    /// Where the data came from
    pub source: Option<String>,
    /// When the data was found
    pub found_at: Option<DateTime<Utc>>,
    /// Confidence in the data, 0 to 1
    #[validate(range(min = 0.0, max = 1.0))]
    pub confidence_score: Option<f64>,
    /// Anything else
    pub metadata: Option<FieldMap>,
}

impl Company {
    /// Create a company with only a name
    ///
    /// # Examples
    ///
    /// ```
    /// use data_models::Company;
    ///
    /// let company = Company::new("Acme").unwrap();
    /// assert_eq!(company.name, "Acme");
    /// assert!(Company::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self {
            name: name.into(),
            website: None,
            industry: None,
            description: None,
            employee_count: None,
            revenue: None,
            founded_year: None,
            contact_info: None,
            address: None,
            services: None,
            technologies: None,
            pain_points: None,
            source: None,
            found_at: None,
            confidence_score: None,
            metadata: None,
        }
        .validated()
    }
}

impl Schema for Company {
    const NAME: &'static str = "Company";
    const REQUIRED: &'static [&'static str] = &["name"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.record::<ContactInfo>("contact_info");
        fields.record::<Address>("address");
    }
}

/// A company plus brand messaging, offerings, team, and social proof
///
/// The list-of-map fields carry whatever keys the profile author chose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CompanyProfile {
    /// The company itself
    #[validate(nested)]
    pub company: Company,

    /// One-line brand tagline
    pub tagline: Option<String>,
    /// Mission statement
    pub mission: Option<String>,
    /// Vision statement
    pub vision: Option<String>,
    /// Core values
    pub values: Option<Vec<String>>,

    /// Services with descriptions, e.g. `{"name": ..., "description": ...}`
    pub services_detailed: Option<Vec<TextMap>>,
    /// Past work to point prospects at
    pub portfolio_examples: Option<Vec<FieldMap>>,

    /// What sets the company apart
    pub unique_selling_points: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub awards: Option<Vec<String>>,

    /// Team members with roles, e.g. `{"name": ..., "role": ...}`
    pub team_members: Option<Vec<TextMap>>,

    /// Client quotes, e.g. `{"client": ..., "quote": ...}`
    pub client_testimonials: Option<Vec<TextMap>>,
    /// Longer write-ups of finished projects
    pub case_studies: Option<Vec<FieldMap>>,
}

impl CompanyProfile {
    /// Create a profile around `company` with every other field empty
    pub fn new(company: Company) -> Result<Self, ValidationError> {
        Self {
            company,
            tagline: None,
            mission: None,
            vision: None,
            values: None,
            services_detailed: None,
            portfolio_examples: None,
            unique_selling_points: None,
            certifications: None,
            awards: None,
            team_members: None,
            client_testimonials: None,
            case_studies: None,
        }
        .validated()
    }
}

impl Schema for CompanyProfile {
    const NAME: &'static str = "CompanyProfile";
    const REQUIRED: &'static [&'static str] = &["company"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.record::<Company>("company");
    }
}
