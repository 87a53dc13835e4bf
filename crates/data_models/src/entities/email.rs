//! Email drafts, templates, and generic messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::clock::{Clock, SystemClock};
use crate::defaults;
use crate::entities::company::Company;
use crate::errors::ValidationError;
use crate::schema::{Fields, Schema};
use crate::value_objects::{FieldMap, validate_email_address};

/// A personalized outreach email produced by the draft agent
///
/// # Examples
///
/// ```
/// use data_models::{Company, EmailDraft};
///
/// let draft = EmailDraft::new(
///     "Hello",
///     "Body",
///     "to@example.com",
///     Company::new("Acme").unwrap(),
/// )
/// .unwrap();
/// assert!(!draft.approved());
/// assert_eq!(draft.version, Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmailDraft {
    /// Subject line
    #[validate(length(min = 1))]
    pub subject: String,
    /// Body content
    #[validate(length(min = 1))]
    pub body: String,
    /// Preview text shown by email clients
    pub preview_text: Option<String>,

    /// Recipient address
    #[validate(custom(function = "validate_email_address"))]
    pub recipient_email: String,
    /// Recipient name
    pub recipient_name: Option<String>,

    /// Target company
    #[validate(nested)]
    pub company: Company,

    /// Data used to personalize the draft
    pub personalization_data: Option<FieldMap>,

    /// Template used
    pub template_name: Option<String>,
    /// Tone used (professional, casual, ...)
    pub tone: Option<String>,

    /// Creation time; stamped at construction when left out
    pub created_at: Option<DateTime<Utc>>,
    /// Service or agent that created the draft
    pub created_by: Option<String>,
    /// Draft version number
    #[serde(default = "defaults::draft_version")]
    pub version: Option<i64>,

    /// Whether the user approved the draft
    #[serde(default = "defaults::no")]
    pub is_approved: Option<bool>,
    /// Whether the draft was sent
    #[serde(default = "defaults::no")]
    pub is_sent: Option<bool>,
    /// When it was sent
    pub sent_at: Option<DateTime<Utc>>,
}

impl EmailDraft {
    /// Create a draft stamped with the system clock
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        recipient_email: impl Into<String>,
        company: Company,
    ) -> Result<Self, ValidationError> {
        Self::new_with_clock(subject, body, recipient_email, company, &SystemClock)
    }

    /// Create a draft stamped with `clock`
    pub fn new_with_clock(
        subject: impl Into<String>,
        body: impl Into<String>,
        recipient_email: impl Into<String>,
        company: Company,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        Self {
            subject: subject.into(),
            body: body.into(),
            preview_text: None,
            recipient_email: recipient_email.into(),
            recipient_name: None,
            company,
            personalization_data: None,
            template_name: None,
            tone: None,
            created_at: Some(clock.now()),
            created_by: None,
            version: defaults::draft_version(),
            is_approved: defaults::no(),
            is_sent: defaults::no(),
            sent_at: None,
        }
        .validated()
    }

    /// `is_approved`, treating an unknown flag as not approved
    pub fn approved(&self) -> bool {
        self.is_approved.unwrap_or(false)
    }

    /// `is_sent`, treating an unknown flag as not sent
    pub fn sent(&self) -> bool {
        self.is_sent.unwrap_or(false)
    }
}

impl Schema for EmailDraft {
    const NAME: &'static str = "EmailDraft";
    const REQUIRED: &'static [&'static str] = &["subject", "body", "recipient_email", "company"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.record::<Company>("company");
        fields.timestamp("created_at");
    }
}

/// Reusable email template with `{placeholder}` tokens
///
/// The draft agent fills the placeholders; this record only carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmailTemplate {
    /// Template name
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    /// Category (outreach, follow-up, ...)
    pub category: Option<String>,

    /// Subject line with placeholders
    pub subject_template: String,
    /// Body with placeholders
    pub body_template: String,
    pub preview_text_template: Option<String>,

    /// Placeholders the caller must supply
    pub required_variables: Vec<String>,
    /// Placeholders the caller may supply
    pub optional_variables: Option<Vec<String>>,

    /// Default tone
    #[serde(default = "defaults::tone")]
    pub tone: Option<String>,
    /// Target length (short, medium, long)
    #[serde(default = "defaults::length")]
    pub length: Option<String>,

    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Times the template was used
    #[serde(default = "defaults::zero")]
    pub usage_count: Option<i64>,
}

impl EmailTemplate {
    /// Create a template stamped with the system clock
    pub fn new(
        name: impl Into<String>,
        subject_template: impl Into<String>,
        body_template: impl Into<String>,
        required_variables: Vec<String>,
    ) -> Result<Self, ValidationError> {
        Self::new_with_clock(
            name,
            subject_template,
            body_template,
            required_variables,
            &SystemClock,
        )
    }

    /// Create a template stamped with `clock`; both timestamps share one reading
    pub fn new_with_clock(
        name: impl Into<String>,
        subject_template: impl Into<String>,
        body_template: impl Into<String>,
        required_variables: Vec<String>,
        clock: &dyn Clock,
    ) -> Result<Self, ValidationError> {
        let now = clock.now();
        Self {
            name: name.into(),
            description: None,
            category: None,
            subject_template: subject_template.into(),
            body_template: body_template.into(),
            preview_text_template: None,
            required_variables,
            optional_variables: None,
            tone: defaults::tone(),
            length: defaults::length(),
            created_at: Some(now),
            updated_at: Some(now),
            usage_count: defaults::zero(),
        }
        .validated()
    }
}

impl Schema for EmailTemplate {
    const NAME: &'static str = "EmailTemplate";
    const REQUIRED: &'static [&'static str] = &[
        "name",
        "subject_template",
        "body_template",
        "required_variables",
    ];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.timestamp("created_at");
        fields.timestamp("updated_at");
    }
}

/// Generic text message (email, sms, notification)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Message {
    pub content: String,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub message_type: Option<String>,
    pub metadata: Option<FieldMap>,
}

impl Message {
    /// Create a message stamped with the system clock
    pub fn new(content: impl Into<String>) -> Self {
        Self::new_with_clock(content, &SystemClock)
    }

    /// Create a message stamped with `clock`
    pub fn new_with_clock(content: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            content: content.into(),
            sender: None,
            recipient: None,
            timestamp: clock.now(),
            message_type: None,
            metadata: None,
        }
    }
}

impl Schema for Message {
    const NAME: &'static str = "Message";
    const REQUIRED: &'static [&'static str] = &["content"];

    fn prepare(fields: &mut Fields<'_, '_>) {
        fields.timestamp("timestamp");
    }
}
