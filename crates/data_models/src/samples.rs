//! Reference payloads for documentation and contract tests
//!
//! Each function returns the canonical example of one record as a plain JSON
//! value, in the shape another service would send it.

use serde_json::{Value, json};

/// A Toronto street address
pub fn address() -> Value {
    json!({
        "street": "123 Main St",
        "city": "Toronto",
        "state": "ON",
        "country": "Canada",
        "postal_code": "M5H 2N2"
    })
}

/// Contact channels for a company
pub fn contact_info() -> Value {
    json!({
        "email": "contact@example.com",
        "phone": "+1-555-0100",
        "website": "https://example.com",
        "linkedin": "https://linkedin.com/company/example"
    })
}

/// A researched target company with contact details
pub fn company() -> Value {
    json!({
        "name": "Tech Innovations Inc",
        "website": "https://techinnovations.com",
        "industry": "Technology",
        "description": "AI-powered solutions for businesses",
        "employee_count": 50,
        "revenue": "$5M-$10M",
        "founded_year": 2018,
        "contact_info": {
            "email": "info@techinnovations.com",
            "phone": "+1-555-0100"
        },
        "services": ["Web Development", "AI Consulting"],
        "source": "research-agent",
        "confidence_score": 0.95
    })
}

/// The sender's own profile, as loaded from settings
pub fn company_profile() -> Value {
    json!({
        "company": {
            "name": "Carm Visuals",
            "website": "https://carmvisuals.com",
            "industry": "Design & Marketing"
        },
        "tagline": "Bringing your vision to life",
        "mission": "To help businesses succeed through exceptional design",
        "values": ["Quality", "Innovation", "Client-First"],
        "services_detailed": [
            {
                "name": "Web Design",
                "description": "Custom, responsive websites"
            }
        ],
        "unique_selling_points": [
            "10+ years experience",
            "100% satisfaction guarantee"
        ],
        "team_members": [
            {
                "name": "Justin",
                "role": "Founder & Lead Designer"
            }
        ]
    })
}

/// A personalized outreach draft to the company from [`company`]
pub fn email_draft() -> Value {
    json!({
        "subject": "Partnership Opportunity for Tech Innovations Inc",
        "body": "Hi John,\n\nI noticed your company...",
        "preview_text": "Quick question about your web presence",
        "recipient_email": "john@techinnovations.com",
        "recipient_name": "John Smith",
        "company": {
            "name": "Tech Innovations Inc",
            "website": "https://techinnovations.com"
        },
        "personalization_data": {
            "pain_point": "outdated website",
            "service": "Web Design"
        },
        "template_name": "professional_outreach",
        "tone": "professional"
    })
}

/// The professional cold-outreach template
pub fn email_template() -> Value {
    json!({
        "name": "professional_outreach",
        "description": "Professional cold outreach template",
        "category": "outreach",
        "subject_template": "Partnership Opportunity for {company_name}",
        "body_template": "Hi {recipient_name},\n\nI noticed {company_name}...",
        "required_variables": ["company_name", "recipient_name"],
        "optional_variables": ["pain_point", "service"],
        "tone": "professional",
        "length": "medium"
    })
}

/// A notification from the draft agent to a user
pub fn message() -> Value {
    json!({
        "content": "Email draft has been created",
        "sender": "draft-agent",
        "recipient": "user-123",
        "message_type": "notification"
    })
}

/// Cost and timing figures for one service call
pub fn service_metrics() -> Value {
    json!({
        "duration_seconds": 45.2,
        "tokens_used": 1500,
        "estimated_cost": 0.015,
        "requests_made": 3,
        "cache_hits": 1,
        "cache_misses": 2
    })
}

/// An LLM connection failure reported by a service
pub fn error_response() -> Value {
    json!({
        "error": "Failed to connect to LLM service",
        "error_code": "LLM_CONNECTION_ERROR",
        "details": { "service": "azure-openai", "endpoint": "..." },
        "timestamp": "2024-01-15T10:30:00Z"
    })
}
