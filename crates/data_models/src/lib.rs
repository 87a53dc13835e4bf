//! Shared data contracts for the outreach research pipeline
//!
//! Companies, contacts, email drafts and templates, users, tools, and the
//! request/response envelopes exchanged between the research agent, scraper,
//! draft agent, and orchestrator. Every record validates its fields when it is
//! constructed or decoded; an invalid instance is never handed back.
//!
//! # Examples
//!
//! ```
//! use data_models::{Company, EmailDraft, Rule, Schema};
//! use serde_json::json;
//!
//! let draft = EmailDraft::new("Hello", "Body", "to@example.com", Company::new("Acme").unwrap())
//!     .unwrap();
//! assert!(!draft.approved());
//!
//! let err = EmailDraft::from_value(json!({
//!     "subject": "Hello",
//!     "body": "Body",
//!     "recipient_email": "bad",
//!     "company": { "name": "Acme" }
//! }))
//! .unwrap_err();
//! assert!(err.has("recipient_email", Rule::Format));
//! ```

pub mod clock;
pub mod defaults;
pub mod entities;
pub mod envelopes;
pub mod errors;
pub mod samples;
pub mod schema;
pub mod value_objects;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entities::*;
pub use envelopes::*;
pub use errors::{Rule, ValidationError, Violation};
pub use schema::{Fields, Schema};
pub use value_objects::{FieldMap, Status, TextMap};

/// Version of the data contracts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
