//! Domain entities - companies, emails, users, tools, and shared service records

mod common;
mod company;
mod email;
mod tool;
mod user;

pub use common::{ErrorResponse, ServiceMetrics};
pub use company::{Address, Company, CompanyProfile, ContactInfo};
pub use email::{EmailDraft, EmailTemplate, Message};
pub use tool::{Tool, ToolExecution, ToolSettings};
pub use user::{User, UserProfile};
