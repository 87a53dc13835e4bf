//! Request and response envelopes exchanged between the pipeline services

mod requests;
mod responses;

pub use requests::{DraftRequest, OrchestrationRequest, ResearchRequest, ScrapeRequest};
pub use responses::{DraftResponse, OrchestrationResponse, ResearchResponse, ScrapeResponse};
