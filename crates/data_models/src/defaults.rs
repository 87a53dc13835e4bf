//! Default values for fields callers may leave out

/// `ResearchRequest::max_results` and `OrchestrationRequest::max_companies`
pub const DEFAULT_MAX_RESULTS: i64 = 10;

/// `ScrapeRequest::timeout_seconds`
pub const DEFAULT_TIMEOUT_SECONDS: i64 = 30;

/// Tone used by draft requests and templates
pub const DEFAULT_TONE: &str = "professional";

/// `EmailTemplate::length`
pub const DEFAULT_LENGTH: &str = "medium";

/// `DraftRequest::personalization_level`
pub const DEFAULT_PERSONALIZATION_LEVEL: &str = "high";

/// `EmailDraft::version`
pub const DEFAULT_DRAFT_VERSION: i64 = 1;

pub(crate) const fn max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

pub(crate) const fn timeout_seconds() -> Option<i64> {
    Some(DEFAULT_TIMEOUT_SECONDS)
}

pub(crate) fn tone() -> Option<String> {
    Some(DEFAULT_TONE.to_owned())
}

pub(crate) fn length() -> Option<String> {
    Some(DEFAULT_LENGTH.to_owned())
}

pub(crate) fn personalization_level() -> Option<String> {
    Some(DEFAULT_PERSONALIZATION_LEVEL.to_owned())
}

pub(crate) const fn draft_version() -> Option<i64> {
    Some(DEFAULT_DRAFT_VERSION)
}

pub(crate) const fn zero() -> Option<i64> {
    Some(0)
}

pub(crate) const fn yes() -> bool {
    true
}

pub(crate) const fn no() -> Option<bool> {
    Some(false)
}
