//! Absolute http(s) URL format rule

use url::Url;
use validator::ValidationError;

use super::format_error;

/// Longest URL accepted in a URL-typed field
pub const MAX_URL_LENGTH: usize = 2083;

/// Check that `value` is an absolute `http`/`https` URL with a host
///
/// # Examples
///
/// ```
/// use data_models::value_objects::is_http_url;
///
/// assert!(is_http_url("https://example.com"));
/// assert!(!is_http_url("example.com"));
/// ```
pub fn is_http_url(value: &str) -> bool {
    rejection(value).is_none()
}

fn rejection(value: &str) -> Option<&'static str> {
    if value.len() > MAX_URL_LENGTH {
        return Some("URL is longer than 2083 characters");
    }
    let Ok(url) = Url::parse(value) else {
        return Some("value is not a valid absolute URL");
    };
    if !matches!(url.scheme(), "http" | "https") {
        return Some("URL scheme must be http or https");
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Some("URL has no host");
    }
    None
}

/// `validator` hook for URL-typed fields
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    match rejection(value) {
        None => Ok(()),
        Some(message) => Err(format_error("url", message, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_are_accepted() {
        assert!(is_http_url("https://example.com"));
        assert!(is_http_url("http://example.com/about?tab=team"));
        assert!(is_http_url("https://linkedin.com/company/example"));
    }

    #[test]
    fn missing_scheme_is_rejected() {
        assert!(!is_http_url("example.com"));
        assert!(!is_http_url("www.example.com/path"));
        assert!(!is_http_url(""));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert!(!is_http_url("ftp://example.com"));
        assert!(!is_http_url("mailto:info@example.com"));
    }

    #[test]
    fn overlong_url_is_rejected() {
        let url = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        let err = validate_http_url(&url).unwrap_err();
        assert_eq!(err.code, "url");
        assert_eq!(
            err.message.as_deref(),
            Some("URL is longer than 2083 characters")
        );
    }

    #[test]
    fn hook_explains_rejection() {
        let err = validate_http_url("example.com").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("value is not a valid absolute URL")
        );
        let err = validate_http_url("ftp://example.com").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("URL scheme must be http or https"));
    }
}
