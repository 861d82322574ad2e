/// Logging utilities for PII redaction
///
/// Employee and customer records carry email addresses; these helpers keep
/// them out of log lines while preserving enough to debug.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving the domain
///
/// # Examples
/// ```
/// use samples_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("jane@example.com"), "***@example.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Truncates a request or record body for logging
pub fn preview_body(body: &str) -> String {
    const MAX_PREVIEW_CHARS: usize = 64;

    let redacted = redact_email(body);
    if redacted.chars().count() <= MAX_PREVIEW_CHARS {
        redacted
    } else {
        let preview: String = redacted.chars().take(MAX_PREVIEW_CHARS).collect();
        format!("{}...[{} bytes]", preview, body.len())
    }
}
