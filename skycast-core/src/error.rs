use thiserror::Error;

/// Why a single lookup failed.
///
/// The `Display` text is the message shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The query was blank after trimming; nothing was sent.
    #[error("Please enter a city name!")]
    EmptyInput,

    /// The endpoint answered 404: no location matches the query.
    #[error("City not found! Please check spelling.")]
    NotFound,

    /// The endpoint answered 401: the API key was rejected.
    #[error("API key invalid!")]
    InvalidCredential,

    /// Any other non-success status, transport failure or unreadable body.
    /// `detail` is for logs only.
    #[error("Failed to fetch weather data.")]
    UpstreamError { detail: String },
}

impl LookupError {
    pub fn upstream(detail: impl Into<String>) -> Self {
        LookupError::UpstreamError { detail: detail.into() }
    }

    /// Map a non-success HTTP status to the matching error kind.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            404 => LookupError::NotFound,
            401 => LookupError::InvalidCredential,
            _ => LookupError::upstream(format!("status {status}: {}", truncate_body(body))),
        }
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(LookupError::from_status(404, ""), LookupError::NotFound);
        assert_eq!(LookupError::from_status(401, ""), LookupError::InvalidCredential);
        assert!(matches!(
            LookupError::from_status(500, "boom"),
            LookupError::UpstreamError { .. }
        ));
        assert!(matches!(
            LookupError::from_status(429, ""),
            LookupError::UpstreamError { .. }
        ));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(LookupError::EmptyInput.to_string(), "Please enter a city name!");
        assert_eq!(LookupError::NotFound.to_string(), "City not found! Please check spelling.");
        assert_eq!(LookupError::InvalidCredential.to_string(), "API key invalid!");

        let err = LookupError::from_status(503, "service unavailable");
        assert_eq!(err.to_string(), "Failed to fetch weather data.");
        let LookupError::UpstreamError { detail } = err else {
            panic!("expected upstream error");
        };
        assert!(detail.contains("503"));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(150);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
    }
}
