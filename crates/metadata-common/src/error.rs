//! Error types for metadata resolution.

use thiserror::Error;

/// Result type alias using MetadataError.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Primary error type for metadata resolution.
///
/// "No metadata available" is never an error; resolvers report it as `None`.
#[derive(Debug, Error)]
pub enum MetadataError {
    // === Input Errors ===
    #[error("Malformed service URL: {0}")]
    MalformedUrl(String),

    // === Transport Errors ===
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    // === Response Errors ===
    #[error("Malformed response from {url}: {}{source}", describe_token(.token))]
    MalformedResponse {
        url: String,
        /// First offending character of the body, if the parser stopped on one.
        token: Option<char>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected response shape from {url}: {message}")]
    UnexpectedShape { url: String, message: String },
}

fn describe_token(token: &Option<char>) -> String {
    match token {
        Some(c) => format!("unexpected token '{}': ", c),
        None => String::new(),
    }
}

impl MetadataError {
    /// Build a transport error for a URL.
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        MetadataError::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Build a parse error, locating the character the parser choked on.
    pub fn malformed_response(url: impl Into<String>, body: &str, source: serde_json::Error) -> Self {
        let token = match source.classify() {
            serde_json::error::Category::Syntax => {
                offending_token(body, source.line(), source.column())
            }
            _ => None,
        };
        MetadataError::MalformedResponse {
            url: url.into(),
            token,
            source,
        }
    }

    /// Build an error for valid JSON with the wrong structure.
    pub fn unexpected_shape(url: impl Into<String>, message: impl Into<String>) -> Self {
        MetadataError::UnexpectedShape {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Stable name of the error kind, used in logs and rendered output.
    pub fn kind(&self) -> &'static str {
        match self {
            MetadataError::MalformedUrl(_) => "MalformedUrlError",
            MetadataError::Transport { .. } => "TransportError",
            MetadataError::MalformedResponse { .. } => "MalformedResponseError",
            MetadataError::UnexpectedShape { .. } => "UnexpectedShapeError",
        }
    }

    /// True when the server most likely answered with an HTML page instead of JSON.
    pub fn is_html_error_page(&self) -> bool {
        matches!(
            self,
            MetadataError::MalformedResponse {
                token: Some('<'),
                ..
            }
        )
    }

    /// URL of the request that failed, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            MetadataError::MalformedUrl(_) => None,
            MetadataError::Transport { url, .. }
            | MetadataError::MalformedResponse { url, .. }
            | MetadataError::UnexpectedShape { url, .. } => Some(url),
        }
    }
}

/// Find the character at serde_json's 1-based line / column position.
///
/// For syntax errors serde_json reports the byte column of the character it
/// peeked at, so the token starts at byte `column - 1` on that line.
fn offending_token(body: &str, line: usize, column: usize) -> Option<char> {
    if line == 0 || column == 0 {
        return None;
    }
    body.lines().nth(line - 1)?.get(column - 1..)?.chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(body: &str) -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>(body).unwrap_err()
    }

    #[test]
    fn test_html_body_reports_angle_bracket() {
        let body = "<html><body>404 Not Found</body></html>";
        let err = MetadataError::malformed_response("http://host/arcgis", body, parse_error(body));
        assert!(err.is_html_error_page());
        assert!(err.to_string().contains("unexpected token '<'"));
        assert_eq!(err.kind(), "MalformedResponseError");
    }

    #[test]
    fn test_html_body_after_whitespace() {
        let body = "\n\n  <!DOCTYPE html>";
        let err = MetadataError::malformed_response("u", body, parse_error(body));
        assert!(err.is_html_error_page());
    }

    #[test]
    fn test_token_located_after_multibyte_text() {
        let body = "{\"título\": 1} <html>";
        let err = MetadataError::malformed_response("u", body, parse_error(body));
        assert!(err.is_html_error_page());
        assert!(err.to_string().contains("unexpected token '<'"));
    }

    #[test]
    fn test_multibyte_token_reported_whole() {
        let body = "ñ";
        let err = MetadataError::malformed_response("u", body, parse_error(body));
        assert!(err.to_string().contains("unexpected token 'ñ'"));
    }

    #[test]
    fn test_truncated_json_is_not_html() {
        let body = "{\"a\": [1, 2";
        let err = MetadataError::malformed_response("u", body, parse_error(body));
        assert!(!err.is_html_error_page());
        assert!(!err.to_string().contains("unexpected token"));
        assert!(err.to_string().starts_with("Malformed response from u"));
    }

    #[test]
    fn test_transport_error_message() {
        let err = MetadataError::transport("http://host/x", "connection refused");
        assert_eq!(err.kind(), "TransportError");
        assert_eq!(err.url(), Some("http://host/x"));
        assert_eq!(
            err.to_string(),
            "Request to http://host/x failed: connection refused"
        );
    }

    #[test]
    fn test_malformed_url_has_no_url() {
        let err = MetadataError::MalformedUrl(String::new());
        assert_eq!(err.url(), None);
        assert_eq!(err.kind(), "MalformedUrlError");
    }
}
