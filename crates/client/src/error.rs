//! Error types for the Elasticsearch client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by Elasticsearch.
    #[error("API error ({status}) at {url}: {body}")]
    ApiError {
        status: u16,
        url: String,
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid or missing base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No credentials were supplied to the client builder.
    #[error("Credentials are required")]
    MissingCredentials,
}

impl ClientError {
    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server answered 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Raw response body of an API error.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::ApiError { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Check if the request never reached the server.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://localhost:9200/_search".to_string(),
            body: "{\"error\":\"boom\"}".to_string(),
        }
    }

    #[test]
    fn test_status_of_api_error() {
        assert_eq!(api_error(500).status(), Some(500));
        assert_eq!(ClientError::InvalidResponse("x".to_string()).status(), None);
    }

    #[test]
    fn test_is_not_found() {
        assert!(api_error(404).is_not_found());
        assert!(!api_error(401).is_not_found());
        assert!(!ClientError::MissingCredentials.is_not_found());
    }

    #[test]
    fn test_body_is_exposed_for_api_errors() {
        assert_eq!(api_error(400).body(), Some("{\"error\":\"boom\"}"));
        assert_eq!(ClientError::InvalidUrl("x".to_string()).body(), None);
    }

    #[test]
    fn test_display_includes_status_and_url() {
        let message = api_error(503).to_string();
        assert!(message.contains("503"));
        assert!(message.contains("http://localhost:9200/_search"));
    }
}
