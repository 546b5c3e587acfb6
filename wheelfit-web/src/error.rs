use thiserror::Error;
use wheelfit_common::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response; displays exactly the server's message
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl ApiError {
    /// Build the error for a failed response from its raw body.
    ///
    /// Bodies that are not `{ "error": ... }` JSON fall back to the generic message.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message();
        ApiError::Server { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheelfit_common::DEFAULT_ERROR_MESSAGE;

    #[test]
    fn server_error_displays_exact_message() {
        let err = ApiError::from_response_body(404, r#"{"error": "X"}"#);
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn html_error_page_uses_default_message() {
        let err = ApiError::from_response_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn empty_error_field_uses_default_message() {
        let err = ApiError::from_response_body(500, r#"{"error": ""}"#);
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn keeps_status_code() {
        match ApiError::from_response_body(400, "{}") {
            ApiError::Server { status, .. } => assert_eq!(status, 400),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn network_error_is_prefixed() {
        assert_eq!(
            ApiError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
