use reqwest::StatusCode;

/// Shown when the backend rejects a lookup without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "City not found or weather service unavailable.";

/// Shown when the request could not be completed.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

/// Why a weather lookup produced no data to render.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The backend answered with a non-success status.
    #[error("backend rejected lookup with status {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("malformed weather response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    /// Text for the error banner.
    pub fn user_message(&self) -> &str {
        match self {
            LookupError::Rejected { message, .. } => message,
            LookupError::Network(_) | LookupError::Decode(_) => NETWORK_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_shows_backend_message() {
        let err = LookupError::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "City not found".into(),
        };

        assert_eq!(err.user_message(), "City not found");
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn decode_failure_shows_network_message() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::Decode(source);

        assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
    }
}
