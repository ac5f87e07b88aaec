//! Error taxonomy for the FortuneNews API client.
//!
//! Every failure mode a fetch can produce is classified into one closed
//! variant set, each carrying what [`ApiError::user_message`] needs to
//! normalize it into a single human-readable string for the UI.

use thiserror::Error;

/// Fixed fallback when no more specific message is available.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to load news";

/// Closed set of fetch failure modes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection, DNS, TLS, timeout, body read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP status. This wins over anything the body says, even a
    /// `success: true` envelope. `message` prefers the body's error text.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Well-formed envelope with `success: false`.
    #[error("{message}")]
    Application { message: String },

    /// `success: true` without the expected data payload, or a body that
    /// does not decode as the envelope at all.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl ApiError {
    /// Normalize to the single string stored in UI-facing `error` state.
    ///
    /// Priority mirrors the backend contract: server-supplied message text
    /// first (already flattened into the variant at classification time),
    /// then the transport error's own text, then the fixed fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(err) => {
                let text = err.to_string();
                if text.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    text
                }
            }
            ApiError::HttpStatus { message, .. } | ApiError::Application { message } => {
                if message.is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
            ApiError::MalformedResponse { .. } => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_message_is_passed_through_verbatim() {
        let err = ApiError::Application {
            message: "新闻不存在".to_string(),
        };
        assert_eq!(err.user_message(), "新闻不存在");
    }

    #[test]
    fn http_status_prefers_body_message() {
        let err = ApiError::HttpStatus {
            status: 502,
            message: "upstream unavailable".to_string(),
        };
        assert_eq!(err.user_message(), "upstream unavailable");
        assert_eq!(err.to_string(), "HTTP 502: upstream unavailable");
    }

    #[test]
    fn empty_message_falls_back_to_fixed_string() {
        let err = ApiError::Application {
            message: String::new(),
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn malformed_response_uses_fallback() {
        let err = ApiError::MalformedResponse {
            message: "missing data".to_string(),
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }
}
