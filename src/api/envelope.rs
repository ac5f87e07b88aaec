//! The response envelope shared by every backend endpoint.

use serde::Deserialize;

use crate::error::{ApiError, FALLBACK_ERROR_MESSAGE};
use crate::models::{NewsRecord, PaginationMeta};

/// `{ success, data?, message?, errors? }` — the shape of every response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorDetail>>,
}

/// One entry of the envelope's nested error list.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// Payload of a list response.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsListData {
    pub news: Vec<NewsRecord>,
    pub pagination: PaginationMeta,
}

impl<T> ApiEnvelope<T> {
    /// Flatten the envelope's error text. Priority: nested error-list
    /// messages joined, then the single message field, then the fixed
    /// fallback string.
    pub fn error_message(&self) -> String {
        if let Some(errors) = &self.errors {
            if !errors.is_empty() {
                return errors
                    .iter()
                    .map(|detail| detail.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
            }
        }
        self.message
            .clone()
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
    }

    /// Unwrap the envelope into its data payload, classifying failures:
    /// `success: false` is an application error; `success: true` without
    /// data is a malformed response.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Application {
                message: self.error_message(),
            });
        }
        let message = self.error_message();
        self.data
            .ok_or(ApiError::MalformedResponse { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_list_takes_priority_and_is_joined() {
        let envelope: ApiEnvelope<()> = serde_json::from_str(
            r#"{"success":false,"message":"outer","errors":[{"message":"first"},{"message":"second"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.error_message(), "first, second");
    }

    #[test]
    fn single_message_when_error_list_absent_or_empty() {
        let envelope: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success":false,"message":"server says no","errors":[]}"#)
                .unwrap();
        assert_eq!(envelope.error_message(), "server says no");
    }

    #[test]
    fn fallback_when_nothing_is_supplied() {
        let envelope: ApiEnvelope<()> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(envelope.error_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn success_false_classifies_as_application_error() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":false,"message":"nope"}"#).unwrap();
        match envelope.into_data() {
            Err(ApiError::Application { message }) => assert_eq!(message, "nope"),
            other => panic!("expected Application error, got {:?}", other),
        }
    }

    #[test]
    fn success_without_data_is_malformed() {
        let envelope: ApiEnvelope<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(matches!(
            envelope.into_data(),
            Err(ApiError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn success_with_data_unwraps() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"success":true,"data":42}"#).unwrap();
        assert_eq!(envelope.into_data().unwrap(), 42);
    }
}
