//! Error taxonomy shared by every Maps API call.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::status::ApiStatus;

/// Errors from a Maps API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MapsError {
    /// The request could not reach the service.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Description reported by the transport.
        message: String,
    },
    /// The configured timeout elapsed before the response arrived.
    #[error("request to {url} timed out after {timeout:?}")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Timeout that elapsed.
        timeout: Duration,
    },
    /// The service answered with a non-success HTTP status and no JSON body.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Short description of the failure.
        message: String,
    },
    /// The response body was not valid JSON.
    #[error("failed to parse response: {message}")]
    Parse {
        /// Parser error message.
        message: String,
    },
    /// The API reported a status other than `OK`.
    ///
    /// `response` is the full parsed document for inspection.
    #[error("maps API returned {status}")]
    Api {
        /// Reported status.
        status: ApiStatus,
        /// Full response document.
        response: Value,
    },
    /// A successful response lacked the field being extracted, e.g. an
    /// empty `rows` array for a query with no results.
    #[error("response has no {path}{}", element_suffix(.element_status))]
    MissingField {
        /// JSON path that was absent, e.g. `rows[0].elements[0]`.
        path: String,
        /// Element-level `status`, when the element itself was present.
        element_status: Option<String>,
    },
}

impl MapsError {
    /// Reported API status, if this is an [`MapsError::Api`] error.
    #[must_use]
    pub const fn api_status(&self) -> Option<&ApiStatus> {
        match self {
            Self::Api { status, .. } => Some(status),
            _ => None,
        }
    }
}

fn element_suffix(element_status: &Option<String>) -> String {
    element_status
        .as_ref()
        .map(|status| format!(" (element status {status})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn api_error_exposes_status() {
        let err = MapsError::Api {
            status: ApiStatus::InvalidRequest,
            response: json!({"status": "INVALID_REQUEST"}),
        };
        assert_eq!(err.api_status(), Some(&ApiStatus::InvalidRequest));
        assert_eq!(
            err.to_string(),
            "maps API returned INVALID_REQUEST (the request was invalid)"
        );
    }

    #[rstest]
    fn missing_field_mentions_element_status() {
        let err = MapsError::MissingField {
            path: "rows[0].elements[0].duration.value".to_owned(),
            element_status: Some("ZERO_RESULTS".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "response has no rows[0].elements[0].duration.value (element status ZERO_RESULTS)"
        );
        assert_eq!(err.api_status(), None);
    }

    #[rstest]
    #[case(Duration::from_millis(300), "300ms")]
    #[case(Duration::from_secs(30), "30s")]
    fn timeout_keeps_sub_second_precision(#[case] timeout: Duration, #[case] shown: &str) {
        let err = MapsError::Timeout {
            url: "http://h/json".to_owned(),
            timeout,
        };
        assert_eq!(
            err.to_string(),
            format!("request to http://h/json timed out after {shown}")
        );
    }
}
