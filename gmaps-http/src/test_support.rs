//! Test utilities for Maps clients.
//!
//! This module provides [`StubTransport`], a deterministic test double for
//! [`Transport`] that answers every request with a pre-configured response
//! and records the URLs it was asked for.

use std::sync::{Mutex, PoisonError};

use gmaps_core::MapsError;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::transport::{RawResponse, Transport};

/// Stub [`Transport`] for testing.
///
/// # Example
///
/// ```
/// use gmaps_core::RouteRequest;
/// use gmaps_http::test_support::StubTransport;
/// use gmaps_http::{ClientConfig, MapsClient};
/// use serde_json::json;
///
/// let stub = StubTransport::with_json(&json!({
///     "status": "OK",
///     "rows": [{"elements": [{"distance": {"value": 540000}}]}]
/// }));
/// let client = MapsClient::with_transport(stub, ClientConfig::default());
///
/// let metres = client.get_distance(&RouteRequest::new("Kiev", "Lviv"))?;
/// assert_eq!(metres, 540_000);
/// assert_eq!(client.transport().requested_urls().len(), 1);
/// # Ok::<(), gmaps_core::MapsError>(())
/// ```
#[derive(Debug)]
pub struct StubTransport {
    response: StubResponse,
    requests: Mutex<Vec<String>>,
}

#[derive(Debug, Clone)]
enum StubResponse {
    Raw(RawResponse),
    Error(MapsError),
}

impl StubTransport {
    /// Answer every request with a `200 OK` carrying `document`.
    #[must_use]
    pub fn with_json(document: &Value) -> Self {
        Self::with_response(RawResponse::new(200, document.to_string()))
    }

    /// Answer every request with `response`.
    #[must_use]
    pub fn with_response(response: RawResponse) -> Self {
        Self::new(StubResponse::Raw(response))
    }

    /// Fail every request with `error`.
    #[must_use]
    pub fn with_error(error: MapsError) -> Self {
        Self::new(StubResponse::Error(error))
    }

    const fn new(response: StubResponse) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// URLs requested so far, in order.
    #[must_use]
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for StubTransport {
    fn get(&self, url: &str, _headers: &HeaderMap) -> Result<RawResponse, MapsError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_owned());

        match &self.response {
            StubResponse::Raw(response) => Ok(response.clone()),
            StubResponse::Error(error) => Err(error.clone()),
        }
    }
}
