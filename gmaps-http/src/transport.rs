//! HTTP transport for Maps API requests.
//!
//! [`Transport`] is synchronous so the client stays usable from plain
//! blocking code. [`HttpTransport`] bridges to the async `reqwest` client by
//! running every request on a small multi-threaded Tokio runtime it owns.
//! Pooled connections live on that runtime, so they stay usable whichever
//! context the next call comes from.

use std::sync::mpsc;
use std::time::Duration;

use gmaps_core::MapsError;
use reqwest::Client;
use reqwest::header::HeaderMap;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::config::ClientConfig;

/// Unparsed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body decoded as text.
    pub body: String,
}

impl RawResponse {
    /// Build a response with no headers.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Whether the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Issue a GET request and hand back the raw response.
///
/// Implementations must not retry and must not interpret the body.
pub trait Transport {
    /// Fetch `url` with the given extra headers.
    ///
    /// # Errors
    ///
    /// Returns [`MapsError::Network`] or [`MapsError::Timeout`] when no
    /// response could be obtained.
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, MapsError>;
}

/// Error type for [`HttpTransport`] construction failures.
#[derive(Debug, Error)]
pub enum TransportBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// `reqwest`-backed [`Transport`].
///
/// # Runtime behaviour
///
/// Requests always run on the transport's own runtime. Outside any Tokio
/// runtime the caller blocks on it directly. Inside a multi-threaded runtime
/// the wait is wrapped in [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime the request is spawned onto the owned runtime
/// and the calling thread blocks until it completes, stalling the caller's
/// runtime for the duration of the call.
///
/// Dropping the transport shuts its runtime down in the background, so it
/// may be dropped from async code.
pub struct HttpTransport {
    client: Client,
    timeout: Duration,
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client", &self.client)
            .field("timeout", &self.timeout)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpTransport {
    /// Build a transport honouring the timeout, user agent and proxy
    /// settings of `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportBuildError> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout);
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(TransportBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("gmaps-http")
            .enable_all()
            .build()
            .map_err(TransportBuildError::Runtime)?;
        Ok(Self {
            client,
            timeout: config.timeout,
            runtime: Some(runtime),
        })
    }

    /// Spawn the request onto `runtime` and block on a channel for the
    /// result, for callers that cannot enter another runtime.
    fn get_detached(
        &self,
        runtime: &Runtime,
        url: &str,
        headers: &HeaderMap,
    ) -> Result<RawResponse, MapsError> {
        let (sender, receiver) = mpsc::sync_channel(1);
        let request = send(
            self.client.clone(),
            self.timeout,
            url.to_owned(),
            headers.clone(),
        );
        runtime.spawn(async move {
            // The receiver only disappears if the caller is gone.
            let _ = sender.send(request.await);
        });
        receiver.recv().map_err(|_| MapsError::Network {
            url: url.to_owned(),
            message: "request task ended without a response".to_owned(),
        })?
    }
}

async fn send(
    client: Client,
    timeout: Duration,
    url: String,
    headers: HeaderMap,
) -> Result<RawResponse, MapsError> {
    let response = client
        .get(&url)
        .headers(headers)
        .send()
        .await
        .map_err(|err| convert_reqwest_error(&err, &url, timeout))?;

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response
        .text()
        .await
        .map_err(|err| convert_reqwest_error(&err, &url, timeout))?;

    Ok(RawResponse {
        status,
        headers,
        body,
    })
}

fn convert_reqwest_error(error: &reqwest::Error, url: &str, timeout: Duration) -> MapsError {
    if error.is_timeout() {
        return MapsError::Timeout {
            url: url.to_owned(),
            timeout,
        };
    }

    MapsError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &HeaderMap) -> Result<RawResponse, MapsError> {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(MapsError::Network {
                url: url.to_owned(),
                message: "transport has shut down".to_owned(),
            });
        };
        let request = send(
            self.client.clone(),
            self.timeout,
            url.to_owned(),
            headers.clone(),
        );
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| runtime.block_on(request))
            }
            // block_on would panic inside a current_thread runtime.
            Ok(_) => self.get_detached(runtime, url, headers),
            Err(_) => runtime.block_on(request),
        }
    }
}

impl Drop for HttpTransport {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
