//! Request/response plumbing for the Maps web services.

use std::time::Duration;

use gmaps_core::{
    Endpoint, GeocodeRequest, MapsError, MatrixField, QueryParams, RouteRequest, append_query,
    check_status, matrix_value,
};
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::transport::{HttpTransport, RawResponse, Transport, TransportBuildError};

/// Client for the directions, distance-matrix and geocode services.
///
/// Every call is independent: the client holds only its configuration and
/// transport, so a shared reference can be used from several threads when
/// the transport allows it.
///
/// # Example
///
/// ```no_run
/// use gmaps_core::{RouteRequest, TravelMode};
/// use gmaps_http::MapsClient;
///
/// let client = MapsClient::new()?;
/// let request = RouteRequest::new("Kiev", "Lviv").with_mode(TravelMode::Driving);
/// let metres = client.get_distance(&request)?;
/// let travel_time = client.get_time(&request)?;
/// println!("{metres} m in {travel_time:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct MapsClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl MapsClient<HttpTransport> {
    /// Create a client for the public API with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, TransportBuildError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: ClientConfig) -> Result<Self, TransportBuildError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> MapsClient<T> {
    /// Create a client over an arbitrary transport.
    #[must_use]
    pub const fn with_transport(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode `params` onto `url` and GET it, returning the raw response.
    ///
    /// Falsy parameters are dropped before encoding.
    ///
    /// # Errors
    ///
    /// Propagates transport failures unchanged.
    pub fn fetch_json(
        &self,
        url: &str,
        params: &QueryParams,
        headers: &HeaderMap,
    ) -> Result<RawResponse, MapsError> {
        let resolved = append_query(url, &params.encode());
        if self.config.verbose {
            info!("GET {resolved}");
        } else {
            debug!("GET {resolved}");
        }
        self.transport.get(&resolved, headers)
    }

    /// GET `url` with `params`, parse the JSON body and check its status.
    ///
    /// # Errors
    ///
    /// - Transport failures, unchanged.
    /// - [`MapsError::Http`] for a non-2xx response whose body is not JSON.
    /// - [`MapsError::Parse`] for a 2xx response whose body is not JSON.
    /// - [`MapsError::Api`] when `status` is not `"OK"`.
    pub fn make_request(&self, url: &str, params: &QueryParams) -> Result<Value, MapsError> {
        let response = self.fetch_json(url, params, &HeaderMap::new())?;
        let document = decode_body(&response, url)?;
        check_status(document)
    }

    /// Request directions for `request`.
    ///
    /// # Errors
    ///
    /// See [`MapsClient::make_request`].
    pub fn directions(&self, request: &RouteRequest) -> Result<Value, MapsError> {
        self.make_request(
            &self.config.endpoint_url(Endpoint::Directions),
            &request.directions_params(),
        )
    }

    /// Request the distance matrix for `request`.
    ///
    /// # Errors
    ///
    /// See [`MapsClient::make_request`].
    pub fn distance_matrix(&self, request: &RouteRequest) -> Result<Value, MapsError> {
        self.make_request(
            &self.config.endpoint_url(Endpoint::DistanceMatrix),
            &request.distance_matrix_params(),
        )
    }

    /// Geocode an address.
    ///
    /// # Errors
    ///
    /// See [`MapsClient::make_request`].
    pub fn geocode(&self, request: &GeocodeRequest) -> Result<Value, MapsError> {
        self.make_request(
            &self.config.endpoint_url(Endpoint::Geocode),
            &request.params(),
        )
    }

    /// Travel time from the first origin to the first destination.
    ///
    /// # Errors
    ///
    /// As [`MapsClient::distance_matrix`], plus [`MapsError::MissingField`]
    /// when the matrix has no first row, element or duration (for example
    /// when the pair is unreachable).
    pub fn get_time(&self, request: &RouteRequest) -> Result<Duration, MapsError> {
        let matrix = self.distance_matrix(request)?;
        matrix_value(&matrix, MatrixField::Duration).map(Duration::from_secs)
    }

    /// Travel distance in metres from the first origin to the first
    /// destination.
    ///
    /// # Errors
    ///
    /// As [`MapsClient::get_time`].
    pub fn get_distance(&self, request: &RouteRequest) -> Result<u64, MapsError> {
        let matrix = self.distance_matrix(request)?;
        matrix_value(&matrix, MatrixField::Distance)
    }
}

/// Parse the body as JSON, classifying failures by HTTP status.
fn decode_body(response: &RawResponse, url: &str) -> Result<Value, MapsError> {
    match serde_json::from_str(&response.body) {
        Ok(document) => Ok(document),
        Err(_) if !response.is_success() => Err(MapsError::Http {
            url: url.to_owned(),
            status: response.status,
            message: StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unexpected status")
                .to_owned(),
        }),
        Err(err) => Err(MapsError::Parse {
            message: err.to_string(),
        }),
    }
}
