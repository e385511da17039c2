//! Facade crate for the Google Maps web service client.
//!
//! This crate re-exports the request and error types from `gmaps-core` and
//! the HTTP client from `gmaps-http`.
//!
//! # Example
//!
//! ```no_run
//! use gmaps::{MapsClient, RouteRequest, TravelMode};
//!
//! let client = MapsClient::new()?;
//! let request = RouteRequest::new("Kiev", "Lviv").with_mode(TravelMode::Transit);
//! println!("{:?}", client.get_time(&request)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use gmaps_core::{
    ApiStatus, Endpoint, GeocodeRequest, Location, MapsError, MatrixField, QueryParams,
    QueryValue, RouteRequest, TravelMode,
};
pub use gmaps_http::{
    ClientConfig, HeaderMap, HttpTransport, MapsClient, RawResponse, Transport,
    TransportBuildError,
};
