//! Transport-free domain types for the Google Maps web service client.
//!
//! Responsibilities:
//! - Describe route queries ([`RouteRequest`], [`GeocodeRequest`]) and the
//!   fixed endpoints they target.
//! - Encode named parameters into a query string, dropping falsy values.
//! - Classify the JSON envelope returned by the API and extract scalar
//!   fields from distance-matrix documents.
//!
//! Boundaries:
//! - No HTTP here; transports live in `gmaps-http`.
//! - Responses stay untyped [`serde_json::Value`] documents.
//!
//! Invariants:
//! - Every value is built per call; nothing is shared or cached.

#![forbid(unsafe_code)]

mod error;
mod location;
mod mode;
mod query;
mod request;
mod response;
mod status;

pub use error::MapsError;
pub use location::{Location, join_locations};
pub use mode::TravelMode;
pub use query::{QueryParams, QueryValue, append_query};
pub use request::{Endpoint, GeocodeRequest, RouteRequest, sensor_flag};
pub use response::{MatrixField, STATUS_OK, check_status, matrix_value};
pub use status::ApiStatus;
