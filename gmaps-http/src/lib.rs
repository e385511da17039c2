//! HTTP client for the Google Maps directions, distance-matrix and geocode
//! services.
//!
//! [`MapsClient`] turns a [`gmaps_core::RouteRequest`] into a query string,
//! issues a GET through a [`Transport`], parses the JSON envelope and either
//! returns the document or a typed [`gmaps_core::MapsError`].
//!
//! # Architecture
//!
//! The client is synchronous. [`HttpTransport`] blocks on async `reqwest`
//! calls internally, keeping the API embeddable in plain blocking code.
//! Tests swap in [`test_support::StubTransport`].
//!
//! # Example
//!
//! ```no_run
//! use gmaps_core::{RouteRequest, TravelMode};
//! use gmaps_http::{ClientConfig, MapsClient};
//! use std::time::Duration;
//!
//! let config = ClientConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let client = MapsClient::with_config(config)?;
//!
//! let request = RouteRequest::new("Київ, Хрещатик 1", "Київ, Хрещатик 3")
//!     .with_mode(TravelMode::Walking);
//! println!("walking time: {:?}", client.get_time(&request)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod client;
mod config;
mod transport;

#[doc(hidden)]
pub mod test_support;

pub use client::MapsClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use reqwest::header::HeaderMap;
pub use transport::{HttpTransport, RawResponse, Transport, TransportBuildError};
