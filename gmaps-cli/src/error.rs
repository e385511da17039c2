//! Error types emitted by the gmaps CLI.

use std::sync::Arc;

use gmaps_core::MapsError;
use gmaps_http::TransportBuildError;
use thiserror::Error;

/// Errors emitted by the gmaps CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// An option holds a value the client cannot use.
    #[error("invalid --{field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// Installing the logger failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] log::SetLoggerError),
    /// Constructing the HTTP client failed.
    #[error("failed to build Maps client for {base_url:?}: {source}")]
    BuildClient {
        base_url: String,
        #[source]
        source: TransportBuildError,
    },
    /// The Maps API call failed.
    #[error(transparent)]
    Maps(#[from] MapsError),
    /// Serializing a response document failed.
    #[error("failed to serialize response: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to standard output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
