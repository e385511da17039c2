//! Command-line interface for querying the Maps web services.
#![forbid(unsafe_code)]

use std::io::{self, Write};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use gmaps_core::{GeocodeRequest, Location, RouteRequest, TravelMode};
use gmaps_http::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MapsClient, Transport};
use log::debug;
use ortho_config::figment::Figment;
use ortho_config::figment::providers::Env;
use ortho_config::{ConfigDiscovery, OrthoMergeExt, OrthoResult, sanitized_provider};
use serde::{Deserialize, Serialize};
use serde_json::Value;

mod error;

pub use error::CliError;

const ARG_TIMEOUT_SECS: &str = "timeout-secs";
const APP_NAME: &str = "gmaps";
const ENV_PREFIX: &str = "GMAPS_";
const ENV_CONFIG_PATH: &str = "GMAPS_CONFIG_PATH";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let merged = cli
        .connection
        .load_layered()
        .map_err(CliError::Configuration)?;
    init_logging(merged.verbose)?;

    let config = ClientConfig::try_from(merged)?;
    debug!("using Maps API root {}", config.base_url);
    let client = MapsClient::with_config(config.clone()).map_err(|source| {
        CliError::BuildClient {
            base_url: config.base_url,
            source,
        }
    })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &client, &mut out)
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .try_init()
        .map_err(CliError::Logging)
}

fn execute<T: Transport>(
    command: &Command,
    client: &MapsClient<T>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Directions(args) => write_json(out, &client.directions(&args.to_request())?),
        Command::Matrix(args) => write_json(out, &client.distance_matrix(&args.to_request())?),
        Command::Time(args) => {
            let travel_time = client.get_time(&args.to_request())?;
            writeln!(out, "{}", travel_time.as_secs()).map_err(CliError::WriteOutput)
        }
        Command::Distance(args) => {
            let metres = client.get_distance(&args.to_request())?;
            writeln!(out, "{metres}").map_err(CliError::WriteOutput)
        }
        Command::Geocode(args) => write_json(out, &client.geocode(&args.to_request())?),
    }
}

fn write_json(out: &mut dyn Write, document: &Value) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, document).map_err(CliError::SerializeOutput)?;
    writeln!(out).map_err(CliError::WriteOutput)
}

#[derive(Debug, Parser)]
#[command(
    name = "gmaps",
    about = "Query the Google Maps directions, distance-matrix and geocode services",
    version
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the directions document for a route.
    Directions(RouteArgs),
    /// Print the distance-matrix document for a route.
    Matrix(RouteArgs),
    /// Print the travel time in seconds.
    Time(RouteArgs),
    /// Print the travel distance in metres.
    Distance(RouteArgs),
    /// Print the geocoding document for an address.
    Geocode(GeocodeArgs),
}

// Connection settings shared by every subcommand. Values can come from CLI
// flags, configuration files, or `GMAPS_*` environment variables. Plain
// comments keep clap from using this text as the program's about line when
// the struct is flattened.
#[derive(Debug, Clone, Args, Deserialize, Serialize, Default)]
struct ConnectionArgs {
    /// Root URL of the Maps web services.
    #[arg(long = "base-url", value_name = "url")]
    #[serde(default)]
    base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "seconds")]
    #[serde(default)]
    timeout_secs: Option<u64>,
    /// Custom HTTP user agent string.
    #[arg(long = "user-agent", value_name = "agent")]
    #[serde(default)]
    user_agent: Option<String>,
    /// Log every resolved request URL.
    #[arg(short, long)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    verbose: bool,
}

impl ConnectionArgs {
    /// Layer the discovered configuration file, `GMAPS_*` environment
    /// variables and the parsed flags, lowest precedence first.
    ///
    /// The file is the first of `$GMAPS_CONFIG_PATH`, the XDG and home
    /// locations (`gmaps/config.toml`, `.gmaps.toml`) and the working
    /// directory that exists. An unset `--verbose` flag does not mask
    /// `GMAPS_VERBOSE`.
    fn load_layered(&self) -> OrthoResult<Self> {
        let discovery = ConfigDiscovery::builder(APP_NAME)
            .env_var(ENV_CONFIG_PATH)
            .build();
        let mut figment = Figment::new();
        if let Some(file) = discovery.load_first()? {
            figment = figment.merge(file);
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config_path"]))
            .merge(sanitized_provider(self)?)
            .extract()
            .into_ortho_merge()
    }
}

impl TryFrom<ConnectionArgs> for ClientConfig {
    type Error = CliError;

    fn try_from(args: ConnectionArgs) -> Result<Self, Self::Error> {
        let timeout_secs = args.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_TIMEOUT_SECS,
                reason: "must be at least one second",
            });
        }
        let config = Self::new(
            args.base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        )
        .with_timeout(Duration::from_secs(timeout_secs))
        .with_verbose(args.verbose);
        Ok(match args.user_agent {
            Some(agent) => config.with_user_agent(agent),
            None => config,
        })
    }
}

/// Arguments describing a route.
#[derive(Debug, Clone, Args)]
struct RouteArgs {
    /// Starting point: an address or `lat,lng`. Repeat for several.
    #[arg(long = "origin", value_name = "place", required = true)]
    origins: Vec<String>,
    /// End point: an address or `lat,lng`. Repeat for several.
    #[arg(long = "destination", value_name = "place", required = true)]
    destinations: Vec<String>,
    /// Travel mode: driving, walking, bicycling or transit.
    #[arg(long, value_name = "mode", default_value = "driving")]
    mode: String,
    /// Intermediate stop, in order. Repeat for several.
    #[arg(long = "waypoint", value_name = "place")]
    waypoints: Vec<String>,
    /// Mark the request as coming from a device with a location sensor.
    #[arg(long)]
    sensor: bool,
    /// Desired arrival time, seconds since the Unix epoch.
    #[arg(long, value_name = "epoch-seconds")]
    arrival_time: Option<i64>,
    /// Desired destination time, seconds since the Unix epoch.
    #[arg(long, value_name = "epoch-seconds")]
    destination_time: Option<i64>,
}

impl RouteArgs {
    fn to_request(&self) -> RouteRequest {
        RouteRequest {
            origins: parse_locations(&self.origins),
            destinations: parse_locations(&self.destinations),
            sensor: self.sensor,
            mode: TravelMode::from_name(&self.mode),
            waypoints: parse_locations(&self.waypoints),
            destination_time: self.destination_time,
            arrival_time: self.arrival_time,
        }
    }
}

fn parse_locations(values: &[String]) -> Vec<Location> {
    values.iter().map(|value| Location::parse(value)).collect()
}

/// Arguments for an address lookup.
#[derive(Debug, Clone, Args)]
struct GeocodeArgs {
    /// Address to resolve.
    #[arg(long, value_name = "text")]
    address: String,
    /// Mark the request as coming from a device with a location sensor.
    #[arg(long)]
    sensor: bool,
}

impl GeocodeArgs {
    fn to_request(&self) -> GeocodeRequest {
        GeocodeRequest::new(self.address.as_str()).with_sensor(self.sensor)
    }
}
