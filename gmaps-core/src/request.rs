//! Request descriptions for the fixed API endpoints.

use crate::location::Location;
use crate::mode::TravelMode;
use crate::query::QueryParams;

/// Fixed endpoints under the API root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Address to coordinate lookup.
    Geocode,
    /// Turn-by-turn routes.
    Directions,
    /// Travel time and distance for origin/destination pairs.
    DistanceMatrix,
}

impl Endpoint {
    /// Path of the JSON flavour of the endpoint, relative to the API root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Geocode => "geocode/json",
            Self::Directions => "directions/json",
            Self::DistanceMatrix => "distancematrix/json",
        }
    }
}

/// Render the `sensor` flag the way the API expects it.
#[must_use]
pub const fn sensor_flag(sensor: bool) -> &'static str {
    if sensor { "true" } else { "false" }
}

/// Parameters shared by directions, distance-matrix, time and distance
/// queries.
///
/// Multiple origins, destinations or waypoints travel as one
/// [`QueryValue::List`](crate::QueryValue::List) each and are `|`-joined
/// when the query is encoded, before anything reaches the HTTP layer.
///
/// # Examples
///
/// ```
/// use gmaps_core::{Location, RouteRequest, TravelMode};
///
/// let request = RouteRequest::new("Kiev", "Lviv")
///     .with_mode(TravelMode::Transit)
///     .with_waypoint(Location::lat_lng(50.0, 28.0))
///     .with_waypoint("Rivne");
///
/// let params = request.distance_matrix_params();
/// assert_eq!(
///     params.encode(),
///     "origins=Kiev&destinations=Lviv&sensor=false&mode=transit&waypoints=50%2C28%7CRivne"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteRequest {
    /// Starting points.
    pub origins: Vec<Location>,
    /// End points.
    pub destinations: Vec<Location>,
    /// Whether the request comes from a device with a location sensor.
    pub sensor: bool,
    /// Mode of transport.
    pub mode: TravelMode,
    /// Intermediate locations the route passes through, in order.
    pub waypoints: Vec<Location>,
    /// Desired destination time, seconds since the Unix epoch.
    pub destination_time: Option<i64>,
    /// Desired arrival time, seconds since the Unix epoch.
    pub arrival_time: Option<i64>,
}

impl RouteRequest {
    /// Route from `origin` to `destination` by car, without a sensor.
    #[must_use]
    pub fn new(origin: impl Into<Location>, destination: impl Into<Location>) -> Self {
        Self {
            origins: vec![origin.into()],
            destinations: vec![destination.into()],
            ..Self::default()
        }
    }

    /// Add another origin.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<Location>) -> Self {
        self.origins.push(origin.into());
        self
    }

    /// Add another destination.
    #[must_use]
    pub fn with_destination(mut self, destination: impl Into<Location>) -> Self {
        self.destinations.push(destination.into());
        self
    }

    /// Set the travel mode.
    #[must_use]
    pub fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the sensor flag.
    #[must_use]
    pub const fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Append a waypoint.
    #[must_use]
    pub fn with_waypoint(mut self, waypoint: impl Into<Location>) -> Self {
        self.waypoints.push(waypoint.into());
        self
    }

    /// Set the destination time in epoch seconds.
    #[must_use]
    pub const fn with_destination_time(mut self, seconds: i64) -> Self {
        self.destination_time = Some(seconds);
        self
    }

    /// Set the arrival time in epoch seconds.
    #[must_use]
    pub const fn with_arrival_time(mut self, seconds: i64) -> Self {
        self.arrival_time = Some(seconds);
        self
    }

    /// Parameters for the directions endpoint (`origin`, `destination`).
    #[must_use]
    pub fn directions_params(&self) -> QueryParams {
        self.params("origin", "destination")
    }

    /// Parameters for the distance-matrix endpoint (`origins`,
    /// `destinations`).
    #[must_use]
    pub fn distance_matrix_params(&self) -> QueryParams {
        self.params("origins", "destinations")
    }

    fn params(&self, origin_key: &str, destination_key: &str) -> QueryParams {
        QueryParams::new()
            .with(origin_key, self.origins.clone())
            .with(destination_key, self.destinations.clone())
            .with("sensor", sensor_flag(self.sensor))
            .with("mode", self.mode.as_str())
            .with("waypoints", self.waypoints.clone())
            .with_optional("destination_time", self.destination_time)
            .with_optional("arrival_time", self.arrival_time)
    }
}

/// Geocoding lookup for a free-text address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeocodeRequest {
    /// Address to resolve.
    pub address: String,
    /// Whether the request comes from a device with a location sensor.
    pub sensor: bool,
}

impl GeocodeRequest {
    /// Look up `address` without a sensor.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            sensor: false,
        }
    }

    /// Set the sensor flag.
    #[must_use]
    pub const fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Parameters for the geocode endpoint.
    #[must_use]
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("address", self.address.as_str())
            .with("sensor", sensor_flag(self.sensor))
    }
}
