//! Status codes reported in the `status` field of every API response.

use serde_json::Value;

/// Outcome reported by the API, or synthesized locally when the envelope
/// carries no usable status.
///
/// # Examples
///
/// ```
/// use gmaps_core::ApiStatus;
///
/// let status = ApiStatus::from_code("ZERO_RESULTS");
/// assert_eq!(status, ApiStatus::ZeroResults);
/// assert_eq!(status.as_str(), "ZERO_RESULTS");
/// assert!(!status.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiStatus {
    /// The request succeeded.
    Ok,
    /// An origin, destination or waypoint could not be geocoded.
    NotFound,
    /// No route or result could be found.
    ZeroResults,
    /// Too many waypoints were supplied.
    MaxWaypointsExceeded,
    /// The origin × destination product exceeds the per-query limit.
    MaxElementsExceeded,
    /// The requested route is too long to process.
    MaxRouteLengthExceeded,
    /// The request was malformed, e.g. an unknown travel mode.
    InvalidRequest,
    /// The daily quota or billing limit was hit.
    OverDailyLimit,
    /// Too many requests in the allowed time period.
    OverQueryLimit,
    /// The service refused the request.
    RequestDenied,
    /// A server error; retrying may succeed.
    UnknownError,
    /// The response carried no `status` field.
    Missing,
    /// Any other status, kept verbatim.
    Other(String),
}

impl ApiStatus {
    /// Map a status string to its variant.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "NOT_FOUND" => Self::NotFound,
            "ZERO_RESULTS" => Self::ZeroResults,
            "MAX_WAYPOINTS_EXCEEDED" => Self::MaxWaypointsExceeded,
            "MAX_ELEMENTS_EXCEEDED" => Self::MaxElementsExceeded,
            "MAX_ROUTE_LENGTH_EXCEEDED" => Self::MaxRouteLengthExceeded,
            "INVALID_REQUEST" => Self::InvalidRequest,
            "OVER_DAILY_LIMIT" => Self::OverDailyLimit,
            "OVER_QUERY_LIMIT" => Self::OverQueryLimit,
            "REQUEST_DENIED" => Self::RequestDenied,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Classify the `status` member of a response envelope.
    ///
    /// Numeric and other non-string statuses are kept as their JSON text.
    #[must_use]
    pub fn from_field(field: Option<&Value>) -> Self {
        match field {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(code)) => Self::from_code(code),
            Some(other) => Self::Other(other.to_string()),
        }
    }

    /// Return the status string as the API spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "NOT_FOUND",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::MaxWaypointsExceeded => "MAX_WAYPOINTS_EXCEEDED",
            Self::MaxElementsExceeded => "MAX_ELEMENTS_EXCEEDED",
            Self::MaxRouteLengthExceeded => "MAX_ROUTE_LENGTH_EXCEEDED",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::OverDailyLimit => "OVER_DAILY_LIMIT",
            Self::OverQueryLimit => "OVER_QUERY_LIMIT",
            Self::RequestDenied => "REQUEST_DENIED",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Missing => "MISSING_STATUS",
            Self::Other(code) => code,
        }
    }

    /// Human-readable explanation of the status.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Ok => "request succeeded",
            Self::NotFound => "a location in the request could not be geocoded",
            Self::ZeroResults => "no result could be found for the request",
            Self::MaxWaypointsExceeded => "too many waypoints in the request",
            Self::MaxElementsExceeded => "too many origin and destination pairs in the request",
            Self::MaxRouteLengthExceeded => "the requested route is too long",
            Self::InvalidRequest => "the request was invalid",
            Self::OverDailyLimit => "the daily request quota has been exceeded",
            Self::OverQueryLimit => "too many requests in the allowed time period",
            Self::RequestDenied => "the service denied the request",
            Self::UnknownError => "the server encountered an unknown error",
            Self::Missing => "the response carried no status",
            Self::Other(_) => "unrecognised status",
        }
    }

    /// Whether the status is the success sentinel.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.description())
    }
}
