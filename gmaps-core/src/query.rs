//! Query-string construction for API requests.
//!
//! Parameters are collected into [`QueryParams`] and encoded with
//! `application/x-www-form-urlencoded` rules. Falsy values (absent, empty
//! text, zero, an empty list of locations) are dropped before encoding,
//! so `arrival_time = 0` is never sent. The text `"false"` is not falsy.

use geo::Coord;
use url::form_urlencoded;

use crate::location::{Location, join_locations};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Free text, sent verbatim after percent-encoding.
    Text(String),
    /// Whole number, e.g. epoch seconds.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Coordinate pair rendered `"lat,lng"`.
    Coordinate(Coord),
    /// Several locations rendered `|`-joined.
    List(Vec<Location>),
}

impl QueryValue {
    /// Whether the value is dropped from the query string.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Integer(value) => *value == 0,
            Self::Float(value) => *value == 0.0,
            Self::Coordinate(_) => false,
            Self::List(locations) => locations.is_empty(),
        }
    }

    /// Render the value as it appears before percent-encoding.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Coordinate(coord) => format!("{},{}", coord.y, coord.x),
            Self::List(locations) => join_locations(locations),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Coord> for QueryValue {
    fn from(coord: Coord) -> Self {
        Self::Coordinate(coord)
    }
}

impl From<Vec<Location>> for QueryValue {
    fn from(locations: Vec<Location>) -> Self {
        Self::List(locations)
    }
}

/// Ordered collection of named query parameters.
///
/// # Examples
///
/// ```
/// use gmaps_core::QueryParams;
///
/// let params = QueryParams::new()
///     .with("origin", "Kiev")
///     .with("arrival_time", 0_i64)
///     .with_optional("waypoints", None::<String>)
///     .with("sensor", "false");
/// assert_eq!(params.encode(), "origin=Kiev&sensor=false");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.entries.push((name.into(), Some(value.into())));
        self
    }

    /// Add a parameter that may be absent.
    #[must_use]
    pub fn with_optional<V: Into<QueryValue>>(
        mut self,
        name: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.entries.push((name.into(), value.map(Into::into)));
        self
    }

    /// Look up the value recorded for `name`, falsy or not.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Iterate over the parameters that survive falsy filtering, rendered.
    pub fn retained(&self) -> impl Iterator<Item = (&str, String)> {
        self.entries.iter().filter_map(|(name, value)| {
            value
                .as_ref()
                .filter(|candidate| !candidate.is_falsy())
                .map(|kept| (name.as_str(), kept.render()))
        })
    }

    /// Encode the retained parameters as a query string (without `?`).
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.retained())
            .finish()
    }
}

/// Append an encoded query to `base`.
///
/// Bases that already end in `?` or `&` take the query as-is; a base that
/// already carries a query gets `&`; anything else gets `?`. An empty query
/// leaves the base untouched.
///
/// # Examples
///
/// ```
/// use gmaps_core::append_query;
///
/// assert_eq!(append_query("http://h/json?", "a=1"), "http://h/json?a=1");
/// assert_eq!(append_query("http://h/json", "a=1"), "http://h/json?a=1");
/// assert_eq!(append_query("http://h/json?k=v", "a=1"), "http://h/json?k=v&a=1");
/// ```
#[must_use]
pub fn append_query(base: &str, query: &str) -> String {
    if query.is_empty() {
        return base.to_owned();
    }
    let separator = if base.ends_with('?') || base.ends_with('&') {
        ""
    } else if base.contains('?') {
        "&"
    } else {
        "?"
    };
    format!("{base}{separator}{query}")
}
