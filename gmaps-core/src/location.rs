//! Places accepted as origins, destinations and waypoints.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use geo::Coord;

/// A place the API can route from, to or through.
///
/// Coordinates follow the `geo` convention: `x` is longitude and `y` is
/// latitude. They are rendered `"lat,lng"` without spaces, which is the
/// order the API expects.
///
/// # Examples
///
/// ```
/// use gmaps_core::Location;
///
/// assert_eq!(Location::lat_lng(50.4501, 30.5234).to_string(), "50.4501,30.5234");
/// assert_eq!(Location::from("Kiev").to_string(), "Kiev");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Free-text address or place name.
    Address(String),
    /// Geographic coordinate.
    Coordinate(Coord),
}

impl Location {
    /// Construct an address location.
    #[must_use]
    pub fn address(text: impl Into<String>) -> Self {
        Self::Address(text.into())
    }

    /// Construct a coordinate location from latitude and longitude.
    #[must_use]
    pub const fn lat_lng(lat: f64, lng: f64) -> Self {
        Self::Coordinate(Coord { x: lng, y: lat })
    }

    /// Interpret `text` as `"lat,lng"` when both halves parse as numbers,
    /// otherwise as an address.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.split_once(',')
            .and_then(|(lat, lng)| {
                let lat = lat.trim().parse::<f64>().ok()?;
                let lng = lng.trim().parse::<f64>().ok()?;
                Some(Self::lat_lng(lat, lng))
            })
            .unwrap_or_else(|| Self::address(text))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(text) => f.write_str(text),
            Self::Coordinate(coord) => write!(f, "{},{}", coord.y, coord.x),
        }
    }
}

impl FromStr for Location {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Location {
    fn from(text: &str) -> Self {
        Self::address(text)
    }
}

impl From<String> for Location {
    fn from(text: String) -> Self {
        Self::Address(text)
    }
}

impl From<Coord> for Location {
    fn from(coord: Coord) -> Self {
        Self::Coordinate(coord)
    }
}

/// Join locations with `|`, the separator the API uses for multi-valued
/// parameters.
#[must_use]
pub fn join_locations(locations: &[Location]) -> String {
    locations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("50.4501,30.5234", Location::lat_lng(50.4501, 30.5234))]
    #[case("49.8396, 24.0297", Location::lat_lng(49.8396, 24.0297))]
    #[case("Kiev", Location::address("Kiev"))]
    #[case("Київ, Хрещатик 1", Location::address("Київ, Хрещатик 1"))]
    fn parse_distinguishes_coordinates_from_addresses(
        #[case] input: &str,
        #[case] expected: Location,
    ) {
        assert_eq!(Location::parse(input), expected);
    }

    #[rstest]
    fn coordinates_render_latitude_first() {
        let location = Location::from(Coord { x: 24.0297, y: 49.8396 });
        assert_eq!(location.to_string(), "49.8396,24.0297");
    }

    #[rstest]
    fn join_uses_pipe_separator() {
        let joined = join_locations(&[
            Location::address("Lviv"),
            Location::lat_lng(50.0, 30.0),
        ]);
        assert_eq!(joined, "Lviv|50,30");
    }

    #[rstest]
    fn join_of_nothing_is_empty() {
        assert!(join_locations(&[]).is_empty());
    }
}
