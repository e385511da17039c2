//! Travel modes understood by the directions and distance-matrix services.
//!
//! Modes are not validated locally. A name outside the four documented
//! modes is carried verbatim in [`TravelMode::Other`], sent to the API, and
//! rejected there with an `INVALID_REQUEST` status.
//!
//! # Examples
//! ```
//! use gmaps_core::TravelMode;
//!
//! assert_eq!(TravelMode::default(), TravelMode::Driving);
//! assert_eq!(TravelMode::from_name("transit"), TravelMode::Transit);
//! assert_eq!(TravelMode::from_name("hovercraft").as_str(), "hovercraft");
//! ```

use std::convert::Infallible;

/// Mode of transport used when computing a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TravelMode {
    /// Road network by car.
    #[default]
    Driving,
    /// Pedestrian paths and sidewalks.
    Walking,
    /// Bicycle paths and preferred streets.
    Bicycling,
    /// Public transit routes.
    Transit,
    /// Any other mode name, passed through unchanged.
    Other(String),
}

impl TravelMode {
    /// Map a mode name to its variant. Unknown names become
    /// [`TravelMode::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "driving" => Self::Driving,
            "walking" => Self::Walking,
            "bicycling" => Self::Bicycling,
            "transit" => Self::Transit,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Return the value sent in the `mode` parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TravelMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}
