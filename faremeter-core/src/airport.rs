//! Airports resolved from free-text city names.

use geo::Coord;
use thiserror::Error;

/// The primary airport serving a city.
///
/// `location` follows the `geo` convention: `x` is longitude and `y` is
/// latitude, both in degrees.
///
/// # Examples
///
/// ```
/// use faremeter_core::Airport;
///
/// # fn main() -> Result<(), faremeter_core::AirportError> {
/// let heathrow = Airport::new("LHR", 51.4700, -0.4543, "Heathrow")?;
/// assert_eq!(heathrow.iata_code, "LHR");
/// assert_eq!(heathrow.latitude(), 51.4700);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Airport {
    /// Three-character IATA code.
    pub iata_code: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Provider-supplied display name.
    pub display_name: String,
}

/// Errors returned by [`Airport::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AirportError {
    /// The code was not three ASCII alphanumerics.
    #[error("airport code {code:?} is not a three-character IATA code")]
    InvalidIataCode {
        /// Code as supplied.
        code: String,
    },
    /// Latitude was outside `[-90, 90]` or not finite.
    #[error("latitude {latitude} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Latitude as supplied.
        latitude: f64,
    },
    /// Longitude was outside `[-180, 180]` or not finite.
    #[error("longitude {longitude} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Longitude as supplied.
        longitude: f64,
    },
}

impl Airport {
    /// Validates and constructs an [`Airport`].
    pub fn new(
        iata_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
        display_name: impl Into<String>,
    ) -> Result<Self, AirportError> {
        let iata_code = iata_code.into();
        if iata_code.len() != 3 || !iata_code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AirportError::InvalidIataCode { code: iata_code });
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AirportError::LatitudeOutOfRange { latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AirportError::LongitudeOutOfRange { longitude });
        }
        Ok(Self {
            iata_code,
            location: Coord {
                x: longitude,
                y: latitude,
            },
            display_name: display_name.into(),
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}
