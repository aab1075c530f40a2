//! Tequila API response types.
//!
//! Only the fields the adapter reads are modelled; serde ignores the rest.
//!
//! See: <https://tequila.kiwi.com/portal/docs/tequila_api>

use faremeter_core::{AdapterError, Airport, FlightQuote};
use serde::Deserialize;

/// Response of `GET /locations/query`.
#[derive(Debug, Deserialize)]
pub struct LocationsResponse {
    /// Matching locations, best ranked first.
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// One location entry.
#[derive(Debug, Deserialize)]
pub struct Location {
    /// IATA code of the airport.
    pub code: Option<String>,
    /// Human-readable airport name.
    pub name: String,
    /// Airport coordinates.
    pub location: LatLon,
}

/// Coordinates in degrees.
#[derive(Debug, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Response of `GET /v2/search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Currency the prices are expressed in.
    pub currency: Option<String>,
    /// Itineraries sorted as requested.
    #[serde(default)]
    pub data: Vec<Itinerary>,
}

/// One priced itinerary.
#[derive(Debug, Deserialize)]
pub struct Itinerary {
    pub price: f64,
    #[serde(rename = "flyFrom")]
    pub fly_from: String,
    #[serde(rename = "flyTo")]
    pub fly_to: String,
}

impl LocationsResponse {
    /// Convert the top-ranked location into an [`Airport`].
    ///
    /// An empty result means the city has no airport.
    pub fn into_airport(self, city: &str) -> Result<Airport, AdapterError> {
        let Some(first) = self.locations.into_iter().next() else {
            return Err(AdapterError::AirportNotFound {
                city: city.to_owned(),
            });
        };
        let code = first.code.ok_or_else(|| AdapterError::ParseError {
            message: format!("location for {city} has no airport code"),
        })?;
        Airport::new(code, first.location.lat, first.location.lon, first.name).map_err(|err| {
            AdapterError::ParseError {
                message: err.to_string(),
            }
        })
    }
}

impl SearchResponse {
    /// Convert the cheapest itinerary into a [`FlightQuote`].
    ///
    /// Returns `Ok(None)` when the search found nothing.
    pub fn into_quote(self, expected_currency: &str) -> Result<Option<FlightQuote>, AdapterError> {
        if let Some(found) = self.currency
            && !found.eq_ignore_ascii_case(expected_currency)
        {
            return Err(AdapterError::UnexpectedCurrency {
                expected: expected_currency.to_owned(),
                found,
            });
        }
        self.data
            .into_iter()
            .next()
            .map(|itinerary| {
                FlightQuote::new(itinerary.price, itinerary.fly_from, itinerary.fly_to).map_err(
                    |err| AdapterError::ParseError {
                        message: err.to_string(),
                    },
                )
            })
            .transpose()
    }
}
