//! Cheapest-fare quotes returned by flight searches.

use thiserror::Error;

/// The cheapest one-way fare found for a lookahead window.
///
/// A quote is a snapshot of search results, not a bookable offer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightQuote {
    /// Fare in US dollars.
    pub price_usd: f64,
    /// Departure airport code.
    pub origin_code: String,
    /// Arrival airport code.
    pub destination_code: String,
}

/// Errors returned by [`FlightQuote::new`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    /// The fare was negative, NaN, or infinite.
    #[error("fare {price_usd} must be a finite, non-negative amount")]
    InvalidPrice {
        /// Fare as supplied.
        price_usd: f64,
    },
}

impl FlightQuote {
    /// Validates and constructs a [`FlightQuote`].
    ///
    /// # Examples
    ///
    /// ```
    /// use faremeter_core::FlightQuote;
    ///
    /// let quote = FlightQuote::new(150.0, "LHR", "CDG").expect("valid quote");
    /// assert_eq!(quote.destination_code, "CDG");
    /// assert!(FlightQuote::new(-1.0, "LHR", "CDG").is_err());
    /// ```
    pub fn new(
        price_usd: f64,
        origin_code: impl Into<String>,
        destination_code: impl Into<String>,
    ) -> Result<Self, QuoteError> {
        if !price_usd.is_finite() || price_usd < 0.0 {
            return Err(QuoteError::InvalidPrice { price_usd });
        }
        Ok(Self {
            price_usd,
            origin_code: origin_code.into(),
            destination_code: destination_code.into(),
        })
    }
}
