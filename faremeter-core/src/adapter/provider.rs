//! Flight adapter trait and blanket implementations for references.

use crate::{Airport, FlightQuote, SearchWindow};

use super::error::AdapterError;

/// Resolve airports and price one-way fares against an external provider.
///
/// Implementations must:
/// - return [`AdapterError::AirportNotFound`] from
///   [`resolve_main_airport`](Self::resolve_main_airport) when the provider
///   has no match, and the top-ranked active airport otherwise;
/// - return `Ok(None)` from
///   [`search_cheapest_one_way`](Self::search_cheapest_one_way) when no
///   itinerary exists in the window;
/// - quote every fare in US dollars.
///
/// # Examples
///
/// ```rust
/// use faremeter_core::{AdapterError, Airport, FlightAdapter, FlightQuote, SearchWindow};
///
/// struct OneAirport;
///
/// impl FlightAdapter for OneAirport {
///     fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError> {
///         if city == "Paris" {
///             Airport::new("CDG", 49.0097, 2.5479, "Charles de Gaulle").map_err(|err| {
///                 AdapterError::ParseError { message: err.to_string() }
///             })
///         } else {
///             Err(AdapterError::AirportNotFound { city: city.to_owned() })
///         }
///     }
///
///     fn search_cheapest_one_way(
///         &self,
///         _from_code: &str,
///         _to_code: &str,
///         _window: &SearchWindow,
///     ) -> Result<Option<FlightQuote>, AdapterError> {
///         Ok(None)
///     }
/// }
///
/// let adapter = OneAirport;
/// assert!(adapter.resolve_main_airport("Paris").is_ok());
/// assert!(adapter.resolve_main_airport("Atlantis").is_err());
/// ```
pub trait FlightAdapter {
    /// Resolve a free-text city name to its primary airport.
    fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError>;

    /// Find the cheapest one-way fare between two airport codes within
    /// `window`.
    fn search_cheapest_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError>;
}

impl<T: FlightAdapter + ?Sized> FlightAdapter for &T {
    fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError> {
        (**self).resolve_main_airport(city)
    }

    fn search_cheapest_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError> {
        (**self).search_cheapest_one_way(from_code, to_code, window)
    }
}

impl<T: FlightAdapter + ?Sized> FlightAdapter for Box<T> {
    fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError> {
        (**self).resolve_main_airport(city)
    }

    fn search_cheapest_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError> {
        (**self).search_cheapest_one_way(from_code, to_code, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use crate::test_support::StubFlightAdapter;

    #[fixture]
    fn window() -> SearchWindow {
        let start = Utc
            .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
            .single()
            .expect("valid instant");
        SearchWindow::starting_at(start)
    }

    #[fixture]
    fn adapter() -> StubFlightAdapter {
        let heathrow = Airport::new("LHR", 51.47, -0.45, "Heathrow").expect("valid airport");
        let quote = FlightQuote::new(150.0, "LHR", "CDG").expect("valid quote");
        StubFlightAdapter::new()
            .with_airport("London", heathrow)
            .with_quote(quote)
    }

    #[rstest]
    fn unknown_city_is_not_found(adapter: StubFlightAdapter) {
        let err = adapter
            .resolve_main_airport("Atlantis")
            .expect_err("expected AirportNotFound");
        assert!(err.is_not_found());
    }

    #[rstest]
    fn missing_route_is_absent_not_error(adapter: StubFlightAdapter, window: SearchWindow) {
        let quote = adapter
            .search_cheapest_one_way("LHR", "TXL", &window)
            .expect("absent quote is not an error");
        assert!(quote.is_none());
    }

    #[rstest]
    fn boxed_adapters_delegate(adapter: StubFlightAdapter, window: SearchWindow) {
        let boxed: Box<dyn FlightAdapter> = Box::new(adapter);
        let quote = boxed
            .search_cheapest_one_way("LHR", "CDG", &window)
            .expect("search succeeds")
            .expect("quote present");
        assert_eq!(quote.price_usd, 150.0);
    }

    #[rstest]
    fn transport_errors_are_not_input_errors() {
        let err = AdapterError::Timeout {
            url: "https://example.com/v2/search".to_owned(),
            timeout_secs: 30,
        };
        assert!(!err.is_not_found());
    }
}
