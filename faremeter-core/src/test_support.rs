//! Test-only, in-memory `FlightAdapter` implementation used by unit and
//! behaviour tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{AdapterError, Airport, FlightAdapter, FlightQuote, SearchWindow};

/// Deterministic `FlightAdapter` backed by lookup tables.
///
/// Airports are keyed by city name and quotes by `(origin, destination)`
/// airport codes. Unknown cities yield [`AdapterError::AirportNotFound`] and
/// unknown routes yield `Ok(None)`, matching the adapter contract. Every call
/// is counted so tests can assert how many provider requests a run issued.
#[derive(Debug, Default)]
pub struct StubFlightAdapter {
    airports: HashMap<String, Airport>,
    quotes: HashMap<(String, String), FlightQuote>,
    resolve_errors: HashMap<String, AdapterError>,
    search_errors: HashMap<(String, String), AdapterError>,
    resolve_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl StubFlightAdapter {
    /// Create an adapter that knows no airports and no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the airport returned for `city`.
    #[must_use]
    pub fn with_airport(mut self, city: impl Into<String>, airport: Airport) -> Self {
        self.airports.insert(city.into(), airport);
        self
    }

    /// Register a quote for the route named by its origin and destination
    /// codes.
    #[must_use]
    pub fn with_quote(mut self, quote: FlightQuote) -> Self {
        let route = (quote.origin_code.clone(), quote.destination_code.clone());
        self.quotes.insert(route, quote);
        self
    }

    /// Fail resolution of `city` with `error`.
    #[must_use]
    pub fn with_resolve_error(mut self, city: impl Into<String>, error: AdapterError) -> Self {
        self.resolve_errors.insert(city.into(), error);
        self
    }

    /// Fail searches between two airport codes with `error`.
    #[must_use]
    pub fn with_search_error(
        mut self,
        from_code: impl Into<String>,
        to_code: impl Into<String>,
        error: AdapterError,
    ) -> Self {
        self.search_errors
            .insert((from_code.into(), to_code.into()), error);
        self
    }

    /// Number of `resolve_main_airport` calls observed so far.
    #[must_use]
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    /// Number of `search_cheapest_one_way` calls observed so far.
    #[must_use]
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

impl FlightAdapter for StubFlightAdapter {
    fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.resolve_errors.get(city) {
            return Err(error.clone());
        }
        self.airports
            .get(city)
            .cloned()
            .ok_or_else(|| AdapterError::AirportNotFound {
                city: city.to_owned(),
            })
    }

    fn search_cheapest_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        _window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let route = (from_code.to_owned(), to_code.to_owned());
        if let Some(error) = self.search_errors.get(&route) {
            return Err(error.clone());
        }
        Ok(self.quotes.get(&route).cloned())
    }
}
