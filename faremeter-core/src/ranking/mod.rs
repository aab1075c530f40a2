//! Rank destinations by airfare price per kilometre.
//!
//! The origin is resolved first and must succeed. Each destination is then
//! evaluated in input order into a [`DestinationOutcome`]: resolution,
//! search, or distance failures become skips rather than errors. The report
//! is reduced to the strict minimum price per kilometre, so ties favour the
//! earlier destination.
//!
//! A run issues at most `2N + 1` adapter calls for `N` destinations and never
//! retries.

mod error;
mod outcome;

pub use error::RankingError;
pub use outcome::{
    DestinationOutcome, OptimizationResult, RankedCandidate, RankingReport, SkipReason,
};

use crate::{AdapterError, Airport, FlightAdapter, SearchWindow, geodesic_distance_km};

/// Ranking engine generic over the flight-data provider.
///
/// # Examples
///
/// ```rust
/// use faremeter_core::{
///     AdapterError, Airport, FlightAdapter, FlightQuote, PricePerKmRanker, RankingError,
///     SearchWindow,
/// };
///
/// struct NoFlights;
///
/// impl FlightAdapter for NoFlights {
///     fn resolve_main_airport(&self, _city: &str) -> Result<Airport, AdapterError> {
///         Airport::new("LHR", 51.47, -0.45, "Heathrow")
///             .map_err(|err| AdapterError::ParseError { message: err.to_string() })
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
/// let ranker = PricePerKmRanker::new(NoFlights);
/// let err = ranker
///     .find_best("London", &["Paris"], &SearchWindow::from_now())
///     .unwrap_err();
/// assert!(matches!(err, RankingError::NoViableDestination { skipped: 1 }));
/// ```
#[derive(Debug, Clone)]
pub struct PricePerKmRanker<A> {
    adapter: A,
}

impl<A: FlightAdapter> PricePerKmRanker<A> {
    /// Construct a ranker that queries `adapter`.
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }

    /// Evaluate every destination and return the full report.
    ///
    /// # Errors
    ///
    /// Fails only when the origin cannot be resolved; no destination is
    /// evaluated in that case.
    pub fn rank<S: AsRef<str>>(
        &self,
        origin_city: &str,
        destination_cities: &[S],
        window: &SearchWindow,
    ) -> Result<RankingReport, RankingError> {
        let origin = self.resolve_origin(origin_city)?;
        log::debug!(
            "evaluating {} destinations for the window opening {}",
            destination_cities.len(),
            window.start()
        );
        let outcomes = destination_cities
            .iter()
            .map(|city| self.evaluate(&origin, city.as_ref(), window))
            .collect();
        Ok(RankingReport {
            origin,
            window: *window,
            outcomes,
        })
    }

    /// Rank the destinations and return the winner.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::OriginNotFound`] or
    /// [`RankingError::OriginLookup`] when the origin fails to resolve and
    /// [`RankingError::NoViableDestination`] when every destination is
    /// skipped.
    pub fn find_best<S: AsRef<str>>(
        &self,
        origin_city: &str,
        destination_cities: &[S],
        window: &SearchWindow,
    ) -> Result<OptimizationResult, RankingError> {
        let report = self.rank(origin_city, destination_cities, window)?;
        if let Some(best) = report.best() {
            log::debug!(
                "selected {} ({} -> {}) at {:.4} USD/km",
                best.destination,
                best.quote.origin_code,
                best.quote.destination_code,
                best.price_per_km
            );
        }
        report.into_result()
    }

    fn resolve_origin(&self, origin_city: &str) -> Result<Airport, RankingError> {
        match self.adapter.resolve_main_airport(origin_city) {
            Ok(airport) => {
                log::debug!("resolved origin {origin_city} to {}", airport.iata_code);
                Ok(airport)
            }
            Err(AdapterError::AirportNotFound { .. }) => Err(RankingError::OriginNotFound {
                city: origin_city.to_owned(),
            }),
            Err(source) => Err(RankingError::OriginLookup {
                city: origin_city.to_owned(),
                source,
            }),
        }
    }

    fn evaluate(
        &self,
        origin: &Airport,
        destination: &str,
        window: &SearchWindow,
    ) -> DestinationOutcome {
        match self.score(origin, destination, window) {
            Ok(candidate) => DestinationOutcome::Ranked(candidate),
            Err(reason) => {
                log::info!("skipping destination {destination}: {reason}");
                DestinationOutcome::Skipped {
                    destination: destination.to_owned(),
                    reason,
                }
            }
        }
    }

    fn score(
        &self,
        origin: &Airport,
        destination: &str,
        window: &SearchWindow,
    ) -> Result<RankedCandidate, SkipReason> {
        let airport = self
            .adapter
            .resolve_main_airport(destination)
            .map_err(SkipReason::Unresolved)?;
        let quote = self
            .adapter
            .search_cheapest_one_way(&origin.iata_code, &airport.iata_code, window)
            .map_err(SkipReason::SearchFailed)?
            .ok_or(SkipReason::NoQuote)?;
        let distance_km = geodesic_distance_km(origin.location, airport.location);
        RankedCandidate::new(destination, quote, distance_km)
    }
}

/// Find the destination with the lowest fare per kilometre from
/// `origin_city`, searching the 24 hours from now.
///
/// # Errors
///
/// See [`PricePerKmRanker::find_best`].
pub fn find_best_price_per_km<A, S>(
    origin_city: &str,
    destination_cities: &[S],
    adapter: &A,
) -> Result<OptimizationResult, RankingError>
where
    A: FlightAdapter + ?Sized,
    S: AsRef<str>,
{
    PricePerKmRanker::new(adapter).find_best(
        origin_city,
        destination_cities,
        &SearchWindow::from_now(),
    )
}
