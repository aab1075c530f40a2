//! Per-destination outcomes and their reduction to a single winner.

use thiserror::Error;

use crate::{AdapterError, Airport, FlightQuote, SearchWindow};

use super::error::RankingError;

/// A destination that resolved, priced, and measured successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    /// Destination city label as supplied by the caller.
    pub destination: String,
    /// Fare divided by distance, unrounded.
    pub price_per_km: f64,
    /// Quote the score was derived from.
    pub quote: FlightQuote,
    /// Geodesic distance between the two airports in kilometres.
    pub distance_km: f64,
}

impl RankedCandidate {
    /// Score `quote` over `distance_km`.
    ///
    /// # Errors
    ///
    /// Returns [`SkipReason::InvalidFare`] when the quoted fare is negative or
    /// not finite, and [`SkipReason::NonPositiveDistance`] when the distance
    /// is zero, negative, or not finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "price per kilometre is a floating-point ratio"
    )]
    pub fn new(
        destination: impl Into<String>,
        quote: FlightQuote,
        distance_km: f64,
    ) -> Result<Self, SkipReason> {
        if !quote.price_usd.is_finite() || quote.price_usd < 0.0 {
            return Err(SkipReason::InvalidFare {
                price_usd: quote.price_usd,
            });
        }
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(SkipReason::NonPositiveDistance { distance_km });
        }
        Ok(Self {
            destination: destination.into(),
            price_per_km: quote.price_usd / distance_km,
            quote,
            distance_km,
        })
    }
}

/// Why a destination took no part in the ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    /// The destination city did not resolve to an airport.
    #[error("airport resolution failed: {0}")]
    Unresolved(#[source] AdapterError),
    /// The fare search failed.
    #[error("flight search failed: {0}")]
    SearchFailed(#[source] AdapterError),
    /// The search succeeded but found no itinerary.
    #[error("no flights in the search window")]
    NoQuote,
    /// The adapter returned a fare that cannot be scored.
    #[error("fare {price_usd} is not a finite, non-negative amount")]
    InvalidFare {
        /// Fare as quoted.
        price_usd: f64,
    },
    /// Origin and destination airports coincide or the distance is invalid.
    #[error("distance {distance_km} km is not positive")]
    NonPositiveDistance {
        /// Computed distance.
        distance_km: f64,
    },
}

/// Result of evaluating one destination.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationOutcome {
    /// The destination produced a score.
    Ranked(RankedCandidate),
    /// The destination was skipped.
    Skipped {
        /// Destination city label as supplied by the caller.
        destination: String,
        /// Cause of the skip.
        reason: SkipReason,
    },
}

impl DestinationOutcome {
    /// Destination city label as supplied by the caller.
    #[must_use]
    pub fn destination(&self) -> &str {
        match self {
            Self::Ranked(candidate) => &candidate.destination,
            Self::Skipped { destination, .. } => destination,
        }
    }

    /// The scored candidate, if any.
    #[must_use]
    pub const fn candidate(&self) -> Option<&RankedCandidate> {
        match self {
            Self::Ranked(candidate) => Some(candidate),
            Self::Skipped { .. } => None,
        }
    }
}

/// Every destination outcome of one ranking run, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingReport {
    /// Resolved origin airport.
    pub origin: Airport,
    /// Window every search was issued for.
    pub window: SearchWindow,
    /// One outcome per requested destination.
    pub outcomes: Vec<DestinationOutcome>,
}

impl RankingReport {
    /// The candidate with the lowest price per kilometre.
    ///
    /// A candidate replaces the current best only when its ratio is strictly
    /// lower, starting from positive infinity. Ties keep the earliest
    /// candidate in input order and a NaN ratio never wins.
    #[must_use]
    pub fn best(&self) -> Option<&RankedCandidate> {
        self.outcomes
            .iter()
            .filter_map(DestinationOutcome::candidate)
            .fold(None, |best, candidate| {
                let threshold = best.map_or(f64::INFINITY, |current| current.price_per_km);
                if candidate.price_per_km < threshold {
                    Some(candidate)
                } else {
                    best
                }
            })
    }

    /// Outcomes that were skipped, with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            DestinationOutcome::Skipped {
                destination,
                reason,
            } => Some((destination.as_str(), reason)),
            DestinationOutcome::Ranked(_) => None,
        })
    }

    /// Reduce the report to the winning destination.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::NoViableDestination`] when every destination
    /// was skipped.
    pub fn into_result(self) -> Result<OptimizationResult, RankingError> {
        self.best()
            .map(OptimizationResult::from_candidate)
            .ok_or(RankingError::NoViableDestination {
                skipped: self.outcomes.len(),
            })
    }
}

/// The winning destination of a ranking run.
///
/// Only `price_per_km` is rounded (to two decimal places); the fare and the
/// distance keep full precision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationResult {
    /// Destination city label as supplied by the caller.
    pub destination: String,
    /// Fare per kilometre in US dollars, rounded to cents.
    pub price_per_km: f64,
    /// Fare in US dollars.
    pub price_usd: f64,
    /// Geodesic distance in kilometres.
    pub distance_km: f64,
    /// Departure airport code.
    pub airport_from: String,
    /// Arrival airport code.
    pub airport_to: String,
}

impl OptimizationResult {
    /// Build the presentation form of `candidate`.
    #[must_use]
    pub fn from_candidate(candidate: &RankedCandidate) -> Self {
        Self {
            destination: candidate.destination.clone(),
            price_per_km: round_to_cents(candidate.price_per_km),
            price_usd: candidate.quote.price_usd,
            distance_km: candidate.distance_km,
            airport_from: candidate.quote.origin_code.clone(),
            airport_to: candidate.quote.destination_code.clone(),
        }
    }
}

/// Round to two decimal places, with halves going away from zero.
///
/// Scaling by 100 first means a ratio whose binary value sits just below a
/// half cent can round up, unlike a correctly rounded decimal conversion.
#[expect(clippy::float_arithmetic, reason = "rounding to two decimal places")]
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
