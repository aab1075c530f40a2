//! Facade crate for the Faremeter destination ranking engine.
//!
//! This crate re-exports the core domain types and the ranking engine, and
//! exposes the Kiwi Tequila adapter behind the `provider-kiwi` feature.

#![forbid(unsafe_code)]

pub use faremeter_core::{
    AdapterError, Airport, AirportError, DestinationOutcome, ErrorCategory, FlightAdapter,
    FlightQuote, OptimizationRequest, OptimizationResult, PricePerKmRanker, QuoteError,
    RankedCandidate, RankingError, RankingReport, RequestValidationError, SearchWindow,
    SkipReason, distance_km, find_best_price_per_km, geodesic_distance_km,
};

#[cfg(feature = "provider-kiwi")]
pub use faremeter_data::kiwi::{AdapterBuildError, KiwiAdapterConfig, KiwiFlightAdapter};

#[cfg(feature = "test-support")]
pub use faremeter_core::test_support;
