//! Core domain types for the Faremeter engine.
//!
//! The crate ranks candidate destinations by airfare price per kilometre of
//! geodesic distance. Flight data is obtained through the [`FlightAdapter`]
//! trait so that HTTP-backed providers and test doubles are interchangeable.
//!
//! Constructors return `Result` to surface invalid provider data early; the
//! ranking engine treats per-destination failures as skips and only aborts
//! when the origin cannot be resolved.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapter;
mod airport;
pub mod distance;
mod error;
mod quote;
pub mod ranking;
mod request;
mod window;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use adapter::{AdapterError, FlightAdapter};
pub use airport::{Airport, AirportError};
pub use distance::{distance_km, geodesic_distance_km};
pub use error::ErrorCategory;
pub use quote::{FlightQuote, QuoteError};
pub use ranking::{
    DestinationOutcome, OptimizationResult, PricePerKmRanker, RankedCandidate, RankingError,
    RankingReport, SkipReason, find_best_price_per_km,
};
pub use request::{OptimizationRequest, RequestValidationError};
pub use window::SearchWindow;
