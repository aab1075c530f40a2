use thiserror::Error;

use crate::{AdapterError, ErrorCategory};

/// Errors returned by [`crate::PricePerKmRanker`] and
/// [`crate::find_best_price_per_km`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankingError {
    /// The provider knows no airport for the origin city.
    #[error("no airport found for origin city: {city}")]
    OriginNotFound {
        /// Origin city as supplied.
        city: String,
    },
    /// Resolving the origin failed for a reason other than a missing match.
    #[error("failed to resolve origin city {city}: {source}")]
    OriginLookup {
        /// Origin city as supplied.
        city: String,
        /// Underlying adapter failure.
        #[source]
        source: AdapterError,
    },
    /// Every destination was skipped.
    #[error("no flights available to any destination ({skipped} skipped)")]
    NoViableDestination {
        /// Number of destinations evaluated and skipped.
        skipped: usize,
    },
}

impl RankingError {
    /// Classify the failure for the calling boundary.
    ///
    /// A missing origin and an all-skipped run are caused by the input set;
    /// a transport failure while resolving the origin is internal.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::OriginNotFound { .. } | Self::NoViableDestination { .. } => {
                ErrorCategory::InvalidInput
            }
            Self::OriginLookup { .. } => ErrorCategory::Internal,
        }
    }
}
