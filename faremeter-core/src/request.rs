//! Inbound optimisation requests and their validation.

use thiserror::Error;

/// One origin city and the ordered destinations to compare.
///
/// The JSON form uses `origin_city` and `destination_cities`; the shorter
/// `from_city` and `to_cities` keys are accepted as aliases.
///
/// # Examples
/// ```rust
/// use faremeter_core::OptimizationRequest;
///
/// let request = OptimizationRequest::new("London", ["Paris", "Berlin"]);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.destination_cities.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationRequest {
    /// City the traveller departs from.
    #[cfg_attr(feature = "serde", serde(alias = "from_city"))]
    pub origin_city: String,
    /// Candidate destinations in caller order; ties favour earlier entries.
    #[cfg_attr(feature = "serde", serde(alias = "to_cities"))]
    pub destination_cities: Vec<String>,
}

/// Reasons an [`OptimizationRequest`] is rejected before any provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// The origin city was empty or whitespace.
    #[error("origin city must not be empty")]
    EmptyOrigin,
    /// No destination cities were supplied.
    #[error("at least one destination city is required")]
    NoDestinations,
    /// A destination entry was empty or whitespace.
    #[error("destination city at position {index} must not be empty")]
    EmptyDestination {
        /// Zero-based position in `destination_cities`.
        index: usize,
    },
}

impl OptimizationRequest {
    /// Construct a request from an origin and any iterable of destinations.
    pub fn new<I, S>(origin_city: impl Into<String>, destination_cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            origin_city: origin_city.into(),
            destination_cities: destination_cities.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the request shape.
    ///
    /// # Errors
    ///
    /// Returns the first [`RequestValidationError`] found, checking the origin
    /// before the destinations.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.origin_city.trim().is_empty() {
            return Err(RequestValidationError::EmptyOrigin);
        }
        if self.destination_cities.is_empty() {
            return Err(RequestValidationError::NoDestinations);
        }
        if let Some(index) = self
            .destination_cities
            .iter()
            .position(|city| city.trim().is_empty())
        {
            return Err(RequestValidationError::EmptyDestination { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OptimizationRequest::new("  ", ["Paris"]), RequestValidationError::EmptyOrigin)]
    #[case(
        OptimizationRequest::new("London", Vec::<String>::new()),
        RequestValidationError::NoDestinations
    )]
    #[case(
        OptimizationRequest::new("London", ["Paris", ""]),
        RequestValidationError::EmptyDestination { index: 1 }
    )]
    fn rejects_malformed_requests(
        #[case] request: OptimizationRequest,
        #[case] expected: RequestValidationError,
    ) {
        assert_eq!(request.validate(), Err(expected));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(r#"{"origin_city":"London","destination_cities":["Paris","Berlin"]}"#)]
    #[case(r#"{"from_city":"London","to_cities":["Paris","Berlin"]}"#)]
    fn decodes_both_key_styles(#[case] json: &str) {
        let request: OptimizationRequest = serde_json::from_str(json).expect("decode request");
        assert_eq!(request, OptimizationRequest::new("London", ["Paris", "Berlin"]));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_destinations_fail_to_decode() {
        let result = serde_json::from_str::<OptimizationRequest>(r#"{"origin_city":"London"}"#);
        assert!(result.is_err());
    }
}
