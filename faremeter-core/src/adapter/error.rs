use thiserror::Error;

/// Errors from [`crate::adapter::FlightAdapter`] implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The provider returned no airport for the given name.
    #[error("no airport found for city: {city}")]
    AirportNotFound {
        /// City name as supplied by the caller.
        city: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Request URL without query parameters.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The provider answered with a non-success HTTP status.
    #[error("request to {url} failed with HTTP {status}: {message}")]
    HttpError {
        /// Request URL without query parameters.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("network error contacting {url}: {message}")]
    NetworkError {
        /// Request URL without query parameters.
        url: String,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse provider response: {message}")]
    ParseError {
        /// Decoder error detail.
        message: String,
    },
    /// Fares were quoted in a currency other than the one requested.
    #[error("expected fares in {expected}, provider returned {found}")]
    UnexpectedCurrency {
        /// Currency requested from the provider.
        expected: String,
        /// Currency reported by the provider.
        found: String,
    },
}

impl AdapterError {
    /// Whether the failure was caused by the caller's input rather than the
    /// provider or the transport.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AirportNotFound { .. })
    }
}
