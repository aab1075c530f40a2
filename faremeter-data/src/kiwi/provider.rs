//! `FlightAdapter` over the Kiwi.com Tequila HTTP API.
//!
//! The [`FlightAdapter`] trait is synchronous so the ranking engine stays
//! embeddable outside async code. This adapter bridges to `reqwest` by
//! blocking on a Tokio runtime it owns.

use std::future::Future;
use std::time::Duration;

use faremeter_core::{AdapterError, Airport, FlightAdapter, FlightQuote, SearchWindow};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use super::wire::{LocationsResponse, SearchResponse};

/// Production Tequila endpoint.
pub const DEFAULT_BASE_URL: &str = "https://tequila-api.kiwi.com";

/// Default user agent for Tequila requests.
pub const DEFAULT_USER_AGENT: &str = "faremeter/0.1";

/// Connect and request timeout, in seconds, used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Prices are always requested, and checked, in this currency.
const CURRENCY: &str = "USD";

/// Tequila expects dates as `dd/mm/yyyy`.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Failures while constructing a [`KiwiFlightAdapter`].
#[derive(Debug, Error)]
pub enum AdapterBuildError {
    /// The API key was empty or whitespace.
    #[error("Tequila API key is not configured")]
    MissingApiKey,
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`KiwiFlightAdapter`].
#[derive(Clone)]
pub struct KiwiAdapterConfig {
    /// Base URL of the Tequila API, without a trailing path.
    pub base_url: String,
    /// Secret sent in the `apikey` header.
    pub api_key: String,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl std::fmt::Debug for KiwiAdapterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiwiAdapterConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl KiwiAdapterConfig {
    /// Configuration for the production endpoint authenticated by `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Point the adapter at another endpoint, such as a local mock.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Tequila-backed flight adapter.
///
/// The adapter owns its HTTP client and a `current_thread` Tokio runtime that
/// is reused across calls. Inside a multi-threaded Tokio runtime it blocks on
/// the caller's handle through [`tokio::task::block_in_place`] instead; inside
/// a `current_thread` runtime it falls back to its own runtime.
pub struct KiwiFlightAdapter {
    client: Client,
    config: KiwiAdapterConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for KiwiFlightAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KiwiFlightAdapter")
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl KiwiFlightAdapter {
    /// Create an adapter for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AdapterBuildError> {
        Self::with_config(KiwiAdapterConfig::new(api_key))
    }

    /// Create an adapter with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client or Tokio
    /// runtime fails to build.
    pub fn with_config(config: KiwiAdapterConfig) -> Result<Self, AdapterBuildError> {
        if config.api_key.trim().is_empty() {
            return Err(AdapterBuildError::MissingApiKey);
        }
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(AdapterBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(AdapterBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &KiwiAdapterConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("apikey", &self.config.api_key)
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, AdapterError> {
        let response = request
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        response.json().await.map_err(|err| {
            if err.is_timeout() {
                self.convert_reqwest_error(&err, url)
            } else {
                AdapterError::ParseError {
                    message: err.to_string(),
                }
            }
        })
    }

    async fn resolve_async(&self, city: &str) -> Result<Airport, AdapterError> {
        let url = self.endpoint("locations/query");
        let request = self.get(&url).query(&[
            ("term", city),
            ("location_types", "airport"),
            ("active_only", "true"),
            ("sort", "-rank"),
            ("limit", "1"),
        ]);
        let response: LocationsResponse = self.fetch_json(&url, request).await?;
        response.into_airport(city)
    }

    async fn search_async(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError> {
        let url = self.endpoint("v2/search");
        let date_from = window.first_day().format(DATE_FORMAT).to_string();
        let date_to = window.last_day().format(DATE_FORMAT).to_string();
        let request = self.get(&url).query(&[
            ("fly_from", from_code),
            ("fly_to", to_code),
            ("date_from", date_from.as_str()),
            ("date_to", date_to.as_str()),
            ("flight_type", "oneway"),
            ("adults", "1"),
            ("curr", CURRENCY),
            ("locale", "en"),
            ("limit", "1"),
            ("sort", "price"),
            ("asc", "1"),
        ]);
        let response: SearchResponse = self.fetch_json(&url, request).await?;
        response.into_quote(CURRENCY)
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> AdapterError {
        if error.is_timeout() {
            return AdapterError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return AdapterError::HttpError {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        AdapterError::NetworkError {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Drive `future` to completion from synchronous code.
    ///
    /// `block_in_place` panics on a `current_thread` runtime, so only a
    /// multi-threaded caller runtime is reused.
    fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}

impl FlightAdapter for KiwiFlightAdapter {
    fn resolve_main_airport(&self, city: &str) -> Result<Airport, AdapterError> {
        log::debug!("resolving airport for {city}");
        self.block_on(self.resolve_async(city))
    }

    fn search_cheapest_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        window: &SearchWindow,
    ) -> Result<Option<FlightQuote>, AdapterError> {
        log::debug!(
            "searching {from_code} -> {to_code} between {} and {}",
            window.first_day(),
            window.last_day()
        );
        self.block_on(self.search_async(from_code, to_code, window))
    }
}
