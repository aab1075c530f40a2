//! Kiwi.com Tequila flight adapter.
//!
//! [`KiwiFlightAdapter`] resolves cities through the `locations/query`
//! endpoint and prices one-way itineraries through `v2/search`. Both calls
//! authenticate with the `apikey` header taken from [`KiwiAdapterConfig`].
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use faremeter_core::{FlightAdapter, SearchWindow};
//! use faremeter_data::kiwi::{KiwiAdapterConfig, KiwiFlightAdapter};
//!
//! let config = KiwiAdapterConfig::new("my-api-key").with_timeout(Duration::from_secs(10));
//! let adapter = KiwiFlightAdapter::with_config(config)?;
//!
//! let london = adapter.resolve_main_airport("London")?;
//! let paris = adapter.resolve_main_airport("Paris")?;
//! let quote = adapter.search_cheapest_one_way(
//!     &london.iata_code,
//!     &paris.iata_code,
//!     &SearchWindow::from_now(),
//! )?;
//! println!("{quote:?}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;
mod wire;

pub use provider::{
    AdapterBuildError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    KiwiAdapterConfig, KiwiFlightAdapter,
};
