//! Capabilities required of an external flight-data provider.
//!
//! The [`FlightAdapter`] trait abstracts airport resolution and cheapest-fare
//! search so the ranking engine never depends on transport details. HTTP
//! implementations live in `faremeter-data`; a deterministic double lives in
//! [`crate::test_support`] behind the `test-support` feature.

mod error;
mod provider;

pub use error::AdapterError;
pub use provider::FlightAdapter;
