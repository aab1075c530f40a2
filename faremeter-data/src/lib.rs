//! Flight-data providers for the Faremeter engine.
//!
//! The [`kiwi`] module implements [`faremeter_core::FlightAdapter`] over the
//! Kiwi.com Tequila API.

#![forbid(unsafe_code)]

pub mod kiwi;
