//! Test helpers for request files and stubbed flight data.

use super::*;
use camino::Utf8Path;
use faremeter_core::test_support::StubFlightAdapter;
use faremeter_core::{Airport, FlightAdapter, FlightQuote};
use std::cell::Cell;
use std::fs;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

fn airport(code: &str, latitude: f64, longitude: f64) -> Airport {
    Airport::new(code, latitude, longitude, code).expect("valid airport")
}

fn quote(from: &str, to: &str, price: f64) -> FlightQuote {
    FlightQuote::new(price, from, to).expect("valid quote")
}

/// London, Paris and Berlin with fares to both destinations.
pub(super) fn priced_europe() -> StubFlightAdapter {
    unpriced_europe()
        .with_quote(quote("LHR", "CDG", 150.0))
        .with_quote(quote("LHR", "TXL", 200.0))
}

/// London, Paris and Berlin with no fares at all.
pub(super) fn unpriced_europe() -> StubFlightAdapter {
    StubFlightAdapter::new()
        .with_airport("London", airport("LHR", 51.47, -0.45))
        .with_airport("Paris", airport("CDG", 49.01, 2.55))
        .with_airport("Berlin", airport("TXL", 52.56, 13.29))
}

/// Builder handing out a fresh stub adapter and counting builds.
pub(super) struct StubAdapterBuilder {
    factory: fn() -> StubFlightAdapter,
    builds: Cell<usize>,
}

impl StubAdapterBuilder {
    pub(super) fn new(factory: fn() -> StubFlightAdapter) -> Self {
        Self {
            factory,
            builds: Cell::new(0),
        }
    }

    pub(super) fn builds(&self) -> usize {
        self.builds.get()
    }
}

impl FlightAdapterBuilder for StubAdapterBuilder {
    fn build(&self, _config: &OptimizeConfig) -> Result<Box<dyn FlightAdapter>, CliError> {
        self.builds.set(self.builds.get() + 1);
        Ok(Box::new((self.factory)()))
    }
}
