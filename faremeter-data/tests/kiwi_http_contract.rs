//! HTTP contract tests for [`KiwiFlightAdapter`]: error mapping and a full
//! ranking run over a mock Tequila API.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use faremeter_core::{AdapterError, FlightAdapter, PricePerKmRanker, SearchWindow};
use faremeter_data::kiwi::{KiwiAdapterConfig, KiwiFlightAdapter};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct MockTequila {
    server: MockServer,
    runtime: Runtime,
}

impl MockTequila {
    fn respond(&self, endpoint: &str, template: ResponseTemplate) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path(endpoint))
                .respond_with(template)
                .mount(&self.server),
        );
    }

    fn location(&self, city: &str, code: &str, lat: f64, lon: f64) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/locations/query"))
                .and(query_param("term", city))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "locations": [{"code": code, "name": city, "location": {"lat": lat, "lon": lon}}]
                })))
                .mount(&self.server),
        );
    }

    fn fare(&self, from: &str, to: &str, body: Value) {
        self.runtime.block_on(
            Mock::given(method("GET"))
                .and(path("/v2/search"))
                .and(query_param("fly_from", from))
                .and(query_param("fly_to", to))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&self.server),
        );
    }

    fn adapter_with(&self, config: KiwiAdapterConfig) -> KiwiFlightAdapter {
        KiwiFlightAdapter::with_config(config.with_base_url(self.server.uri()))
            .expect("adapter should build")
    }

    fn adapter(&self) -> KiwiFlightAdapter {
        self.adapter_with(KiwiAdapterConfig::new("test-key"))
    }
}

#[fixture]
fn tequila() -> MockTequila {
    let runtime = Runtime::new().expect("test runtime");
    let server = runtime.block_on(MockServer::start());
    MockTequila { server, runtime }
}

#[fixture]
fn window() -> SearchWindow {
    let start = Utc
        .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
        .single()
        .expect("valid instant");
    SearchWindow::starting_at(start)
}

fn itinerary(price: f64, from: &str, to: &str) -> Value {
    json!({"currency": "USD", "data": [{"price": price, "flyFrom": from, "flyTo": to}]})
}

#[rstest]
fn server_errors_map_to_http_error(tequila: MockTequila, window: SearchWindow) {
    tequila.respond("/v2/search", ResponseTemplate::new(500));

    let err = tequila
        .adapter()
        .search_cheapest_one_way("LHR", "CDG", &window)
        .expect_err("500 should fail");

    match err {
        AdapterError::HttpError { url, status, .. } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/v2/search"), "unexpected url {url}");
        }
        other => panic!("expected HttpError, got {other:?}"),
    }
}

#[rstest]
fn malformed_bodies_map_to_parse_error(tequila: MockTequila) {
    tequila.respond(
        "/locations/query",
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    );

    let err = tequila
        .adapter()
        .resolve_main_airport("London")
        .expect_err("HTML should not decode");

    assert!(matches!(err, AdapterError::ParseError { .. }), "got {err:?}");
}

#[rstest]
fn slow_responses_map_to_timeout(tequila: MockTequila) {
    tequila.respond(
        "/locations/query",
        ResponseTemplate::new(200)
            .set_delay(Duration::from_secs(3))
            .set_body_json(json!({"locations": []})),
    );
    let adapter =
        tequila.adapter_with(KiwiAdapterConfig::new("test-key").with_timeout(Duration::from_millis(200)));

    let err = adapter
        .resolve_main_airport("London")
        .expect_err("request should time out");

    assert!(matches!(err, AdapterError::Timeout { .. }), "got {err:?}");
}

#[rstest]
fn refused_connections_map_to_network_error(window: SearchWindow) {
    let config = KiwiAdapterConfig::new("test-key")
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(2));
    let adapter = KiwiFlightAdapter::with_config(config).expect("adapter should build");

    let err = adapter
        .search_cheapest_one_way("LHR", "CDG", &window)
        .expect_err("nothing listens on port 1");

    assert!(
        matches!(err, AdapterError::NetworkError { .. } | AdapterError::Timeout { .. }),
        "got {err:?}"
    );
}

#[rstest]
fn non_usd_prices_are_rejected(tequila: MockTequila, window: SearchWindow) {
    tequila.fare(
        "LHR",
        "CDG",
        json!({"currency": "EUR", "data": [{"price": 90.0, "flyFrom": "LHR", "flyTo": "CDG"}]}),
    );

    let err = tequila
        .adapter()
        .search_cheapest_one_way("LHR", "CDG", &window)
        .expect_err("EUR should be rejected");

    assert!(matches!(err, AdapterError::UnexpectedCurrency { .. }), "got {err:?}");
}

#[rstest]
fn ranks_destinations_end_to_end(tequila: MockTequila, window: SearchWindow) {
    tequila.location("London", "LHR", 51.47, -0.45);
    tequila.location("Paris", "CDG", 49.01, 2.55);
    tequila.location("Berlin", "TXL", 52.56, 13.29);
    tequila.fare("LHR", "CDG", itinerary(150.0, "LHR", "CDG"));
    tequila.fare("LHR", "TXL", itinerary(200.0, "LHR", "TXL"));
    let adapter = tequila.adapter();

    let result = PricePerKmRanker::new(&adapter)
        .find_best("London", &["Paris", "Berlin"], &window)
        .expect("Berlin should win");

    assert_eq!(result.destination, "Berlin");
    assert_eq!(result.airport_from, "LHR");
    assert_eq!(result.airport_to, "TXL");
    assert_eq!(result.price_usd, 200.0);
}

#[rstest]
fn ranking_survives_a_failing_destination(tequila: MockTequila, window: SearchWindow) {
    tequila.location("London", "LHR", 51.47, -0.45);
    tequila.location("Berlin", "TXL", 52.56, 13.29);
    tequila.fare("LHR", "TXL", itinerary(200.0, "LHR", "TXL"));
    let adapter = tequila.adapter();

    let report = PricePerKmRanker::new(&adapter)
        .rank("London", &["Atlantis", "Berlin"], &window)
        .expect("origin resolves");

    assert_eq!(report.skipped().count(), 1);
    assert_eq!(
        report.best().map(|c| c.destination.as_str()),
        Some("Berlin")
    );
}
