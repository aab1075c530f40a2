//! Property and reference checks for geodesic distance.

use faremeter_core::distance_km;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::london_paris(51.47, -0.45, 49.01, 2.55, 334.0, 354.0)]
#[case::london_berlin(51.47, -0.45, 52.56, 13.29, 920.0, 960.0)]
#[case::new_york_los_angeles(40.64, -73.78, 33.94, -118.41, 3_950.0, 4_000.0)]
fn matches_reference_routes(
    #[case] from_lat: f64,
    #[case] from_lon: f64,
    #[case] to_lat: f64,
    #[case] to_lon: f64,
    #[case] min_km: f64,
    #[case] max_km: f64,
) {
    let distance = distance_km(from_lat, from_lon, to_lat, to_lon);
    assert!(
        (min_km..=max_km).contains(&distance),
        "expected {min_km}..={max_km} km, got {distance}"
    );
}

#[expect(
    clippy::float_arithmetic,
    reason = "comparing distances within a tolerance"
)]
fn asymmetry_km(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    let there = distance_km(from_lat, from_lon, to_lat, to_lon);
    let back = distance_km(to_lat, to_lon, from_lat, from_lon);
    (there - back).abs()
}

proptest! {
    #[test]
    fn distance_is_symmetric(
        from_lat in -89.0_f64..89.0,
        from_lon in -179.0_f64..179.0,
        to_lat in -89.0_f64..89.0,
        to_lon in -179.0_f64..179.0,
    ) {
        let gap = asymmetry_km(from_lat, from_lon, to_lat, to_lon);
        prop_assert!(gap < 1e-6, "distances differ by {gap} km");
    }

    #[test]
    fn distance_is_finite_and_non_negative(
        from_lat in -90.0_f64..=90.0,
        from_lon in -180.0_f64..=180.0,
        to_lat in -90.0_f64..=90.0,
        to_lon in -180.0_f64..=180.0,
    ) {
        let distance = distance_km(from_lat, from_lon, to_lat, to_lon);
        prop_assert!(distance.is_finite());
        prop_assert!(distance >= 0.0);
    }

    #[test]
    fn distinct_points_are_apart(
        lat in -80.0_f64..80.0,
        west in -170.0_f64..-1.0,
        east in 1.0_f64..170.0,
    ) {
        prop_assert!(distance_km(lat, west, lat, east) > 0.0);
    }
}
