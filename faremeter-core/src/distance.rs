//! Geodesic distance between coordinates on the WGS-84 ellipsoid.
//!
//! Distances are computed with [`geo::Geodesic`] (Karney's algorithm), which
//! converges for coincident and nearly antipodal points alike. Inputs are not
//! checked for plausibility; callers decide what a zero distance means.

use geo::{Coord, Distance, Geodesic, Point};

const METRES_PER_KILOMETRE: f64 = 1_000.0;

/// Geodesic surface distance in kilometres between two coordinates.
///
/// Coordinates follow the `geo` convention (`x` = longitude, `y` = latitude).
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use faremeter_core::geodesic_distance_km;
///
/// let here = Coord { x: 2.5479, y: 49.0097 };
/// assert_eq!(geodesic_distance_km(here, here), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "unit conversion from metres to kilometres"
)]
pub fn geodesic_distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Geodesic.distance(Point::from(from), Point::from(to)) / METRES_PER_KILOMETRE
}

/// Geodesic distance in kilometres between two `(latitude, longitude)` pairs
/// given in degrees.
#[must_use]
pub fn distance_km(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    geodesic_distance_km(
        Coord {
            x: from_lon,
            y: from_lat,
        },
        Coord { x: to_lon, y: to_lat },
    )
}
