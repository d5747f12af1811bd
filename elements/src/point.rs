use derive_more::Display;
use serde::Serialize;

/// A plot-ready coordinate pair derived from an [`ElementRecord`](crate::record::ElementRecord).
///
/// This is a visualization heuristic, not a sub-satellite point.
/// `latitude` is the inclination folded about 90 degrees and
/// `longitude` is the right ascension of the ascending node, both in degrees.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default, Display, Serialize)]
#[display(fmt = "{{lat: {}, lon: {}}}", "latitude", "longitude")]
pub struct GeoPoint {
    /// Folded inclination [deg]
    pub latitude: f64,
    /// Right ascension of the ascending node [deg]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The (x, y) pair handed to a plotting surface
    pub const fn lon_lat(self) -> (f64, f64) {
        (self.longitude, self.latitude)
    }
}
