//! Geographic coordinate type.

/// Mean Earth radius in metres, as used by the haversine formula.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A geographic coordinate in decimal degrees.
///
/// A plain value type: two points with the same coordinates are the same
/// point. Latitude increases northward, longitude eastward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a point from decimal-degree coordinates.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to another point in metres, via the haversine
    /// formula.
    ///
    /// Symmetric, and zero for identical points. NaN coordinates propagate
    /// to a NaN distance.
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let delta_phi = (other.lat - self.lat).to_radians();
        let delta_lambda = (other.lng - self.lng).to_radians();

        let a = (delta_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}
