// Great-circle bearing and distance on a spherical Earth model.
//
// These are the only trigonometric primitives in the crate; both the Qibla
// tracker and callers that want a "distance to Makkah" readout go through
// here. Inputs are decimal degrees; callers guarantee latitude in [-90, 90]
// and longitude in [-180, 180].

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fixed coordinate of the Kaaba in Makkah, Saudi Arabia.
pub const KAABA: Coordinate = Coordinate {
    latitude: 21.4225,
    longitude: 39.8262,
};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Normalizes an angle in degrees to [0, 360).
///
/// Idempotent; applied everywhere an angle is produced or subtracted so
/// stored bearings are always in canonical range.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Initial great-circle bearing from `from` to `to`, degrees in [0, 360),
/// 0 = true north, clockwise.
///
/// Degenerate when `from == to` (zero distance); the result is meaningless
/// but still finite.
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();

    normalize_angle(y.atan2(x).to_degrees())
}

/// Great-circle distance between two coordinates in kilometers (haversine).
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Bearing from `from` toward the Kaaba.
pub fn qibla_bearing(from: Coordinate) -> f64 {
    bearing(from, KAABA)
}

/// Distance from `from` to the Kaaba in kilometers.
pub fn distance_to_kaaba_km(from: Coordinate) -> f64 {
    distance_km(from, KAABA)
}
