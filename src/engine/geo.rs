//! Great-circle geometry on a spherical Earth

/// Earth radius in kilometers, used for distance calculations
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two lat/lon points in kilometers using the
/// haversine formula. Symmetric, 0 for coincident points.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push a just past 1.0 near antipodal points; clamp so
    // asin stays defined
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Initial great-circle bearing from point 1 toward point 2, in degrees
/// clockwise from true north, normalized into [0, 360).
///
/// Coincident points yield a deterministic 0.0 (atan2(0, 0) is 0).
pub fn bearing_deg(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let x = delta_lon.sin() * lat2_rad.cos();
    let y = lat1_rad.cos() * lat2_rad.sin()
        - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}
