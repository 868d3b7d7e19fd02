pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}

/// Renders decimal degrees without rounding, using the shortest text that
/// parses back to the same double. Whole values keep one fractional digit,
/// so `18.0` stays `18.0` instead of becoming `18`.
pub fn format_degrees(degrees: f64) -> String {
    if degrees.is_finite() && degrees.fract() == 0.0 {
        format!("{degrees:.1}")
    } else {
        format!("{degrees}")
    }
}

/// `latitude,longitude` with no whitespace.
pub fn coordinate_string(latitude: f64, longitude: f64) -> String {
    format!("{},{}", format_degrees(latitude), format_degrees(longitude))
}

pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lon1_rad = to_radians(longitude_1);
    let lat2_rad = to_radians(latitude_2);
    let lon2_rad = to_radians(longitude_2);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
