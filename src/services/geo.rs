//! Geographic calculations

use crate::types::{Coordinates, Waypoint};

/// Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate Haversine distance between two points in kilometers
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lng - from.lng).to_radians();

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Estimate travel time in minutes at the given average speed
pub fn travel_time_minutes(from: &Coordinates, to: &Coordinates, average_speed_kmh: f64) -> f64 {
    (haversine_distance(from, to) / average_speed_kmh) * 60.0
}

/// Estimate total route length as the sum of great-circle leg lengths
/// over the waypoints in their given order
pub fn route_distance_km(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|leg| haversine_distance(&leg[0].coordinates, &leg[1].coordinates))
        .sum()
}
