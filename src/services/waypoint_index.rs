//! Closest-waypoint lookup.
//!
//! Routes are short (tens of stops), so a linear scan beats any spatial
//! index. The scan keeps the first waypoint on a distance tie, which
//! means the lowest sequence number wins - callers rely on that for
//! deterministic results.

use crate::services::geo;
use crate::types::{Coordinates, Waypoint};

/// The waypoint closest to a target, with its position in the scanned
/// slice and its distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestWaypoint {
    /// Index into the waypoint slice handed to `find_closest`
    pub index: usize,
    pub distance_km: f64,
}

/// Find the closest waypoint within `max_distance_km` of the target.
/// Returns `None` when no waypoint is in range.
pub fn find_closest(
    waypoints: &[Waypoint],
    target: &Coordinates,
    max_distance_km: f64,
) -> Option<ClosestWaypoint> {
    let mut closest: Option<ClosestWaypoint> = None;

    for (index, waypoint) in waypoints.iter().enumerate() {
        let distance_km = geo::haversine_distance(&waypoint.coordinates, target);
        if distance_km > max_distance_km {
            continue;
        }

        // Strict < keeps the earlier waypoint on equal distance
        let improves = match closest {
            Some(ref best) => distance_km < best.distance_km,
            None => true,
        };
        if improves {
            closest = Some(ClosestWaypoint { index, distance_km });
        }
    }

    closest
}
