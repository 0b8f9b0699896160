//! Matching input/output types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Load, Route, Truck, Waypoint};

/// One snapshot entry handed over by the route repository: a truck, one
/// of its routes, and that route's waypoints. A truck with several
/// qualifying routes appears once per route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    pub truck: Truck,
    pub route: Route,
    pub waypoints: Vec<Waypoint>,
}

/// Everything a matching run consumes, as supplied by the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub load: Load,
    pub candidates: Vec<RouteCandidate>,
}

/// One ranked match produced by the engine. Transient result value;
/// trucks are never mutated to carry these numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub truck_id: Uuid,
    pub route_id: Uuid,
    /// Distance from the closest route waypoint to the pickup (km)
    pub distance_to_pickup_km: f64,
    /// Combined compatibility score, 0-100
    pub compatibility_score: f64,
    /// Estimated total route length (km, great-circle legs)
    pub route_distance_km: f64,
}

/// Filtered-out counts for one matching run. Diagnostics only - a route
/// failing a filter is expected and never an error.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub candidates_considered: usize,
    pub rejected_hard_filter: usize,
    pub rejected_data_inconsistency: usize,
    pub rejected_no_anchor: usize,
    pub rejected_sequence_order: usize,
    pub rejected_time_window: usize,
    pub rejected_slack: usize,
    pub skipped_truck_already_matched: usize,
    pub matched: usize,
}
