//! Route and waypoint types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Coordinates;

/// Route entity - a truck's planned multi-stop itinerary.
///
/// Waypoints are carried separately in the match snapshot (see
/// `RouteCandidate`); the route itself only holds the validity window
/// and the active flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub is_active: bool,
    /// Start of the validity window
    pub start_date: DateTime<Utc>,
    /// End of the validity window; open-ended when absent
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
}

impl Route {
    /// True when the validity window covers the whole [from, until] range
    pub fn covers(&self, from: DateTime<Utc>, until: DateTime<Utc>) -> bool {
        if from < self.start_date {
            return false;
        }
        match self.end_date {
            Some(end) => until <= end,
            None => true,
        }
    }
}

/// A planned stop on a route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub route_id: Uuid,
    /// Visit order within the route; unique per route
    pub sequence_number: i32,
    pub coordinates: Coordinates,
    /// Scheduled arrival, when the route has been timed
    #[serde(default)]
    pub estimated_arrival: Option<DateTime<Utc>>,
    /// Planned stop duration in minutes
    #[serde(default)]
    pub stop_duration_minutes: Option<i32>,
}
