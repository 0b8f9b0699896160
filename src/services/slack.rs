//! Schedule slack analysis.
//!
//! Decides whether an extra stop fits between an anchor waypoint and its
//! successor without breaking the committed schedule: the detour through
//! the new stop (plus a fixed loading allowance) must fit inside the gap
//! between the two scheduled arrivals, with a safety margin to spare.

use crate::config::MatcherConfig;
use crate::services::geo;
use crate::types::{Coordinates, Waypoint};

/// Why an insertion point is not usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibleReason {
    /// The anchor has no estimated arrival, so there is no schedule to
    /// insert into
    MissingAnchorArrival,
    /// The anchor is the route's last stop; there is no leg to detour
    AnchorIsLastStop,
    /// The following waypoint has no estimated arrival, so the gap is
    /// unknown
    MissingNextArrival,
    /// The gap minus the stop duration cannot absorb detour plus margin
    InsufficientBuffer,
}

/// Outcome of analyzing one insertion point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlackAnalysis {
    Feasible {
        /// Per-anchor score contribution, 0-100
        partial_score: f64,
        /// Detour minus original leg, plus the loading allowance
        additional_minutes: f64,
        /// Schedule gap minus the anchor's planned stop duration
        available_buffer_minutes: f64,
    },
    Infeasible(InfeasibleReason),
}

impl SlackAnalysis {
    pub fn is_feasible(&self) -> bool {
        matches!(self, SlackAnalysis::Feasible { .. })
    }

    /// Score contribution; 0 for infeasible anchors
    pub fn partial_score(&self) -> f64 {
        match self {
            SlackAnalysis::Feasible { partial_score, .. } => *partial_score,
            SlackAnalysis::Infeasible(_) => 0.0,
        }
    }
}

/// Analyze inserting a visit to `target` between the anchor waypoint and
/// its successor. `waypoints` must already be ordered by sequence number.
pub fn analyze_insertion(
    waypoints: &[Waypoint],
    anchor_index: usize,
    target: &Coordinates,
    config: &MatcherConfig,
) -> SlackAnalysis {
    let anchor = &waypoints[anchor_index];

    let anchor_arrival = match anchor.estimated_arrival {
        Some(arrival) => arrival,
        None => return SlackAnalysis::Infeasible(InfeasibleReason::MissingAnchorArrival),
    };

    let next = match waypoints.get(anchor_index + 1) {
        Some(next) => next,
        None => return SlackAnalysis::Infeasible(InfeasibleReason::AnchorIsLastStop),
    };

    let next_arrival = match next.estimated_arrival {
        Some(arrival) => arrival,
        None => return SlackAnalysis::Infeasible(InfeasibleReason::MissingNextArrival),
    };

    let speed = config.average_speed_kmh;
    let original_leg_minutes =
        geo::travel_time_minutes(&anchor.coordinates, &next.coordinates, speed);
    let detour_minutes = geo::travel_time_minutes(&anchor.coordinates, target, speed)
        + geo::travel_time_minutes(target, &next.coordinates, speed);

    let additional_minutes =
        detour_minutes - original_leg_minutes + config.loading_allowance_minutes;

    let gap_minutes = (next_arrival - anchor_arrival).num_seconds() as f64 / 60.0;
    let stop_minutes = anchor.stop_duration_minutes.unwrap_or(0) as f64;
    let available_buffer_minutes = gap_minutes - stop_minutes;

    let required_minutes = additional_minutes + config.minimum_buffer_minutes;
    if available_buffer_minutes < required_minutes {
        return SlackAnalysis::Infeasible(InfeasibleReason::InsufficientBuffer);
    }

    let partial_score = ((available_buffer_minutes / required_minutes) * 100.0).min(100.0);

    SlackAnalysis::Feasible {
        partial_score,
        additional_minutes,
        available_buffer_minutes,
    }
}
