//! Route-load matching orchestrator.
//!
//! Runs the full pipeline over an immutable snapshot of trucks and their
//! planned routes: hard eligibility filters, closest-waypoint anchor
//! lookup, schedule slack analysis at both anchors, compatibility
//! scoring, and ranking. Pure synchronous computation; fetching the
//! snapshot (and scoping it to the load's date range) is the
//! repository's job, not the engine's.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::MatcherConfig;
use crate::error::{MatchError, MatchResult};
use crate::services::{geo, ranking, scoring, slack, waypoint_index};
use crate::types::{
    Coordinates, Load, MatchCandidate, MatchStats, Route, RouteCandidate, Truck, Waypoint,
};

/// Match a load against the candidate routes and return the ranked
/// result list. Ordered, possibly empty, never an error for "no match".
pub fn match_load(
    load: &Load,
    candidates: &[RouteCandidate],
    config: &MatcherConfig,
) -> MatchResult<Vec<MatchCandidate>> {
    match_load_with_stats(load, candidates, config).map(|(matches, _)| matches)
}

/// Same as `match_load`, additionally returning filtered-out counts for
/// diagnostics
pub fn match_load_with_stats(
    load: &Load,
    candidates: &[RouteCandidate],
    config: &MatcherConfig,
) -> MatchResult<(Vec<MatchCandidate>, MatchStats)> {
    let (pickup, delivery) = validate_load(load)?;

    let mut stats = MatchStats::default();
    let mut matches: Vec<MatchCandidate> = Vec::new();
    // A truck is claimed by the first route that produces a match;
    // its remaining routes are skipped, not re-scored
    let mut matched_trucks: HashSet<Uuid> = HashSet::new();

    for candidate in candidates {
        stats.candidates_considered += 1;

        if matched_trucks.contains(&candidate.truck.id) {
            stats.skipped_truck_already_matched += 1;
            continue;
        }

        if let Some(found) =
            evaluate_candidate(load, &pickup, &delivery, candidate, config, &mut stats)
        {
            matched_trucks.insert(found.truck_id);
            matches.push(found);
            stats.matched += 1;
        }
    }

    debug!(
        considered = stats.candidates_considered,
        matched = stats.matched,
        rejected_hard_filter = stats.rejected_hard_filter,
        rejected_no_anchor = stats.rejected_no_anchor,
        rejected_slack = stats.rejected_slack,
        "Match run for load {} complete",
        load.id
    );

    Ok((ranking::rank(matches), stats))
}

/// Validate the load's geometry up front. Malformed input is a hard
/// error, distinguishable from an empty result.
fn validate_load(load: &Load) -> MatchResult<(Coordinates, Coordinates)> {
    let pickup = load
        .pickup_coordinates
        .ok_or(MatchError::MissingPickupCoordinates(load.id))?;
    let delivery = load
        .delivery_coordinates
        .ok_or(MatchError::MissingDeliveryCoordinates(load.id))?;

    if !pickup.is_finite() {
        return Err(MatchError::InvalidCoordinates {
            load_id: load.id,
            which: "pickup",
        });
    }
    if !delivery.is_finite() {
        return Err(MatchError::InvalidCoordinates {
            load_id: load.id,
            which: "delivery",
        });
    }
    if load.delivery_date < load.pickup_date {
        return Err(MatchError::InvalidLoadWindow(load.id));
    }

    Ok((pickup, delivery))
}

/// Evaluate one truck/route pair. Returns the match when the route can
/// absorb both stops; updates the rejection counters otherwise.
fn evaluate_candidate(
    load: &Load,
    pickup: &Coordinates,
    delivery: &Coordinates,
    candidate: &RouteCandidate,
    config: &MatcherConfig,
    stats: &mut MatchStats,
) -> Option<MatchCandidate> {
    let truck = &candidate.truck;
    let route = &candidate.route;

    if !passes_hard_filters(load, truck, route) {
        stats.rejected_hard_filter += 1;
        return None;
    }

    let waypoints = match ordered_waypoints(route, &candidate.waypoints) {
        Some(waypoints) => waypoints,
        None => {
            stats.rejected_data_inconsistency += 1;
            return None;
        }
    };

    let pickup_anchor = waypoint_index::find_closest(&waypoints, pickup, config.max_distance_km);
    let delivery_anchor =
        waypoint_index::find_closest(&waypoints, delivery, config.max_distance_km);
    let (pickup_anchor, delivery_anchor) = match (pickup_anchor, delivery_anchor) {
        (Some(p), Some(d)) => (p, d),
        _ => {
            stats.rejected_no_anchor += 1;
            return None;
        }
    };

    // The route must visit the pickup region no later than the delivery
    // region
    let pickup_seq = waypoints[pickup_anchor.index].sequence_number;
    let delivery_seq = waypoints[delivery_anchor.index].sequence_number;
    if pickup_seq > delivery_seq {
        stats.rejected_sequence_order += 1;
        return None;
    }

    // The load's hard window must fit inside the schedule already
    // committed at the anchors: pickup no earlier than the truck gets
    // there, delivery no later than the truck moves on
    if let Some(eta) = waypoints[pickup_anchor.index].estimated_arrival {
        if load.pickup_date < eta {
            stats.rejected_time_window += 1;
            return None;
        }
    }
    if let Some(eta) = waypoints[delivery_anchor.index].estimated_arrival {
        if load.delivery_date > eta {
            stats.rejected_time_window += 1;
            return None;
        }
    }

    let pickup_slack = slack::analyze_insertion(&waypoints, pickup_anchor.index, pickup, config);
    let delivery_slack =
        slack::analyze_insertion(&waypoints, delivery_anchor.index, delivery, config);
    if !pickup_slack.is_feasible() || !delivery_slack.is_feasible() {
        stats.rejected_slack += 1;
        return None;
    }

    let score = scoring::combine(pickup_slack.partial_score(), delivery_slack.partial_score());
    // A zero score means "do not include" even when the slack checks
    // passed at the boundary
    if score <= 0.0 {
        stats.rejected_slack += 1;
        return None;
    }

    Some(MatchCandidate {
        truck_id: truck.id,
        route_id: route.id,
        distance_to_pickup_km: pickup_anchor.distance_km,
        compatibility_score: score,
        route_distance_km: geo::route_distance_km(&waypoints),
    })
}

/// Hard eligibility filters, short-circuiting in a fixed order. Failing any
/// of these excludes the truck regardless of geometry.
fn passes_hard_filters(load: &Load, truck: &Truck, route: &Route) -> bool {
    // 1. Approved and operationally active
    if !truck.is_operational() {
        return false;
    }

    // 2. Capacity
    if truck.available_capacity_kg < load.weight_kg {
        return false;
    }

    // 3. Required truck type
    if let Some(required) = load.required_truck_type {
        if truck.truck_type != required {
            return false;
        }
    }

    // 4. Dimensions, per axis, only when both sides are known
    if let Some(dims) = truck.dimensions {
        if load.required_length_m.is_some_and(|l| dims.length_m < l)
            || load.required_width_m.is_some_and(|w| dims.width_m < w)
            || load.required_height_m.is_some_and(|h| dims.height_m < h)
        {
            return false;
        }
    }

    // 5. Temperature control
    if load.requires_temperature_control && !truck.has_refrigeration {
        return false;
    }

    // 6. Hazardous materials
    if load.hazard_class.requires_hazmat_truck() && !truck.can_transport_hazmat {
        return false;
    }

    // 7. Route validity window must cover the load window; same for the
    // truck's own availability window where bounded
    if !route.is_active || !route.covers(load.pickup_date, load.delivery_date) {
        return false;
    }
    if !truck.is_available_during(load.pickup_date, load.delivery_date) {
        return false;
    }

    true
}

/// Return the route's waypoints ordered by sequence number, or `None`
/// when the route's data is unusable (empty, duplicate sequence
/// numbers, or non-finite coordinates). Snapshots are not trusted to
/// arrive pre-sorted or well-formed.
fn ordered_waypoints(route: &Route, waypoints: &[Waypoint]) -> Option<Vec<Waypoint>> {
    if waypoints.is_empty() {
        warn!("Route {} has no waypoints, skipping", route.id);
        return None;
    }

    // NaN compares false against every distance threshold
    if waypoints.iter().any(|w| !w.coordinates.is_finite()) {
        warn!(
            "Route {} has non-finite waypoint coordinates, skipping",
            route.id
        );
        return None;
    }

    let mut ordered = waypoints.to_vec();
    ordered.sort_by_key(|w| w.sequence_number);

    let has_duplicates = ordered
        .windows(2)
        .any(|pair| pair[0].sequence_number == pair[1].sequence_number);
    if has_duplicates {
        warn!(
            "Route {} has duplicate waypoint sequence numbers, skipping",
            route.id
        );
        return None;
    }

    Some(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HazardClass, TruckDimensions, TruckStatus, TruckType};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap()
    }

    fn make_truck() -> Truck {
        Truck {
            id: Uuid::new_v4(),
            license_plate: "TRK 0001".to_string(),
            truck_type: TruckType::DryVan,
            status: TruckStatus::Active,
            is_approved: true,
            available_capacity_kg: 20000.0,
            dimensions: None,
            has_refrigeration: false,
            can_transport_hazmat: false,
            has_liftgate: false,
            has_ramp: false,
            available_from: None,
            available_until: None,
        }
    }

    fn make_route(truck_id: Uuid) -> Route {
        Route {
            id: Uuid::new_v4(),
            truck_id,
            is_active: true,
            start_date: base_time() - Duration::days(2),
            end_date: Some(base_time() + Duration::days(30)),
        }
    }

    fn make_waypoint(route_id: Uuid, seq: i32, lng: f64, arrival_hours: i64) -> Waypoint {
        Waypoint {
            route_id,
            sequence_number: seq,
            coordinates: Coordinates { lat: 0.0, lng },
            estimated_arrival: Some(base_time() + Duration::hours(arrival_hours)),
            stop_duration_minutes: None,
        }
    }

    /// Equator route with generous 8-hour gaps between ~111 km legs.
    /// Pickups near the start and deliveries near the third stop match
    /// comfortably.
    fn make_candidate() -> RouteCandidate {
        let truck = make_truck();
        let route = make_route(truck.id);
        let waypoints = vec![
            make_waypoint(route.id, 1, 0.0, 0),
            make_waypoint(route.id, 2, 1.0, 8),
            make_waypoint(route.id, 3, 2.0, 16),
            make_waypoint(route.id, 4, 3.0, 24),
        ];
        RouteCandidate { truck, route, waypoints }
    }

    fn make_load() -> Load {
        Load {
            id: Uuid::new_v4(),
            pickup_coordinates: Some(Coordinates { lat: 0.0, lng: 0.1 }),
            delivery_coordinates: Some(Coordinates { lat: 0.0, lng: 2.1 }),
            pickup_date: base_time() + Duration::hours(1),
            delivery_date: base_time() + Duration::hours(10),
            weight_kg: 10000.0,
            required_length_m: None,
            required_width_m: None,
            required_height_m: None,
            required_truck_type: None,
            requires_temperature_control: false,
            hazard_class: HazardClass::None,
        }
    }

    fn config() -> MatcherConfig {
        MatcherConfig::default()
    }

    #[test]
    fn test_feasible_candidate_matches() {
        let load = make_load();
        let candidate = make_candidate();
        let truck_id = candidate.truck.id;

        let matches = match_load(&load, &[candidate], &config()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].truck_id, truck_id);
        // Pickup at lng 0.1 is ~11 km from the first waypoint
        assert!((matches[0].distance_to_pickup_km - 11.1).abs() < 0.5);
        assert!(matches[0].compatibility_score > 0.0);
        assert!(matches[0].compatibility_score <= 100.0);
        assert!(matches[0].route_distance_km > 300.0);
    }

    #[test]
    fn test_empty_candidate_list_is_empty_result() {
        let load = make_load();
        let matches = match_load(&load, &[], &config()).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn test_missing_pickup_coordinates_is_error() {
        let mut load = make_load();
        load.pickup_coordinates = None;

        let err = match_load(&load, &[make_candidate()], &config()).unwrap_err();
        assert_eq!(err, MatchError::MissingPickupCoordinates(load.id));
    }

    #[test]
    fn test_nan_coordinates_is_error() {
        let mut load = make_load();
        load.delivery_coordinates = Some(Coordinates { lat: f64::NAN, lng: 2.1 });

        let err = match_load(&load, &[make_candidate()], &config()).unwrap_err();
        assert_eq!(
            err,
            MatchError::InvalidCoordinates { load_id: load.id, which: "delivery" }
        );
    }

    #[test]
    fn test_delivery_before_pickup_is_error() {
        let mut load = make_load();
        load.delivery_date = load.pickup_date - Duration::hours(2);

        let err = match_load(&load, &[make_candidate()], &config()).unwrap_err();
        assert_eq!(err, MatchError::InvalidLoadWindow(load.id));
    }

    #[test]
    fn test_capacity_filter_excludes_regardless_of_geometry() {
        let load = make_load();
        let mut candidate = make_candidate();
        candidate.truck.available_capacity_kg = load.weight_kg - 1.0;

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_hard_filter, 1);
    }

    #[test]
    fn test_unapproved_truck_excluded() {
        let load = make_load();
        let mut candidate = make_candidate();
        candidate.truck.is_approved = false;

        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());
    }

    #[test]
    fn test_truck_type_mismatch_excluded() {
        let mut load = make_load();
        load.required_truck_type = Some(TruckType::Flatbed);
        let candidate = make_candidate(); // dry van

        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());
    }

    #[test]
    fn test_dimension_filter_applies_per_axis() {
        let mut load = make_load();
        load.required_height_m = Some(3.0);

        let mut candidate = make_candidate();
        candidate.truck.dimensions = Some(TruckDimensions {
            length_m: 13.6,
            width_m: 2.5,
            height_m: 2.7,
        });
        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());

        // Unknown truck dimensions pass the check
        let candidate = make_candidate();
        assert_eq!(match_load(&load, &[candidate], &config()).unwrap().len(), 1);
    }

    #[test]
    fn test_temperature_control_requires_refrigeration() {
        let mut load = make_load();
        load.requires_temperature_control = true;

        let candidate = make_candidate();
        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());

        let mut reefer = make_candidate();
        reefer.truck.has_refrigeration = true;
        assert_eq!(match_load(&load, &[reefer], &config()).unwrap().len(), 1);
    }

    #[test]
    fn test_hazmat_load_requires_capable_truck() {
        let mut load = make_load();
        load.hazard_class = HazardClass::Flammable;

        let candidate = make_candidate();
        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());

        let mut capable = make_candidate();
        capable.truck.can_transport_hazmat = true;
        assert_eq!(match_load(&load, &[capable], &config()).unwrap().len(), 1);
    }

    #[test]
    fn test_route_window_must_cover_load_window() {
        let load = make_load();
        let mut candidate = make_candidate();
        candidate.route.end_date = Some(load.delivery_date - Duration::hours(1));

        assert!(match_load(&load, &[candidate], &config()).unwrap().is_empty());
    }

    #[test]
    fn test_no_anchor_within_range_excluded() {
        let load = make_load();
        let mut candidate = make_candidate();
        // Push the whole route several degrees north, out of the 50 km
        // anchor radius
        for wp in &mut candidate.waypoints {
            wp.coordinates.lat = 5.0;
        }

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_no_anchor, 1);
    }

    #[test]
    fn test_pickup_after_delivery_anchor_excluded() {
        let load = make_load();
        let mut candidate = make_candidate();
        // Reverse the geography while keeping sequence numbers: the
        // route now passes the delivery area before the pickup area
        candidate.waypoints[0].coordinates.lng = 3.0;
        candidate.waypoints[1].coordinates.lng = 2.0;
        candidate.waypoints[2].coordinates.lng = 1.0;
        candidate.waypoints[3].coordinates.lng = 0.0;

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_sequence_order, 1);
    }

    #[test]
    fn test_pickup_required_before_truck_arrives_excluded() {
        let mut load = make_load();
        // Truck reaches the pickup anchor at T+0; demanding pickup
        // before that cannot work
        load.pickup_date = base_time() - Duration::hours(1);
        let mut candidate = make_candidate();
        candidate.route.start_date = base_time() - Duration::days(5);

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_time_window, 1);
    }

    #[test]
    fn test_delivery_required_after_truck_leaves_excluded() {
        let mut load = make_load();
        // Delivery anchor ETA is T+16h; requiring delivery at T+20h
        // falls outside the committed schedule
        load.delivery_date = base_time() + Duration::hours(20);
        let candidate = make_candidate();

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_time_window, 1);
    }

    #[test]
    fn test_tight_schedule_rejected_by_slack() {
        let mut load = make_load();
        let mut candidate = make_candidate();
        // Compress the schedule: 30-minute gaps cannot absorb the
        // 30-minute loading allowance plus the 30-minute safety margin
        for (i, wp) in candidate.waypoints.iter_mut().enumerate() {
            wp.estimated_arrival = Some(base_time() + Duration::minutes(30 * i as i64));
        }

        // Keep the hard window satisfiable against the tighter ETAs
        load.pickup_date = base_time();
        load.delivery_date = base_time() + Duration::hours(1);

        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_slack, 1);
    }

    #[test]
    fn test_empty_waypoints_skipped_without_aborting_run() {
        let load = make_load();
        let mut broken = make_candidate();
        broken.waypoints.clear();
        let good = make_candidate();
        let good_truck = good.truck.id;

        let (matches, stats) =
            match_load_with_stats(&load, &[broken, good], &config()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].truck_id, good_truck);
        assert_eq!(stats.rejected_data_inconsistency, 1);
    }

    #[test]
    fn test_duplicate_sequence_numbers_skipped() {
        let load = make_load();
        let mut broken = make_candidate();
        broken.waypoints[1].sequence_number = broken.waypoints[0].sequence_number;

        let (matches, stats) =
            match_load_with_stats(&load, &[broken], &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_data_inconsistency, 1);
    }

    #[test]
    fn test_non_finite_waypoint_coordinates_skipped() {
        let load = make_load();
        let mut broken = make_candidate();
        broken.waypoints[1].coordinates.lat = f64::NAN;
        let good = make_candidate();
        let good_truck = good.truck.id;

        let (matches, stats) =
            match_load_with_stats(&load, &[broken, good], &config()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].truck_id, good_truck);
        assert!(matches[0].distance_to_pickup_km.is_finite());
        assert_eq!(stats.rejected_data_inconsistency, 1);
    }

    #[test]
    fn test_unsorted_waypoints_are_resorted() {
        let load = make_load();
        let mut candidate = make_candidate();
        candidate.waypoints.reverse();

        let matches = match_load(&load, &[candidate], &config()).unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_truck_with_two_routes_matches_first_encountered() {
        let load = make_load();
        let first = make_candidate();
        let truck = first.truck.clone();
        let first_route = first.route.id;

        let mut second = make_candidate();
        second.truck = truck;
        let (matches, stats) =
            match_load_with_stats(&load, &[first, second], &config()).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].route_id, first_route);
        assert_eq!(stats.skipped_truck_already_matched, 1);
    }

    #[test]
    fn test_failed_first_route_does_not_claim_truck() {
        let load = make_load();
        let mut failing = make_candidate();
        failing.waypoints.clear();
        let truck = failing.truck.clone();

        let mut qualifying = make_candidate();
        qualifying.truck = truck;
        let qualifying_route = qualifying.route.id;

        let matches = match_load(&load, &[failing, qualifying], &config()).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].route_id, qualifying_route);
    }

    #[test]
    fn test_results_ranked_by_score_then_distance() {
        let load = make_load();
        let near = make_candidate();
        let mut far = make_candidate();
        // Shift the far candidate's first waypoint a bit further from
        // the pickup; both still score the same, so distance decides
        far.waypoints[0].coordinates.lng = -0.2;
        let near_truck = near.truck.id;

        let matches = match_load(&load, &[far, near], &config()).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].truck_id, near_truck);
        assert!(matches[0].distance_to_pickup_km <= matches[1].distance_to_pickup_km);
    }

    #[test]
    fn test_identical_runs_produce_identical_order() {
        let load = make_load();
        let candidates = vec![make_candidate(), make_candidate(), make_candidate()];

        let first_run = match_load(&load, &candidates, &config()).unwrap();
        let second_run = match_load(&load, &candidates, &config()).unwrap();

        let first_ids: Vec<Uuid> = first_run.iter().map(|m| m.truck_id).collect();
        let second_ids: Vec<Uuid> = second_run.iter().map(|m| m.truck_id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_raising_minimum_buffer_is_monotone() {
        let load = make_load();
        let candidates = vec![make_candidate(), make_candidate()];

        let mut relaxed = config();
        relaxed.minimum_buffer_minutes = 0.0;
        let mut strict = config();
        strict.minimum_buffer_minutes = 10_000.0;

        let with_relaxed = match_load(&load, &candidates, &relaxed).unwrap();
        let with_strict = match_load(&load, &candidates, &strict).unwrap();

        assert!(with_strict.len() <= with_relaxed.len());
        assert!(with_strict.is_empty());
    }

    #[test]
    fn test_two_stop_route_rejected_at_terminal_delivery_anchor() {
        // Single leg W1 (0,0) at T+0h -> W2 (0,4) at T+4h; pickup near
        // (0,1), delivery near (0,3). With the radius widened so both
        // anchors resolve, the pickup anchor is feasible (on-route
        // detour, 4 h gap) but the delivery anchor is the route's last
        // stop, so the candidate is excluded by slack analysis.
        let truck = make_truck();
        let route = make_route(truck.id);
        let waypoints = vec![
            make_waypoint(route.id, 1, 0.0, 0),
            make_waypoint(route.id, 2, 4.0, 4),
        ];
        let candidate = RouteCandidate { truck, route, waypoints };

        let mut load = make_load();
        load.pickup_coordinates = Some(Coordinates { lat: 0.0, lng: 1.0 });
        load.delivery_coordinates = Some(Coordinates { lat: 0.0, lng: 3.0 });
        load.pickup_date = base_time() + Duration::hours(1);
        load.delivery_date = base_time() + Duration::hours(3);

        // Default 50 km radius: neither endpoint has a waypoint in
        // range at all
        let (matches, stats) =
            match_load_with_stats(&load, std::slice::from_ref(&candidate), &config()).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_no_anchor, 1);

        let mut wide = config();
        wide.max_distance_km = 150.0;
        let (matches, stats) =
            match_load_with_stats(&load, &[candidate], &wide).unwrap();
        assert!(matches.is_empty());
        assert_eq!(stats.rejected_slack, 1);
    }

    #[test]
    fn test_scores_are_bounded() {
        let load = make_load();
        let candidates = vec![make_candidate(), make_candidate()];

        for m in match_load(&load, &candidates, &config()).unwrap() {
            assert!(m.compatibility_score >= 0.0);
            assert!(m.compatibility_score <= 100.0);
        }
    }
}
