//! Engine defaults and fixed constants

/// Maximum distance from a route waypoint to a load endpoint for the
/// waypoint to qualify as an anchor (km)
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Baseline average speed for travel time estimation (km/h)
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 60.0;

/// Safety margin that must remain after the detour fits (minutes)
pub const DEFAULT_MINIMUM_BUFFER_MINUTES: f64 = 30.0;

/// Fixed loading/unloading allowance added to every detour (minutes)
pub const DEFAULT_LOADING_ALLOWANCE_MINUTES: f64 = 30.0;

/// Pickup slack weight in the combined score. Pickup is weighted higher
/// because early-route slack is scarcer.
pub const PICKUP_SCORE_WEIGHT: f64 = 0.6;

/// Delivery slack weight in the combined score
pub const DELIVERY_SCORE_WEIGHT: f64 = 0.4;
