//! Compatibility scoring

use crate::defaults::{DELIVERY_SCORE_WEIGHT, PICKUP_SCORE_WEIGHT};

/// Combine pickup and delivery slack scores into one 0-100 value.
/// Pickup carries more weight because slack early in a route is scarcer
/// and riskier to spend.
pub fn combine(pickup_score: f64, delivery_score: f64) -> f64 {
    let combined = pickup_score * PICKUP_SCORE_WEIGHT + delivery_score * DELIVERY_SCORE_WEIGHT;
    combined.clamp(0.0, 100.0)
}
