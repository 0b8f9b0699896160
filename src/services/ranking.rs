//! Candidate ranking

use std::cmp::Ordering;

use crate::types::MatchCandidate;

/// Order candidates by descending compatibility score, then ascending
/// distance to pickup. The sort is stable, so identical inputs always
/// produce identical output order.
pub fn rank(mut candidates: Vec<MatchCandidate>) -> Vec<MatchCandidate> {
    candidates.sort_by(|a, b| {
        b.compatibility_score
            .partial_cmp(&a.compatibility_score)
            .unwrap_or(Ordering::Equal)
            .then(
                a.distance_to_pickup_km
                    .partial_cmp(&b.distance_to_pickup_km)
                    .unwrap_or(Ordering::Equal),
            )
    });
    candidates
}
