//! Engine error taxonomy.
//!
//! Only malformed input is an error. A truck failing a filter, a route
//! with no qualifying anchor, or an infeasible detour are all expected
//! outcomes and surface as exclusions, never as errors.

use thiserror::Error;

/// Errors a matching run can fail with
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("load {0} has no pickup coordinates")]
    MissingPickupCoordinates(uuid::Uuid),

    #[error("load {0} has no delivery coordinates")]
    MissingDeliveryCoordinates(uuid::Uuid),

    #[error("load {load_id} has non-finite {which} coordinates")]
    InvalidCoordinates {
        load_id: uuid::Uuid,
        which: &'static str,
    },

    #[error("load {0} requires delivery before pickup")]
    InvalidLoadWindow(uuid::Uuid),
}

pub type MatchResult<T> = Result<T, MatchError>;
