//! Haulmatch - route-load matching engine.
//!
//! Decides whether a load (a shipment with pickup/delivery coordinates,
//! a hard time window, weight and handling constraints) can be inserted
//! into a truck's already-planned multi-stop route without breaking the
//! route's schedule, and ranks all compatible trucks.
//!
//! The engine is a pure synchronous computation over an immutable
//! snapshot of trucks, routes and waypoints; fetching and date-scoping
//! that snapshot is the caller's concern.

pub mod config;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use config::MatcherConfig;
pub use error::{MatchError, MatchResult};
pub use services::matcher::{match_load, match_load_with_stats};
