//! Business logic services

pub mod geo;
pub mod matcher;
pub mod ranking;
pub mod scoring;
pub mod slack;
pub mod waypoint_index;
