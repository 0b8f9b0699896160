//! Truck types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Truck type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckType {
    DryVan,
    Refrigerated,
    Flatbed,
    Stepdeck,
    Tanker,
    BoxTruck,
}

/// Operational status of a truck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckStatus {
    Active,
    Maintenance,
    OutOfService,
}

/// Cargo space dimensions in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckDimensions {
    pub length_m: f64,
    pub width_m: f64,
    pub height_m: f64,
}

/// Truck entity - a vehicle with capacity, capabilities and an
/// availability window
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    pub id: Uuid,
    pub license_plate: String,
    pub truck_type: TruckType,
    pub status: TruckStatus,
    pub is_approved: bool,
    /// Remaining weight capacity after already-booked freight
    pub available_capacity_kg: f64,
    /// Cargo space dimensions, when known
    #[serde(default)]
    pub dimensions: Option<TruckDimensions>,
    #[serde(default)]
    pub has_refrigeration: bool,
    #[serde(default)]
    pub can_transport_hazmat: bool,
    #[serde(default)]
    pub has_liftgate: bool,
    #[serde(default)]
    pub has_ramp: bool,
    #[serde(default)]
    pub available_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub available_until: Option<DateTime<Utc>>,
}

impl Truck {
    /// True when the truck is approved and operationally active
    pub fn is_operational(&self) -> bool {
        self.is_approved && self.status == TruckStatus::Active
    }

    /// True when the availability window (where bounded) covers the
    /// given [from, until] range
    pub fn is_available_during(&self, from: DateTime<Utc>, until: DateTime<Utc>) -> bool {
        if let Some(available_from) = self.available_from {
            if from < available_from {
                return false;
            }
        }
        if let Some(available_until) = self.available_until {
            if until > available_until {
                return false;
            }
        }
        true
    }
}
