//! Load types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// True when both components are finite numbers (no NaN/Inf)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Hazardous-materials class declared on a load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardClass {
    #[default]
    None,
    Flammable,
    Corrosive,
    Explosive,
    Toxic,
}

impl HazardClass {
    /// True when transporting this load requires a hazmat-capable truck
    pub fn requires_hazmat_truck(self) -> bool {
        !matches!(self, HazardClass::None)
    }
}

/// Load entity - a shipment to be matched against planned truck routes.
///
/// Coordinates are optional because loads can be entered before geocoding
/// completes; the matcher rejects loads without both endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Load {
    pub id: Uuid,
    pub pickup_coordinates: Option<Coordinates>,
    pub delivery_coordinates: Option<Coordinates>,
    /// Required pickup time
    pub pickup_date: DateTime<Utc>,
    /// Required delivery time
    pub delivery_date: DateTime<Utc>,
    pub weight_kg: f64,
    /// Required cargo space per axis, when the shipper specified it
    #[serde(default)]
    pub required_length_m: Option<f64>,
    #[serde(default)]
    pub required_width_m: Option<f64>,
    #[serde(default)]
    pub required_height_m: Option<f64>,
    /// Required truck type, when the shipper specified one
    #[serde(default)]
    pub required_truck_type: Option<super::TruckType>,
    #[serde(default)]
    pub requires_temperature_control: bool,
    #[serde(default)]
    pub hazard_class: HazardClass,
}
