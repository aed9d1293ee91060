use super::{
    location::{GeoPoint, Location},
    log_entry::LogEntry,
};
use serde::{Deserialize, Serialize};

/// Payload returned by the trip planner. Only `logs` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripResult {
    #[serde(default)]
    pub route: Vec<String>,
    #[serde(default)]
    pub route_coordinates: Option<Vec<[f64; 2]>>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub total_distance: f64, // miles
    #[serde(default)]
    pub total_duration: f64, // hours
    #[serde(default)]
    pub hos_compliant: Option<bool>,
    #[serde(default)]
    pub violations: Vec<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub use_sleeper_berth: bool,
}

impl TripResult {
    /// A missing flag counts as compliant.
    pub fn is_compliant(&self) -> bool {
        self.hos_compliant.unwrap_or(true)
    }

    /// Route polyline: detailed coordinates when present, otherwise the stops.
    pub fn route_positions(&self) -> Vec<GeoPoint> {
        if let Some(coords) = &self.route_coordinates
            && !coords.is_empty()
        {
            return coords.iter().copied().map(GeoPoint::from).collect();
        }

        self.locations
            .as_ref()
            .map(|locs| locs.iter().map(Location::point).collect())
            .unwrap_or_default()
    }
}
