//! Map view settings handed to the rendering layer at startup.

use serde::{Deserialize, Serialize};

/// Initial view over Washington, DC at world zoom.
pub const DEFAULT_CENTER: (f64, f64) = (38.9072, -77.0369);
pub const DEFAULT_ZOOM: u32 = 2;

/// Where the map opens. Passed to the rendering layer at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER.0,
            center_lng: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
        }
    }
}
