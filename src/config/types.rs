use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bus::DEFAULT_CAPACITY;
use crate::model::{GeoCoordinate, SimilarBy};
use crate::ui::controller::ViewSettings;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub bus: BusConfig,
}

/// Where the driver's data set comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON fixture with `boats` and `reviews` arrays.
    pub fixture: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewsConfig {
    /// Similarity criterion for the similar boats view (default: "Type").
    #[serde(default = "default_similar_by")]
    pub similar_by: String,
    /// Request a high-accuracy position fix (default: true).
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
}

/// Fixed viewer position. Leave both unset to report "position unavailable".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusConfig {
    /// Buffered messages per topic (default: 64).
    #[serde(default = "default_bus_capacity")]
    pub capacity: usize,
}

fn default_similar_by() -> String {
    "Type".to_string()
}

fn default_high_accuracy() -> bool {
    true
}

fn default_bus_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            similar_by: default_similar_by(),
            high_accuracy: default_high_accuracy(),
        }
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            capacity: default_bus_capacity(),
        }
    }
}

impl LocationConfig {
    pub fn position(&self) -> Option<GeoCoordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoCoordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}

impl ViewsConfig {
    pub fn settings(&self) -> ViewSettings {
        ViewSettings {
            similar_by: Some(SimilarBy::new(self.similar_by.clone())),
            high_accuracy: self.high_accuracy,
        }
    }
}
