use serde::{Deserialize, Serialize};

use super::ids::RecordId;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoCoordinate) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// Snapshot of a boat as returned by the data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoatRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub boat_type_id: Option<RecordId>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl BoatRecord {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            boat_type_id: None,
            length: None,
            price: None,
            description: None,
            latitude: None,
            longitude: None,
        }
    }

    pub fn with_type(mut self, type_id: impl Into<RecordId>) -> Self {
        self.boat_type_id = Some(type_id.into());
        self
    }

    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// The boat's position, if both halves are present and finite.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GeoCoordinate::new(lat, lon))
            }
            _ => None,
        }
    }
}

/// Editable fields of a boat in the results grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoatField {
    Name,
    Length,
    Price,
    Description,
}

/// How a grid column renders and validates its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    Currency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub field: BoatField,
    pub kind: ColumnKind,
    pub editable: bool,
}

/// Column layout of the search results grid.
pub const BOAT_COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec {
        label: "Name",
        field: BoatField::Name,
        kind: ColumnKind::Text,
        editable: true,
    },
    ColumnSpec {
        label: "Length",
        field: BoatField::Length,
        kind: ColumnKind::Number,
        editable: true,
    },
    ColumnSpec {
        label: "Price",
        field: BoatField::Price,
        kind: ColumnKind::Currency,
        editable: true,
    },
    ColumnSpec {
        label: "Description",
        field: BoatField::Description,
        kind: ColumnKind::Text,
        editable: true,
    },
];

impl BoatField {
    pub fn column(self) -> &'static ColumnSpec {
        match self {
            BoatField::Name => &BOAT_COLUMNS[0],
            BoatField::Length => &BOAT_COLUMNS[1],
            BoatField::Price => &BOAT_COLUMNS[2],
            BoatField::Description => &BOAT_COLUMNS[3],
        }
    }
}
