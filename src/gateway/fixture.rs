use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    BoatField, BoatRecord, BoatTypeFilter, DraftEdit, DraftValue, GeoCoordinate, RecordId,
    ReviewRecord, SimilarBy,
};

use super::error::GatewayError;
use super::service::BoatDataService;

/// Maximum number of boats returned by a location query.
pub const NEARBY_LIMIT: usize = 10;

/// Maximum number of boats returned by a similarity query.
pub const SIMILAR_LIMIT: usize = 10;

/// Length/price window for similarity: within this factor either way.
const SIMILARITY_FACTOR: f64 = 1.2;

/// Errors that can occur when loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Data set served by a [`FixtureGateway`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureData {
    #[serde(default)]
    pub boats: Vec<BoatRecord>,
    #[serde(default)]
    pub reviews: Vec<ReviewRecord>,
}

/// In-memory data service backed by a JSON data set.
pub struct FixtureGateway {
    data: RwLock<FixtureData>,
}

impl FixtureGateway {
    pub fn new(data: FixtureData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Load a data set from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = fs::read_to_string(path).map_err(|e| FixtureError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let data: FixtureData = serde_json::from_str(&content).map_err(|e| FixtureError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::info!(
            boats = data.boats.len(),
            reviews = data.reviews.len(),
            "Loaded fixture data from {}",
            path.display()
        );
        Ok(Self::new(data))
    }

    /// Copy of the current data set, including saved edits.
    pub fn snapshot(&self) -> FixtureData {
        self.data.read().clone()
    }
}

#[async_trait]
impl BoatDataService for FixtureGateway {
    async fn fetch_boats(&self, filter: &BoatTypeFilter) -> Result<Vec<BoatRecord>, GatewayError> {
        let data = self.data.read();
        let mut boats: Vec<BoatRecord> = data
            .boats
            .iter()
            .filter(|boat| filter.matches(boat.boat_type_id.as_ref()))
            .cloned()
            .collect();
        boats.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(boats)
    }

    async fn fetch_boats_by_location(
        &self,
        latitude: f64,
        longitude: f64,
        filter: &BoatTypeFilter,
    ) -> Result<String, GatewayError> {
        let origin = GeoCoordinate::new(latitude, longitude);
        let data = self.data.read();
        let mut ranked: Vec<(Option<f64>, &BoatRecord)> = data
            .boats
            .iter()
            .filter(|boat| filter.matches(boat.boat_type_id.as_ref()))
            .map(|boat| (boat.coordinate().map(|c| origin.distance_km(&c)), boat))
            .collect();
        // Boats without a position sort after every located boat.
        ranked.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        let nearest: Vec<&BoatRecord> = ranked
            .into_iter()
            .take(NEARBY_LIMIT)
            .map(|(_, boat)| boat)
            .collect();
        serde_json::to_string(&nearest).map_err(|e| GatewayError::query(e.to_string()))
    }

    async fn fetch_reviews(&self, boat_id: &RecordId) -> Result<Vec<ReviewRecord>, GatewayError> {
        if boat_id.is_empty() {
            return Ok(Vec::new());
        }
        let data = self.data.read();
        let mut reviews: Vec<ReviewRecord> = data
            .reviews
            .iter()
            .filter(|review| &review.boat_id == boat_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        Ok(reviews)
    }

    async fn fetch_similar(
        &self,
        boat_id: &RecordId,
        similar_by: &SimilarBy,
    ) -> Result<Vec<BoatRecord>, GatewayError> {
        let data = self.data.read();
        let current = data
            .boats
            .iter()
            .find(|boat| &boat.id == boat_id)
            .ok_or_else(|| GatewayError::NotFound {
                id: boat_id.to_string(),
            })?;

        let criterion = similar_by.as_str().to_ascii_lowercase();
        let related = |boat: &&BoatRecord| -> Result<bool, GatewayError> {
            Ok(match criterion.as_str() {
                "type" => {
                    current.boat_type_id.is_some() && boat.boat_type_id == current.boat_type_id
                }
                "length" => within_factor(boat.length, current.length),
                "price" => within_factor(boat.price, current.price),
                other => {
                    return Err(GatewayError::query(format!(
                        "Unsupported similarity criterion '{}'",
                        other
                    )))
                }
            })
        };

        let mut similar = Vec::new();
        for boat in data.boats.iter().filter(|boat| boat.id != current.id) {
            if related(&boat)? {
                similar.push(boat.clone());
            }
        }
        match criterion.as_str() {
            "length" => similar.sort_by(|a, b| compare_optional(a.length, b.length)),
            "price" => similar.sort_by(|a, b| compare_optional(a.price, b.price)),
            _ => similar.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        similar.truncate(SIMILAR_LIMIT);
        Ok(similar)
    }

    async fn save_boats(&self, edits: Vec<DraftEdit>) -> Result<(), GatewayError> {
        let mut data = self.data.write();

        // Validate the whole batch before touching any record.
        for edit in &edits {
            if !data.boats.iter().any(|boat| boat.id == edit.record_id) {
                return Err(GatewayError::rejected(format!(
                    "record '{}' does not exist",
                    edit.record_id
                )));
            }
            if !edit.is_well_typed() {
                return Err(GatewayError::rejected(format!(
                    "invalid value for {} on record '{}'",
                    edit.field.column().label,
                    edit.record_id
                )));
            }
        }

        for edit in edits {
            if let Some(boat) = data.boats.iter_mut().find(|boat| boat.id == edit.record_id) {
                apply_edit(boat, edit.field, edit.value);
            }
        }
        Ok(())
    }
}

fn apply_edit(boat: &mut BoatRecord, field: BoatField, value: DraftValue) {
    match (field, value) {
        (BoatField::Name, DraftValue::Text(name)) => boat.name = name,
        (BoatField::Description, DraftValue::Text(text)) => boat.description = Some(text),
        (BoatField::Length, DraftValue::Number(length)) => boat.length = Some(length),
        (BoatField::Price, DraftValue::Number(price)) => boat.price = Some(price),
        _ => {}
    }
}

fn within_factor(candidate: Option<f64>, reference: Option<f64>) -> bool {
    match (candidate, reference) {
        (Some(value), Some(reference)) => {
            value >= reference / SIMILARITY_FACTOR && value <= reference * SIMILARITY_FACTOR
        }
        _ => false,
    }
}

fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boat(id: &str, name: &str, kind: &str, length: f64, price: f64) -> BoatRecord {
        let mut boat = BoatRecord::new(id, name).with_type(kind);
        boat.length = Some(length);
        boat.price = Some(price);
        boat
    }

    fn gateway() -> FixtureGateway {
        let mut near = boat("near", "Near", "sail", 30.0, 100_000.0);
        near = near.with_location(10.1, 20.1);
        let far = boat("far", "Far", "sail", 34.0, 500_000.0).with_location(40.0, 50.0);
        let lost = boat("lost", "Lost", "sail", 60.0, 110_000.0);
        let motor = boat("motor", "Motor", "motor", 31.0, 95_000.0).with_location(10.0, 20.0);

        let mut old = ReviewRecord::new("r1", "near");
        old.created_date = Some("2024-01-01T00:00:00Z".into());
        let mut new = ReviewRecord::new("r2", "near");
        new.created_date = Some("2024-06-01T00:00:00Z".into());

        FixtureGateway::new(FixtureData {
            boats: vec![near, far, lost, motor],
            reviews: vec![old, new, ReviewRecord::new("r3", "far")],
        })
    }

    fn ids(boats: &[BoatRecord]) -> Vec<&str> {
        boats.iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn fetch_boats_filters_by_type_and_sorts_by_name() {
        let gw = gateway();
        let all = gw.fetch_boats(&BoatTypeFilter::all()).await.unwrap();
        assert_eq!(ids(&all), vec!["far", "lost", "motor", "near"]);

        let sail = gw.fetch_boats(&BoatTypeFilter::of_type("sail")).await.unwrap();
        assert_eq!(ids(&sail), vec!["far", "lost", "near"]);
    }

    #[tokio::test]
    async fn location_query_orders_by_distance_and_puts_unlocated_last() {
        let gw = gateway();
        let json = gw
            .fetch_boats_by_location(10.0, 20.0, &BoatTypeFilter::of_type("sail"))
            .await
            .unwrap();
        let boats: Vec<BoatRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(ids(&boats), vec!["near", "far", "lost"]);
    }

    #[tokio::test]
    async fn reviews_are_newest_first_and_empty_id_yields_nothing() {
        let gw = gateway();
        let reviews = gw.fetch_reviews(&RecordId::new("near")).await.unwrap();
        let review_ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(review_ids, vec!["r2", "r1"]);

        assert!(gw.fetch_reviews(&RecordId::new("")).await.unwrap().is_empty());
        assert!(gw.fetch_reviews(&RecordId::new("nope")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn similar_by_each_criterion() {
        let gw = gateway();
        let near = RecordId::new("near");

        let by_type = gw.fetch_similar(&near, &SimilarBy::new("Type")).await.unwrap();
        assert_eq!(ids(&by_type), vec!["far", "lost"]);

        let by_length = gw.fetch_similar(&near, &SimilarBy::new("Length")).await.unwrap();
        assert_eq!(ids(&by_length), vec!["motor", "far"]);

        let by_price = gw.fetch_similar(&near, &SimilarBy::new("price")).await.unwrap();
        assert_eq!(ids(&by_price), vec!["motor", "lost"]);
    }

    #[tokio::test]
    async fn similar_reports_unknown_boat_and_criterion() {
        let gw = gateway();
        let missing = gw
            .fetch_similar(&RecordId::new("ghost"), &SimilarBy::new("Type"))
            .await;
        assert_eq!(
            missing,
            Err(GatewayError::NotFound {
                id: "ghost".into()
            })
        );

        let unsupported = gw
            .fetch_similar(&RecordId::new("near"), &SimilarBy::new("Colour"))
            .await;
        assert!(matches!(unsupported, Err(GatewayError::Query { .. })));
    }

    #[tokio::test]
    async fn save_applies_valid_batches() {
        let gw = gateway();
        gw.save_boats(vec![
            DraftEdit::new("near", BoatField::Name, DraftValue::Text("Nearer".into())),
            DraftEdit::new("near", BoatField::Price, DraftValue::Number(99.0)),
        ])
        .await
        .unwrap();

        let data = gw.snapshot();
        let near = data.boats.iter().find(|b| b.id.as_str() == "near").unwrap();
        assert_eq!(near.name, "Nearer");
        assert_eq!(near.price, Some(99.0));
    }

    #[tokio::test]
    async fn save_rejects_whole_batch_on_any_invalid_edit() {
        let gw = gateway();
        let before = gw.snapshot();
        let result = gw
            .save_boats(vec![
                DraftEdit::new("near", BoatField::Name, DraftValue::Text("Renamed".into())),
                DraftEdit::new("near", BoatField::Length, DraftValue::Text("long".into())),
            ])
            .await;
        assert!(matches!(result, Err(GatewayError::Rejected { .. })));
        assert_eq!(gw.snapshot(), before);

        let unknown = gw
            .save_boats(vec![DraftEdit::new(
                "ghost",
                BoatField::Name,
                DraftValue::Text("x".into()),
            )])
            .await;
        assert!(matches!(unknown, Err(GatewayError::Rejected { .. })));
    }
}
