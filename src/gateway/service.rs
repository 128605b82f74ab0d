use async_trait::async_trait;

use crate::model::{BoatRecord, BoatTypeFilter, DraftEdit, RecordId, ReviewRecord, SimilarBy};

use super::error::GatewayError;

/// Async contract of the boat data service.
///
/// Every call is one round-trip. Implementations must be cheap to share
/// behind an `Arc` and must not block the calling task.
#[async_trait]
pub trait BoatDataService: Send + Sync {
    /// Boats matching the type filter.
    async fn fetch_boats(&self, filter: &BoatTypeFilter) -> Result<Vec<BoatRecord>, GatewayError>;

    /// Boats near a point, JSON-encoded as a list of boat objects whose
    /// `latitude`/`longitude` may be null.
    async fn fetch_boats_by_location(
        &self,
        latitude: f64,
        longitude: f64,
        filter: &BoatTypeFilter,
    ) -> Result<String, GatewayError>;

    /// Reviews left on a boat.
    async fn fetch_reviews(&self, boat_id: &RecordId) -> Result<Vec<ReviewRecord>, GatewayError>;

    /// Boats related to `boat_id` by the given criterion.
    async fn fetch_similar(
        &self,
        boat_id: &RecordId,
        similar_by: &SimilarBy,
    ) -> Result<Vec<BoatRecord>, GatewayError>;

    /// Persist a batch of draft edits.
    async fn save_boats(&self, edits: Vec<DraftEdit>) -> Result<(), GatewayError>;
}
