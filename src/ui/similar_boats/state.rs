use crate::model::{BoatRecord, RecordId, SimilarBy};
use crate::ui::mvi::UiState;
use crate::ui::reactive::QueryWatcher;

pub const TITLE_PREFIX: &str = "Similar boats by ";

/// Input snapshot of a similarity query. Only complete snapshots reach
/// the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarQuery {
    pub boat_id: Option<RecordId>,
    pub similar_by: Option<SimilarBy>,
}

impl SimilarQuery {
    pub fn complete(&self) -> Option<(&RecordId, &SimilarBy)> {
        match (&self.boat_id, &self.similar_by) {
            (Some(boat_id), Some(similar_by)) => Some((boat_id, similar_by)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimilarBoatsState {
    pub boat_id: Option<RecordId>,
    pub similar_by: Option<SimilarBy>,
    /// `None` until a complete query has succeeded.
    pub related: Option<Vec<BoatRecord>>,
    /// Message of the last failed query.
    pub error: Option<String>,
    /// Last boat opened from the list.
    pub current_boat: Option<RecordId>,
    pub query: QueryWatcher<SimilarQuery>,
}

impl UiState for SimilarBoatsState {}

impl SimilarBoatsState {
    pub fn is_loading(&self) -> bool {
        self.query.in_flight()
    }

    pub fn title(&self) -> String {
        let criterion = self.similar_by.as_ref().map(SimilarBy::as_str).unwrap_or_default();
        format!("{}{}", TITLE_PREFIX, criterion)
    }

    pub fn no_boats(&self) -> bool {
        self.related.as_ref().map_or(true, |boats| boats.is_empty())
    }

    pub(super) fn observe_inputs(&mut self) {
        self.query.observe(SimilarQuery {
            boat_id: self.boat_id.clone(),
            similar_by: self.similar_by.clone(),
        });
    }
}
