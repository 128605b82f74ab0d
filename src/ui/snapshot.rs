//! Serializable picture of every view, for printing and assertions.

use serde::Serialize;

use crate::model::{BoatRecord, BoatTypeFilter, RecordId, ReviewRecord};

use super::nearby_map::{MapMarker, NearbyMapState, NearbyPhase};
use super::reviews::ReviewsState;
use super::search_results::SearchResultsState;
use super::similar_boats::SimilarBoatsState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    pub search_results: SearchResultsSnapshot,
    pub nearby_map: NearbyMapSnapshot,
    pub reviews: ReviewsSnapshot,
    pub similar_boats: SimilarBoatsSnapshot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsSnapshot {
    pub boat_type_id: BoatTypeFilter,
    pub boats: Vec<BoatRecord>,
    pub selected_boat_id: Option<RecordId>,
    pub pending_drafts: usize,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyMapSnapshot {
    pub phase: NearbyPhase,
    pub map_markers: Vec<MapMarker>,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsSnapshot {
    pub record_id: Option<RecordId>,
    pub reviews: Vec<ReviewRecord>,
    pub reviews_to_show: bool,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarBoatsSnapshot {
    pub title: String,
    pub related_boats: Vec<BoatRecord>,
    pub no_boats: bool,
    pub is_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&SearchResultsState> for SearchResultsSnapshot {
    fn from(state: &SearchResultsState) -> Self {
        Self {
            boat_type_id: state.filter.clone(),
            boats: state.boats.clone(),
            selected_boat_id: state.selected_boat_id.clone(),
            pending_drafts: state.drafts.len(),
            is_loading: state.is_loading(),
            error: state.last_error.clone(),
        }
    }
}

impl From<&NearbyMapState> for NearbyMapSnapshot {
    fn from(state: &NearbyMapState) -> Self {
        Self {
            phase: state.phase,
            map_markers: state.markers.clone(),
            is_loading: state.is_loading(),
            error: state.load_error.clone().or_else(|| state.position_error.clone()),
        }
    }
}

impl From<&ReviewsState> for ReviewsSnapshot {
    fn from(state: &ReviewsState) -> Self {
        Self {
            record_id: state.boat_id.clone(),
            reviews: state.reviews.clone(),
            reviews_to_show: state.reviews_to_show(),
            is_loading: state.is_loading(),
            error: state.error.clone(),
        }
    }
}

impl From<&SimilarBoatsState> for SimilarBoatsSnapshot {
    fn from(state: &SimilarBoatsState) -> Self {
        Self {
            title: state.title(),
            related_boats: state.related.clone().unwrap_or_default(),
            no_boats: state.no_boats(),
            is_loading: state.is_loading(),
            error: state.error.clone(),
        }
    }
}
