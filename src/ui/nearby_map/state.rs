use serde::Serialize;

use crate::model::{BoatTypeFilter, GeoCoordinate};
use crate::ui::mvi::UiState;
use crate::ui::reactive::QueryWatcher;

use super::markers::MapMarker;

/// Unrendered → AwaitingPosition → AwaitingBoats → Ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum NearbyPhase {
    #[default]
    Unrendered,
    AwaitingPosition,
    AwaitingBoats,
    Ready,
}

/// Input snapshot of one location query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub boat_type: BoatTypeFilter,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NearbyMapState {
    pub phase: NearbyPhase,
    pub boat_type: BoatTypeFilter,
    pub position: Option<GeoCoordinate>,
    pub markers: Vec<MapMarker>,
    /// Set when the position request failed. The map then never leaves
    /// `AwaitingPosition`.
    pub position_error: Option<String>,
    pub load_error: Option<String>,
    pub query: QueryWatcher<NearbyQuery>,
}

impl UiState for NearbyMapState {}

impl NearbyMapState {
    pub fn is_loading(&self) -> bool {
        self.phase != NearbyPhase::Ready
    }

    fn pending_query(&self) -> Option<NearbyQuery> {
        self.position.map(|position| NearbyQuery {
            latitude: position.latitude,
            longitude: position.longitude,
            boat_type: self.boat_type.clone(),
        })
    }

    /// Issue a location query if the inputs changed.
    pub(super) fn observe_inputs(&mut self) {
        if let Some(query) = self.pending_query() {
            if self.query.observe(query) {
                self.phase = NearbyPhase::AwaitingBoats;
            }
        }
    }
}
