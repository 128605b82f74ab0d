use crate::model::{BoatTypeFilter, GeoCoordinate};
use crate::ui::mvi::Intent;
use crate::ui::reactive::QueryTicket;

use super::markers::MapMarker;
use super::state::NearbyQuery;

#[derive(Debug, Clone)]
pub enum NearbyMapIntent {
    /// The map finished rendering.
    Mounted,

    PositionResolved { position: GeoCoordinate },

    PositionFailed { message: String },

    BoatTypeChanged { filter: BoatTypeFilter },

    MarkersLoaded {
        ticket: QueryTicket<NearbyQuery>,
        markers: Vec<MapMarker>,
    },

    LoadFailed {
        ticket: QueryTicket<NearbyQuery>,
        message: String,
    },
}

impl Intent for NearbyMapIntent {}
