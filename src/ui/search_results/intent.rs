use crate::model::{BoatRecord, BoatTypeFilter, DraftEdit, RecordId};
use crate::ui::mvi::Intent;
use crate::ui::reactive::QueryTicket;

#[derive(Debug, Clone)]
pub enum SearchResultsIntent {
    /// The type filter input changed.
    FilterChanged { filter: BoatTypeFilter },

    /// Re-run the current query.
    Refresh,

    BoatsLoaded {
        ticket: QueryTicket<BoatTypeFilter>,
        boats: Vec<BoatRecord>,
    },

    LoadFailed {
        ticket: QueryTicket<BoatTypeFilter>,
        message: String,
    },

    /// User picked a row.
    BoatSelected { boat_id: RecordId },

    /// User edited a grid cell.
    DraftRecorded { edit: DraftEdit },

    SaveStarted,

    /// Save round-trip finished, successfully or not.
    SaveFinished,
}

impl Intent for SearchResultsIntent {}
