use crate::model::{BoatRecord, BoatTypeFilter, DraftEdit, RecordId};
use crate::ui::mvi::UiState;
use crate::ui::reactive::QueryWatcher;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultsState {
    /// Active type filter.
    pub filter: BoatTypeFilter,
    /// Rows from the last applied response.
    pub boats: Vec<BoatRecord>,
    pub selected_boat_id: Option<RecordId>,
    /// Staged grid edits, at most one per (record, field).
    pub drafts: Vec<DraftEdit>,
    pub saving: bool,
    /// Message of the last failed load; cleared by the next successful one.
    pub last_error: Option<String>,
    pub query: QueryWatcher<BoatTypeFilter>,
}

impl UiState for SearchResultsState {}

impl SearchResultsState {
    pub fn is_loading(&self) -> bool {
        self.saving || self.query.in_flight()
    }

    pub fn has_drafts(&self) -> bool {
        !self.drafts.is_empty()
    }
}
