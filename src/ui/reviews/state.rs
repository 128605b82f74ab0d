use crate::model::{RecordId, ReviewRecord};
use crate::ui::mvi::UiState;
use crate::ui::reactive::QueryWatcher;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewsState {
    pub boat_id: Option<RecordId>,
    pub reviews: Vec<ReviewRecord>,
    pub error: Option<String>,
    /// Keyed on the boat id; `None` resolves to no reviews without a call.
    pub query: QueryWatcher<Option<RecordId>>,
}

impl UiState for ReviewsState {}

impl ReviewsState {
    pub fn is_loading(&self) -> bool {
        self.query.in_flight()
    }

    pub fn reviews_to_show(&self) -> bool {
        !self.reviews.is_empty()
    }
}
