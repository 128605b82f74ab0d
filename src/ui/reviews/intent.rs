use crate::model::{RecordId, ReviewRecord};
use crate::ui::mvi::Intent;
use crate::ui::reactive::QueryTicket;

#[derive(Debug, Clone)]
pub enum ReviewsIntent {
    RecordChanged { boat_id: Option<RecordId> },
    Refresh,
    ReviewsLoaded {
        ticket: QueryTicket<Option<RecordId>>,
        reviews: Vec<ReviewRecord>,
    },
    LoadFailed {
        ticket: QueryTicket<Option<RecordId>>,
        message: String,
    },
}

impl Intent for ReviewsIntent {}
