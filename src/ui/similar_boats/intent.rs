use crate::model::{BoatRecord, RecordId, SimilarBy};
use crate::ui::mvi::Intent;
use crate::ui::reactive::QueryTicket;

use super::state::SimilarQuery;

#[derive(Debug, Clone)]
pub enum SimilarBoatsIntent {
    RecordChanged { boat_id: Option<RecordId> },

    CriterionChanged { similar_by: Option<SimilarBy> },

    BoatsLoaded {
        ticket: QueryTicket<SimilarQuery>,
        boats: Vec<BoatRecord>,
    },

    LoadFailed {
        ticket: QueryTicket<SimilarQuery>,
        message: String,
    },

    /// The inputs are incomplete; the ticket resolves without a call.
    Skipped { ticket: QueryTicket<SimilarQuery> },

    BoatOpened { boat_id: RecordId },
}

impl Intent for SimilarBoatsIntent {}
