use crate::ui::mvi::Reducer;

use super::intent::SimilarBoatsIntent;
use super::state::SimilarBoatsState;

pub struct SimilarBoatsReducer;

impl Reducer for SimilarBoatsReducer {
    type State = SimilarBoatsState;
    type Intent = SimilarBoatsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SimilarBoatsIntent::RecordChanged { boat_id } => {
                state.boat_id = boat_id.filter(|id| !id.is_empty());
                state.observe_inputs();
                state
            }
            SimilarBoatsIntent::CriterionChanged { similar_by } => {
                state.similar_by = similar_by.filter(|c| !c.as_str().trim().is_empty());
                state.observe_inputs();
                state
            }
            SimilarBoatsIntent::BoatsLoaded { ticket, boats } => {
                if state.query.settle(&ticket) {
                    state.related = Some(boats);
                    state.error = None;
                }
                state
            }
            SimilarBoatsIntent::LoadFailed { ticket, message } => {
                // The related list is left as it was.
                if state.query.settle(&ticket) {
                    state.error = Some(message);
                }
                state
            }
            SimilarBoatsIntent::Skipped { ticket } => {
                state.query.settle(&ticket);
                state
            }
            SimilarBoatsIntent::BoatOpened { boat_id } => {
                state.current_boat = Some(boat_id);
                state
            }
        }
    }
}
