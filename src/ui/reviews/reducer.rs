use crate::ui::mvi::Reducer;

use super::intent::ReviewsIntent;
use super::state::ReviewsState;

pub struct ReviewsReducer;

impl Reducer for ReviewsReducer {
    type State = ReviewsState;
    type Intent = ReviewsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReviewsIntent::RecordChanged { boat_id } => {
                let boat_id = boat_id.filter(|id| !id.is_empty());
                state.boat_id = boat_id.clone();
                state.query.observe(boat_id);
                state
            }
            ReviewsIntent::Refresh => {
                if !state.query.reissue() {
                    let boat_id = state.boat_id.clone();
                    state.query.observe(boat_id);
                }
                state
            }
            ReviewsIntent::ReviewsLoaded { ticket, reviews } => {
                if state.query.settle(&ticket) {
                    state.reviews = reviews;
                    state.error = None;
                }
                state
            }
            ReviewsIntent::LoadFailed { ticket, message } => {
                if state.query.settle(&ticket) {
                    state.error = Some(message);
                }
                state
            }
        }
    }
}
