use crate::ui::mvi::Reducer;

use super::intent::SearchResultsIntent;
use super::state::SearchResultsState;

pub struct SearchResultsReducer;

impl Reducer for SearchResultsReducer {
    type State = SearchResultsState;
    type Intent = SearchResultsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchResultsIntent::FilterChanged { filter } => {
                state.filter = filter.clone();
                state.query.observe(filter);
                state
            }
            SearchResultsIntent::Refresh => {
                if !state.query.reissue() {
                    let filter = state.filter.clone();
                    state.query.observe(filter);
                }
                state
            }
            SearchResultsIntent::BoatsLoaded { ticket, boats } => {
                if state.query.settle(&ticket) {
                    state.boats = boats;
                    state.last_error = None;
                }
                state
            }
            SearchResultsIntent::LoadFailed { ticket, message } => {
                // Prior rows stay on screen.
                if state.query.settle(&ticket) {
                    state.last_error = Some(message);
                }
                state
            }
            SearchResultsIntent::BoatSelected { boat_id } => {
                state.selected_boat_id = Some(boat_id);
                state
            }
            SearchResultsIntent::DraftRecorded { edit } => {
                state.drafts.retain(|draft| !draft.same_cell(&edit));
                state.drafts.push(edit);
                state
            }
            SearchResultsIntent::SaveStarted => {
                state.saving = true;
                state
            }
            SearchResultsIntent::SaveFinished => {
                state.saving = false;
                state.drafts.clear();
                state
            }
        }
    }
}
