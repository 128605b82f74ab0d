use crate::ui::mvi::Reducer;

use super::intent::NearbyMapIntent;
use super::state::{NearbyMapState, NearbyPhase};

pub struct NearbyMapReducer;

impl Reducer for NearbyMapReducer {
    type State = NearbyMapState;
    type Intent = NearbyMapIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NearbyMapIntent::Mounted => {
                if state.phase == NearbyPhase::Unrendered {
                    state.phase = NearbyPhase::AwaitingPosition;
                }
                state
            }
            NearbyMapIntent::PositionResolved { position } => {
                state.position = Some(position);
                state.position_error = None;
                state.observe_inputs();
                state
            }
            NearbyMapIntent::PositionFailed { message } => {
                state.position_error = Some(message);
                state
            }
            NearbyMapIntent::BoatTypeChanged { filter } => {
                state.boat_type = filter;
                state.observe_inputs();
                state
            }
            NearbyMapIntent::MarkersLoaded { ticket, markers } => {
                if state.query.settle(&ticket) {
                    state.markers = markers;
                    state.load_error = None;
                    state.phase = NearbyPhase::Ready;
                }
                state
            }
            NearbyMapIntent::LoadFailed { ticket, message } => {
                if state.query.settle(&ticket) {
                    state.load_error = Some(message);
                    state.phase = NearbyPhase::Ready;
                }
                state
            }
        }
    }
}
