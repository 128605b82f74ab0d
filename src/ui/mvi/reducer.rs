//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into a view state without touching the outside world.
///
/// Input intents may issue a new query ticket on the state. Result intents
/// carry the ticket their request was issued for, and a result whose ticket
/// is no longer current must return the state unchanged, including its
/// loading flag. Panels rely on that to drop out-of-order responses.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
