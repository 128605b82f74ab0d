//! Reviews of one boat, keyed on the record id supplied by the container.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::ReviewsIntent;
pub use panel::ReviewsPanel;
pub use reducer::ReviewsReducer;
pub use state::ReviewsState;
