//! Search results grid: filter-driven boat list, row selection, bulk save.
//!
//! - `state.rs` - Grid state and query bookkeeping
//! - `intent.rs` - Filter changes, user actions, round-trip results
//! - `reducer.rs` - State transitions
//! - `panel.rs` - Effects: gateway calls, toasts, selection publishing

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::SearchResultsIntent;
pub use panel::{SearchResultsPanel, ERROR_TITLE, MESSAGE_SHIP_IT, SUCCESS_TITLE};
pub use reducer::SearchResultsReducer;
pub use state::SearchResultsState;
