//! Boats related to the current one by a similarity criterion.

mod intent;
mod panel;
mod reducer;
mod state;

pub use intent::SimilarBoatsIntent;
pub use panel::SimilarBoatsPanel;
pub use reducer::SimilarBoatsReducer;
pub use state::{SimilarBoatsState, SimilarQuery, TITLE_PREFIX};
