//! Model-View-Intent primitives shared by the boat views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── effects (gateway, bus) ──┘
//! ```
//!
//! - **State**: everything a view needs to render, plus the bookkeeping of its
//!   in-flight query
//! - **Intent**: input changes, user actions and round-trip results
//! - **Reducer**: pure `(State, Intent) -> State`; results tagged with a
//!   superseded ticket leave the state untouched
//!
//! Panels own a state, feed intents through their reducer and run the
//! side effects the new state asks for.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
