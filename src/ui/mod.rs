//! Boat views and the machinery they share.
//!
//! Each view is an MVI feature module (`state`, `intent`, `reducer`) plus a
//! panel that runs its side effects. Views are owned and driven by
//! [`controller::BoatViewController`].

pub mod context;
pub mod controller;
pub mod lifecycle;
pub mod mvi;
pub mod nearby_map;
pub mod reactive;
pub mod reviews;
pub mod search_results;
pub mod similar_boats;
pub mod snapshot;
