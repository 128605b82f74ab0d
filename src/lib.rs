//! Coordinated boat views over a remote boat data service.
//!
//! Four views (search results, nearby map, reviews, similar boats) fetch
//! their data reactively from a [`gateway::BoatDataService`], track their own
//! loading and error state, and share boat selections over a typed
//! [`bus::MessageBus`].

pub mod bus;
pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod platform;
pub mod ui;
