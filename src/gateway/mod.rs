//! Remote data access consumed by the boat views.
//!
//! Only the request/response contracts live here. `FixtureGateway` is an
//! in-memory implementation for the driver binary and for tests.

mod error;
mod fixture;
mod service;

pub use error::GatewayError;
pub use fixture::{FixtureData, FixtureError, FixtureGateway, NEARBY_LIMIT, SIMILAR_LIMIT};
pub use service::BoatDataService;
