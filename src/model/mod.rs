//! Read-side snapshots of the records owned by the remote data layer.
//!
//! Views never persist these; they hold whatever the gateway last returned
//! plus any in-flight draft edits.

mod boat;
mod draft;
mod ids;
mod review;

pub use boat::{BoatField, BoatRecord, ColumnKind, ColumnSpec, GeoCoordinate, BOAT_COLUMNS};
pub use draft::{DraftEdit, DraftValue};
pub use ids::{BoatTypeFilter, RecordId, SimilarBy};
pub use review::{ReviewAuthor, ReviewRecord};
