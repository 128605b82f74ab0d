//! Map of boats near the viewer.
//!
//! The viewer's position is requested once, on first mount. Once known, the
//! location query is keyed on (latitude, longitude, boat type) and re-runs
//! whenever the boat type changes.

mod intent;
mod markers;
mod panel;
mod reducer;
mod state;

pub use intent::NearbyMapIntent;
pub use markers::{
    create_map_markers, parse_nearby_boats, MapMarker, ICON_STANDARD_USER, LABEL_YOU_ARE_HERE,
};
pub use panel::{NearbyMap, ERROR_TITLE};
pub use reducer::NearbyMapReducer;
pub use state::{NearbyMapState, NearbyPhase, NearbyQuery};
