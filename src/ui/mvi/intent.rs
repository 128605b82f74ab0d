//! Intent marker.

/// Something a boat view reacts to: an input change (filter, record id,
/// criterion), a user action (row selection, grid edit) or the outcome of a
/// data service call. Outcomes hold the query ticket they answer.
pub trait Intent: Send + 'static {}
