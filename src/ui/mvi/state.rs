//! View state marker.

/// A panel's render state. Panels hand out clones and tests compare them, so
/// a state owns all of its data.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
