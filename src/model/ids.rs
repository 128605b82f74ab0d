use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque record identifier issued by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Boat type filter. `None` means "all types" and displays as `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoatTypeFilter(Option<RecordId>);

impl BoatTypeFilter {
    pub fn all() -> Self {
        Self(None)
    }

    pub fn of_type(type_id: impl Into<RecordId>) -> Self {
        Self::from_id(Some(type_id.into()))
    }

    /// Build a filter from a raw input value; blank input selects all types.
    pub fn from_input(value: &str) -> Self {
        Self::from_id(Some(RecordId::new(value.trim())))
    }

    fn from_id(id: Option<RecordId>) -> Self {
        Self(id.filter(|id| !id.is_empty()))
    }

    pub fn type_id(&self) -> Option<&RecordId> {
        self.0.as_ref()
    }

    pub fn is_all(&self) -> bool {
        self.0.is_none()
    }

    /// Whether a boat of the given type passes this filter.
    pub fn matches(&self, boat_type: Option<&RecordId>) -> bool {
        match &self.0 {
            None => true,
            Some(wanted) => boat_type == Some(wanted),
        }
    }
}

impl fmt::Display for BoatTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(id) => f.write_str(id.as_str()),
            None => f.write_str("*"),
        }
    }
}

/// Similarity criterion passed through to the data layer (e.g. "Type").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimilarBy(String);

impl SimilarBy {
    pub fn new(criterion: impl Into<String>) -> Self {
        Self(criterion.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SimilarBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
