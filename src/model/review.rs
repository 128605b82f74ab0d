use serde::{Deserialize, Serialize};

use super::ids::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: RecordId,
    pub name: String,
}

/// A review left on a boat. Fields beyond `id` and `boat_id` are optional
/// because the data layer may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: RecordId,
    pub boat_id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub created_by: Option<ReviewAuthor>,
    /// RFC 3339 timestamp; lexical order matches chronological order.
    #[serde(default)]
    pub created_date: Option<String>,
}

impl ReviewRecord {
    pub fn new(id: impl Into<RecordId>, boat_id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            boat_id: boat_id.into(),
            title: None,
            comment: None,
            rating: None,
            created_by: None,
            created_date: None,
        }
    }
}
