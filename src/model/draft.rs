use serde::{Deserialize, Serialize};

use super::boat::{BoatField, ColumnKind};
use super::ids::RecordId;

/// A value typed into an editable grid cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftValue {
    Number(f64),
    Text(String),
}

/// An uncommitted field-level change awaiting a bulk save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEdit {
    pub record_id: RecordId,
    pub field: BoatField,
    pub value: DraftValue,
}

impl DraftEdit {
    pub fn new(record_id: impl Into<RecordId>, field: BoatField, value: DraftValue) -> Self {
        Self {
            record_id: record_id.into(),
            field,
            value,
        }
    }

    /// Whether the value kind fits the column it targets.
    pub fn is_well_typed(&self) -> bool {
        match (self.field.column().kind, &self.value) {
            (ColumnKind::Text, DraftValue::Text(_)) => true,
            (ColumnKind::Number | ColumnKind::Currency, DraftValue::Number(n)) => n.is_finite(),
            _ => false,
        }
    }

    /// Two drafts address the same grid cell.
    pub fn same_cell(&self, other: &DraftEdit) -> bool {
        self.record_id == other.record_id && self.field == other.field
    }
}
