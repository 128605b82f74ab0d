use parking_lot::Mutex;
use serde::Serialize;

use crate::model::RecordId;

/// Kinds of record page the views navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectType {
    Boat,
    User,
}

/// Target of a "view record" navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPageRef {
    pub record_id: RecordId,
    pub object_type: ObjectType,
    pub action: &'static str,
}

impl RecordPageRef {
    pub fn view(record_id: RecordId, object_type: ObjectType) -> Self {
        Self {
            record_id,
            object_type,
            action: "view",
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate_to_record(&self, target: RecordPageRef);
}

/// Navigator that logs and records navigation requests.
#[derive(Default)]
pub struct NavigationLog {
    visits: Mutex<Vec<RecordPageRef>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<RecordPageRef> {
        self.visits.lock().clone()
    }
}

impl Navigator for NavigationLog {
    fn navigate_to_record(&self, target: RecordPageRef) {
        tracing::info!(
            record_id = %target.record_id,
            object_type = ?target.object_type,
            "Navigate to record page"
        );
        self.visits.lock().push(target);
    }
}
