use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::model::RecordId;

/// A named channel with a fixed message type.
pub trait Topic: Send + Sync + 'static {
    type Message: Clone + Debug + Send + Sync + 'static;

    /// Name used in diagnostics.
    const NAME: &'static str;
}

/// Published when the user picks a boat in any view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionMessage {
    pub record_id: RecordId,
}

/// Boat selection channel shared by the boat views.
pub struct BoatMessageChannel;

impl Topic for BoatMessageChannel {
    type Message = SelectionMessage;
    const NAME: &'static str = "BoatMessageChannel";
}
