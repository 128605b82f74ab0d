use async_trait::async_trait;
use thiserror::Error;

use crate::model::GeoCoordinate;

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("Position permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Position request timed out")]
    Timeout,
}

/// Source of the viewer's current position.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self, options: PositionOptions)
        -> Result<GeoCoordinate, PositionError>;
}

/// Position source with a preconfigured answer.
pub struct FixedPosition {
    position: Option<GeoCoordinate>,
}

impl FixedPosition {
    pub fn new(position: Option<GeoCoordinate>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(
        &self,
        options: PositionOptions,
    ) -> Result<GeoCoordinate, PositionError> {
        tracing::debug!(
            high_accuracy = options.enable_high_accuracy,
            "Position requested"
        );
        self.position
            .ok_or_else(|| PositionError::Unavailable("no location configured".to_string()))
    }
}
