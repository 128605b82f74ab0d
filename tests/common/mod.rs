//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gateway;

use std::sync::Arc;

use boatwatch::bus::MessageBus;
use boatwatch::model::{BoatRecord, GeoCoordinate, RecordId, ReviewRecord};
use boatwatch::platform::{FixedPosition, NavigationLog, ToastLog};
use boatwatch::ui::context::ViewContext;
use boatwatch::ui::lifecycle::{ComponentKind, LifecycleEvent, LoadingSignal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub use mock_gateway::ScriptedGateway;

/// Viewer position used by [`Harness::new`].
pub const VIEWER: GeoCoordinate = GeoCoordinate {
    latitude: 10.0,
    longitude: 20.0,
};

/// Scripted collaborators plus the context built from them.
pub struct Harness {
    pub gateway: Arc<ScriptedGateway>,
    pub bus: Arc<MessageBus>,
    pub toasts: Arc<ToastLog>,
    pub navigation: Arc<NavigationLog>,
    pub ctx: ViewContext,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_position(Some(VIEWER))
    }

    /// `None` makes every position request fail.
    pub fn with_position(position: Option<GeoCoordinate>) -> Self {
        let gateway = Arc::new(ScriptedGateway::new());
        let bus = Arc::new(MessageBus::default());
        let toasts = Arc::new(ToastLog::new());
        let navigation = Arc::new(NavigationLog::new());
        let ctx = ViewContext::new(
            gateway.clone(),
            bus.clone(),
            toasts.clone(),
            navigation.clone(),
            Arc::new(FixedPosition::new(position)),
        );
        Self {
            gateway,
            bus,
            toasts,
            navigation,
            ctx,
        }
    }

    /// Route lifecycle signals of views built from now on to the returned
    /// receiver.
    pub fn watch_lifecycle(&mut self) -> UnboundedReceiver<LifecycleEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.ctx = self.ctx.clone().with_lifecycle(tx);
        rx
    }
}

/// Everything currently queued on a lifecycle receiver.
pub fn drain(rx: &mut UnboundedReceiver<LifecycleEvent>) -> Vec<LoadingSignal> {
    let mut signals = Vec::new();
    while let Ok(event) = rx.try_recv() {
        signals.push(event.signal);
    }
    signals
}

pub fn boat(id: &str, name: &str) -> BoatRecord {
    BoatRecord::new(id, name)
}

pub fn located_boat(id: &str, name: &str, latitude: f64, longitude: f64) -> BoatRecord {
    BoatRecord::new(id, name).with_location(latitude, longitude)
}

pub fn review(id: &str, boat_id: &str, title: &str) -> ReviewRecord {
    let mut review = ReviewRecord::new(id, boat_id);
    review.title = Some(title.to_string());
    review
}

pub fn id(value: &str) -> RecordId {
    RecordId::new(value)
}

/// Let other branches of a `join!` make progress.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
