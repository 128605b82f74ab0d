//! Loading/done-loading signals sent from a component to its container.

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    SearchResults,
    NearbyMap,
    Reviews,
    SimilarBoats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingSignal {
    Loading,
    DoneLoading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub component: ComponentKind,
    pub signal: LoadingSignal,
}

/// Sends a component's lifecycle signals, if anyone is listening.
#[derive(Debug, Clone)]
pub struct LifecycleEmitter {
    component: ComponentKind,
    sender: Option<UnboundedSender<LifecycleEvent>>,
}

impl LifecycleEmitter {
    pub fn new(component: ComponentKind, sender: Option<UnboundedSender<LifecycleEvent>>) -> Self {
        Self { component, sender }
    }

    pub fn loading(&self) {
        self.emit(LoadingSignal::Loading);
    }

    pub fn done_loading(&self) {
        self.emit(LoadingSignal::DoneLoading);
    }

    fn emit(&self, signal: LoadingSignal) {
        tracing::debug!(component = ?self.component, ?signal, "Lifecycle signal");
        let Some(sender) = &self.sender else {
            return;
        };
        let event = LifecycleEvent {
            component: self.component,
            signal,
        };
        if sender.send(event).is_err() {
            tracing::trace!(component = ?self.component, "Lifecycle receiver gone");
        }
    }
}
