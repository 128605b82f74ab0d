//! Collaborators handed to every view by its container.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::bus::MessageBus;
use crate::gateway::BoatDataService;
use crate::platform::{Navigator, Notifier, PositionSource};

use super::lifecycle::{ComponentKind, LifecycleEmitter, LifecycleEvent};

#[derive(Clone)]
pub struct ViewContext {
    pub gateway: Arc<dyn BoatDataService>,
    pub bus: Arc<MessageBus>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub position: Arc<dyn PositionSource>,
    pub lifecycle: Option<UnboundedSender<LifecycleEvent>>,
}

impl ViewContext {
    pub fn new(
        gateway: Arc<dyn BoatDataService>,
        bus: Arc<MessageBus>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        position: Arc<dyn PositionSource>,
    ) -> Self {
        Self {
            gateway,
            bus,
            notifier,
            navigator,
            position,
            lifecycle: None,
        }
    }

    pub fn with_lifecycle(mut self, sender: UnboundedSender<LifecycleEvent>) -> Self {
        self.lifecycle = Some(sender);
        self
    }

    pub(crate) fn emitter(&self, component: ComponentKind) -> LifecycleEmitter {
        LifecycleEmitter::new(component, self.lifecycle.clone())
    }
}
