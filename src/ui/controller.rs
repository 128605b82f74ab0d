//! Owner of the boat views.
//!
//! The controller drives each view's lifecycle explicitly: it mounts them,
//! forwards reactive input changes, routes boat selections from the message
//! bus to the detail views and tracks which views are loading.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::bus::{BoatMessageChannel, MessageBus, Subscription};
use crate::model::{BoatTypeFilter, RecordId, SimilarBy};

use super::context::ViewContext;
use super::lifecycle::{ComponentKind, LifecycleEvent, LoadingSignal};
use super::nearby_map::NearbyMap;
use super::reviews::ReviewsPanel;
use super::search_results::SearchResultsPanel;
use super::similar_boats::SimilarBoatsPanel;
use super::snapshot::ViewSnapshot;

/// Container-level settings applied at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    pub similar_by: Option<SimilarBy>,
    pub high_accuracy: bool,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            similar_by: Some(SimilarBy::new("Type")),
            high_accuracy: true,
        }
    }
}

pub struct BoatViewController {
    search: SearchResultsPanel,
    nearby: NearbyMap,
    reviews: ReviewsPanel,
    similar: SimilarBoatsPanel,
    bus: Arc<MessageBus>,
    settings: ViewSettings,
    selection: Option<Subscription<BoatMessageChannel>>,
    lifecycle: UnboundedReceiver<LifecycleEvent>,
    loading: HashSet<ComponentKind>,
}

impl BoatViewController {
    pub fn new(ctx: ViewContext, settings: ViewSettings) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let ctx = ctx.with_lifecycle(tx);
        Self {
            search: SearchResultsPanel::new(&ctx),
            nearby: NearbyMap::new(&ctx, settings.high_accuracy),
            reviews: ReviewsPanel::new(&ctx),
            similar: SimilarBoatsPanel::new(&ctx),
            bus: Arc::clone(&ctx.bus),
            settings,
            selection: None,
            lifecycle: rx,
            loading: HashSet::new(),
        }
    }

    /// Subscribe to boat selections and run every view's mount hook.
    pub async fn mount(&mut self) {
        if self.selection.is_none() {
            self.selection = Some(self.bus.subscribe::<BoatMessageChannel>());
            tracing::debug!("Subscribed to boat selections");
        }
        self.similar
            .set_similar_by(self.settings.similar_by.clone())
            .await;
        tokio::join!(self.search.on_mount(), self.nearby.on_mount());
    }

    /// Release the selection subscription.
    pub fn unmount(&mut self) {
        if self.selection.take().is_some() {
            tracing::debug!("Released boat selection subscription");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.selection.is_some()
    }

    pub async fn set_boat_type(&self, filter: BoatTypeFilter) {
        tokio::join!(
            self.search.search_boats(filter.clone()),
            self.nearby.set_boat_type(filter)
        );
    }

    pub async fn set_record(&self, boat_id: Option<RecordId>) {
        tokio::join!(
            self.reviews.set_record_id(boat_id.clone()),
            self.similar.set_record_id(boat_id)
        );
    }

    pub async fn set_similar_by(&self, similar_by: Option<SimilarBy>) {
        self.similar.set_similar_by(similar_by).await;
    }

    /// Apply the newest pending boat selection to the detail views.
    ///
    /// Returns the record id that was applied, if any.
    pub async fn sync_selection(&mut self) -> Option<RecordId> {
        let message = self.selection.as_mut()?.latest()?;
        tracing::debug!(record_id = %message.record_id, "Applying boat selection");
        self.set_record(Some(message.record_id.clone())).await;
        Some(message.record_id)
    }

    /// Drain lifecycle signals; true while any view is loading.
    pub fn poll_lifecycle(&mut self) -> bool {
        while let Ok(event) = self.lifecycle.try_recv() {
            match event.signal {
                LoadingSignal::Loading => {
                    self.loading.insert(event.component);
                }
                LoadingSignal::DoneLoading => {
                    self.loading.remove(&event.component);
                }
            }
        }
        !self.loading.is_empty()
    }

    pub fn loading_components(&self) -> Vec<ComponentKind> {
        let mut components: Vec<ComponentKind> = self.loading.iter().copied().collect();
        components.sort_by_key(|component| *component as u8);
        components
    }

    pub fn search(&self) -> &SearchResultsPanel {
        &self.search
    }

    pub fn nearby(&self) -> &NearbyMap {
        &self.nearby
    }

    pub fn reviews(&self) -> &ReviewsPanel {
        &self.reviews
    }

    pub fn similar(&self) -> &SimilarBoatsPanel {
        &self.similar
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            search_results: (&self.search.state()).into(),
            nearby_map: (&self.nearby.state()).into(),
            reviews: (&self.reviews.state()).into(),
            similar_boats: (&self.similar.state()).into(),
        }
    }
}
