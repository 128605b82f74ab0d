use std::sync::Arc;

use parking_lot::Mutex;

use crate::bus::{BoatMessageChannel, MessageBus, SelectionMessage};
use crate::gateway::BoatDataService;
use crate::model::{BoatTypeFilter, DraftEdit, RecordId};
use crate::platform::{Notifier, Toast};
use crate::ui::context::ViewContext;
use crate::ui::lifecycle::{ComponentKind, LifecycleEmitter};
use crate::ui::mvi::Reducer;
use crate::ui::reactive::QueryTicket;

use super::intent::SearchResultsIntent;
use super::reducer::SearchResultsReducer;
use super::state::SearchResultsState;

pub const SUCCESS_TITLE: &str = "Success";
pub const MESSAGE_SHIP_IT: &str = "Ship it!";
pub const ERROR_TITLE: &str = "Error";

/// Editable grid of boats matching the active type filter.
pub struct SearchResultsPanel {
    state: Mutex<SearchResultsState>,
    gateway: Arc<dyn BoatDataService>,
    bus: Arc<MessageBus>,
    notifier: Arc<dyn Notifier>,
    lifecycle: LifecycleEmitter,
}

impl SearchResultsPanel {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            state: Mutex::new(SearchResultsState::default()),
            gateway: Arc::clone(&ctx.gateway),
            bus: Arc::clone(&ctx.bus),
            notifier: Arc::clone(&ctx.notifier),
            lifecycle: ctx.emitter(ComponentKind::SearchResults),
        }
    }

    pub fn state(&self) -> SearchResultsState {
        self.state.lock().clone()
    }

    /// Load the initial list unless a query was already issued.
    pub async fn on_mount(&self) {
        if self.state.lock().query.key().is_some() {
            return;
        }
        self.refresh().await;
    }

    /// Set the active filter and load the matching boats.
    pub async fn search_boats(&self, filter: BoatTypeFilter) {
        self.lifecycle.loading();
        match self.dispatch_query(SearchResultsIntent::FilterChanged { filter }) {
            Some(ticket) => self.run_query(ticket).await,
            None => {
                // Unchanged filter: an outstanding request still owns the
                // loading window, otherwise there is nothing to wait for.
                if !self.state.lock().query.in_flight() {
                    self.lifecycle.done_loading();
                }
            }
        }
    }

    /// Re-run the current query; resolves once the result has been applied.
    pub async fn refresh(&self) {
        self.lifecycle.loading();
        if let Some(ticket) = self.dispatch_query(SearchResultsIntent::Refresh) {
            self.run_query(ticket).await;
        }
    }

    /// Publish the picked row on the boat channel. No round-trip.
    pub fn select_boat(&self, boat_id: RecordId) {
        self.dispatch(SearchResultsIntent::BoatSelected {
            boat_id: boat_id.clone(),
        });
        self.bus
            .publish::<BoatMessageChannel>(SelectionMessage { record_id: boat_id });
    }

    pub fn record_draft(&self, edit: DraftEdit) {
        self.dispatch(SearchResultsIntent::DraftRecorded { edit });
    }

    /// Save the staged drafts.
    pub async fn save_drafts(&self) {
        let drafts = self.state.lock().drafts.clone();
        self.handle_save(drafts).await;
    }

    /// Save `drafts`, report the outcome, then reload the list.
    ///
    /// The reload runs whether or not the save succeeded, and its completion
    /// is what ends the loading window.
    pub async fn handle_save(&self, drafts: Vec<DraftEdit>) {
        self.lifecycle.loading();
        self.dispatch(SearchResultsIntent::SaveStarted);

        let count = drafts.len();
        match self.gateway.save_boats(drafts).await {
            Ok(()) => {
                tracing::info!(edits = count, "Saved boat edits");
                self.notifier.notify(Toast::success(SUCCESS_TITLE, MESSAGE_SHIP_IT));
            }
            Err(err) => {
                tracing::warn!(edits = count, error = %err, "Saving boat edits failed");
                self.notifier
                    .notify(Toast::error(ERROR_TITLE, Some(err.to_string())));
            }
        }

        self.dispatch(SearchResultsIntent::SaveFinished);
        self.refresh().await;
    }

    async fn run_query(&self, ticket: QueryTicket<BoatTypeFilter>) {
        tracing::debug!(
            filter = %ticket.key(),
            generation = ticket.generation(),
            "Fetching boats"
        );
        let intent = match self.gateway.fetch_boats(ticket.key()).await {
            Ok(boats) => SearchResultsIntent::BoatsLoaded {
                ticket: ticket.clone(),
                boats,
            },
            Err(err) => {
                tracing::warn!(filter = %ticket.key(), error = %err, "Loading boats failed");
                SearchResultsIntent::LoadFailed {
                    ticket: ticket.clone(),
                    message: err.to_string(),
                }
            }
        };

        if self.apply_result(&ticket, intent) {
            self.lifecycle.done_loading();
        } else {
            tracing::debug!(generation = ticket.generation(), "Discarded stale boat list");
        }
    }

    fn dispatch(&self, intent: SearchResultsIntent) {
        let mut state = self.state.lock();
        *state = SearchResultsReducer::reduce(std::mem::take(&mut *state), intent);
    }

    fn dispatch_query(&self, intent: SearchResultsIntent) -> Option<QueryTicket<BoatTypeFilter>> {
        let mut state = self.state.lock();
        let before = state.query.generation();
        *state = SearchResultsReducer::reduce(std::mem::take(&mut *state), intent);
        state.query.issued_since(before)
    }

    fn apply_result(
        &self,
        ticket: &QueryTicket<BoatTypeFilter>,
        intent: SearchResultsIntent,
    ) -> bool {
        let mut state = self.state.lock();
        let current = state.query.is_current(ticket);
        *state = SearchResultsReducer::reduce(std::mem::take(&mut *state), intent);
        current
    }
}
