use std::sync::Arc;

use parking_lot::Mutex;

use crate::gateway::BoatDataService;
use crate::model::{BoatTypeFilter, GeoCoordinate};
use crate::platform::{Notifier, PositionOptions, PositionSource, Toast};
use crate::ui::context::ViewContext;
use crate::ui::lifecycle::{ComponentKind, LifecycleEmitter};
use crate::ui::mvi::Reducer;
use crate::ui::reactive::QueryTicket;

use super::intent::NearbyMapIntent;
use super::markers::{create_map_markers, parse_nearby_boats};
use super::reducer::NearbyMapReducer;
use super::state::{NearbyMapState, NearbyPhase, NearbyQuery};

pub const ERROR_TITLE: &str = "Error loading Boats Near Me";

pub struct NearbyMap {
    state: Mutex<NearbyMapState>,
    gateway: Arc<dyn BoatDataService>,
    position: Arc<dyn PositionSource>,
    notifier: Arc<dyn Notifier>,
    lifecycle: LifecycleEmitter,
    high_accuracy: bool,
}

impl NearbyMap {
    pub fn new(ctx: &ViewContext, high_accuracy: bool) -> Self {
        Self {
            state: Mutex::new(NearbyMapState::default()),
            gateway: Arc::clone(&ctx.gateway),
            position: Arc::clone(&ctx.position),
            notifier: Arc::clone(&ctx.notifier),
            lifecycle: ctx.emitter(ComponentKind::NearbyMap),
            high_accuracy,
        }
    }

    pub fn state(&self) -> NearbyMapState {
        self.state.lock().clone()
    }

    /// First-render hook. Requests the viewer position exactly once; later
    /// calls are no-ops.
    ///
    /// If the position request fails the map stays loading: no location
    /// query is ever issued for this mount.
    pub async fn on_mount(&self) {
        let first_render = {
            let mut state = self.state.lock();
            let first = state.phase == NearbyPhase::Unrendered;
            *state =
                NearbyMapReducer::reduce(std::mem::take(&mut *state), NearbyMapIntent::Mounted);
            first
        };
        if !first_render {
            return;
        }

        self.lifecycle.loading();
        let options = PositionOptions {
            enable_high_accuracy: self.high_accuracy,
        };
        match self.position.current_position(options).await {
            Ok(position) => {
                tracing::debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "Viewer position resolved"
                );
                let resolved = NearbyMapIntent::PositionResolved { position };
                if let Some(ticket) = self.dispatch_query(resolved) {
                    self.run_query(ticket).await;
                }
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Could not get viewer position, nearby boats will not load"
                );
                self.dispatch_query(NearbyMapIntent::PositionFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    /// Boat type input changed. Re-queries only once a position is known.
    pub async fn set_boat_type(&self, filter: BoatTypeFilter) {
        if let Some(ticket) = self.dispatch_query(NearbyMapIntent::BoatTypeChanged { filter }) {
            self.lifecycle.loading();
            self.run_query(ticket).await;
        }
    }

    async fn run_query(&self, ticket: QueryTicket<NearbyQuery>) {
        let query = ticket.key();
        tracing::debug!(
            latitude = query.latitude,
            longitude = query.longitude,
            boat_type = %query.boat_type,
            generation = ticket.generation(),
            "Fetching nearby boats"
        );
        let result = self
            .gateway
            .fetch_boats_by_location(query.latitude, query.longitude, &query.boat_type)
            .await
            .map_err(|err| err.to_string())
            .and_then(|payload| parse_nearby_boats(&payload).map_err(|err| err.to_string()));

        let viewer = GeoCoordinate::new(query.latitude, query.longitude);
        let (intent, failed) = match result {
            Ok(boats) => (
                NearbyMapIntent::MarkersLoaded {
                    ticket: ticket.clone(),
                    markers: create_map_markers(viewer, &boats),
                },
                false,
            ),
            Err(message) => {
                tracing::warn!(error = %message, "Loading nearby boats failed");
                (
                    NearbyMapIntent::LoadFailed {
                        ticket: ticket.clone(),
                        message,
                    },
                    true,
                )
            }
        };

        if !self.apply_result(&ticket, intent) {
            tracing::debug!(generation = ticket.generation(), "Discarded stale nearby boats");
            return;
        }
        if failed {
            self.notifier.notify(Toast::error(ERROR_TITLE, None));
        }
        self.lifecycle.done_loading();
    }

    fn dispatch_query(&self, intent: NearbyMapIntent) -> Option<QueryTicket<NearbyQuery>> {
        let mut state = self.state.lock();
        let before = state.query.generation();
        *state = NearbyMapReducer::reduce(std::mem::take(&mut *state), intent);
        state.query.issued_since(before)
    }

    fn apply_result(&self, ticket: &QueryTicket<NearbyQuery>, intent: NearbyMapIntent) -> bool {
        let mut state = self.state.lock();
        let current = state.query.is_current(ticket);
        *state = NearbyMapReducer::reduce(std::mem::take(&mut *state), intent);
        current
    }
}
