use std::sync::Arc;

use parking_lot::Mutex;

use crate::gateway::BoatDataService;
use crate::model::RecordId;
use crate::platform::{Navigator, ObjectType, RecordPageRef};
use crate::ui::context::ViewContext;
use crate::ui::lifecycle::{ComponentKind, LifecycleEmitter};
use crate::ui::mvi::Reducer;
use crate::ui::reactive::QueryTicket;

use super::intent::ReviewsIntent;
use super::reducer::ReviewsReducer;
use super::state::ReviewsState;

pub struct ReviewsPanel {
    state: Mutex<ReviewsState>,
    gateway: Arc<dyn BoatDataService>,
    navigator: Arc<dyn Navigator>,
    lifecycle: LifecycleEmitter,
}

impl ReviewsPanel {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            state: Mutex::new(ReviewsState::default()),
            gateway: Arc::clone(&ctx.gateway),
            navigator: Arc::clone(&ctx.navigator),
            lifecycle: ctx.emitter(ComponentKind::Reviews),
        }
    }

    pub fn state(&self) -> ReviewsState {
        self.state.lock().clone()
    }

    /// Record id input changed; loads that boat's reviews.
    pub async fn set_record_id(&self, boat_id: Option<RecordId>) {
        if let Some(ticket) = self.dispatch_query(ReviewsIntent::RecordChanged { boat_id }) {
            self.load(ticket).await;
        }
    }

    pub async fn refresh(&self) {
        if let Some(ticket) = self.dispatch_query(ReviewsIntent::Refresh) {
            self.load(ticket).await;
        }
    }

    /// Open the reviewer's user page.
    pub fn navigate_to_reviewer(&self, user_id: RecordId) {
        self.navigator
            .navigate_to_record(RecordPageRef::view(user_id, ObjectType::User));
    }

    async fn load(&self, ticket: QueryTicket<Option<RecordId>>) {
        self.lifecycle.loading();
        let intent = match ticket.key() {
            None => ReviewsIntent::ReviewsLoaded {
                ticket: ticket.clone(),
                reviews: Vec::new(),
            },
            Some(boat_id) => match self.gateway.fetch_reviews(boat_id).await {
                Ok(reviews) => ReviewsIntent::ReviewsLoaded {
                    ticket: ticket.clone(),
                    reviews,
                },
                Err(err) => {
                    tracing::warn!(boat_id = %boat_id, error = %err, "Loading reviews failed");
                    ReviewsIntent::LoadFailed {
                        ticket: ticket.clone(),
                        message: err.to_string(),
                    }
                }
            },
        };

        if self.apply_result(&ticket, intent) {
            self.lifecycle.done_loading();
        } else {
            tracing::debug!(generation = ticket.generation(), "Discarded stale reviews");
        }
    }

    fn dispatch_query(&self, intent: ReviewsIntent) -> Option<QueryTicket<Option<RecordId>>> {
        let mut state = self.state.lock();
        let before = state.query.generation();
        *state = ReviewsReducer::reduce(std::mem::take(&mut *state), intent);
        state.query.issued_since(before)
    }

    fn apply_result(&self, ticket: &QueryTicket<Option<RecordId>>, intent: ReviewsIntent) -> bool {
        let mut state = self.state.lock();
        let current = state.query.is_current(ticket);
        *state = ReviewsReducer::reduce(std::mem::take(&mut *state), intent);
        current
    }
}
