use std::sync::Arc;

use parking_lot::Mutex;

use crate::gateway::BoatDataService;
use crate::model::{RecordId, SimilarBy};
use crate::platform::{Navigator, ObjectType, RecordPageRef};
use crate::ui::context::ViewContext;
use crate::ui::lifecycle::{ComponentKind, LifecycleEmitter};
use crate::ui::mvi::Reducer;
use crate::ui::reactive::QueryTicket;

use super::intent::SimilarBoatsIntent;
use super::reducer::SimilarBoatsReducer;
use super::state::{SimilarBoatsState, SimilarQuery};

pub struct SimilarBoatsPanel {
    state: Mutex<SimilarBoatsState>,
    gateway: Arc<dyn BoatDataService>,
    navigator: Arc<dyn Navigator>,
    lifecycle: LifecycleEmitter,
}

impl SimilarBoatsPanel {
    pub fn new(ctx: &ViewContext) -> Self {
        Self {
            state: Mutex::new(SimilarBoatsState::default()),
            gateway: Arc::clone(&ctx.gateway),
            navigator: Arc::clone(&ctx.navigator),
            lifecycle: ctx.emitter(ComponentKind::SimilarBoats),
        }
    }

    pub fn state(&self) -> SimilarBoatsState {
        self.state.lock().clone()
    }

    pub async fn set_record_id(&self, boat_id: Option<RecordId>) {
        self.reconcile(SimilarBoatsIntent::RecordChanged { boat_id })
            .await;
    }

    pub async fn set_similar_by(&self, similar_by: Option<SimilarBy>) {
        self.reconcile(SimilarBoatsIntent::CriterionChanged { similar_by })
            .await;
    }

    /// Open a related boat's record page.
    pub fn open_boat_detail(&self, boat_id: RecordId) {
        {
            let mut state = self.state.lock();
            *state = SimilarBoatsReducer::reduce(
                std::mem::take(&mut *state),
                SimilarBoatsIntent::BoatOpened {
                    boat_id: boat_id.clone(),
                },
            );
        }
        self.navigator
            .navigate_to_record(RecordPageRef::view(boat_id, ObjectType::Boat));
    }

    /// Apply an input change and load the query it issues, if any.
    async fn reconcile(&self, intent: SimilarBoatsIntent) {
        let fetch_outstanding = self.state.lock().query.in_flight();
        if let Some(ticket) = self.dispatch_query(intent) {
            self.load(ticket, fetch_outstanding).await;
        }
    }

    /// `supersedes_fetch`: a fetch that already signalled `Loading` was still
    /// outstanding when `ticket` was issued. Its stale result will not close
    /// the loading window, so a skipped ticket has to.
    async fn load(&self, ticket: QueryTicket<SimilarQuery>, supersedes_fetch: bool) {
        let Some((boat_id, similar_by)) = ticket.key().complete() else {
            let skipped = SimilarBoatsIntent::Skipped {
                ticket: ticket.clone(),
            };
            if self.apply_result(&ticket, skipped) && supersedes_fetch {
                self.lifecycle.done_loading();
            }
            return;
        };

        self.lifecycle.loading();
        tracing::debug!(
            boat_id = %boat_id,
            similar_by = %similar_by,
            generation = ticket.generation(),
            "Fetching similar boats"
        );
        let intent = match self.gateway.fetch_similar(boat_id, similar_by).await {
            Ok(boats) => SimilarBoatsIntent::BoatsLoaded {
                ticket: ticket.clone(),
                boats,
            },
            Err(err) => {
                tracing::warn!(boat_id = %boat_id, error = %err, "Loading similar boats failed");
                SimilarBoatsIntent::LoadFailed {
                    ticket: ticket.clone(),
                    message: err.to_string(),
                }
            }
        };

        if self.apply_result(&ticket, intent) {
            self.lifecycle.done_loading();
        } else {
            tracing::debug!(generation = ticket.generation(), "Discarded stale similar boats");
        }
    }

    fn dispatch_query(&self, intent: SimilarBoatsIntent) -> Option<QueryTicket<SimilarQuery>> {
        let mut state = self.state.lock();
        let before = state.query.generation();
        *state = SimilarBoatsReducer::reduce(std::mem::take(&mut *state), intent);
        state.query.issued_since(before)
    }

    fn apply_result(&self, ticket: &QueryTicket<SimilarQuery>, intent: SimilarBoatsIntent) -> bool {
        let mut state = self.state.lock();
        let current = state.query.is_current(ticket);
        *state = SimilarBoatsReducer::reduce(std::mem::take(&mut *state), intent);
        current
    }
}
