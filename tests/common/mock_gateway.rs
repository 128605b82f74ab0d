//! Scripted data service for driving the views in tests.
//!
//! Every call is logged under a key (`boats:<filter>`, `location:<lat>,<lon>:<filter>`,
//! `reviews:<id>`, `similar:<id>:<criterion>`, `save:<count>`). Holding a key
//! parks matching calls until it is released, which lets tests resolve
//! requests in any order.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use boatwatch::gateway::{BoatDataService, GatewayError};
use boatwatch::model::{BoatRecord, BoatTypeFilter, DraftEdit, RecordId, ReviewRecord, SimilarBy};

#[derive(Default)]
pub struct ScriptedGateway {
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    boats: Mutex<HashMap<String, Result<Vec<BoatRecord>, GatewayError>>>,
    nearby: Mutex<HashMap<String, Result<String, GatewayError>>>,
    reviews: Mutex<HashMap<String, Result<Vec<ReviewRecord>, GatewayError>>>,
    similar: Mutex<HashMap<String, Result<Vec<BoatRecord>, GatewayError>>>,
    save_result: Mutex<Option<GatewayError>>,
    saved: Mutex<Vec<Vec<DraftEdit>>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Scripting ------------------------------------------------------------

    /// `filter` is the filter's display form: a type id or `*` for all types.
    pub fn set_boats(&self, filter: &str, result: Result<Vec<BoatRecord>, GatewayError>) {
        self.boats.lock().insert(filter.to_string(), result);
    }

    pub fn set_nearby(&self, filter: &str, result: Result<String, GatewayError>) {
        self.nearby.lock().insert(filter.to_string(), result);
    }

    pub fn set_reviews(&self, boat_id: &str, result: Result<Vec<ReviewRecord>, GatewayError>) {
        self.reviews.lock().insert(boat_id.to_string(), result);
    }

    pub fn set_similar(&self, boat_id: &str, result: Result<Vec<BoatRecord>, GatewayError>) {
        self.similar.lock().insert(boat_id.to_string(), result);
    }

    pub fn fail_saves(&self, error: GatewayError) {
        *self.save_result.lock() = Some(error);
    }

    /// Park calls logged under `key` until [`release`](Self::release).
    pub fn hold(&self, key: &str) {
        self.gates
            .lock()
            .insert(key.to_string(), Arc::new(Notify::new()));
    }

    /// Let the parked call (or the next one) under `key` through and stop
    /// holding the key.
    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.lock().remove(key) {
            gate.notify_one();
        }
    }

    // -- Inspection -----------------------------------------------------------

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn saved(&self) -> Vec<Vec<DraftEdit>> {
        self.saved.lock().clone()
    }

    /// Yield until at least `n` calls have been logged.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls.lock().len() < n {
            tokio::task::yield_now().await;
        }
    }

    async fn enter(&self, key: String) {
        let gate = self.gates.lock().get(&key).cloned();
        self.calls.lock().push(key);
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl BoatDataService for ScriptedGateway {
    async fn fetch_boats(&self, filter: &BoatTypeFilter) -> Result<Vec<BoatRecord>, GatewayError> {
        let key = filter.to_string();
        self.enter(format!("boats:{}", key)).await;
        self.boats.lock().get(&key).cloned().unwrap_or(Ok(Vec::new()))
    }

    async fn fetch_boats_by_location(
        &self,
        latitude: f64,
        longitude: f64,
        filter: &BoatTypeFilter,
    ) -> Result<String, GatewayError> {
        let key = filter.to_string();
        self.enter(format!("location:{},{}:{}", latitude, longitude, key))
            .await;
        self.nearby
            .lock()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok("[]".to_string()))
    }

    async fn fetch_reviews(&self, boat_id: &RecordId) -> Result<Vec<ReviewRecord>, GatewayError> {
        self.enter(format!("reviews:{}", boat_id)).await;
        self.reviews
            .lock()
            .get(boat_id.as_str())
            .cloned()
            .unwrap_or(Ok(Vec::new()))
    }

    async fn fetch_similar(
        &self,
        boat_id: &RecordId,
        similar_by: &SimilarBy,
    ) -> Result<Vec<BoatRecord>, GatewayError> {
        self.enter(format!("similar:{}:{}", boat_id, similar_by))
            .await;
        self.similar
            .lock()
            .get(boat_id.as_str())
            .cloned()
            .unwrap_or(Ok(Vec::new()))
    }

    async fn save_boats(&self, drafts: Vec<DraftEdit>) -> Result<(), GatewayError> {
        self.enter(format!("save:{}", drafts.len())).await;
        self.saved.lock().push(drafts);
        match self.save_result.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
