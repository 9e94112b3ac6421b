use axum::{Router, routing::post};
use std::sync::Arc;

use crate::db::CareStorage;
use crate::handlers::ussd_callback;
use crate::service::notifier::Notifier;

/// Injected request context: the storage handle and the notification
/// sender. Both arrive through the state object so tests can swap in a
/// throwaway database and a recording notifier.
#[derive(Clone)]
pub struct CareState {
    pub storage: CareStorage,
    pub notifier: Arc<dyn Notifier>,
}

impl CareState {
    pub fn new(storage: CareStorage, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }
}

pub fn care_router(state: CareState) -> Router {
    Router::new()
        .route("/ussd", post(ussd_callback))
        .with_state(state)
}
