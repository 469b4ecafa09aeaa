use crate::{event::events::Event, http::ApiService};
use flume::Sender;
use std::sync::Arc;

/// Shared handles every view and fetch task works through.
pub struct AppContext {
    pub api: Arc<ApiService>,
    pub event_tx: Sender<Event>,
}

impl AppContext {
    pub fn new(api: Arc<ApiService>, event_tx: Sender<Event>) -> Self {
        Self { api, event_tx }
    }
}
