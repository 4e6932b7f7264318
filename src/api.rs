//! HTTP API for the mood tracker

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::*;

use crate::advice::AdviceTable;
use crate::llm::ModelRegistry;
use crate::session::SessionStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub advice: Arc<AdviceTable>,
    pub llm_registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(store: SessionStore, advice: AdviceTable, llm_registry: Arc<ModelRegistry>) -> Self {
        Self {
            store,
            advice: Arc::new(advice),
            llm_registry,
        }
    }
}
