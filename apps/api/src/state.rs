use std::sync::Arc;

use crate::config::Config;
use crate::monetizer::OpportunityClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Ordered keyword rule table. Read-only after startup.
    pub classifier: Arc<OpportunityClassifier>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            classifier: Arc::new(OpportunityClassifier::new()),
        }
    }
}
