use std::sync::Arc;

use crate::ats::scoring::{HeuristicAtsScorer, ResumeScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable résumé scorer. Default: HeuristicAtsScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            scorer: Arc::new(HeuristicAtsScorer),
        }
    }
}
