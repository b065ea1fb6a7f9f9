use std::sync::Arc;

use crate::ats::ResumeAnalyzer;
use crate::config::Config;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable analyzer. Default: `Analyzer` over the startup keyword catalog.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Last analysis per session. Redis when `REDIS_URL` is set, otherwise in-memory.
    pub store: Arc<dyn AnalysisStore>,
}
