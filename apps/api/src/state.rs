use std::sync::Arc;

use sqlx::PgPool;

use crate::assist::cache::RecommendationCache;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// The text-generation collaborator. Production wires `LlmClient`;
    /// tests substitute canned generators.
    pub llm: Arc<dyn TextGenerator>,
    /// Process-local recommendation cache (24-hour expiry, checked at read).
    /// A latency optimization only — never a correctness dependency.
    pub recommendation_cache: Arc<dyn RecommendationCache>,
    pub config: Config,
}
