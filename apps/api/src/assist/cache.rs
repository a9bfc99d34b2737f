//! Recommendation cache — capability interface plus the in-memory default.
//!
//! Process-local and intentionally unsynchronized across instances. Expiry
//! is checked at read time; a stale entry is treated as absent and
//! overwritten by the next successful generation.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::models::recommendation::SkillRecommendation;

/// How long a cached recommendation stays fresh.
pub const CACHE_TTL_HOURS: i64 = 24;

/// The cache capability carried in `AppState` as `Arc<dyn RecommendationCache>`.
/// Swap or disable it in tests without touching the recommendation flow.
pub trait RecommendationCache: Send + Sync {
    /// Returns the cached value and the instant it was stored, if present.
    fn get(&self, goal: &str) -> Option<(SkillRecommendation, DateTime<Utc>)>;
    fn set(&self, goal: &str, value: SkillRecommendation);
}

/// True when a cache timestamp is still within the TTL.
pub fn is_fresh(cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - cached_at <= Duration::hours(CACHE_TTL_HOURS)
}

/// Default in-process cache keyed by goal text.
#[derive(Default)]
pub struct InMemoryRecommendationCache {
    entries: RwLock<HashMap<String, (SkillRecommendation, DateTime<Utc>)>>,
}

impl InMemoryRecommendationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value with an explicit timestamp. Used by `set` and by
    /// tests that need to plant an already-expired entry.
    pub fn set_at(&self, goal: &str, value: SkillRecommendation, at: DateTime<Utc>) {
        self.entries
            .write()
            .expect("recommendation cache lock poisoned")
            .insert(goal.to_string(), (value, at));
    }
}

impl RecommendationCache for InMemoryRecommendationCache {
    fn get(&self, goal: &str) -> Option<(SkillRecommendation, DateTime<Utc>)> {
        self.entries
            .read()
            .expect("recommendation cache lock poisoned")
            .get(goal)
            .cloned()
    }

    fn set(&self, goal: &str, value: SkillRecommendation) {
        self.set_at(goal, value, Utc::now());
    }
}
