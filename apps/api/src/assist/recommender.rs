//! Resume Assistant — skill and project recommendations for a career goal.
//!
//! Recommendations must never block on AI output quality: an unparseable
//! response is replaced by a fixed generic set and the call still reports
//! success. A transport failure still surfaces as an error — there is
//! nothing to show without a completed call. This asymmetry with roadmap
//! generation (which refuses to fabricate a plan) is intentional.

use chrono::Utc;
use tracing::{debug, warn};

use crate::assist::cache::{is_fresh, RecommendationCache};
use crate::assist::prompts::build_recommendation_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::TextGenerator;
use crate::models::recommendation::{ProjectIdea, SkillRecommendation};
use crate::normalize;

/// Produces recommendations for `goal`, consulting the cache first.
/// Fresh cache hits skip the AI call entirely; results (fallback included)
/// are cached for the next request with the same goal.
pub async fn recommend(
    llm: &dyn TextGenerator,
    cache: &dyn RecommendationCache,
    goal: &str,
) -> Result<SkillRecommendation, AppError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    if let Some((cached, cached_at)) = cache.get(goal) {
        if is_fresh(cached_at, Utc::now()) {
            debug!("Recommendation cache hit for goal '{goal}'");
            return Ok(cached);
        }
    }

    let prompt = build_recommendation_prompt(goal);
    let raw = llm.generate(&prompt, JSON_ONLY_SYSTEM).await?;

    let recommendation = match normalize::parse_skill_recommendations(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Unparseable recommendation response, using fallback: {e}");
            fallback_recommendations()
        }
    };

    cache.set(goal, recommendation.clone());
    Ok(recommendation)
}

/// The fixed fallback returned whenever the AI response cannot be parsed:
/// 8 generic skills and 4 generic project ideas, useful for any goal.
pub fn fallback_recommendations() -> SkillRecommendation {
    SkillRecommendation {
        skills: [
            "Problem Solving",
            "Communication",
            "Teamwork",
            "Adaptability",
            "Critical Thinking",
            "Time Management",
            "Technical Proficiency",
            "Project Management",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        projects: vec![
            ProjectIdea {
                title: "Portfolio Website".to_string(),
                description: "Create a professional portfolio showcasing your skills and experience relevant to your career goal.".to_string(),
            },
            ProjectIdea {
                title: "Industry Research Project".to_string(),
                description: "Conduct comprehensive research on trends and challenges in your target industry.".to_string(),
            },
            ProjectIdea {
                title: "Skill Development Project".to_string(),
                description: "Build a project that demonstrates the key technical skills required for your career path.".to_string(),
            },
            ProjectIdea {
                title: "Problem-Solving Case Study".to_string(),
                description: "Document and present a real-world problem you solved, highlighting your analytical and technical skills.".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Duration;

    use super::*;
    use crate::assist::cache::InMemoryRecommendationCache;
    use crate::llm_client::LlmError;

    /// Canned generator that counts how often it is called.
    struct CannedGenerator {
        response: String,
        calls: AtomicUsize,
    }

    impl CannedGenerator {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    /// Generator that always fails at the transport level.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    const VALID_RESPONSE: &str = r#"{
        "skills": ["Rust", "PostgreSQL"],
        "projects": [{"title": "API service", "description": "A small REST API"}]
    }"#;

    #[tokio::test]
    async fn test_well_formed_response_is_parsed_and_cached() {
        let llm = CannedGenerator::new(VALID_RESPONSE);
        let cache = InMemoryRecommendationCache::new();

        let result = recommend(&llm, &cache, "become a backend dev").await.unwrap();
        assert_eq!(result.skills, vec!["Rust", "PostgreSQL"]);
        assert!(cache.get("become a backend dev").is_some());
    }

    #[tokio::test]
    async fn test_unparseable_response_yields_fallback_and_success() {
        let llm = CannedGenerator::new("Sorry, I can't produce JSON today.");
        let cache = InMemoryRecommendationCache::new();

        let result = recommend(&llm, &cache, "become a designer").await.unwrap();
        assert_eq!(result, fallback_recommendations());
        assert_eq!(result.skills.len(), 8);
        assert_eq!(result.projects.len(), 4);
    }

    #[tokio::test]
    async fn test_fresh_cache_hit_skips_the_ai_call() {
        let llm = CannedGenerator::new(VALID_RESPONSE);
        let cache = InMemoryRecommendationCache::new();

        recommend(&llm, &cache, "learn devops").await.unwrap();
        recommend(&llm, &cache, "learn devops").await.unwrap();
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn test_expired_cache_entry_triggers_a_new_call() {
        let llm = CannedGenerator::new(VALID_RESPONSE);
        let cache = InMemoryRecommendationCache::new();
        cache.set_at(
            "learn devops",
            fallback_recommendations(),
            Utc::now() - Duration::hours(25),
        );

        let result = recommend(&llm, &cache, "learn devops").await.unwrap();
        assert_eq!(llm.call_count(), 1);
        assert_eq!(result.skills, vec!["Rust", "PostgreSQL"]);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_upstream_error() {
        let cache = InMemoryRecommendationCache::new();
        let result = recommend(&FailingGenerator, &cache, "learn devops").await;
        assert!(matches!(result, Err(AppError::Upstream(_))));
    }

    #[tokio::test]
    async fn test_empty_goal_is_rejected_before_any_call() {
        let llm = CannedGenerator::new(VALID_RESPONSE);
        let cache = InMemoryRecommendationCache::new();
        let result = recommend(&llm, &cache, "   ").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(llm.call_count(), 0);
    }
}
