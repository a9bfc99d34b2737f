use serde::{Deserialize, Serialize};

/// A project idea suggested alongside skill recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
}

/// Skill and project recommendations for a career goal.
/// Ephemeral — produced per request, never persisted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skills: Vec<String>,
    pub projects: Vec<ProjectIdea>,
}
