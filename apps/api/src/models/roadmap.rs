use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Experience level submitted with a roadmap request.
/// The fixed label set is the validation boundary for the `experience` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Experienced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Experienced => "experienced",
        }
    }
}

/// One week of a learning plan as it travels through the normalizer and
/// over the wire. `completed` defaults to false — AI output never carries it.
///
/// Week numbers are whatever the AI emitted: positive, but NOT guaranteed
/// unique or contiguous. Consumers sort-then-scan, never index-by-number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week: i32,
    pub goal: String,
    pub tasks: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

/// A roadmap as stored in the `roadmaps` table. Week content lives in
/// `roadmap_weeks`, keyed by `roadmap_id` and ordered by `position`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub goal: String,
    pub experience: String,
    pub created_at: DateTime<Utc>,
}

/// A single week row. `position` preserves the AI response order exactly;
/// `week` is the AI-assigned week number used for completion updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapWeekRow {
    pub id: Uuid,
    pub roadmap_id: Uuid,
    pub position: i32,
    pub week: i32,
    pub goal: String,
    pub tasks: Vec<String>,
    pub completed: bool,
}

impl From<RoadmapWeekRow> for WeekEntry {
    fn from(row: RoadmapWeekRow) -> Self {
        WeekEntry {
            week: row.week,
            goal: row.goal,
            tasks: row.tasks,
            completed: row.completed,
        }
    }
}

/// A roadmap with its week content assembled, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub id: Uuid,
    pub goal: String,
    pub experience: String,
    pub created_at: DateTime<Utc>,
    pub content: Vec<WeekEntry>,
}
