// All LLM prompt constants for the Roadmap module.

use crate::models::roadmap::ExperienceLevel;

/// System prompt for week-plan generation — enforces JSON-only output.
pub const ROADMAP_SYSTEM: &str =
    "You are a helpful AI that generates structured learning roadmaps. \
    You MUST respond with valid JSON only — a JSON array of week objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Week-plan prompt template. Replace `{goal}` and `{experience}` before sending.
const WEEK_PLAN_PROMPT_TEMPLATE: &str = r#"Create a weekly learning roadmap for someone with {experience} experience who wants to {goal}. Include week numbers and specific tasks.

Return a JSON array with this EXACT shape (no extra fields):
[
  {
    "week": 1,
    "goal": "What this week achieves",
    "tasks": [
      "A specific, actionable task",
      "Another specific task"
    ]
  }
]

Rules:
- Number weeks sequentially starting at 1.
- Every week MUST have a non-empty "tasks" array of concrete, actionable items.
- Scale depth and pace to the stated experience level.
- Cover the goal end to end in 6 to 12 weeks."#;

pub fn build_week_plan_prompt(goal: &str, experience: ExperienceLevel) -> String {
    WEEK_PLAN_PROMPT_TEMPLATE
        .replace("{goal}", goal)
        .replace("{experience}", experience.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_plan_prompt_substitutes_placeholders() {
        let prompt = build_week_plan_prompt("become a frontend dev", ExperienceLevel::Beginner);
        assert!(prompt.contains("become a frontend dev"));
        assert!(prompt.contains("beginner experience"));
        assert!(!prompt.contains("{goal}"));
        assert!(!prompt.contains("{experience}"));
    }

    #[test]
    fn test_week_plan_prompt_describes_expected_shape() {
        let prompt = build_week_plan_prompt("learn SQL", ExperienceLevel::Experienced);
        assert!(prompt.contains("\"week\": 1"));
        assert!(prompt.contains("\"tasks\""));
    }
}
