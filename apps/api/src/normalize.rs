//! Response Normalizer — turns raw AI text output into validated structures.
//!
//! Nothing untyped crosses this boundary: callers get a validated week plan
//! or skill recommendation, or a `NormalizeError` they map to
//! `AppError::MalformedAiResponse`.

use thiserror::Error;

use crate::models::recommendation::SkillRecommendation;
use crate::models::roadmap::WeekEntry;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0}")]
    Shape(String),
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// The opening fence may carry a language tag up to the first newline.
/// Text without fences passes through unchanged.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        // Inline fence with no newline: only a bare "json" tag can precede
        // the content, since JSON itself never starts alphanumeric.
        None => rest.strip_prefix("json").unwrap_or(rest),
    };
    let rest = rest.trim();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}

/// Parses a roadmap-generation response into an ordered week list.
/// Expected shape: a JSON array of `{week, goal, tasks}` objects.
pub fn parse_week_plan(raw: &str) -> Result<Vec<WeekEntry>, NormalizeError> {
    let text = strip_code_fences(raw);
    let weeks: Vec<WeekEntry> = serde_json::from_str(text)?;

    if weeks.is_empty() {
        return Err(NormalizeError::Shape(
            "week plan contains no entries".to_string(),
        ));
    }
    for entry in &weeks {
        if entry.week < 1 {
            return Err(NormalizeError::Shape(format!(
                "week number must be positive, got {}",
                entry.week
            )));
        }
        if entry.tasks.is_empty() {
            return Err(NormalizeError::Shape(format!(
                "week {} has an empty task list",
                entry.week
            )));
        }
    }

    Ok(weeks)
}

/// Locates the first top-level `{...}` span in `text`, tolerating leading
/// and trailing commentary around the JSON object.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

/// Parses a resume-assist response into a `SkillRecommendation`.
/// Expected shape: `{skills: [string], projects: [{title, description}]}`,
/// possibly surrounded by commentary the model added despite instructions.
pub fn parse_skill_recommendations(raw: &str) -> Result<SkillRecommendation, NormalizeError> {
    let span = extract_json_object(raw).ok_or(NormalizeError::NoJsonObject)?;
    let recommendation: SkillRecommendation = serde_json::from_str(span)?;
    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_with_other_language_tag() {
        let input = "```javascript\n[1, 2]\n```";
        assert_eq!(strip_code_fences(input), "[1, 2]");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    /// Unwrapping a fenced response wrapping valid JSON yields the same
    /// structure as parsing that JSON directly without fencing.
    #[test]
    fn test_fenced_and_bare_week_plans_parse_identically() {
        let bare = r#"[{"week": 1, "goal": "Learn HTML", "tasks": ["Build a page"]}]"#;
        let fenced = format!("```json\n{bare}\n```");
        assert_eq!(parse_week_plan(bare).unwrap(), parse_week_plan(&fenced).unwrap());
    }

    #[test]
    fn test_parse_week_plan_preserves_order_and_defaults() {
        let raw = r#"[
            {"week": 2, "goal": "CSS layout", "tasks": ["Flexbox", "Grid"]},
            {"week": 1, "goal": "HTML basics", "tasks": ["Tags"]}
        ]"#;
        let weeks = parse_week_plan(raw).unwrap();
        assert_eq!(weeks.len(), 2);
        // Response order preserved — no re-sorting at the parse boundary
        assert_eq!(weeks[0].week, 2);
        assert_eq!(weeks[1].week, 1);
        assert!(weeks.iter().all(|w| !w.completed));
    }

    #[test]
    fn test_parse_week_plan_rejects_empty_array() {
        assert!(matches!(
            parse_week_plan("[]"),
            Err(NormalizeError::Shape(_))
        ));
    }

    #[test]
    fn test_parse_week_plan_rejects_nonpositive_week() {
        let raw = r#"[{"week": 0, "goal": "Setup", "tasks": ["Install"]}]"#;
        assert!(matches!(parse_week_plan(raw), Err(NormalizeError::Shape(_))));
    }

    #[test]
    fn test_parse_week_plan_rejects_empty_tasks() {
        let raw = r#"[{"week": 1, "goal": "Setup", "tasks": []}]"#;
        assert!(matches!(parse_week_plan(raw), Err(NormalizeError::Shape(_))));
    }

    #[test]
    fn test_parse_week_plan_rejects_object_shape() {
        let raw = r#"{"week": 1, "goal": "Setup", "tasks": ["Install"]}"#;
        assert!(matches!(parse_week_plan(raw), Err(NormalizeError::Parse(_))));
    }

    #[test]
    fn test_extract_json_object_tolerates_commentary() {
        let raw = "Here are your recommendations:\n{\"skills\": []}\nGood luck!";
        assert_eq!(extract_json_object(raw), Some("{\"skills\": []}"));
    }

    #[test]
    fn test_extract_json_object_none_without_braces() {
        assert_eq!(extract_json_object("no json here"), None);
    }

    #[test]
    fn test_parse_skill_recommendations_happy_path() {
        let raw = r#"Sure! {
            "skills": ["Rust", "SQL"],
            "projects": [{"title": "CLI tool", "description": "A small utility"}]
        }"#;
        let rec = parse_skill_recommendations(raw).unwrap();
        assert_eq!(rec.skills, vec!["Rust", "SQL"]);
        assert_eq!(rec.projects.len(), 1);
        assert_eq!(rec.projects[0].title, "CLI tool");
    }

    #[test]
    fn test_parse_skill_recommendations_fails_without_json() {
        assert!(matches!(
            parse_skill_recommendations("I cannot help with that."),
            Err(NormalizeError::NoJsonObject)
        ));
    }

    #[test]
    fn test_parse_skill_recommendations_fails_on_wrong_types() {
        let raw = r#"{"skills": "Rust", "projects": []}"#;
        assert!(matches!(
            parse_skill_recommendations(raw),
            Err(NormalizeError::Parse(_))
        ));
    }
}
