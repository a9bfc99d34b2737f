// All LLM prompt constants for the Resume Assist module.
// The system prompt is the shared JSON-only fragment from llm_client::prompts.

/// Recommendation prompt template. Replace `{goal}` before sending.
const RECOMMENDATION_PROMPT_TEMPLATE: &str = r#"As a career counselor and resume expert, analyze the following career goal and provide recommendations:

Career Goal: "{goal}"

Please provide:
1. 6-8 most relevant technical and soft skills that would be valuable for this career path
2. 4-5 project ideas that would demonstrate these skills and be impressive on a resume

Format your response as a JSON object with this exact structure:
{
  "skills": [
    "skill1",
    "skill2",
    "skill3"
  ],
  "projects": [
    {
      "title": "Project Title",
      "description": "Brief description of what this project demonstrates and why it's valuable for the career goal"
    }
  ]
}

Focus on:
- Current industry trends and in-demand skills
- Projects that showcase practical application
- Skills that are both technical and transferable
- Projects that can be completed individually or in small teams
- Modern technologies and methodologies

Provide only the JSON response, no additional text."#;

pub fn build_recommendation_prompt(goal: &str) -> String {
    RECOMMENDATION_PROMPT_TEMPLATE.replace("{goal}", goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_prompt_substitutes_goal() {
        let prompt = build_recommendation_prompt("become a data engineer");
        assert!(prompt.contains("Career Goal: \"become a data engineer\""));
        assert!(!prompt.contains("{goal}"));
    }
}
