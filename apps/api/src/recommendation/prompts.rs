// Recommendation prompt template.

/// Fixed career-advisor prompt. `{skills}` is replaced with the comma-joined skill list.
pub const RECOMMENDATION_PROMPT_TEMPLATE: &str = "\
You are an expert tech career advisor.
Based only on the following skills, recommend 5 best-fit tech job roles.
For each role, include:
- job_title
- reason
- match_percentage (integer between 0-100)

Skills: {skills}

Output only valid JSON array of objects with keys:
job_title, reason, match_percentage";

/// Number of recommendations the prompt asks for.
pub const EXPECTED_RECOMMENDATIONS: usize = 5;
