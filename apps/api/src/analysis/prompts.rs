// All LLM prompt constants for the analysis module.

/// System prompt for CV matching — HR persona plus JSON-only output rules.
pub const CV_MATCH_SYSTEM: &str =
    "You are an HR expert evaluating how well a CV matches a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// CV matching prompt template. Replace `{job_description}` and `{cv_text}`
/// before sending.
pub const CV_MATCH_PROMPT_TEMPLATE: &str = r#"Job description:
{job_description}

CV:
{cv_text}

Evaluate how well this CV matches the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 0.75,
  "justification": "One short paragraph explaining the score."
}

Rules:
- "score" is a float between 0 and 1 measuring how well the CV matches the job description.
- "justification" explains the score against the stated requirements."#;
