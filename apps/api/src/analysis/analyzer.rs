//! Match Analyzer — scores a CV against a job description via the LLM.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{CV_MATCH_PROMPT_TEMPLATE, CV_MATCH_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Structured output of one analysis call.
/// Serialized directly into the 200 response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvFit {
    /// Match score the model assigned, documented to it as 0 to 1.
    /// Passed through exactly as returned; never clamped or validated.
    pub score: f64,
    pub justification: String,
}

fn build_prompt(job_description: &str, cv_text: &str) -> String {
    CV_MATCH_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{cv_text}", cv_text)
}

/// Scores `cv_text` against `job_description` with a single model call.
///
/// Every failure mode (transport, API status, empty content, parse) surfaces
/// as a distinct `LlmError`; the handler flattens all of them into one
/// generic client-facing message.
pub async fn analyze_cv(
    llm: &LlmClient,
    job_description: &str,
    cv_text: &str,
) -> Result<CvFit, LlmError> {
    let prompt = build_prompt(job_description, cv_text);
    llm.call_json::<CvFit>(&prompt, CV_MATCH_SYSTEM).await
}
