//! Axum route handler for the analysis pipeline.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::analysis::analyzer::{analyze_cv, CvFit};
use crate::document::extract::extract_text;
use crate::document::fetch::download_pdf;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /Analyse
///
/// Runs the full pipeline for one request: validate input, download the CV,
/// extract its text, score it against the job description. The stages run
/// strictly in order and every failure short-circuits the rest; identical
/// inputs run the full pipeline every time.
pub async fn handle_analyse(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CvFit>, AppError> {
    // A body that is not valid JSON and a body missing either field collapse
    // into the same client error.
    let Ok(Json(body)) = payload else {
        return Err(AppError::MissingParameters);
    };

    let job_description = body
        .get("job_description")
        .and_then(Value::as_str)
        .ok_or(AppError::MissingParameters)?;
    let cv_url = body
        .get("cv_url")
        .and_then(Value::as_str)
        .ok_or(AppError::MissingParameters)?;

    let pdf_bytes = download_pdf(&state.http, cv_url).await?;
    let cv_text = extract_text(&pdf_bytes)?;

    let result = analyze_cv(&state.llm, job_description, &cv_text).await?;

    Ok(Json(result))
}
