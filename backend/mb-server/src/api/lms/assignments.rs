//! Assignment REST API handlers

use crate::api::lms::{ok_body, parse_id};
use crate::{ApiResult, AppState, AuthToken, SaveTextRequest};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;
use serde_json::Value;

/// GET /course/{id}/assignments
pub async fn course_assignments(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let course_id = parse_id(&id, "course id")?;
    let assignments = state
        .moodle
        .course_assignments(token.as_str(), course_id)
        .await?;
    Ok(Json(ok_body("assignments", assignments)))
}

/// GET /assign/{id}/status
///
/// Submission status for the caller's own attempt
pub async fn assignment_status(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let assign_id = parse_id(&id, "assignment id")?;
    let status = state
        .moodle
        .submission_status(token.as_str(), assign_id)
        .await?;
    Ok(Json(ok_body("status", status)))
}

/// POST /assign/{id}/save-text
pub async fn save_text(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    payload: Result<Json<SaveTextRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let assign_id = parse_id(&id, "assignment id")?;
    let Json(request) = payload?;
    let text = request.text.unwrap_or_default();

    let result = state
        .moodle
        .save_text_submission(token.as_str(), assign_id, &text)
        .await?;
    info!("Saved online text for assignment {}", assign_id);

    Ok(Json(ok_body("result", result)))
}

/// POST /assign/{id}/submit
pub async fn submit_assignment(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let assign_id = parse_id(&id, "assignment id")?;
    let result = state
        .moodle
        .submit_for_grading(token.as_str(), assign_id)
        .await?;
    info!("Submitted assignment {} for grading", assign_id);

    Ok(Json(ok_body("result", result)))
}
