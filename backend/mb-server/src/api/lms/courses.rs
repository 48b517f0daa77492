//! Course REST API handlers

use crate::api::lms::{ok_body, parse_id};
use crate::{ApiResult, AppState, AuthToken};

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::Value;

/// GET /courses
///
/// Courses the caller is enrolled in and currently taking
pub async fn list_courses(
    State(state): State<AppState>,
    token: AuthToken,
) -> ApiResult<Json<Value>> {
    let courses = state.moodle.courses_in_progress(token.as_str()).await?;
    Ok(Json(ok_body("courses", courses)))
}

/// GET /course/{id}/contents
pub async fn course_contents(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let course_id = parse_id(&id, "course id")?;
    let contents = state.moodle.course_contents(token.as_str(), course_id).await?;
    Ok(Json(ok_body("contents", contents)))
}

/// GET /course/{id}/grades
pub async fn course_grades(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let course_id = parse_id(&id, "course id")?;
    let grades = state.moodle.course_grades(token.as_str(), course_id).await?;
    Ok(Json(ok_body("grades", grades)))
}
