//! Forum REST API handlers

use crate::api::error::require_field;
use crate::api::lms::{ok_body, parse_id};
use crate::{ApiError, ApiResult, AppState, AuthToken, ForumReplyRequest};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde_json::Value;

/// GET /course/{id}/forums
pub async fn course_forums(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let course_id = parse_id(&id, "course id")?;
    let forums = state.moodle.course_forums(token.as_str(), course_id).await?;
    Ok(Json(ok_body("forums", forums)))
}

/// GET /forum/{id}/discussions
pub async fn forum_discussions(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let forum_id = parse_id(&id, "forum id")?;
    let discussions = state
        .moodle
        .forum_discussions(token.as_str(), forum_id)
        .await?;
    Ok(Json(ok_body("discussions", discussions)))
}

/// GET /discussion/{id}/posts
pub async fn discussion_posts(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let discussion_id = parse_id(&id, "discussion id")?;
    let posts = state
        .moodle
        .discussion_posts(token.as_str(), discussion_id)
        .await?;
    Ok(Json(ok_body("posts", posts)))
}

/// POST /forum/reply
pub async fn reply_to_forum(
    State(state): State<AppState>,
    token: AuthToken,
    payload: Result<Json<ForumReplyRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload?;
    let post_id = request
        .postid
        .as_ref()
        .and_then(|id| id.as_i64())
        .ok_or_else(|| ApiError::bad_request("Missing or invalid field: postid"))?;
    let subject = require_field(&request.subject, "subject")?;
    let message = require_field(&request.message, "message")?;

    let result = state
        .moodle
        .reply_to_post(token.as_str(), post_id, subject, message)
        .await?;

    Ok(Json(ok_body("result", result)))
}
