//! Moodle file download proxy

use crate::{ApiError, ApiResult, AppState, AuthToken, FileQuery};

use axum::{
    body::Body,
    extract::{Query, State, rejection::QueryRejection},
    http::{
        StatusCode,
        header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue},
    },
    response::{IntoResponse, Response},
};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// GET /file?u=<moodle file url>
///
/// Streams a Moodle file to the caller with their token attached. URLs off
/// the Moodle origin are refused.
pub async fn download_file(
    State(state): State<AppState>,
    token: AuthToken,
    query: Result<Query<FileQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let raw_url = query
        .u
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing required query parameter: u"))?;

    let file = state.moodle.download(token.as_str(), &raw_url).await?;
    let content_type = file
        .content_type
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

    let mut response = (
        StatusCode::OK,
        [(CONTENT_TYPE, content_type)],
        Body::from_stream(file.body),
    )
        .into_response();
    if let Some(length) = file.content_length {
        response
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(length));
    }

    Ok(response)
}
