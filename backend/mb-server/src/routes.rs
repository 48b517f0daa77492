use crate::{
    AppState, MAX_BODY_BYTES, assignment_status, course_assignments, course_contents,
    course_forums, course_grades, discussion_posts, download_file, forum_discussions,
    google_callback, google_login, google_start, health, link_google_moodle, list_courses, login,
    reply_to_forum, request_log, save_text, submit_assignment,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/auth/google/start", get(google_start))
        .route("/auth/google/callback", get(google_callback))
        .route("/auth/login", post(login))
        .route("/auth/google", post(google_login))
        .route("/auth/link-google-moodle", post(link_google_moodle))
        // Courses
        .route("/courses", get(list_courses))
        .route("/course/{id}/contents", get(course_contents))
        .route("/course/{id}/grades", get(course_grades))
        .route("/course/{id}/assignments", get(course_assignments))
        .route("/course/{id}/forums", get(course_forums))
        // Assignments
        .route("/assign/{id}/status", get(assignment_status))
        .route("/assign/{id}/save-text", post(save_text))
        .route("/assign/{id}/submit", post(submit_assignment))
        // Forums
        .route("/forum/{id}/discussions", get(forum_discussions))
        .route("/discussion/{id}/posts", get(discussion_posts))
        .route("/forum/reply", post(reply_to_forum))
        // Files
        .route("/file", get(download_file))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_log::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION]),
        )
}
