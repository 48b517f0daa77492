pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod request_log;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{google_login, link_google_moodle, login},
        callback_query::CallbackQuery,
        google_login_request::GoogleLoginRequest,
        google_login_response::{GoogleLoginResponse, GoogleUserDto, LinkingResponse},
        google_redirect::{google_callback, google_start},
        link_request::LinkRequest,
        login_request::LoginRequest,
        session_response::SessionResponse,
        user_dto::UserDto,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_token::AuthToken,
    lms::{
        assignments::{assignment_status, course_assignments, save_text, submit_assignment},
        courses::{course_contents, course_grades, list_courses},
        files::download_file,
        file_query::FileQuery,
        forum_reply_request::ForumReplyRequest,
        forums::{course_forums, discussion_posts, forum_discussions, reply_to_forum},
        save_text_request::SaveTextRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};

pub use crate::routes::build_router;

/// Upper bound for request bodies
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;
