#[allow(clippy::module_inception)]
pub mod auth;
pub mod callback_query;
pub mod google_login_request;
pub mod google_login_response;
pub mod google_redirect;
pub mod link_request;
pub mod login_request;
pub mod session_response;
pub mod user_dto;
