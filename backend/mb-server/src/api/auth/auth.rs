//! JSON login and linking handlers

use crate::api::error::require_field;
use crate::{
    ApiResult, AppState, GoogleLoginRequest, GoogleLoginResponse, LinkRequest, LoginRequest,
    SessionResponse,
};

use mb_core::OAuthCredential;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /auth/login
///
/// Plain Moodle username/password login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(request) = payload?;
    let username = require_field(&request.username, "username")?;
    let password = require_field(&request.password, "password")?;

    let session = state.mediator.login_with_password(username, password).await?;

    Ok(Json(session.into()))
}

/// POST /auth/google
///
/// Sign in with a Google ID token. Unlinked emails get `requiresLinking`.
pub async fn google_login(
    State(state): State<AppState>,
    payload: Result<Json<GoogleLoginRequest>, JsonRejection>,
) -> ApiResult<Json<GoogleLoginResponse>> {
    let Json(request) = payload?;
    let id_token = require_field(&request.id_token, "idToken")?;

    let outcome = state
        .mediator
        .login_with_google(OAuthCredential::IdToken(id_token.to_string()))
        .await?;

    Ok(Json(outcome.into()))
}

/// POST /auth/link-google-moodle
///
/// Bind the Google email to a Moodle account and sign in
pub async fn link_google_moodle(
    State(state): State<AppState>,
    payload: Result<Json<LinkRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(request) = payload?;
    let id_token = require_field(&request.id_token, "idToken")?;
    let username = require_field(&request.username, "username")?;
    let password = require_field(&request.password, "password")?;

    let session = state
        .mediator
        .link_account(OAuthCredential::IdToken(id_token.to_string()), username, password)
        .await?;
    info!("Account link completed for Moodle user {}", username);

    Ok(Json(session.into()))
}
